use {
    crate::serde_utils::opt_duration_millis,
    serde::{Deserialize, Serialize},
    std::time::Duration,
    url::Url,
};

mod merge;
pub mod validate;

/// One RPC endpoint belonging to a chain. `name` is the identity key used
/// to match an override against an existing node when layers are merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}

/// Per-family tuning overrides. Every field is independently optional so a
/// layer can override one knob without clobbering the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FamilySettings {
    #[serde(
        default,
        with = "opt_duration_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout: Option<Duration>,
    #[serde(
        default,
        with = "opt_duration_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub tx_timeout: Option<Duration>,
    #[serde(
        default,
        with = "opt_duration_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub tx_send_frequency: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_max_batch_size: Option<u64>,
    #[serde(
        rename = "OCR2CachePollPeriod",
        default,
        with = "opt_duration_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub ocr2_cache_poll_period: Option<Duration>,
    #[serde(
        rename = "OCR2CacheTTL",
        default,
        with = "opt_duration_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub ocr2_cache_ttl: Option<Duration>,
}

/// Configuration of one chain integration as assembled from layered input.
/// `chain_id` is the identity key for merging; `enabled` absent means
/// enabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChainConfig {
    #[serde(rename = "ChainID", default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub settings: FamilySettings,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeConfig>,
}

impl ChainConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Canonical TOML rendering of this chain's configuration.
    pub fn toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

/// Ordered collection of chain configurations. Order is significant for
/// output and display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainSet {
    #[serde(rename = "Chains", default, skip_serializing_if = "Vec::is_empty")]
    pub chains: Vec<ChainConfig>,
}

impl ChainSet {
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }
}
