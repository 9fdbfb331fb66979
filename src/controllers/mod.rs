use {
    crate::{
        audit::{AuditEvent, AuditLogger},
        error::ControllerError,
        registry::ChainRecord,
        state::ChainsState,
    },
    serde::Serialize,
    std::{fmt, sync::Arc},
};

pub mod evm;
pub mod solana;
pub mod starknet;

/// Chain families served by the controller factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFamily {
    Evm,
    Solana,
    Starknet,
}

impl ChainFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainFamily::Evm => "evm",
            ChainFamily::Solana => "solana",
            ChainFamily::Starknet => "starknet",
        }
    }
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation shape handed to the external HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainResource {
    pub id: String,
    pub family: &'static str,
    pub enabled: bool,
    pub config: String,
}

type IdParser<I> = Box<dyn Fn(&str) -> Result<I, String> + Send + Sync>;
type Presenter = Box<dyn Fn(ChainRecord) -> ChainResource + Send + Sync>;

/// Read controller shared by every chain family. One generic `list`/`show`
/// implementation; everything family-specific - how to parse a
/// caller-supplied identifier, which error marks a disabled chain, how a
/// record is presented, where audit events go - is injected at
/// construction.
pub struct ChainsController<I> {
    family: ChainFamily,
    state: Arc<ChainsState>,
    not_enabled: ControllerError,
    parse_id: IdParser<I>,
    present: Presenter,
    audit: Arc<dyn AuditLogger>,
}

impl<I: fmt::Display> ChainsController<I> {
    pub fn new(
        family: ChainFamily,
        state: Arc<ChainsState>,
        not_enabled: ControllerError,
        parse_id: IdParser<I>,
        present: Presenter,
        audit: Arc<dyn AuditLogger>,
    ) -> Self {
        Self {
            family,
            state,
            not_enabled,
            parse_id,
            present,
            audit,
        }
    }

    /// Every configured chain, in configuration order.
    #[tracing::instrument(skip(self), fields(family = %self.family))]
    pub fn list(&self) -> Result<Vec<ChainResource>, ControllerError> {
        self.audit.record(AuditEvent {
            action: "chains.list",
            family: self.family.as_str(),
            chain_id: None,
        });

        let records = self.state.current().chains(&[])?;
        Ok(records.into_iter().map(|r| (self.present)(r)).collect())
    }

    /// Resolve one chain by its caller-supplied identifier.
    #[tracing::instrument(skip(self), fields(family = %self.family))]
    pub fn show(&self, id: &str) -> Result<ChainResource, ControllerError> {
        self.audit.record(AuditEvent {
            action: "chains.show",
            family: self.family.as_str(),
            chain_id: Some(id),
        });

        let parsed = (self.parse_id)(id).map_err(|reason| ControllerError::InvalidChainId {
            id: id.to_owned(),
            reason,
        })?;
        let key = parsed.to_string();

        let records = self.state.current().chains(&[key.as_str()])?;
        let Some(record) = records.into_iter().next() else {
            return Err(ControllerError::NotFound(key));
        };
        if !record.enabled {
            return Err(self.not_enabled.clone());
        }
        Ok((self.present)(record))
    }
}

/// Presenter shared by the family constructors; families differing only in
/// their `family` tag reuse it.
fn present_as(family: ChainFamily) -> Presenter {
    Box::new(move |record: ChainRecord| ChainResource {
        id: record.id,
        family: family.as_str(),
        enabled: record.enabled,
        config: record.config,
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            audit::{testing::RecordingAuditLogger, TracingAuditLogger},
            chains::{ChainConfig, ChainSet, NodeConfig},
            registry::Registry,
        },
        url::Url,
    };

    fn chain(id: &str, enabled: Option<bool>, node_name: &str) -> ChainConfig {
        ChainConfig {
            chain_id: Some(id.to_owned()),
            enabled,
            nodes: vec![NodeConfig {
                name: Some(node_name.to_owned()),
                url: Some(
                    Url::parse(&format!("https://{node_name}.example-rpc.com")).unwrap(),
                ),
            }],
            ..Default::default()
        }
    }

    fn test_state() -> Arc<ChainsState> {
        let registry = Registry::new(ChainSet {
            chains: vec![
                chain("eip155:1", None, "ethereum-mainnet"),
                chain("eip155:10", Some(false), "optimism-mainnet"),
                chain("solana:mainnet", None, "solana-mainnet"),
            ],
        })
        .unwrap();
        Arc::new(ChainsState::new(registry))
    }

    #[test]
    fn test_list_matches_registry_output_through_presenter() {
        let state = test_state();
        let controller = solana::new_controller(state.clone(), Arc::new(TracingAuditLogger));

        let listed = controller.list().unwrap();
        let records = state.current().chains(&[]).unwrap();

        assert_eq!(listed.len(), records.len());
        for (resource, record) in listed.iter().zip(&records) {
            assert_eq!(resource.id, record.id);
            assert_eq!(resource.enabled, record.enabled);
            assert_eq!(resource.config, record.config);
            assert_eq!(resource.family, "solana");
        }
    }

    #[test]
    fn test_show_enabled_chain() {
        let controller = evm::new_controller(test_state(), Arc::new(TracingAuditLogger));
        let resource = controller.show("eip155:1").unwrap();
        assert_eq!(resource.id, "eip155:1");
        assert_eq!(resource.family, "evm");
        assert!(resource.enabled);
    }

    #[test]
    fn test_show_disabled_chain_is_not_enabled_not_not_found() {
        let controller = evm::new_controller(test_state(), Arc::new(TracingAuditLogger));
        let err = controller.show("eip155:10").unwrap_err();
        assert!(matches!(err, ControllerError::NotEnabled(_)));
    }

    #[test]
    fn test_show_unknown_chain_is_not_found() {
        let controller = evm::new_controller(test_state(), Arc::new(TracingAuditLogger));
        let err = controller.show("eip155:999").unwrap_err();
        assert_eq!(err, ControllerError::NotFound("eip155:999".to_owned()));
    }

    #[test]
    fn test_show_malformed_id_is_parse_error() {
        let controller = evm::new_controller(test_state(), Arc::new(TracingAuditLogger));
        let err = controller.show("eip155:not-a-number").unwrap_err();
        assert!(matches!(err, ControllerError::InvalidChainId { .. }));
    }

    #[test]
    fn test_show_emits_audit_event() {
        let audit = Arc::new(RecordingAuditLogger::default());
        let controller = solana::new_controller(test_state(), audit.clone());

        controller.show("solana:mainnet").unwrap();
        controller.list().unwrap();

        let events = audit.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                ("chains.show".to_owned(), Some("solana:mainnet".to_owned())),
                ("chains.list".to_owned(), None),
            ]
        );
    }

    #[test]
    fn test_resource_serializes_camel_case() {
        let controller = solana::new_controller(test_state(), Arc::new(TracingAuditLogger));
        let resource = controller.show("solana:mainnet").unwrap();

        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["id"], "solana:mainnet");
        assert_eq!(json["family"], "solana");
        assert_eq!(json["enabled"], true);
        assert!(json["config"].as_str().unwrap().contains("ChainID"));
    }
}
