use {
    crate::chains::{ChainConfig, ChainSet, NodeConfig},
    std::sync::LazyLock,
    url::Url,
};

/// Built-in defaults layer: the chains the platform ships with out of the
/// box. Operator layers are applied on top via `ChainSet::from_layers`, so
/// every field here can be overridden without editing this table.
pub static DEFAULT_CHAINS: LazyLock<ChainSet> = LazyLock::new(|| ChainSet {
    chains: vec![
        chain(
            "eip155:1",
            "ethereum-mainnet",
            "https://ethereum-rpc.publicnode.com",
        ),
        chain(
            "eip155:10",
            "optimism-mainnet",
            "https://optimism-rpc.publicnode.com",
        ),
        chain(
            "eip155:137",
            "polygon-mainnet",
            "https://polygon-bor-rpc.publicnode.com",
        ),
        chain(
            "eip155:42161",
            "arbitrum-mainnet",
            "https://arbitrum-one-rpc.publicnode.com",
        ),
        chain(
            "solana:mainnet",
            "solana-mainnet",
            "https://solana-rpc.publicnode.com",
        ),
        chain(
            "solana:devnet",
            "solana-devnet",
            "https://api.devnet.solana.com",
        ),
        chain(
            "starknet:SN_MAIN",
            "starknet-mainnet",
            "https://starknet-rpc.publicnode.com",
        ),
    ],
});

fn chain(id: &str, node_name: &str, url: &str) -> ChainConfig {
    ChainConfig {
        chain_id: Some(id.to_owned()),
        nodes: vec![NodeConfig {
            name: Some(node_name.to_owned()),
            url: Some(Url::parse(url).expect("invalid default node URL")),
        }],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_validation() {
        assert!(DEFAULT_CHAINS.validated().is_ok());
    }

    #[test]
    fn test_defaults_leave_enabled_unset() {
        // Absent means enabled; an explicit value here would shadow
        // operator intent under the merge rules.
        assert!(DEFAULT_CHAINS
            .chains
            .iter()
            .all(|c| c.enabled.is_none() && c.is_enabled()));
    }
}
