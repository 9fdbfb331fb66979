//! End-to-end flow: layered input through merge, validation, registry
//! publication, and the per-family controllers.

use {
    chain_registry::{
        audit::TracingAuditLogger,
        chain_defaults::DEFAULT_CHAINS,
        chains::ChainSet,
        controllers::{evm, solana},
        error::ControllerError,
        registry::Registry,
        state::ChainsState,
    },
    std::sync::Arc,
};

const OPERATOR_LAYER: &str = r#"
[[Chains]]
ChainID = "eip155:1"
TxTimeout = 5000

[[Chains.Nodes]]
Name = "ethereum-operator"
URL = "https://eth.operator.example.net"

[[Chains]]
ChainID = "solana:mainnet"
Enabled = false
"#;

fn load() -> ChainSet {
    let operator: ChainSet = toml::from_str(OPERATOR_LAYER).unwrap();
    ChainSet::from_layers([DEFAULT_CHAINS.clone(), operator])
}

#[test]
fn operator_layer_overrides_defaults_without_clobbering() {
    let merged = load();

    // No new chains: both override entries matched existing ones.
    assert_eq!(merged.len(), DEFAULT_CHAINS.len());

    let ethereum = &merged.chains[0];
    assert_eq!(ethereum.chain_id.as_deref(), Some("eip155:1"));
    assert_eq!(
        ethereum.settings.tx_timeout,
        Some(std::time::Duration::from_secs(5))
    );
    // Default node kept, operator node appended.
    assert_eq!(ethereum.nodes.len(), 2);
    assert_eq!(ethereum.nodes[0].name.as_deref(), Some("ethereum-mainnet"));
    assert_eq!(ethereum.nodes[1].name.as_deref(), Some("ethereum-operator"));
}

#[test]
fn merged_set_validates_and_publishes() {
    let registry = Registry::new(load()).unwrap();
    let state = Arc::new(ChainsState::new(registry));

    let records = state.current().chains(&[]).unwrap();
    assert_eq!(records.len(), DEFAULT_CHAINS.len());

    let solana_record = records
        .iter()
        .find(|r| r.id == "solana:mainnet")
        .unwrap();
    assert!(!solana_record.enabled);

    let node = state.current().node("ethereum-operator").unwrap();
    assert_eq!(node.chain_id, "eip155:1");
    assert_eq!(node.url, "https://eth.operator.example.net/");

    assert_eq!(
        state.current().nodes_for_chains(&["eip155:1"]).len(),
        2
    );
}

#[test]
fn controllers_resolve_through_published_state() {
    let state = Arc::new(ChainsState::new(Registry::new(load()).unwrap()));

    let evm_controller = evm::new_controller(state.clone(), Arc::new(TracingAuditLogger));
    let solana_controller = solana::new_controller(state.clone(), Arc::new(TracingAuditLogger));

    let resource = evm_controller.show("eip155:1").unwrap();
    assert!(resource.config.contains("TxTimeout = 5000"));

    // Disabled is a distinct outcome from missing.
    assert!(matches!(
        solana_controller.show("solana:mainnet").unwrap_err(),
        ControllerError::NotEnabled(_)
    ));
    assert!(matches!(
        solana_controller.show("solana:testnet").unwrap_err(),
        ControllerError::NotFound(_)
    ));

    // Re-enabling via a further layer and republishing is visible to the
    // same controller without reconstruction.
    let reenable: ChainSet = toml::from_str(
        "[[Chains]]\nChainID = \"solana:mainnet\"\nEnabled = true\n",
    )
    .unwrap();
    let reloaded = ChainSet::from_layers([load(), reenable]);
    state.publish(Registry::new(reloaded).unwrap());

    assert!(solana_controller.show("solana:mainnet").is_ok());
}

#[test]
fn invalid_operator_layer_reports_every_violation() {
    let broken: ChainSet = toml::from_str(
        r#"
[[Chains]]
ChainID = "eip155:999"

[[Chains.Nodes]]
Name = "ethereum-mainnet"
URL = "https://rpc999.example.net"

[[Chains]]
ChainID = "eip155:998"
"#,
    )
    .unwrap();

    // A new chain reusing a default chain's node name, plus a chain with
    // no nodes at all.
    let merged = ChainSet::from_layers([DEFAULT_CHAINS.clone(), broken]);
    let err = Registry::new(merged).unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("duplicate"));
    assert!(rendered.contains("must have at least one node"));
}
