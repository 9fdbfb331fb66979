use {
    anyhow::Context,
    chain_registry::{chain_defaults::DEFAULT_CHAINS, chains::ChainSet, registry::Registry},
    tracing::info,
    tracing_subscriber::EnvFilter,
};

/// Merges the built-in defaults with operator override layers given as
/// TOML file paths, validates the result, and prints each chain's
/// canonical config. `--json` prints the whole merged set as JSON instead.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut json = false;
    let mut layers = vec![DEFAULT_CHAINS.clone()];
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
            continue;
        }
        let text = std::fs::read_to_string(&arg)
            .with_context(|| format!("failed to read override layer {arg}"))?;
        let layer: ChainSet =
            toml::from_str(&text).with_context(|| format!("failed to parse override layer {arg}"))?;
        layers.push(layer);
    }

    let merged = ChainSet::from_layers(layers);
    let registry = Registry::new(merged.clone()).context("merged configuration is invalid")?;

    let records = registry.chains(&[])?;
    info!("rendering {} chains", records.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&merged)?);
        return Ok(());
    }

    for record in records {
        println!("# {} (enabled: {})", record.id, record.enabled);
        println!("{}", record.config);
    }
    Ok(())
}
