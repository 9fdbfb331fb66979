use {
    crate::{
        chains::{validate::Violations, ChainSet, NodeConfig},
        error::RegistryResult,
    },
    serde::Serialize,
};

/// Summary of one configured chain as exposed to read-side consumers.
/// `config` is the chain's canonical TOML rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainRecord {
    pub id: String,
    pub enabled: bool,
    pub config: String,
}

/// One resolvable RPC endpoint, flattened out of its chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub name: String,
    pub chain_id: String,
    pub url: String,
}

/// Read-only query surface over a validated chain set. Construction is the
/// only place validation runs; afterwards the set is immutable and every
/// operation is a pure in-memory read.
#[derive(Debug, Clone)]
pub struct Registry {
    chains: ChainSet,
}

impl Registry {
    pub fn new(chains: ChainSet) -> Result<Self, Violations> {
        chains.validated()?;
        Ok(Self { chains })
    }

    /// All chains when `ids` is empty, otherwise only chains whose ID is
    /// listed. A serialization failure aborts the whole call rather than
    /// silently skipping the offending chain.
    pub fn chains(&self, ids: &[&str]) -> RegistryResult<Vec<ChainRecord>> {
        let mut records = Vec::new();
        for chain in &self.chains.chains {
            let Some(id) = chain.chain_id.as_deref() else {
                continue;
            };
            if !ids.is_empty() && !ids.contains(&id) {
                continue;
            }
            records.push(ChainRecord {
                id: id.to_owned(),
                enabled: chain.is_enabled(),
                config: chain.toml_string()?,
            });
        }
        Ok(records)
    }

    /// First node with the given name, scanning chains then nodes in
    /// order. Duplicate names are the validator's concern; this lookup
    /// just returns the first match.
    pub fn node(&self, name: &str) -> Option<NodeRecord> {
        self.node_records().find(|n| n.name == name)
    }

    /// Every node of every chain, chain-then-node order.
    pub fn nodes(&self) -> Vec<NodeRecord> {
        self.node_records().collect()
    }

    /// Nodes restricted to the given chain IDs. An empty `ids` list
    /// restricts to nothing, unlike `chains`.
    pub fn nodes_for_chains(&self, ids: &[&str]) -> Vec<NodeRecord> {
        self.node_records()
            .filter(|n| ids.contains(&n.chain_id.as_str()))
            .collect()
    }

    fn node_records(&self) -> impl Iterator<Item = NodeRecord> + '_ {
        self.chains.chains.iter().flat_map(|chain| {
            let chain_id = chain.chain_id.as_deref().unwrap_or_default();
            chain
                .nodes
                .iter()
                .filter_map(move |node| node_record(chain_id, node))
        })
    }
}

/// `None` when the node lacks a name or URL and cannot be addressed.
fn node_record(chain_id: &str, node: &NodeConfig) -> Option<NodeRecord> {
    Some(NodeRecord {
        name: node.name.clone()?,
        chain_id: chain_id.to_owned(),
        url: node.url.as_ref()?.as_str().to_owned(),
    })
}
