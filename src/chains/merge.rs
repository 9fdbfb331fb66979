//! Layered-merge reconciliation: later layers override earlier ones
//! field-by-field, keyed on `ChainID` for chains and `Name` for nodes.

use super::{ChainConfig, ChainSet, FamilySettings, NodeConfig};

impl ChainSet {
    /// Merge an override layer into `self` by identity-based upsert.
    ///
    /// Override entries are processed in order: an entry without a
    /// `ChainID` can never be matched against anything and is always
    /// appended as a brand-new chain; an entry whose `ChainID` matches an
    /// existing one (including entries appended earlier in the same pass)
    /// is merged into it field-by-field; everything else is appended.
    /// Total over any input: merge never fails, validation is a separate
    /// phase.
    pub fn apply(&mut self, overrides: ChainSet) {
        for f in overrides.chains {
            let Some(id) = f.chain_id.clone() else {
                self.chains.push(f);
                continue;
            };
            match self
                .chains
                .iter_mut()
                .find(|c| c.chain_id.as_deref() == Some(id.as_str()))
            {
                Some(c) => c.set_from(f),
                None => self.chains.push(f),
            }
        }
    }

    /// Fold an ordered sequence of layers into one set, each layer applied
    /// on top of the result of the previous ones.
    pub fn from_layers<I>(layers: I) -> ChainSet
    where
        I: IntoIterator<Item = ChainSet>,
    {
        let mut merged = ChainSet::default();
        for layer in layers {
            merged.apply(layer);
        }
        merged
    }
}

impl ChainConfig {
    /// Overwrite every field that `f` sets; fields `f` leaves unset are
    /// untouched. Nodes are merged recursively, keyed on `Name`.
    pub fn set_from(&mut self, f: ChainConfig) {
        if f.chain_id.is_some() {
            self.chain_id = f.chain_id;
        }
        if f.enabled.is_some() {
            self.enabled = f.enabled;
        }
        self.settings.set_from(f.settings);
        set_from_nodes(&mut self.nodes, f.nodes);
    }
}

impl FamilySettings {
    pub fn set_from(&mut self, f: FamilySettings) {
        if f.request_timeout.is_some() {
            self.request_timeout = f.request_timeout;
        }
        if f.tx_timeout.is_some() {
            self.tx_timeout = f.tx_timeout;
        }
        if f.tx_send_frequency.is_some() {
            self.tx_send_frequency = f.tx_send_frequency;
        }
        if f.tx_max_batch_size.is_some() {
            self.tx_max_batch_size = f.tx_max_batch_size;
        }
        if f.ocr2_cache_poll_period.is_some() {
            self.ocr2_cache_poll_period = f.ocr2_cache_poll_period;
        }
        if f.ocr2_cache_ttl.is_some() {
            self.ocr2_cache_ttl = f.ocr2_cache_ttl;
        }
    }
}

fn set_from_nodes(base: &mut Vec<NodeConfig>, overrides: Vec<NodeConfig>) {
    for f in overrides {
        let Some(name) = f.name.clone() else {
            // Unnamed nodes follow the same anonymous-append rule as
            // chains without a ChainID.
            base.push(f);
            continue;
        };
        match base
            .iter_mut()
            .find(|n| n.name.as_deref() == Some(name.as_str()))
        {
            Some(n) => n.set_from(f),
            None => base.push(f),
        }
    }
}

impl NodeConfig {
    fn set_from(&mut self, f: NodeConfig) {
        if f.name.is_some() {
            self.name = f.name;
        }
        if f.url.is_some() {
            self.url = f.url;
        }
    }
}
