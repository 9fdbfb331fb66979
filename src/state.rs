use {crate::registry::Registry, arc_swap::ArcSwap, std::sync::Arc};

/// Process-wide holder of the active configuration. Built once at startup,
/// replaced wholesale on reload; readers take `Arc` snapshots and never
/// observe a partially-updated set.
pub struct ChainsState {
    registry: ArcSwap<Registry>,
}

impl ChainsState {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: ArcSwap::from_pointee(registry),
        }
    }

    /// Atomically replace the active registry. Holders of a previous
    /// snapshot keep reading it until they drop the `Arc`.
    pub fn publish(&self, registry: Registry) {
        self.registry.store(Arc::new(registry));
        tracing::debug!("published new chain registry");
    }

    /// Wait-free snapshot of the active registry.
    pub fn current(&self) -> Arc<Registry> {
        self.registry.load_full()
    }
}
