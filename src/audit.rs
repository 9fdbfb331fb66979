/// Sink for operator-audit events emitted by the read controllers.
/// Injected at construction so deployments can route audit records away
/// from the application log.
pub trait AuditLogger: Send + Sync {
    fn record(&self, event: AuditEvent<'_>);
}

#[derive(Debug, Clone, Copy)]
pub struct AuditEvent<'a> {
    pub action: &'static str,
    pub family: &'static str,
    pub chain_id: Option<&'a str>,
}

/// Default sink: forwards audit events to the `audit` tracing target.
pub struct TracingAuditLogger;

impl AuditLogger for TracingAuditLogger {
    fn record(&self, event: AuditEvent<'_>) {
        tracing::info!(
            target: "audit",
            action = event.action,
            family = event.family,
            chain_id = event.chain_id,
            "chains read"
        );
    }
}
