use {
    super::{present_as, ChainFamily, ChainsController},
    crate::{audit::AuditLogger, error::ControllerError, state::ChainsState},
    std::sync::Arc,
};

/// Solana identifiers are cluster names (`solana:mainnet`) used verbatim.
pub fn new_controller(
    state: Arc<ChainsState>,
    audit: Arc<dyn AuditLogger>,
) -> ChainsController<String> {
    ChainsController::new(
        ChainFamily::Solana,
        state,
        ControllerError::NotEnabled(
            "Solana chain is disabled: set Enabled = true in its configuration to enable"
                .to_owned(),
        ),
        Box::new(|id| Ok(id.to_owned())),
        present_as(ChainFamily::Solana),
        audit,
    )
}
