use {
    super::{present_as, ChainFamily, ChainsController},
    crate::{audit::AuditLogger, error::ControllerError, state::ChainsState},
    std::{fmt, sync::Arc},
};

const EIP155_PREFIX: &str = "eip155:";

/// EVM chain identifier: the numeric part of an `eip155:` chain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvmChainId(pub u64);

impl fmt::Display for EvmChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{EIP155_PREFIX}{}", self.0)
    }
}

/// Accepts both the canonical `eip155:1` form and a bare numeric id.
fn parse_id(raw: &str) -> Result<EvmChainId, String> {
    let digits = raw.strip_prefix(EIP155_PREFIX).unwrap_or(raw);
    digits
        .parse::<u64>()
        .map(EvmChainId)
        .map_err(|e| e.to_string())
}

pub fn new_controller(
    state: Arc<ChainsState>,
    audit: Arc<dyn AuditLogger>,
) -> ChainsController<EvmChainId> {
    ChainsController::new(
        ChainFamily::Evm,
        state,
        ControllerError::NotEnabled(
            "EVM chain is disabled: set Enabled = true in its configuration to enable".to_owned(),
        ),
        Box::new(parse_id),
        present_as(ChainFamily::Evm),
        audit,
    )
}
