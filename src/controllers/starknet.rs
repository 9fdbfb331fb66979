use {
    super::{present_as, ChainFamily, ChainsController},
    crate::{audit::AuditLogger, error::ControllerError, state::ChainsState},
    std::sync::Arc,
};

/// Starknet identifiers are opaque strings (`starknet:SN_MAIN`); the only
/// malformed input is an empty one.
fn parse_id(raw: &str) -> Result<String, String> {
    if raw.is_empty() {
        return Err("chain id must not be empty".to_owned());
    }
    Ok(raw.to_owned())
}

pub fn new_controller(
    state: Arc<ChainsState>,
    audit: Arc<dyn AuditLogger>,
) -> ChainsController<String> {
    ChainsController::new(
        ChainFamily::Starknet,
        state,
        ControllerError::NotEnabled(
            "Starknet chain is disabled: set Enabled = true in its configuration to enable"
                .to_owned(),
        ),
        Box::new(parse_id),
        present_as(ChainFamily::Starknet),
        audit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_rejects_empty() {
        assert!(parse_id("").is_err());
        assert_eq!(parse_id("starknet:SN_MAIN"), Ok("starknet:SN_MAIN".to_owned()));
    }
}
