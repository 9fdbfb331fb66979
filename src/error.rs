pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to render chain config: {0}")]
    Serialization(#[from] toml::ser::Error),
}

/// Errors surfaced by the per-family read controllers. Kept as distinct
/// variants so a caller can tell a malformed identifier from a missing
/// chain from a disabled one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("invalid chain id {id:?}: {reason}")]
    InvalidChainId { id: String, reason: String },

    #[error("chain not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    NotEnabled(String),

    #[error("failed to render chain config: {0}")]
    Serialization(String),
}

impl From<RegistryError> for ControllerError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Serialization(e) => Self::Serialization(e.to_string()),
        }
    }
}
