use crate::session::SessionState;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EstimationError>;

#[derive(Debug, Error)]
pub enum EstimationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Aggregation was requested before any run completed.
    #[error("session has no completed runs")]
    EmptySession,

    #[error("cannot {action} a session in state {from}")]
    InvalidTransition {
        from: SessionState,
        action: &'static str,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
