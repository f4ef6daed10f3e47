use crate::domain::job::entity::JobStatus;
use serde::Serialize;
use thiserror::Error;

/// Errors raised by the enhancement domain.
///
/// Validation variants carry the full human-readable message so callers can
/// surface it as-is. `ExternalFailure` wraps whatever a loader or resolution
/// adapter reported, without rewording it.
#[derive(Debug, Clone, Error, PartialEq, Serialize)]
pub enum DomainError {
    #[error("{0}")]
    InvalidDimensions(String),
    #[error("{0}")]
    InvalidFormat(String),
    #[error("{0}")]
    InvalidFileSize(String),
    #[error("{0}")]
    InvalidUpscaleFactor(String),
    #[error("Cannot {action} job in status {from}")]
    InvalidTransition { from: JobStatus, action: &'static str },
    #[error("{0}")]
    ExternalFailure(String),
}

impl DomainError {
    /// Returns true for the four metadata validation kinds.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDimensions(_)
                | DomainError::InvalidFormat(_)
                | DomainError::InvalidFileSize(_)
                | DomainError::InvalidUpscaleFactor(_)
        )
    }
}

impl From<anyhow::Error> for DomainError {
    fn from(err: anyhow::Error) -> Self {
        DomainError::ExternalFailure(err.to_string())
    }
}
