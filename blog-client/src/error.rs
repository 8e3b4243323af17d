use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlogClientError {
    /// Transport failure, non-2xx status or an undecodable body. The reason is
    /// diagnostic only; callers must not branch on it.
    #[error("Failed to {action}: {reason}")]
    RequestFailed { action: &'static str, reason: String },
}

impl BlogClientError {
    pub fn request_failed(action: &'static str, reason: impl Display) -> Self {
        Self::RequestFailed {
            action,
            reason: reason.to_string(),
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Self::RequestFailed { action, .. } => action,
        }
    }
}
