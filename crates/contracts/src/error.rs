use crate::domain::refund::RefundId;
use thiserror::Error;

/// Errors surfaced by refund lookups and draft commits.
///
/// None of these are fatal: the UI shows the message and keeps the
/// prior state on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefundError {
    #[error("refund {0} not found")]
    NotFound(RefundId),

    #[error("{field}: {message}")]
    InvalidField {
        field: &'static str,
        message: &'static str,
    },
}

impl RefundError {
    pub fn invalid(field: &'static str, message: &'static str) -> Self {
        Self::InvalidField { field, message }
    }

    /// Field key the error belongs to, if any (used to highlight inputs).
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotFound(_) => None,
            Self::InvalidField { field, .. } => Some(field),
        }
    }
}
