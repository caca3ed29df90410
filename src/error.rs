use thiserror::Error;

use crate::domain::entities::PASSWORD_MISMATCH_MESSAGE;

/// Failure of a transport to complete a request at all.
///
/// Covers offline, DNS and connection errors. The message is the transport's
/// own description and is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Every way a form submission can end without success.
///
/// The `Display` text of each variant is exactly what the inline error
/// display shows.
#[derive(Debug, Error)]
pub enum FormError {
    /// The two new-password entries differ; no request was sent.
    #[error("{}", PASSWORD_MISMATCH_MESSAGE)]
    Mismatch,

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request body could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl FormError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Returns true if the failure happened before anything was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Mismatch | Self::Encode(_))
    }
}
