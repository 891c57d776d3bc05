//! Error taxonomy shared by the form layer and the data access client.

use thiserror::Error;

/// Local form validation failure. Blocks submission; no store call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired,
    #[error("Age must be a valid non-negative number")]
    InvalidAge,
    #[error("Date must be a valid calendar date")]
    InvalidDate,
}

/// Failure talking to the hosted record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A call was attempted with no signed-in session.
    #[error("You must be signed in to do that")]
    AuthRequired,
    /// The remote call failed. The underlying cause (network, HTTP status,
    /// decode) is folded into the message and not distinguished to the user.
    #[error("{0}")]
    Access(String),
}

impl StoreError {
    pub fn access(message: impl Into<String>) -> Self {
        Self::Access(message.into())
    }
}
