//! # Centralized Error Handling
//!
//! This module defines [`StoreError`], the single error type used by the wallet
//! gateway, the contract client and the transaction store. It follows the
//! `thiserror` pattern used across the workspace.
//!
//! ## Error Categories
//!
//! 1. **Provider Errors** - the injected wallet object
//!    - [`ProviderUnavailable`](StoreError::ProviderUnavailable): no provider in the page
//!    - [`UserRejected`](StoreError::UserRejected): EIP-1193 code 4001
//!    - [`Rpc`](StoreError::Rpc): any other JSON-RPC failure
//!
//! 2. **Input Errors** - rejected before any external call
//!    - [`InvalidInput`](StoreError::InvalidInput)
//!    - [`Busy`](StoreError::Busy): a submission is already in flight
//!
//! 3. **Chain Errors** - after a call was accepted
//!    - [`Reverted`](StoreError::Reverted), [`Timeout`](StoreError::Timeout)
//!    - [`PartialTransfer`](StoreError::PartialTransfer): the native transfer
//!      went out but the contract record did not
//!
//! 4. **Local Errors**
//!    - [`Encoding`](StoreError::Encoding) / [`Decoding`](StoreError::Decoding)
//!    - [`Storage`](StoreError::Storage), [`Config`](StoreError::Config)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{StoreError, Result};
//!
//! fn require_account(account: &str) -> Result<&str> {
//!     if account.is_empty() {
//!         return Err(StoreError::InvalidInput("Connect a wallet first".to_string()));
//!     }
//!     Ok(account)
//! }
//! ```

use thiserror::Error;

/// EIP-1193 error code for "the user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Convenience type alias for `Result<T, StoreError>`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error type covering every failure the transfer workflow can produce.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No wallet provider object was injected into the page.
    #[error("No wallet provider found")]
    ProviderUnavailable,

    /// The user declined the request in the wallet prompt.
    #[error("Request rejected by user")]
    UserRejected,

    /// JSON-RPC failure reported by the provider.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Form input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Calldata or request parameters could not be built.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A provider response could not be decoded.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// The transaction was mined with a failure status.
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// Confirmation did not arrive within the configured window.
    #[error("Timed out waiting for confirmation of {0}")]
    Timeout(String),

    /// The native transfer was sent but recording it on the contract failed.
    #[error("Native transfer {native_tx} was sent but the contract record failed: {source}")]
    PartialTransfer {
        native_tx: String,
        #[source]
        source: Box<StoreError>,
    },

    /// Durable client storage could not be written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A submission is already in progress.
    #[error("A transfer is already in progress")]
    Busy,

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Classify a provider error object by its EIP-1193 code.
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        if code == USER_REJECTED_CODE {
            StoreError::UserRejected
        } else {
            StoreError::Rpc {
                code,
                message: message.into(),
            }
        }
    }

    /// Get a user-friendly error message.
    ///
    /// Internal failures collapse to a generic message; the full error goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::ProviderUnavailable => {
                "Please install MetaMask or another Ethereum wallet".to_string()
            }
            StoreError::UserRejected => "The request was rejected in your wallet".to_string(),
            StoreError::Rpc { message, .. } => format!("Wallet request failed: {}", message),
            StoreError::InvalidInput(msg) => msg.clone(),
            StoreError::Reverted(hash) => format!("Transaction {} was reverted", hash),
            StoreError::Timeout(hash) => {
                format!("Transaction {} is still pending, check your wallet", hash)
            }
            StoreError::PartialTransfer { native_tx, source } => format!(
                "Funds were sent in {} but the transfer could not be recorded ({})",
                native_tx,
                source.user_message()
            ),
            StoreError::Busy => "A transfer is already in progress".to_string(),
            StoreError::Encoding(_)
            | StoreError::Decoding(_)
            | StoreError::Storage(_)
            | StoreError::Config(_) => "An internal error occurred".to_string(),
        }
    }

    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Rpc { .. } | StoreError::Timeout(_))
    }
}

/// Convert `serde_json::Error` to `StoreError`.
impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decoding(format!("JSON error: {}", err))
    }
}

impl From<alloy_primitives::hex::FromHexError> for StoreError {
    fn from(err: alloy_primitives::hex::FromHexError) -> Self {
        StoreError::Decoding(format!("Hex error: {}", err))
    }
}

impl From<alloy_sol_types::Error> for StoreError {
    fn from(err: alloy_sol_types::Error) -> Self {
        StoreError::Decoding(format!("ABI error: {}", err))
    }
}
