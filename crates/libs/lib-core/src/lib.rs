//! # Core Library
//!
//! Wallet gateway, contract client and transaction store for the transfer app.
//! Host-agnostic: the browser frontend supplies an EIP-1193 transport, a timer,
//! durable storage and a notifier; tests supply mocks.

pub mod abi;
pub mod config;
pub mod error;
pub mod rpc;
pub mod service;
pub mod store;
pub mod units;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, StoreError};
pub use service::{Notice, NoticeLevel};
pub use store::{ConnectionPhase, StoreState, TransactionStore};
