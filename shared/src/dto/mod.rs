//! # Data Transfer Objects (DTOs)
//!
//! Data structures shared between the transaction store and the UI.
//!
//! - [`transaction`] - Transfer form and transaction history records
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase, matching the names the form inputs use
//! - **Enums**: camelCase strings (`"addressTo"`)

pub mod transaction;

pub use transaction::*;
