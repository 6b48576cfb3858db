//! # Shared Data Transfer Objects Library
//!
//! Types and display helpers shared by the transaction store (`lib-core`) and
//! the browser frontend (`wallet-web`).
//!
//! ## Structure
//!
//! - **[`dto`]**: Form and transaction-history data
//!   - **[`dto::transaction`]**: `FormData`, `FormField`, `TransactionRecord`
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::shorten_address`]**: Shorten addresses for display
//!   - **[`utils::format_timestamp`]**: Render block timestamps
//!
//! ## Usage
//!
//! ```rust
//! use shared::{FormData, FormField};
//! use shared::utils::shorten_address;
//!
//! let mut form = FormData::default();
//! form.set(FormField::AddressTo, "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC");
//! assert_eq!(shorten_address(&form.address_to), "0x3C44...93BC");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: everything in dto and utils is public API
pub use dto::*;
pub use utils::*;
