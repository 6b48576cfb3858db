//! # Shared Utility Functions
//!
//! Display helpers used by the transaction store and the wallet-web UI.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`shorten_address`] - `format_address` with the 6/4 split used across the UI
//!
//! ## Time and Links
//!
//! - [`format_timestamp`] - Render unix seconds for display
//! - [`explorer_address_url`] - Block explorer page for an address
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC";
//! assert_eq!(format_address(address, 6, 4), "0x3C44...93BC");
//! ```

use chrono::DateTime;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC";
/// assert_eq!(format_address(addr, 6, 4), "0x3C44...93BC");
/// assert_eq!(format_address("0xA", 4, 4), "0xA");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard against individual lengths exceeding address length to prevent panics
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Display form used by the navbar, wallet card and transaction cards: `0x3C44...93BC`.
pub fn shorten_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Render unix seconds as `11/14/2023, 10:13:20 PM` (UTC).
///
/// The browser build swaps in the host locale formatter; this is the
/// host-independent fallback.
pub fn format_timestamp(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
        .unwrap_or_else(|| secs.to_string())
}

/// Block explorer page for an address.
pub fn explorer_address_url(base_url: &str, address: &str) -> String {
    format!("{}/address/{}", base_url.trim_end_matches('/'), address)
}
