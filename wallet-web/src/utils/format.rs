//! # Formatting Utilities for Wallet Web
//!
//! Number formatting specific to the web frontend.
//! For address formatting, use [`shared::utils::shorten_address`].

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use wallet_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (formatted.as_str(), ""),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let integer_with_commas: String = grouped.chars().rev().collect();

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Format an ETH amount for display, trimming trailing zeros.
///
/// ```rust
/// use wallet_web::utils::format::format_eth;
///
/// assert_eq!(format_eth(0.01), "0.01 ETH");
/// assert_eq!(format_eth(1500.0), "1,500 ETH");
/// ```
pub fn format_eth(amount: f64) -> String {
    let formatted = format_number(amount, 6);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} ETH", trimmed)
}
