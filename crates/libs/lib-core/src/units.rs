//! Conversion between UI decimal amounts and the chain's smallest unit.

use alloy_primitives::utils::{format_units, parse_units};
use alloy_primitives::U256;

use crate::error::{Result, StoreError};

/// Parse a positive decimal string (e.g. `"0.05"`) into smallest-unit integer.
///
/// Rejects signs, exponents, empty input, zero and more fractional digits than
/// `decimals` allows.
pub fn parse_amount(input: &str, decimals: u8) -> Result<U256> {
    let amount = input.trim();
    if amount.is_empty() {
        return Err(StoreError::InvalidInput("Amount is required".to_string()));
    }

    if !amount.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(StoreError::InvalidInput(format!(
            "Amount '{}' is not a decimal number",
            amount
        )));
    }

    let mut parts = amount.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    if parts.next().is_some() || (whole.is_empty() && fraction.is_empty()) {
        return Err(StoreError::InvalidInput(format!(
            "Amount '{}' is not a decimal number",
            amount
        )));
    }

    if fraction.len() > decimals as usize {
        return Err(StoreError::InvalidInput(format!(
            "Amount supports at most {} decimal places",
            decimals
        )));
    }

    let normalized = if whole.is_empty() {
        format!("0{}", amount)
    } else {
        amount.to_string()
    };
    let value: U256 = parse_units(&normalized, decimals)
        .map_err(|e| {
            StoreError::InvalidInput(format!("Amount '{}' is out of range: {}", amount, e))
        })?
        .into();

    if value.is_zero() {
        return Err(StoreError::InvalidInput("Amount must be greater than 0".to_string()));
    }

    Ok(value)
}

/// Exact decimal rendering of a smallest-unit value.
pub fn format_amount(value: U256, decimals: u8) -> Result<String> {
    format_units(value, decimals).map_err(|e| StoreError::Encoding(e.to_string()))
}

/// Display value of a smallest-unit amount, i.e. `value / 10^decimals`.
pub fn amount_to_f64(value: U256, decimals: u8) -> f64 {
    format_amount(value, decimals)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
