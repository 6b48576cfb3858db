/// Validation utilities for the transfer form

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use shared::FormData;

use crate::error::{Result, StoreError};
use crate::units::parse_amount;

pub const MAX_MESSAGE_LEN: usize = 280;
pub const MAX_KEYWORD_LEN: usize = 64;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    fn into_result(self) -> Result<()> {
        match self.error {
            Some(msg) => Err(StoreError::InvalidInput(msg)),
            None => Ok(()),
        }
    }
}

/// Validate a `0x`-prefixed 20-byte hex address
pub fn validate_address(address: &str) -> ValidationResult {
    let address = address.trim();
    if address.is_empty() {
        return ValidationResult::err("Address is required");
    }

    if !address.starts_with("0x") && !address.starts_with("0X") {
        return ValidationResult::err("Address must start with 0x");
    }

    if address.len() != 42 {
        return ValidationResult::err("Address must be 40 hex characters after 0x");
    }

    if !address[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return ValidationResult::err("Address contains non-hex characters");
    }

    ValidationResult::ok()
}

/// Validate a free-text field that is stored on chain
pub fn validate_text(label: &str, value: &str, max_len: usize) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", label));
    }

    if value.chars().count() > max_len {
        return ValidationResult::err(format!("{} must be at most {} characters", label, max_len));
    }

    ValidationResult::ok()
}

/// A form that passed validation, ready for both outgoing calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedTransfer {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub message: String,
    pub keyword: String,
}

/// Validate the sender and the whole form, converting the amount to smallest unit.
pub fn validate_transfer(
    account: &str,
    form: &FormData,
    decimals: u8,
) -> Result<ValidatedTransfer> {
    if account.is_empty() {
        return Err(StoreError::InvalidInput("Connect a wallet before sending".to_string()));
    }
    let from = parse_address(account)?;

    validate_address(&form.address_to).into_result()?;
    let to = parse_address(&form.address_to)?;

    let value = parse_amount(&form.amount, decimals)?;

    validate_text("Keyword", &form.keyword, MAX_KEYWORD_LEN).into_result()?;
    validate_text("Message", &form.message, MAX_MESSAGE_LEN).into_result()?;

    Ok(ValidatedTransfer {
        from,
        to,
        value,
        message: form.message.trim().to_string(),
        keyword: form.keyword.trim().to_string(),
    })
}

fn parse_address(address: &str) -> Result<Address> {
    Address::from_str(address.trim())
        .map_err(|e| StoreError::InvalidInput(format!("Invalid address '{}': {}", address, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENDER: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";
    const RECEIVER: &str = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC";

    fn form(to: &str, amount: &str) -> FormData {
        FormData {
            address_to: to.to_string(),
            amount: amount.to_string(),
            keyword: "coffee".to_string(),
            message: "thanks".to_string(),
        }
    }

    #[test]
    fn test_address_validation() {
        assert!(validate_address(RECEIVER).is_valid);
        assert!(validate_address(SENDER).is_valid);
        assert!(!validate_address("").is_valid);
        assert!(!validate_address("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC").is_valid);
        assert!(!validate_address("0x1234").is_valid);
        assert!(!validate_address("0xZZ44CdDdB6a900fa2b585dd299e03d12FA4293BC").is_valid);
    }

    #[test]
    fn test_text_validation() {
        assert!(validate_text("Message", "hi", 10).is_valid);
        assert!(!validate_text("Message", "   ", 10).is_valid);
        assert_eq!(
            validate_text("Keyword", "way too long", 4).error.as_deref(),
            Some("Keyword must be at most 4 characters")
        );
    }

    #[test]
    fn test_text_limit_counts_characters_not_bytes() {
        let accented = "é".repeat(200);
        assert!(validate_text("Message", &accented, MAX_MESSAGE_LEN).is_valid);

        let at_limit = "日".repeat(MAX_KEYWORD_LEN);
        assert!(validate_text("Keyword", &at_limit, MAX_KEYWORD_LEN).is_valid);
        assert!(!validate_text("Keyword", &format!("{}日", at_limit), MAX_KEYWORD_LEN).is_valid);
    }

    #[test]
    fn test_validate_transfer_success() {
        let transfer = validate_transfer(SENDER, &form(RECEIVER, "0.5"), 18).unwrap();
        assert_eq!(transfer.to, Address::from_str(RECEIVER).unwrap());
        assert_eq!(transfer.value, U256::from(500_000_000_000_000_000u64));
        assert_eq!(transfer.keyword, "coffee");
    }

    #[test]
    fn test_validate_transfer_requires_account() {
        let err = validate_transfer("", &form(RECEIVER, "1"), 18).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test]
    fn test_validate_transfer_rejects_bad_amount() {
        assert!(validate_transfer(SENDER, &form(RECEIVER, "-2"), 18).is_err());
        assert!(validate_transfer(SENDER, &form(RECEIVER, ""), 18).is_err());
    }

    #[test]
    fn test_validate_transfer_rejects_bad_receiver() {
        assert!(validate_transfer(SENDER, &form("0xnope", "1"), 18).is_err());
    }
}
