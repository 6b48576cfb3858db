use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Transfer form fields, edited one at a time by the UI
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub address_to: String,
    pub amount: String,
    pub keyword: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::AddressTo => &self.address_to,
            FormField::Amount => &self.amount,
            FormField::Keyword => &self.keyword,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::AddressTo => self.address_to = value,
            FormField::Amount => self.amount = value,
            FormField::Keyword => self.keyword = value,
            FormField::Message => self.message = value,
        }
    }

    /// Every field has a non-blank value
    pub fn is_complete(&self) -> bool {
        FormField::ALL.iter().all(|f| !self.get(*f).trim().is_empty())
    }
}

/// Name of a [`FormData`] field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    AddressTo,
    Amount,
    Keyword,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::AddressTo,
        FormField::Amount,
        FormField::Keyword,
        FormField::Message,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::AddressTo => "addressTo",
            FormField::Amount => "amount",
            FormField::Keyword => "keyword",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}

/// A past transfer as displayed in the transaction list
///
/// `amount` is derived from the on-chain smallest-unit integer, never user supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub address_from: String,
    pub address_to: String,
    pub timestamp: String,
    pub message: String,
    pub keyword: String,
    pub amount: f64,
}
