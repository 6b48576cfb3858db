//! Wallet gateway and contract client built on an EIP-1193 provider.

mod contract;
mod wallet;

pub use contract::{ReceiptWatcher, RpcContract};
pub use wallet::RpcWallet;

use serde_json::Value;

use crate::error::{Result, StoreError};

pub(crate) fn parse_accounts(value: Value) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        other => serde_json::from_value(other).map_err(StoreError::from),
    }
}

pub(crate) fn parse_hash(value: Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| StoreError::Decoding(format!("Expected transaction hash, got {}", value)))
}
