//! UI-observable state of the transaction store.

use shared::{FormData, TransactionRecord};

use crate::abi::RawTransaction;
use crate::units::amount_to_f64;

/// `Disconnected -> Connected -> Submitting -> Connected`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionPhase {
    #[default]
    Disconnected,
    Connected,
    Submitting,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreState {
    /// Active account, empty while disconnected
    pub account: String,
    pub phase: ConnectionPhase,
    pub form: FormData,
    /// True strictly between "transfer submitted" and "transfer confirmed"
    pub is_loading: bool,
    /// Cached contract counter, seeded from durable storage
    pub transaction_count: Option<u64>,
    pub transactions: Vec<TransactionRecord>,
}

impl StoreState {
    pub fn is_connected(&self) -> bool {
        !self.account.is_empty()
    }
}

/// Map a contract record for display: amount / 10^decimals, timestamp formatted.
pub fn to_record(
    raw: &RawTransaction,
    decimals: u8,
    format_timestamp: &dyn Fn(u64) -> String,
) -> TransactionRecord {
    TransactionRecord {
        address_from: raw.sender.clone(),
        address_to: raw.receiver.clone(),
        timestamp: format_timestamp(raw.timestamp),
        message: raw.message.clone(),
        keyword: raw.keyword.clone(),
        amount: amount_to_f64(raw.amount, decimals),
    }
}
