//! # Service Traits
//!
//! Seams between the transaction store and the outside world. Every trait is
//! `?Send`: the browser runs a single-threaded event loop and the JS handles
//! behind the real implementations cannot cross threads.
//!
//! - [`WalletGateway`]: the injected wallet provider
//! - [`ContractClient`] / [`PendingTransaction`]: the deployed contract
//! - [`CountCache`]: durable storage for the cached transaction count
//! - [`Notifier`]: the one channel for user-facing notices
//! - [`Eip1193Transport`] / [`Timer`]: host primitives the RPC-backed
//!   gateway and client are built on

use std::time::Duration;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::abi::RawTransaction;
use crate::error::{Result, StoreError};

/// Parameters of a direct native-currency transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeTransfer {
    pub from: Address,
    pub to: Address,
    /// Smallest-unit amount
    pub value: U256,
    pub gas: u64,
}

impl NativeTransfer {
    /// `eth_sendTransaction` params: `[{from, to, gas, value}]` with hex quantities.
    pub fn to_rpc_params(&self) -> Value {
        json!([{
            "from": self.from.to_string(),
            "to": self.to.to_string(),
            "gas": format!("0x{:x}", self.gas),
            "value": format!("0x{:x}", self.value),
        }])
    }
}

/// Arguments of the contract's `addToBlockchain` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordRequest {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub message: String,
    pub keyword: String,
}

/// Outcome of a mined transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub hash: String,
    pub block_number: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn from_error(err: &StoreError) -> Self {
        Self::error(err.user_message())
    }
}

/// Browser wallet provider operations.
#[async_trait(?Send)]
pub trait WalletGateway {
    /// True iff the host exposes a wallet provider object.
    fn is_available(&self) -> bool;

    /// Already-authorized accounts (`eth_accounts`); empty when none.
    async fn accounts(&self) -> Result<Vec<String>>;

    /// Prompt the user for access (`eth_requestAccounts`).
    async fn request_access(&self) -> Result<Vec<String>>;

    /// Send native currency outside the contract; returns the transaction hash.
    async fn send_native_transfer(&self, transfer: &NativeTransfer) -> Result<String>;
}

/// A submitted state-changing call.
#[async_trait(?Send)]
pub trait PendingTransaction {
    /// Content-derived identifier, usable for logging.
    fn hash(&self) -> &str;

    /// Suspend until the call is mined.
    async fn wait(&self) -> Result<Confirmation>;
}

/// Deployed transactions contract.
#[async_trait(?Send)]
pub trait ContractClient {
    type Pending: PendingTransaction;

    async fn get_all_transactions(&self) -> Result<Vec<RawTransaction>>;

    async fn get_transaction_count(&self) -> Result<u64>;

    async fn add_to_blockchain(&self, request: &RecordRequest) -> Result<Self::Pending>;
}

/// Durable storage for the cached transaction count.
pub trait CountCache {
    fn load(&self) -> Option<u64>;

    fn store(&self, count: u64) -> Result<()>;
}

/// The single user-facing reporting channel.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// EIP-1193 `request({method, params})`.
#[async_trait(?Send)]
pub trait Eip1193Transport {
    fn is_available(&self) -> bool;

    async fn request(&self, method: &str, params: Value) -> Result<Value>;
}

#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}
