//! # Test Support
//!
//! Hand-written mock services shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use alloy_primitives::U256;
use async_trait::async_trait;
use lib_core::abi::RawTransaction;
use lib_core::config::Config;
use lib_core::error::{Result, StoreError};
use lib_core::service::{
    Confirmation, ContractClient, CountCache, Eip1193Transport, NativeTransfer, Notice, Notifier,
    PendingTransaction, RecordRequest, Timer, WalletGateway,
};
use serde_json::Value;

pub const SENDER: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";
pub const RECEIVER: &str = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC";
pub const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Ordered record of calls across all mocks.
pub type EventLog = Rc<RefCell<Vec<String>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "CONTRACT_ADDRESS" => Some(CONTRACT.to_string()),
        "RECEIPT_POLL_MS" => Some("10".to_string()),
        _ => None,
    })
    .expect("test config should be valid")
}

pub fn ether(n: u64) -> U256 {
    U256::from(n) * U256::from(10u64).pow(U256::from(18u64))
}

// ============================================================================
// WALLET
// ============================================================================

pub struct MockWallet {
    pub available: bool,
    pub accounts: RefCell<Vec<String>>,
    pub reject_access: bool,
    pub fail_native: bool,
    pub native_transfers: RefCell<Vec<NativeTransfer>>,
    pub events: EventLog,
}

impl MockWallet {
    pub fn new(events: EventLog) -> Self {
        Self {
            available: true,
            accounts: RefCell::new(Vec::new()),
            reject_access: false,
            fail_native: false,
            native_transfers: RefCell::new(Vec::new()),
            events,
        }
    }

    pub fn with_account(self, account: &str) -> Self {
        self.accounts.borrow_mut().push(account.to_string());
        self
    }
}

#[async_trait(?Send)]
impl<'a> WalletGateway for &'a MockWallet {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn accounts(&self) -> Result<Vec<String>> {
        self.events.borrow_mut().push("eth_accounts".to_string());
        Ok(self.accounts.borrow().clone())
    }

    async fn request_access(&self) -> Result<Vec<String>> {
        self.events.borrow_mut().push("eth_requestAccounts".to_string());
        if self.reject_access {
            return Err(StoreError::UserRejected);
        }
        Ok(vec![SENDER.to_string()])
    }

    async fn send_native_transfer(&self, transfer: &NativeTransfer) -> Result<String> {
        self.events.borrow_mut().push("native_transfer".to_string());
        if self.fail_native {
            return Err(StoreError::UserRejected);
        }
        self.native_transfers.borrow_mut().push(transfer.clone());
        Ok("0xnative".to_string())
    }
}

// ============================================================================
// CONTRACT
// ============================================================================

pub struct MockContract {
    pub records: RefCell<Vec<RawTransaction>>,
    pub count: Cell<u64>,
    /// Number of upcoming `add_to_blockchain` calls that fail with an RPC error
    pub record_failures: Cell<u32>,
    pub confirm_delay: Duration,
    pub revert: bool,
    pub get_all_calls: Cell<usize>,
    pub requests: RefCell<Vec<RecordRequest>>,
    pub events: EventLog,
}

impl MockContract {
    pub fn new(events: EventLog) -> Self {
        Self {
            records: RefCell::new(Vec::new()),
            count: Cell::new(0),
            record_failures: Cell::new(0),
            confirm_delay: Duration::from_millis(20),
            revert: false,
            get_all_calls: Cell::new(0),
            requests: RefCell::new(Vec::new()),
            events,
        }
    }

    pub fn with_record(self, raw: RawTransaction) -> Self {
        self.records.borrow_mut().push(raw);
        self.count.set(self.count.get() + 1);
        self
    }
}

pub struct MockPending {
    hash: String,
    delay: Duration,
    revert: bool,
    events: EventLog,
}

#[async_trait(?Send)]
impl PendingTransaction for MockPending {
    fn hash(&self) -> &str {
        &self.hash
    }

    async fn wait(&self) -> Result<Confirmation> {
        self.events.borrow_mut().push("wait:start".to_string());
        tokio::time::sleep(self.delay).await;
        self.events.borrow_mut().push("wait:done".to_string());
        if self.revert {
            return Err(StoreError::Reverted(self.hash.clone()));
        }
        Ok(Confirmation {
            hash: self.hash.clone(),
            block_number: Some(1),
        })
    }
}

#[async_trait(?Send)]
impl<'a> ContractClient for &'a MockContract {
    type Pending = MockPending;

    async fn get_all_transactions(&self) -> Result<Vec<RawTransaction>> {
        self.get_all_calls.set(self.get_all_calls.get() + 1);
        self.events.borrow_mut().push("get_all_transactions".to_string());
        Ok(self.records.borrow().clone())
    }

    async fn get_transaction_count(&self) -> Result<u64> {
        Ok(self.count.get())
    }

    async fn add_to_blockchain(&self, request: &RecordRequest) -> Result<MockPending> {
        self.events.borrow_mut().push("add_to_blockchain".to_string());
        let failures = self.record_failures.get();
        if failures > 0 {
            self.record_failures.set(failures - 1);
            return Err(StoreError::Rpc {
                code: -32603,
                message: "nonce too low".to_string(),
            });
        }

        self.requests.borrow_mut().push(request.clone());
        self.records.borrow_mut().push(RawTransaction {
            sender: request.from.to_string(),
            receiver: request.to.to_string(),
            amount: request.value,
            message: request.message.clone(),
            timestamp: 1_700_000_000,
            keyword: request.keyword.clone(),
        });
        self.count.set(self.count.get() + 1);

        Ok(MockPending {
            hash: "0xrecord".to_string(),
            delay: self.confirm_delay,
            revert: self.revert,
            events: Rc::clone(&self.events),
        })
    }
}

// ============================================================================
// CACHE / NOTIFIER
// ============================================================================

#[derive(Default)]
pub struct MemoryCache {
    pub value: Cell<Option<u64>>,
}

impl CountCache for MemoryCache {
    fn load(&self) -> Option<u64> {
        self.value.get()
    }

    fn store(&self, count: u64) -> Result<()> {
        self.value.set(Some(count));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

// ============================================================================
// EIP-1193 TRANSPORT / TIMER
// ============================================================================

/// Transport that answers from a script of `(method, response)` pairs.
pub struct ScriptedTransport {
    pub available: bool,
    pub script: RefCell<VecDeque<(String, Result<Value>)>>,
    pub requests: RefCell<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            available: true,
            script: RefCell::new(VecDeque::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn respond(self, method: &str, response: Result<Value>) -> Self {
        self.script
            .borrow_mut()
            .push_back((method.to_string(), response));
        self
    }
}

#[async_trait(?Send)]
impl Eip1193Transport for ScriptedTransport {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value> {
        self.requests
            .borrow_mut()
            .push((method.to_string(), params));
        let (expected, response) = self
            .script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request {}", method));
        assert_eq!(expected, method, "requests out of order");
        response
    }
}

#[derive(Default)]
pub struct CountingTimer {
    pub sleeps: Cell<u32>,
}

#[async_trait(?Send)]
impl Timer for CountingTimer {
    async fn sleep(&self, _duration: Duration) {
        self.sleeps.set(self.sleeps.get() + 1);
    }
}
