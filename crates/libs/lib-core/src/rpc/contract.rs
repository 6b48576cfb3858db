use std::rc::Rc;
use std::time::Duration;

use alloy_primitives::Address;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::parse_hash;
use crate::abi;
use crate::abi::RawTransaction;
use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::service::{
    Confirmation, ContractClient, Eip1193Transport, PendingTransaction, RecordRequest, Timer,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptResponse {
    block_number: Option<String>,
    status: Option<String>,
}

fn parse_quantity(quantity: &str) -> Option<u64> {
    u64::from_str_radix(quantity.trim_start_matches("0x"), 16).ok()
}

/// [`ContractClient`] that reads with `eth_call` and writes with
/// `eth_sendTransaction` through the wallet provider.
pub struct RpcContract<T, Tm> {
    transport: Rc<T>,
    timer: Rc<Tm>,
    address: Address,
    poll_interval: Duration,
    timeout: Option<Duration>,
}

impl<T, Tm> RpcContract<T, Tm> {
    pub fn new(transport: Rc<T>, timer: Rc<Tm>, config: &Config) -> Self {
        Self {
            transport,
            timer,
            address: config.contract_address,
            poll_interval: config.receipt_poll_interval,
            timeout: config.confirmation_timeout,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl<T: Eip1193Transport, Tm> RpcContract<T, Tm> {
    async fn call(&self, data: String) -> Result<String> {
        if !self.transport.is_available() {
            return Err(StoreError::ProviderUnavailable);
        }
        let params = json!([{ "to": self.address.to_string(), "data": data }, "latest"]);
        let value = self.transport.request("eth_call", params).await?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| StoreError::Decoding(format!("eth_call returned {}", value)))
    }
}

#[async_trait(?Send)]
impl<T: Eip1193Transport, Tm: Timer> ContractClient for RpcContract<T, Tm> {
    type Pending = ReceiptWatcher<T, Tm>;

    async fn get_all_transactions(&self) -> Result<Vec<RawTransaction>> {
        let output = self.call(abi::encode_get_all_transactions()).await?;
        abi::decode_all_transactions(&output)
    }

    async fn get_transaction_count(&self) -> Result<u64> {
        let output = self.call(abi::encode_get_transaction_count()).await?;
        abi::decode_transaction_count(&output)
    }

    async fn add_to_blockchain(&self, request: &RecordRequest) -> Result<Self::Pending> {
        if !self.transport.is_available() {
            return Err(StoreError::ProviderUnavailable);
        }
        let data = abi::encode_add_to_blockchain(
            request.to,
            request.value,
            &request.message,
            &request.keyword,
        );
        let params = json!([{
            "from": request.from.to_string(),
            "to": self.address.to_string(),
            "data": data,
        }]);
        let hash = parse_hash(self.transport.request("eth_sendTransaction", params).await?)?;

        Ok(ReceiptWatcher {
            hash,
            transport: Rc::clone(&self.transport),
            timer: Rc::clone(&self.timer),
            poll_interval: self.poll_interval,
            timeout: self.timeout,
        })
    }
}

/// Pending handle that polls `eth_getTransactionReceipt` until the call is mined.
pub struct ReceiptWatcher<T, Tm> {
    hash: String,
    transport: Rc<T>,
    timer: Rc<Tm>,
    poll_interval: Duration,
    timeout: Option<Duration>,
}

#[async_trait(?Send)]
impl<T: Eip1193Transport, Tm: Timer> PendingTransaction for ReceiptWatcher<T, Tm> {
    fn hash(&self) -> &str {
        &self.hash
    }

    async fn wait(&self) -> Result<Confirmation> {
        let mut waited = Duration::ZERO;
        loop {
            let value = self
                .transport
                .request("eth_getTransactionReceipt", json!([self.hash]))
                .await?;

            if !value.is_null() {
                return self.confirm(value);
            }

            if let Some(limit) = self.timeout {
                if waited >= limit {
                    return Err(StoreError::Timeout(self.hash.clone()));
                }
            }

            self.timer.sleep(self.poll_interval).await;
            waited += self.poll_interval;
        }
    }
}

impl<T, Tm> ReceiptWatcher<T, Tm> {
    fn confirm(&self, value: Value) -> Result<Confirmation> {
        let receipt: ReceiptResponse = serde_json::from_value(value)?;
        // Pre-Byzantium receipts carry no status field.
        if receipt.status.as_deref() == Some("0x0") {
            return Err(StoreError::Reverted(self.hash.clone()));
        }
        Ok(Confirmation {
            hash: self.hash.clone(),
            block_number: receipt.block_number.as_deref().and_then(parse_quantity),
        })
    }
}
