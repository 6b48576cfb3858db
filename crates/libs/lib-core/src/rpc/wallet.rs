use std::rc::Rc;

use async_trait::async_trait;
use serde_json::json;

use super::{parse_accounts, parse_hash};
use crate::error::{Result, StoreError};
use crate::service::{Eip1193Transport, NativeTransfer, WalletGateway};

/// [`WalletGateway`] over an injected EIP-1193 provider.
pub struct RpcWallet<T> {
    transport: Rc<T>,
}

impl<T> RpcWallet<T> {
    pub fn new(transport: Rc<T>) -> Self {
        Self { transport }
    }
}

impl<T: Eip1193Transport> RpcWallet<T> {
    fn ensure_available(&self) -> Result<()> {
        if self.transport.is_available() {
            Ok(())
        } else {
            Err(StoreError::ProviderUnavailable)
        }
    }
}

#[async_trait(?Send)]
impl<T: Eip1193Transport> WalletGateway for RpcWallet<T> {
    fn is_available(&self) -> bool {
        self.transport.is_available()
    }

    async fn accounts(&self) -> Result<Vec<String>> {
        self.ensure_available()?;
        let value = self.transport.request("eth_accounts", json!([])).await?;
        parse_accounts(value)
    }

    async fn request_access(&self) -> Result<Vec<String>> {
        self.ensure_available()?;
        let value = self.transport.request("eth_requestAccounts", json!([])).await?;
        let accounts = parse_accounts(value)?;
        if accounts.is_empty() {
            return Err(StoreError::UserRejected);
        }
        Ok(accounts)
    }

    async fn send_native_transfer(&self, transfer: &NativeTransfer) -> Result<String> {
        self.ensure_available()?;
        log::debug!(
            "eth_sendTransaction native value={} to={}",
            transfer.value,
            transfer.to
        );
        let value = self
            .transport
            .request("eth_sendTransaction", transfer.to_rpc_params())
            .await?;
        parse_hash(value)
    }
}
