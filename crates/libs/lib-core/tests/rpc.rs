//! # EIP-1193 Gateway and Contract Client Tests

mod support;

use std::rc::Rc;
use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::{hex, Address, U256};
use alloy_sol_types::SolValue;
use lib_core::rpc::{RpcContract, RpcWallet};
use lib_core::service::{
    ContractClient, NativeTransfer, PendingTransaction, RecordRequest, WalletGateway,
};
use lib_core::StoreError;
use serde_json::json;
use support::*;

fn record_request() -> RecordRequest {
    RecordRequest {
        from: Address::from_str(SENDER).unwrap(),
        to: Address::from_str(RECEIVER).unwrap(),
        value: ether(1),
        message: "hi".to_string(),
        keyword: "k".to_string(),
    }
}

// ============================================================================
// WALLET
// ============================================================================

#[tokio::test]
async fn test_accounts_empty_when_none_authorized() {
    let transport = Rc::new(ScriptedTransport::new().respond("eth_accounts", Ok(json!([]))));
    let wallet = RpcWallet::new(transport);

    assert!(wallet.accounts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_request_access_maps_rejection() {
    let transport = Rc::new(ScriptedTransport::new().respond(
        "eth_requestAccounts",
        Err(StoreError::from_rpc(4001, "User rejected the request.")),
    ));
    let wallet = RpcWallet::new(transport);

    let err = wallet.request_access().await.unwrap_err();
    assert!(matches!(err, StoreError::UserRejected));
}

#[tokio::test]
async fn test_unavailable_provider_never_sends_requests() {
    let mut transport = ScriptedTransport::new();
    transport.available = false;
    let transport = Rc::new(transport);
    let wallet = RpcWallet::new(transport.clone());

    assert!(!wallet.is_available());
    assert!(matches!(
        wallet.request_access().await,
        Err(StoreError::ProviderUnavailable)
    ));
    assert!(transport.requests.borrow().is_empty());
}

#[tokio::test]
async fn test_native_transfer_params_and_hash() {
    let transport = Rc::new(
        ScriptedTransport::new().respond("eth_sendTransaction", Ok(json!("0xfeed"))),
    );
    let wallet = RpcWallet::new(transport.clone());
    let transfer = NativeTransfer {
        from: Address::from_str(SENDER).unwrap(),
        to: Address::from_str(RECEIVER).unwrap(),
        value: ether(1),
        gas: 21_000,
    };

    let hash = wallet.send_native_transfer(&transfer).await.unwrap();

    assert_eq!(hash, "0xfeed");
    let requests = transport.requests.borrow();
    let params = &requests[0].1;
    assert_eq!(params[0]["gas"], "0x5208");
    assert_eq!(params[0]["value"], "0xde0b6b3a7640000");
}

// ============================================================================
// CONTRACT
// ============================================================================

#[tokio::test]
async fn test_get_transaction_count_uses_eth_call() {
    let output = hex::encode_prefixed(U256::from(5u64).abi_encode());
    let transport = Rc::new(ScriptedTransport::new().respond("eth_call", Ok(json!(output))));
    let contract = RpcContract::new(
        transport.clone(),
        Rc::new(CountingTimer::default()),
        &test_config(),
    );

    assert_eq!(contract.get_transaction_count().await.unwrap(), 5);

    let requests = transport.requests.borrow();
    let params = &requests[0].1;
    assert_eq!(
        params[0]["to"].as_str().unwrap().to_lowercase(),
        CONTRACT.to_lowercase()
    );
    assert_eq!(params[1], "latest");
}

#[tokio::test]
async fn test_add_to_blockchain_then_wait_polls_until_mined() {
    // Arrange
    let transport = Rc::new(
        ScriptedTransport::new()
            .respond("eth_sendTransaction", Ok(json!("0xrecord")))
            .respond("eth_getTransactionReceipt", Ok(json!(null)))
            .respond("eth_getTransactionReceipt", Ok(json!(null)))
            .respond(
                "eth_getTransactionReceipt",
                Ok(json!({ "status": "0x1", "blockNumber": "0x2a" })),
            ),
    );
    let timer = Rc::new(CountingTimer::default());
    let contract = RpcContract::new(transport.clone(), timer.clone(), &test_config());

    // Act
    let pending = contract.add_to_blockchain(&record_request()).await.unwrap();
    let confirmation = pending.wait().await.unwrap();

    // Assert
    assert_eq!(pending.hash(), "0xrecord");
    assert_eq!(confirmation.block_number, Some(42));
    assert_eq!(timer.sleeps.get(), 2);

    let requests = transport.requests.borrow();
    let tx = &requests[0].1[0];
    assert!(tx["data"].as_str().unwrap().starts_with("0x"));
    assert!(tx.get("value").is_none());
}

#[tokio::test]
async fn test_wait_reports_revert() {
    let transport = Rc::new(
        ScriptedTransport::new()
            .respond("eth_sendTransaction", Ok(json!("0xbad")))
            .respond("eth_getTransactionReceipt", Ok(json!({ "status": "0x0" }))),
    );
    let contract = RpcContract::new(transport, Rc::new(CountingTimer::default()), &test_config());

    let pending = contract.add_to_blockchain(&record_request()).await.unwrap();

    assert!(matches!(pending.wait().await, Err(StoreError::Reverted(hash)) if hash == "0xbad"));
}

#[tokio::test]
async fn test_wait_times_out() {
    let transport = Rc::new(
        ScriptedTransport::new()
            .respond("eth_sendTransaction", Ok(json!("0xslow")))
            .respond("eth_getTransactionReceipt", Ok(json!(null)))
            .respond("eth_getTransactionReceipt", Ok(json!(null))),
    );
    let mut config = test_config();
    config.receipt_poll_interval = Duration::from_secs(1);
    config.confirmation_timeout = Some(Duration::from_secs(1));
    let timer = Rc::new(CountingTimer::default());
    let contract = RpcContract::new(transport, timer.clone(), &config);

    let pending = contract.add_to_blockchain(&record_request()).await.unwrap();

    assert!(matches!(pending.wait().await, Err(StoreError::Timeout(_))));
    assert_eq!(timer.sleeps.get(), 1);
}
