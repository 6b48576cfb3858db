//! Calldata encoding and return decoding for the transactions contract.

use alloy_primitives::{hex, Address, U256};
use alloy_sol_types::{sol, SolCall, SolValue};

use crate::error::{Result, StoreError};

sol! {
    struct TransferStruct {
        address sender;
        address receiver;
        uint amount;
        string message;
        uint256 timestamp;
        string keyword;
    }

    function addToBlockchain(address receiver, uint amount, string message, string keyword) external;
    function getAllTransactions() external view returns (TransferStruct[]);
    function getTransactionCount() external view returns (uint256);
}

/// One stored transfer as the contract returns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTransaction {
    pub sender: String,
    pub receiver: String,
    /// Smallest-unit amount
    pub amount: U256,
    pub message: String,
    /// Seconds since the unix epoch
    pub timestamp: u64,
    pub keyword: String,
}

impl From<TransferStruct> for RawTransaction {
    fn from(item: TransferStruct) -> Self {
        Self {
            sender: item.sender.to_string(),
            receiver: item.receiver.to_string(),
            amount: item.amount,
            message: item.message,
            timestamp: u64::try_from(item.timestamp).unwrap_or(u64::MAX),
            keyword: item.keyword,
        }
    }
}

pub fn encode_add_to_blockchain(
    receiver: Address,
    amount: U256,
    message: &str,
    keyword: &str,
) -> String {
    let call = addToBlockchainCall {
        receiver,
        amount,
        message: message.to_string(),
        keyword: keyword.to_string(),
    };
    hex::encode_prefixed(call.abi_encode())
}

pub fn encode_get_all_transactions() -> String {
    hex::encode_prefixed(getAllTransactionsCall {}.abi_encode())
}

pub fn encode_get_transaction_count() -> String {
    hex::encode_prefixed(getTransactionCountCall {}.abi_encode())
}

pub fn decode_all_transactions(output: &str) -> Result<Vec<RawTransaction>> {
    let bytes = hex::decode(output)?;
    let items = Vec::<TransferStruct>::abi_decode(&bytes)?;
    Ok(items.into_iter().map(RawTransaction::from).collect())
}

pub fn decode_transaction_count(output: &str) -> Result<u64> {
    let bytes = hex::decode(output)?;
    let count = U256::abi_decode(&bytes)?;
    u64::try_from(count)
        .map_err(|_| {
            StoreError::Decoding(format!("Transaction count {} does not fit in u64", count))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, keccak256};

    #[test]
    fn test_add_to_blockchain_selector() {
        let hash = keccak256("addToBlockchain(address,uint256,string,string)");
        let expected = &hash[..4];
        assert_eq!(addToBlockchainCall::SELECTOR.as_slice(), expected);

        let data = encode_add_to_blockchain(Address::ZERO, U256::from(1u64), "hi", "k");
        assert!(data.starts_with(&format!("0x{}", hex::encode(expected))));
    }

    #[test]
    fn test_view_call_data_is_selector_only() {
        assert_eq!(encode_get_all_transactions().len(), 2 + 8);
        assert_eq!(encode_get_transaction_count().len(), 2 + 8);
    }

    #[test]
    fn test_decode_all_transactions() {
        let sender = address!("70997970c51812dc3a010c7d01b50e0d17dc79c8");
        let receiver = address!("3c44cdddb6a900fa2b585dd299e03d12fa4293bc");
        let items = vec![TransferStruct {
            sender,
            receiver,
            amount: U256::from(1_000_000_000_000_000_000u64),
            message: "hi".to_string(),
            timestamp: U256::from(1_700_000_000u64),
            keyword: "k".to_string(),
        }];
        let output = hex::encode_prefixed((items,).abi_encode_params());

        let decoded = decode_all_transactions(&output).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].sender, sender.to_string());
        assert_eq!(decoded[0].receiver, receiver.to_string());
        assert_eq!(decoded[0].timestamp, 1_700_000_000);
        assert_eq!(decoded[0].message, "hi");
        assert_eq!(decoded[0].keyword, "k");
    }

    #[test]
    fn test_decode_empty_history() {
        let output = hex::encode_prefixed((Vec::<TransferStruct>::new(),).abi_encode_params());
        assert!(decode_all_transactions(&output).unwrap().is_empty());
    }

    #[test]
    fn test_decode_transaction_count() {
        let output = hex::encode_prefixed(U256::from(42u64).abi_encode());
        assert_eq!(decode_transaction_count(&output).unwrap(), 42);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_transaction_count("0xzz").is_err());
        assert!(decode_all_transactions("0x01").is_err());
    }
}
