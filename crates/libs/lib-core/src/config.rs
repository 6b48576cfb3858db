//! # Application Configuration
//!
//! Configuration for the transfer workflow. Values come from a key lookup so the
//! same loader serves native environment variables ([`Config::from_env`]) and
//! values baked in at compile time for the browser build ([`Config::from_lookup`]).
//!
//! ```rust
//! use lib_core::config::Config;
//!
//! let config = Config::from_lookup(|key| match key {
//!     "CONTRACT_ADDRESS" => Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//! assert_eq!(config.gas_limit, 21_000);
//! ```
//!
//! All configuration is validated on load to fail fast if misconfigured.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::Address;

use crate::error::{Result, StoreError};

/// Gas limit of a plain native-currency transfer.
pub const NATIVE_TRANSFER_GAS: u64 = 21_000;

/// Decimals of the chain's native currency.
pub const NATIVE_DECIMALS: u8 = 18;

/// Durable storage key holding the cached transaction count.
pub const DEFAULT_COUNT_KEY: &str = "transactionCount";

pub const DEFAULT_EXPLORER_URL: &str = "https://sepolia.etherscan.io";

/// Transfer workflow configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address of the deployed transactions contract
    pub contract_address: Address,

    /// Gas limit sent with the native transfer
    pub gas_limit: u64,

    /// Decimals used to convert UI amounts into the smallest unit
    pub decimals: u8,

    /// Storage key for the cached transaction count
    pub count_storage_key: String,

    /// Delay between receipt polls while waiting for confirmation
    pub receipt_poll_interval: Duration,

    /// Give up waiting for a receipt after this long (`None` waits forever)
    pub confirmation_timeout: Option<Duration>,

    /// Extra attempts at recording the transfer on the contract
    pub record_retries: u32,

    /// Block explorer used for address links
    pub explorer_base_url: String,

    /// Giphy API key for keyword images (disabled when absent)
    pub giphy_api_key: Option<String>,
}

impl Config {
    /// Defaults for everything except the contract address.
    pub fn new(contract_address: Address) -> Self {
        Self {
            contract_address,
            gas_limit: NATIVE_TRANSFER_GAS,
            decimals: NATIVE_DECIMALS,
            count_storage_key: DEFAULT_COUNT_KEY.to_string(),
            receipt_poll_interval: Duration::from_millis(2_000),
            confirmation_timeout: None,
            record_retries: 0,
            explorer_base_url: DEFAULT_EXPLORER_URL.to_string(),
            giphy_api_key: None,
        }
    }

    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Recognised keys: `CONTRACT_ADDRESS` (required), `GAS_LIMIT`,
    /// `RECEIPT_POLL_MS`, `CONFIRMATION_TIMEOUT_SECS`, `RECORD_RETRIES`,
    /// `EXPLORER_URL`, `GIPHY_API_KEY`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_address = lookup("CONTRACT_ADDRESS")
            .ok_or_else(|| StoreError::Config("CONTRACT_ADDRESS must be set".to_string()))?;
        let contract_address = Address::from_str(raw_address.trim()).map_err(|e| {
            StoreError::Config(format!("CONTRACT_ADDRESS is not a valid address: {}", e))
        })?;

        let mut config = Self::new(contract_address);

        if let Some(gas) = lookup("GAS_LIMIT") {
            config.gas_limit = parse_number("GAS_LIMIT", &gas)?;
        }
        if let Some(ms) = lookup("RECEIPT_POLL_MS") {
            config.receipt_poll_interval =
                Duration::from_millis(parse_number("RECEIPT_POLL_MS", &ms)?);
        }
        if let Some(secs) = lookup("CONFIRMATION_TIMEOUT_SECS") {
            config.confirmation_timeout =
                Some(Duration::from_secs(parse_number("CONFIRMATION_TIMEOUT_SECS", &secs)?));
        }
        if let Some(retries) = lookup("RECORD_RETRIES") {
            config.record_retries = parse_number::<u32>("RECORD_RETRIES", &retries)?;
        }
        if let Some(url) = lookup("EXPLORER_URL") {
            config.explorer_base_url = url.trim_end_matches('/').to_string();
        }
        config.giphy_api_key = lookup("GIPHY_API_KEY").filter(|key| !key.trim().is_empty());

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values against chain rules.
    pub fn validate(&self) -> Result<()> {
        if self.contract_address == Address::ZERO {
            return Err(StoreError::Config(
                "CONTRACT_ADDRESS must not be the zero address".to_string(),
            ));
        }

        if self.gas_limit < NATIVE_TRANSFER_GAS {
            return Err(StoreError::Config(format!(
                "GAS_LIMIT must be at least {}",
                NATIVE_TRANSFER_GAS
            )));
        }

        if self.receipt_poll_interval.is_zero() {
            return Err(StoreError::Config("RECEIPT_POLL_MS must be greater than 0".to_string()));
        }

        if self.record_retries > 5 {
            return Err(StoreError::Config("RECORD_RETRIES must be between 0 and 5".to_string()));
        }

        Ok(())
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| StoreError::Config(format!("{} must be a valid number", key)))
}
