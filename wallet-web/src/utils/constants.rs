//! Application constants
//!
//! The web build has no process environment, so configuration keys are
//! baked in at compile time and fed through [`Config::from_lookup`].

use lib_core::{Config, Result};

/// Keys understood by [`Config::from_lookup`], captured at build time.
const BUILD_ENV: &[(&str, Option<&str>)] = &[
    ("CONTRACT_ADDRESS", option_env!("CONTRACT_ADDRESS")),
    ("GAS_LIMIT", option_env!("GAS_LIMIT")),
    ("RECEIPT_POLL_MS", option_env!("RECEIPT_POLL_MS")),
    ("CONFIRMATION_TIMEOUT_SECS", option_env!("CONFIRMATION_TIMEOUT_SECS")),
    ("RECORD_RETRIES", option_env!("RECORD_RETRIES")),
    ("EXPLORER_URL", option_env!("EXPLORER_URL")),
    ("GIPHY_API_KEY", option_env!("GIPHY_API_KEY")),
];

fn build_var(key: &str) -> Option<String> {
    BUILD_ENV
        .iter()
        .find(|(name, _)| *name == key)
        .and_then(|(_, value)| value.map(str::to_string))
}

pub fn load_config() -> Result<Config> {
    Config::from_lookup(build_var)
}
