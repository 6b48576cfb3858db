//! Browser timer, localStorage cache and locale formatting

use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use lib_core::service::{CountCache, Timer};
use lib_core::{Result, StoreError};
use wasm_bindgen::JsValue;

/// [`Timer`] backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

/// Transaction count cached under a single `localStorage` key.
pub struct LocalStorageCache {
    key: String,
}

impl LocalStorageCache {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CountCache for LocalStorageCache {
    fn load(&self) -> Option<u64> {
        let raw = Self::storage()?.get_item(&self.key).ok().flatten()?;
        match raw.parse() {
            Ok(count) => Some(count),
            Err(_) => {
                log::warn!("Ignoring malformed cached count {:?}", raw);
                None
            }
        }
    }

    fn store(&self, count: u64) -> Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Storage("localStorage is not available".to_string()))?;
        storage
            .set_item(&self.key, &count.to_string())
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }
}

/// Render a Unix timestamp (seconds) in the browser's locale.
pub fn locale_timestamp(seconds: u64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(seconds as f64 * 1000.0));
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}
