//! Injected Ethereum provider (EIP-1193) via wasm-bindgen
//!
//! `window.ethereum` is the only way the page talks to the chain. Requests
//! cross the JS boundary as JSON-compatible values and errors are classified
//! by their EIP-1193 `code`.

use async_trait::async_trait;
use lib_core::service::Eip1193Transport;
use lib_core::{Result, StoreError};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// JSON-RPC "internal error", used when the provider throws without a code.
const INTERNAL_ERROR_CODE: i64 = -32603;

#[wasm_bindgen(inline_js = "
export function hasEthereum() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export async function ethereumRequest(method, params) {
    if (!window.ethereum) {
        throw { code: -32603, message: 'No wallet provider found' };
    }
    return await window.ethereum.request({ method, params });
}

export function onAccountsChanged(callback) {
    if (window.ethereum && typeof window.ethereum.on === 'function') {
        window.ethereum.on('accountsChanged', callback);
        return true;
    }
    return false;
}
")]
extern "C" {
    fn hasEthereum() -> bool;

    #[wasm_bindgen(catch)]
    async fn ethereumRequest(
        method: &str,
        params: JsValue,
    ) -> std::result::Result<JsValue, JsValue>;

    fn onAccountsChanged(callback: &Closure<dyn FnMut(JsValue)>) -> bool;
}

/// [`Eip1193Transport`] backed by the wallet extension's `window.ethereum`.
#[derive(Clone, Copy, Debug, Default)]
pub struct InjectedProvider;

impl InjectedProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Eip1193Transport for InjectedProvider {
    fn is_available(&self) -> bool {
        hasEthereum()
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value> {
        log::debug!("[ethereum] {} {}", method, params);

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_params = params
            .serialize(&serializer)
            .map_err(|e| StoreError::Encoding(e.to_string()))?;

        let response = ethereumRequest(method, js_params)
            .await
            .map_err(provider_error)?;

        if response.is_null() || response.is_undefined() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(response).map_err(|e| StoreError::Decoding(e.to_string()))
    }
}

/// Run `handler` whenever the user switches or revokes accounts in the wallet.
pub fn on_accounts_changed(handler: impl Fn() + 'static) {
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |_accounts: JsValue| handler());
    if onAccountsChanged(&closure) {
        // Lives for the rest of the page
        closure.forget();
    } else {
        log::debug!("Provider does not emit accountsChanged");
    }
}

fn provider_error(err: JsValue) -> StoreError {
    let field = |name: &str| js_sys::Reflect::get(&err, &JsValue::from_str(name)).ok();

    let code = field("code").and_then(|v| v.as_f64());
    let message = field("message")
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    match code {
        Some(code) => StoreError::from_rpc(code as i64, message),
        None => StoreError::Rpc {
            code: INTERNAL_ERROR_CODE,
            message,
        },
    }
}
