//! Browser-side implementations of the `lib-core` service traits

pub mod browser;
pub mod ethereum;
pub mod giphy;

pub use browser::{locale_timestamp, BrowserTimer, LocalStorageCache};
pub use ethereum::{on_accounts_changed, InjectedProvider};
