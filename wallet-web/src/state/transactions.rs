//! Transaction state management
//!
//! Wraps the `lib-core` [`TransactionStore`] in a Leptos context. The store
//! owns the workflow; this module mirrors its state into signals and turns
//! UI events into store actions on the local executor.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use lib_core::rpc::{RpcContract, RpcWallet};
use lib_core::service::{Notice, NoticeLevel, Notifier};
use lib_core::{Config, StoreState, TransactionStore};
use shared::FormField;

use crate::services::{
    locale_timestamp, on_accounts_changed, BrowserTimer, InjectedProvider, LocalStorageCache,
};

pub type WebStore =
    TransactionStore<RpcWallet<InjectedProvider>, RpcContract<InjectedProvider, BrowserTimer>>;

/// Global transaction context
#[derive(Clone, Copy)]
pub struct TransactionContext {
    pub state: RwSignal<StoreState>,
    /// Most recent user-facing notice, cleared by [`Self::dismiss_notice`]
    pub notice: RwSignal<Option<Notice>>,
    pub config: StoredValue<Config>,
    store: StoredValue<Rc<WebStore>, LocalStorage>,
}

/// Routes store notices into the `notice` signal.
struct SignalNotifier {
    notice: RwSignal<Option<Notice>>,
}

impl Notifier for SignalNotifier {
    fn notify(&self, notice: Notice) {
        if notice.level == NoticeLevel::Error {
            web_sys::console::error_1(&notice.message.as_str().into());
        }
        self.notice.set(Some(notice));
    }
}

impl TransactionContext {
    fn new(config: Config) -> Self {
        let provider = Rc::new(InjectedProvider::new());
        let wallet = RpcWallet::new(Rc::clone(&provider));
        let contract = RpcContract::new(provider, Rc::new(BrowserTimer), &config);
        let cache = Rc::new(LocalStorageCache::new(config.count_storage_key.clone()));

        let notice = RwSignal::new(None);
        let notifier = Rc::new(SignalNotifier { notice });

        let store = TransactionStore::new(config.clone(), wallet, contract, cache, notifier)
            .with_timestamp_formatter(locale_timestamp);

        let state = RwSignal::new(store.snapshot());
        store.subscribe(move |snapshot| state.set(snapshot.clone()));

        Self {
            state,
            notice,
            config: StoredValue::new(config),
            store: StoredValue::new_local(Rc::new(store)),
        }
    }

    fn run<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<WebStore>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let store = self.store.get_value();
        leptos::task::spawn_local(action(store));
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(|state| state.is_connected())
    }

    pub fn account(&self) -> String {
        self.state.with(|state| state.account.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|state| state.is_loading)
    }

    pub fn initialize(&self) {
        self.run(|store| async move { store.initialize().await });
    }

    pub fn connect(&self) {
        self.run(|store| async move {
            // Failures already reached the notifier
            let _ = store.connect_wallet().await;
        });
    }

    pub fn disconnect(&self) {
        self.store.get_value().disconnect();
    }

    pub fn update_field(&self, field: FormField, value: String) {
        self.store.get_value().update_form_field(field, value);
    }

    pub fn send(&self) {
        self.run(|store| async move {
            let _ = store.send_transaction().await;
        });
    }

    pub fn refresh(&self) {
        self.run(|store| async move {
            let _ = store.refresh_transactions().await;
        });
    }

    pub fn resync(&self) {
        self.run(|store| async move { store.resync().await });
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

pub fn provide_transaction_context(config: Config) -> TransactionContext {
    let context = TransactionContext::new(config);
    provide_context(context);

    context.initialize();
    on_accounts_changed(move || {
        log::info!("Wallet accounts changed, resynchronizing");
        context.resync();
    });

    context
}

pub fn use_transaction_context() -> TransactionContext {
    expect_context::<TransactionContext>()
}
