//! # Transaction Store
//!
//! Orchestrates the wallet gateway and the contract client, owns the
//! UI-observable [`StoreState`] and exposes the actions the UI invokes.
//!
//! ## State Machine
//!
//! ```text
//! Disconnected --connect/check--> Connected --submit--> Submitting
//!                                     ^                     |
//!                                     +----confirmed/failed-+
//! ```
//!
//! ## Reporting
//!
//! Every action reports its failures through the [`Notifier`] (plus the log)
//! before returning, so the UI may ignore the returned `Result`.
//!
//! ## Runtime
//!
//! Single-threaded: state sits in a `RefCell` that is never borrowed across an
//! await, and listeners run synchronously after each mutation.

mod state;

pub use state::{to_record, ConnectionPhase, StoreState};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shared::{FormData, FormField};

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::service::{
    ContractClient, CountCache, NativeTransfer, Notice, Notifier, PendingTransaction,
    RecordRequest, WalletGateway,
};
use crate::validation::validate_transfer;

type Listener = Box<dyn Fn(&StoreState)>;

pub struct TransactionStore<W, C> {
    config: Config,
    wallet: W,
    contract: C,
    cache: Rc<dyn CountCache>,
    notifier: Rc<dyn Notifier>,
    format_timestamp: Box<dyn Fn(u64) -> String>,
    state: RefCell<StoreState>,
    listeners: RefCell<Vec<Listener>>,
    in_flight: Cell<bool>,
}

impl<W: WalletGateway, C: ContractClient> TransactionStore<W, C> {
    pub fn new(
        config: Config,
        wallet: W,
        contract: C,
        cache: Rc<dyn CountCache>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let state = StoreState {
            transaction_count: cache.load(),
            ..Default::default()
        };

        Self {
            config,
            wallet,
            contract,
            cache,
            notifier,
            format_timestamp: Box::new(shared::utils::format_timestamp),
            state: RefCell::new(state),
            listeners: RefCell::new(Vec::new()),
            in_flight: Cell::new(false),
        }
    }

    /// Replace the timestamp renderer used for transaction records.
    pub fn with_timestamp_formatter(mut self, format: impl Fn(u64) -> String + 'static) -> Self {
        self.format_timestamp = Box::new(format);
        self
    }

    /// Run `listener` after every state change.
    pub fn subscribe(&self, listener: impl Fn(&StoreState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Best-effort startup: pick up an already-authorized account and cache the
    /// transaction count. Never fails; problems become warnings.
    pub async fn initialize(&self) {
        if !self.wallet.is_available() {
            self.warn("Wallet check skipped", &StoreError::ProviderUnavailable);
            return;
        }

        if let Err(err) = self.check_connected_account().await {
            self.warn("Wallet check failed", &err);
        }

        if let Err(err) = self.cache_transaction_count().await {
            self.warn("Could not read transaction count", &err);
        }
    }

    /// Prompt the wallet for account access.
    pub async fn connect_wallet(&self) -> Result<()> {
        let result = self.request_account().await;
        self.reported(result)
    }

    /// Forget the active account locally.
    pub fn disconnect(&self) {
        self.update(|state| {
            state.account.clear();
            state.phase = ConnectionPhase::Disconnected;
            state.transactions.clear();
        });
    }

    pub fn update_form_field(&self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        self.update(|state| state.form.set(field, value));
    }

    /// Submit the current form: native transfer, then the contract record,
    /// then wait for confirmation and resynchronize.
    pub async fn send_transaction(&self) -> Result<()> {
        if self.in_flight.replace(true) {
            let err = StoreError::Busy;
            self.notifier.notify(Notice::warning(err.user_message()));
            return Err(err);
        }

        let result = self.submit().await;
        self.in_flight.set(false);
        self.reported(result)
    }

    /// Replace the transaction list with the contract's full history.
    pub async fn refresh_transactions(&self) -> Result<()> {
        let result = self.load_transactions().await;
        self.reported(result)
    }

    /// Re-read account, history and count from the chain, keeping form state.
    pub async fn resync(&self) {
        match self.wallet.accounts().await {
            Ok(accounts) => {
                let account = accounts.into_iter().next().unwrap_or_default();
                self.update(|state| {
                    if state.phase != ConnectionPhase::Submitting {
                        state.phase = if account.is_empty() {
                            ConnectionPhase::Disconnected
                        } else {
                            ConnectionPhase::Connected
                        };
                    }
                    state.account = account;
                });
            }
            Err(err) => self.warn("Could not read wallet accounts", &err),
        }

        let connected = self.state.borrow().is_connected();
        if connected {
            if let Err(err) = self.load_transactions().await {
                self.warn("Could not load transactions", &err);
            }
        }

        if let Err(err) = self.cache_transaction_count().await {
            self.warn("Could not read transaction count", &err);
        }
    }

    // ------------------------------------------------------------------
    // Steps
    // ------------------------------------------------------------------

    async fn check_connected_account(&self) -> Result<()> {
        let accounts = self.wallet.accounts().await?;
        match accounts.into_iter().next() {
            Some(account) => {
                log::info!("Found authorized account {}", account);
                self.set_account(account);
                if let Err(err) = self.load_transactions().await {
                    self.warn("Could not load transactions", &err);
                }
            }
            None => log::info!("No authorized accounts found"),
        }
        Ok(())
    }

    async fn request_account(&self) -> Result<()> {
        if !self.wallet.is_available() {
            return Err(StoreError::ProviderUnavailable);
        }

        let accounts = self.wallet.request_access().await?;
        let account = accounts.into_iter().next().ok_or(StoreError::UserRejected)?;
        log::info!("Connected account {}", account);
        self.set_account(account);

        if let Err(err) = self.load_transactions().await {
            self.warn("Could not load transactions", &err);
        }
        Ok(())
    }

    async fn submit(&self) -> Result<()> {
        if !self.wallet.is_available() {
            return Err(StoreError::ProviderUnavailable);
        }

        let (account, form) = {
            let state = self.state.borrow();
            (state.account.clone(), state.form.clone())
        };
        let transfer = validate_transfer(&account, &form, self.config.decimals)?;

        let native = NativeTransfer {
            from: transfer.from,
            to: transfer.to,
            value: transfer.value,
            gas: self.config.gas_limit,
        };
        let native_tx = self.wallet.send_native_transfer(&native).await?;
        log::info!("Native transfer sent - {}", native_tx);

        let request = RecordRequest {
            from: transfer.from,
            to: transfer.to,
            value: transfer.value,
            message: transfer.message,
            keyword: transfer.keyword,
        };
        let pending = self
            .record(&request)
            .await
            .map_err(|source| StoreError::PartialTransfer {
                native_tx,
                source: Box::new(source),
            })?;

        self.update(|state| {
            state.is_loading = true;
            state.phase = ConnectionPhase::Submitting;
        });
        log::info!("Loading - {}", pending.hash());

        let confirmation = pending.wait().await;

        self.update(|state| {
            state.is_loading = false;
            state.phase = ConnectionPhase::Connected;
        });

        let confirmation = match confirmation {
            Ok(confirmation) => confirmation,
            Err(err) => {
                self.resync().await;
                return Err(err);
            }
        };
        log::info!("Success - {}", confirmation.hash);

        if let Err(err) = self.cache_transaction_count().await {
            self.warn("Could not read transaction count", &err);
        }
        self.update(|state| state.form = FormData::default());
        self.notifier
            .notify(Notice::info(format!("Transfer confirmed: {}", confirmation.hash)));

        self.resync().await;
        Ok(())
    }

    async fn record(&self, request: &RecordRequest) -> Result<C::Pending> {
        let mut attempt = 0;
        loop {
            match self.contract.add_to_blockchain(request).await {
                Ok(pending) => return Ok(pending),
                Err(err) if attempt < self.config.record_retries && err.is_retryable() => {
                    attempt += 1;
                    log::warn!("Recording transfer failed ({}), retry {}", err, attempt);
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn load_transactions(&self) -> Result<()> {
        let raw = self.contract.get_all_transactions().await?;
        let records = raw
            .iter()
            .map(|item| to_record(item, self.config.decimals, &*self.format_timestamp))
            .collect::<Vec<_>>();
        log::debug!("Loaded {} transactions", records.len());
        self.update(|state| state.transactions = records);
        Ok(())
    }

    async fn cache_transaction_count(&self) -> Result<()> {
        let count = self.contract.get_transaction_count().await?;
        self.update(|state| state.transaction_count = Some(count));
        self.cache.store(count)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn set_account(&self, account: String) {
        self.update(|state| {
            state.account = account;
            if state.phase == ConnectionPhase::Disconnected {
                state.phase = ConnectionPhase::Connected;
            }
        });
    }

    fn update(&self, apply: impl FnOnce(&mut StoreState)) {
        apply(&mut self.state.borrow_mut());
        let state = self.state.borrow();
        for listener in self.listeners.borrow().iter() {
            listener(&state);
        }
    }

    fn reported<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            log::error!("{}", err);
            self.notifier.notify(Notice::from_error(err));
        }
        result
    }

    fn warn(&self, context: &str, err: &StoreError) {
        log::warn!("{}: {}", context, err);
        self.notifier
            .notify(Notice::warning(format!("{}: {}", context, err.user_message())));
    }
}
