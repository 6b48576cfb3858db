//! Contract history, newest first

use leptos::prelude::*;
use shared::utils::{explorer_address_url, shorten_address};
use shared::TransactionRecord;

use crate::services::giphy::fetch_keyword_gif;
use crate::state::transactions::use_transaction_context;
use crate::utils::format::format_eth;

/// Shown when no keyword image is available
const FALLBACK_GIF: &str = "https://media.giphy.com/media/3o7btPCcdNniyf0ArS/giphy.gif";

#[component]
fn TransactionCard(record: TransactionRecord) -> impl IntoView {
    let ctx = use_transaction_context();
    let explorer = ctx.config.with_value(|config| config.explorer_base_url.clone());
    let api_key = ctx.config.with_value(|config| config.giphy_api_key.clone());

    let gif = RwSignal::new(None::<String>);
    if let Some(key) = api_key {
        let keyword = record.keyword.clone();
        leptos::task::spawn_local(async move {
            // The card may be gone by the time the lookup finishes
            let _ = gif.try_set(fetch_keyword_gif(&key, &keyword).await);
        });
    }

    let from_url = explorer_address_url(&explorer, &record.address_from);
    let to_url = explorer_address_url(&explorer, &record.address_to);
    let message = (!record.message.is_empty()).then(|| record.message.clone());

    view! {
        <div class="transaction-card">
            <div class="transaction-details">
                <a href=from_url target="_blank" rel="noreferrer">
                    <p>"From: " {shorten_address(&record.address_from)}</p>
                </a>
                <a href=to_url target="_blank" rel="noreferrer">
                    <p>"To: " {shorten_address(&record.address_to)}</p>
                </a>
                <p>"Amount: " {format_eth(record.amount)}</p>
                {message.map(|message| view! { <p>"Message: " {message}</p> })}
            </div>
            <img
                class="transaction-gif"
                alt=record.keyword.clone()
                src=move || gif.get().unwrap_or_else(|| FALLBACK_GIF.to_string())
            />
            <div class="transaction-timestamp">
                <p>{record.timestamp.clone()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn Transactions() -> impl IntoView {
    let ctx = use_transaction_context();

    // Records are append-only on chain, so the index is a stable key
    let newest_first = move || {
        ctx.state.with(|state| {
            state
                .transactions
                .iter()
                .cloned()
                .enumerate()
                .rev()
                .collect::<Vec<_>>()
        })
    };

    let count_label = move || {
        ctx.state
            .with(|state| state.transaction_count)
            .map(|count| format!("{} transfers recorded", count))
    };

    view! {
        <section class="transactions">
            <Show
                when=move || ctx.is_connected()
                fallback=|| view! {
                    <h3 class="section-title">"Connect your account to see the latest transactions"</h3>
                }
            >
                <h3 class="section-title">"Latest Transactions"</h3>
                <button class="btn btn-outline" type="button" on:click=move |_| ctx.refresh()>
                    "Refresh"
                </button>
            </Show>
            <p class="muted" style="text-align: center;">{count_label}</p>

            <div class="transactions-list">
                <For
                    each=newest_first
                    key=|(index, _)| *index
                    children=|(_, record)| view! { <TransactionCard record=record/> }
                />
            </div>
        </section>
    }
}
