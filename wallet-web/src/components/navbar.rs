//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::shorten_address;

use crate::state::transactions::use_transaction_context;

const NAV_ITEMS: [&str; 4] = ["Market", "Exchange", "Tutorials", "Wallets"];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_transaction_context();
    let (menu_open, set_menu_open) = signal(false);

    let account_button = move || {
        if ctx.is_connected() {
            let label = shorten_address(&ctx.account());
            view! {
                <li class="nav-button" title="Disconnect" on:click=move |_| ctx.disconnect()>
                    {label}
                </li>
            }
            .into_any()
        } else {
            view! {
                <li class="nav-button" on:click=move |_| ctx.connect()>"Login"</li>
            }
            .into_any()
        }
    };

    view! {
        <nav>
            <div class="nav-row">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Krypt"</span>
                </A>
                <ul class="nav-items">
                    {NAV_ITEMS.iter().map(|item| view! { <li class="nav-item">{*item}</li> }).collect_view()}
                    {account_button}
                </ul>
                <button class="nav-toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <ul class="nav-mobile">
                    {NAV_ITEMS.iter().map(|item| view! { <li class="nav-item">{*item}</li> }).collect_view()}
                </ul>
            </Show>
        </nav>
    }
}
