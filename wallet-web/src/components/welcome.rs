//! Hero section with the wallet card and the send form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::utils::shorten_address;
use shared::FormField;

use crate::components::Loader;
use crate::state::transactions::use_transaction_context;

const FEATURES: [&str; 6] = [
    "Reliability",
    "Security",
    "Ethereum",
    "Web 3.0",
    "Low fees",
    "Blockchain",
];

#[component]
fn FormInput(
    field: FormField,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let ctx = use_transaction_context();

    view! {
        <input
            class="form-input"
            name=field.name()
            type=input_type
            step=(input_type == "number").then_some("0.0001")
            placeholder=placeholder
            prop:value=move || ctx.state.with(|state| state.form.get(field).to_string())
            on:input=move |ev| ctx.update_field(field, event_target_value(&ev))
        />
    }
}

#[component]
pub fn Welcome() -> impl IntoView {
    let ctx = use_transaction_context();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Incomplete forms are ignored
        if ctx.state.with(|state| state.form.is_complete()) {
            ctx.send();
        }
    };

    let card_address = move || {
        if ctx.is_connected() {
            shorten_address(&ctx.account())
        } else {
            "Address".to_string()
        }
    };

    view! {
        <section class="welcome">
            <div class="welcome-intro">
                <h1 class="welcome-title">"Send Crypto"<br/>"across the world"</h1>
                <p class="muted">
                    "Explore the crypto world. Buy and sell cryptocurrencies easily on Krypt."
                </p>
                <Show when=move || !ctx.is_connected()>
                    <button class="btn btn-primary" type="button" on:click=move |_| ctx.connect()>
                        "Connect Wallet"
                    </button>
                </Show>
                <div class="feature-grid">
                    {FEATURES.iter().map(|feature| view! { <div class="feature-cell">{*feature}</div> }).collect_view()}
                </div>
            </div>

            <div class="welcome-form">
                <div class="eth-card">
                    <span class="eth-card-address">{card_address}</span>
                    <span class="eth-card-title">"Ethereum"</span>
                </div>

                <form class="card blue-glass" on:submit=on_submit>
                    <FormInput field=FormField::AddressTo placeholder="Address To"/>
                    <FormInput field=FormField::Amount placeholder="Amount (ETH)" input_type="number"/>
                    <FormInput field=FormField::Keyword placeholder="Keyword (Gif)"/>
                    <FormInput field=FormField::Message placeholder="Enter Message"/>

                    <div class="form-divider"></div>

                    <Show
                        when=move || !ctx.is_loading()
                        fallback=|| view! { <Loader/> }
                    >
                        <button class="btn btn-outline" type="submit">"Send now"</button>
                    </Show>
                </form>
            </div>
        </section>
    }
}
