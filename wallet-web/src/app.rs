//! Krypt Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{Navbar, NoticeBanner};
use crate::pages::HomePage;
use crate::state::transactions::provide_transaction_context;
use crate::utils::constants::load_config;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid build configuration: {}", e);
            return view! { <ConfigErrorPage message=e.to_string()/> }.into_any();
        }
    };

    provide_transaction_context(config);

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <NoticeBanner/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </div>
        </Router>
    }
    .into_any()
}

#[component]
fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <div class="app-container centered">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 class="card-title">"Configuration Error"</h1>
                <p class="muted">{message}</p>
                <p class="muted">"Rebuild with CONTRACT_ADDRESS set to the deployed Transactions contract."</p>
            </div>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container centered">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
