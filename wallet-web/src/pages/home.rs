//! Landing page: send form, services and transaction history

use leptos::prelude::*;

use crate::components::{Footer, Services, Transactions, Welcome};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <div class="gradient-bg-welcome">
                <Welcome/>
            </div>
            <Services/>
            <Transactions/>
            <Footer/>
        </div>
    }
}
