//! Page footer

use leptos::prelude::*;

const FOOTER_LINKS: [&str; 4] = ["Market", "Exchange", "Tutorials", "Wallets"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-row">
                <span class="nav-title">"Krypt"</span>
                <ul class="footer-links">
                    {FOOTER_LINKS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            </div>
            <p class="muted" style="text-align: center;">"Come join us and hear for the unexpected miracle"</p>
            <div class="footer-divider"></div>
            <div class="footer-row muted">
                <span>"@krypt"</span>
                <span>"All rights reserved"</span>
            </div>
        </footer>
    }
}
