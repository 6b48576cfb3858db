use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <div class="loader-spinner"></div>
        </div>
    }
}
