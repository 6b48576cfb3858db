//! Dismissible banner for the latest store notice

use leptos::prelude::*;
use lib_core::NoticeLevel;

use crate::state::transactions::use_transaction_context;

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "notice notice-info",
        NoticeLevel::Warning => "notice notice-warning",
        NoticeLevel::Error => "notice notice-error",
    }
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_transaction_context();

    move || {
        ctx.notice.get().map(|notice| {
            view! {
                <div class=level_class(notice.level) role="status">
                    <span>{notice.message}</span>
                    <button class="notice-close" on:click=move |_| ctx.dismiss_notice()>"✕"</button>
                </div>
            }
        })
    }
}
