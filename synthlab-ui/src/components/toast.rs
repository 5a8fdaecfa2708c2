//! Toast Notification Component
//!
//! Shows success and error notices without blocking the page.

use leptos::*;
use synthlab::NoticeLevel;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastMessage message=msg level=NoticeLevel::Success />
                })
            }}

            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage message=msg level=NoticeLevel::Error />
                })
            }}
        </div>
    }
}

fn toast_style(level: NoticeLevel) -> (&'static str, &'static str) {
    match level {
        NoticeLevel::Success => ("✓", "bg-green-600"),
        NoticeLevel::Error => ("✕", "bg-red-600"),
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    level: NoticeLevel,
) -> impl IntoView {
    let (icon, bg_class) = toast_style(level);

    view! {
        <div
            role="status"
            class=format!(
                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 transform transition-all duration-300 ease-out animate-slide-in",
                bg_class
            )
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
