//! Toast stack rendered above all page content.

use leptos::prelude::*;

use crate::services::notification::{use_notification_state, Notification, ToastKind};

#[component]
pub fn ToastStack() -> impl IntoView {
    let notifications = use_notification_state();

    view! {
        <div class="fixed bottom-6 right-6 z-[100] flex flex-col gap-3 w-80">
            {move || {
                notifications
                    .notifications
                    .get()
                    .into_iter()
                    .map(|toast| view! { <Toast toast=toast /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn Toast(toast: Notification) -> impl IntoView {
    let notifications = use_notification_state();
    let id = toast.id;

    let accent = match toast.kind {
        ToastKind::Success => "border-gold",
        ToastKind::Error => "border-red-500",
        ToastKind::Info => "border-white/30",
    };

    view! {
        <div class=format!(
            "bg-obsidian/95 backdrop-blur border-l-2 {accent} shadow-xl px-5 py-4 flex items-start gap-3"
        )>
            <div class="flex-1">
                <p class="text-white text-sm font-medium">{toast.title}</p>
                {toast.message.map(|message| view! {
                    <p class="text-offwhite/60 text-xs mt-1">{message}</p>
                })}
            </div>
            <button
                type="button"
                class="text-offwhite/40 hover:text-white transition-colors"
                on:click=move |_| notifications.remove(id)
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}
