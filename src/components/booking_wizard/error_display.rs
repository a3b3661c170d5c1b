//! Error display components for the booking wizard

use leptos::prelude::*;

/// Per-field validation message, shown under the offending input.
#[component]
pub fn InlineError(
    message: Signal<Option<String>>,
    #[prop(default = false)] centered: bool,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class=move || format!(
                "text-red-400 text-xs mt-2 {}",
                if centered { "text-center" } else { "" }
            )>
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Session-level banner for a failed submission, dismissible so the user
/// can retry from the same step.
#[component]
pub fn ErrorBanner(message: Signal<Option<String>>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="mx-8 mb-4 p-4 bg-red-900/30 border border-red-800 rounded-lg flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <svg class="w-5 h-5 text-red-400 shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z" />
                    </svg>
                    <span class="text-red-400 text-sm">
                        {move || message.get().unwrap_or_default()}
                    </span>
                </div>
                <button
                    type="button"
                    class="text-red-400 hover:text-red-300 transition-colors"
                    on:click=move |_| on_dismiss.run(())
                >
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                    </svg>
                </button>
            </div>
        </Show>
    }
}
