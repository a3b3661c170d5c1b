//! Success Step - terminal confirmation screen

use leptos::prelude::*;
use leptos_router::components::A;

use crate::services::booking_wizard::use_booking_context;

/// Terminal step, reachable only through a successful submission.
#[component]
pub fn SuccessStep() -> impl IntoView {
    let ctx = use_booking_context();
    let name = Signal::derive(move || ctx.draft().name);

    view! {
        <div class="flex flex-col items-center justify-center text-center h-full py-16">
            <div class="w-24 h-24 bg-gold/20 rounded-full flex items-center justify-center mb-8">
                <svg class="w-12 h-12 text-gold" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"
                    />
                </svg>
            </div>
            <h3 class="font-serif text-4xl text-white mb-4">"Request Received"</h3>
            <p class="text-offwhite/70 font-sans max-w-md mx-auto mb-8 leading-relaxed">
                {move || format!(
                    "Thank you, {}. Your booking inquiry has been successfully sent. \
                     I will review your details and be in touch within 24 hours to \
                     confirm availability and discuss next steps.",
                    name.get()
                )}
            </p>
            <A
                href="/"
                attr:class="px-8 py-3 border border-gold text-gold hover:bg-gold hover:text-obsidian
                            transition-colors text-sm tracking-widest uppercase font-sans"
            >
                "Return Home"
            </A>
        </div>
    }
}
