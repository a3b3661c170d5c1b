//! Date Step - pick the shoot or event date

use leptos::prelude::*;

use crate::components::booking_wizard::error_display::InlineError;
use crate::services::booking_wizard::{today, use_booking_context, BookingField};

/// Second step: preferred date, bounded below by today.
#[component]
pub fn DateStep() -> impl IntoView {
    let ctx = use_booking_context();
    // The input's min attribute matches the validator's lower bound.
    let min_date = today().format("%Y-%m-%d").to_string();

    view! {
        <div class="space-y-6 flex flex-col items-center justify-center h-full">
            <div class="text-center mb-10">
                <h3 class="font-serif text-3xl text-white mb-2">"When is the magic happening?"</h3>
                <p class="text-offwhite/50 font-sans tracking-wide">
                    "Select your preferred date for the shoot or event."
                </p>
            </div>

            <div class="w-full max-w-sm">
                <div class="relative">
                    <svg
                        class="absolute left-4 top-1/2 -translate-y-1/2 w-5 h-5 text-gold pointer-events-none"
                        fill="none"
                        stroke="currentColor"
                        viewBox="0 0 24 24"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z"
                        />
                    </svg>
                    <input
                        type="date"
                        class="w-full bg-obsidian border border-white/20 rounded-xl py-4 pl-12 pr-4 text-white
                               focus:outline-none focus:border-gold font-sans min-h-[60px]"
                        min=min_date
                        prop:value=move || ctx.draft().date
                        on:input=move |ev| ctx.set_field(BookingField::Date, &event_target_value(&ev))
                    />
                </div>
                <InlineError
                    message=Signal::derive(move || ctx.error_for(BookingField::Date))
                    centered=true
                />
            </div>
        </div>
    }
}
