//! Service Step - choose which of the four services to book

use leptos::prelude::*;

use crate::components::booking_wizard::error_display::InlineError;
use crate::services::booking_wizard::{use_booking_context, BookingField, ServiceType};

/// Camera-style glyphs for the service cards, one per service.
fn service_icon(service: ServiceType) -> &'static str {
    match service {
        ServiceType::Wedding => "M3 9a2 2 0 012-2h.93a2 2 0 001.664-.89l.812-1.22A2 2 0 0110.07 4h3.86a2 2 0 011.664.89l.812 1.22A2 2 0 0018.07 7H19a2 2 0 012 2v9a2 2 0 01-2 2H5a2 2 0 01-2-2V9z M15 13a3 3 0 11-6 0 3 3 0 016 0z",
        ServiceType::Fashion => "M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z",
        ServiceType::Events => "M15 10l4.553-2.276A1 1 0 0121 8.618v6.764a1 1 0 01-1.447.894L15 14M5 18h8a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v8a2 2 0 002 2z",
        ServiceType::Commercial => "M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
    }
}

/// First step: pick the primary service.
#[component]
pub fn ServiceStep() -> impl IntoView {
    let ctx = use_booking_context();

    view! {
        <div class="space-y-6">
            <div class="text-center mb-10">
                <h3 class="font-serif text-3xl text-white mb-2">"What are we creating?"</h3>
                <p class="text-offwhite/50 font-sans tracking-wide">
                    "Select the primary service you are interested in."
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {ServiceType::all().into_iter().map(|service| {
                    let is_selected = Signal::derive(move || {
                        ctx.draft().service_type == Some(service)
                    });

                    view! {
                        <button
                            type="button"
                            class=move || format!(
                                "p-6 rounded-xl border cursor-pointer transition-all duration-300 flex items-center text-left {}",
                                if is_selected.get() {
                                    "bg-gold/10 border-gold"
                                } else {
                                    "bg-obsidian border-white/10 hover:border-gold/50"
                                }
                            )
                            on:click=move |_| ctx.set_field(BookingField::Service, service.id())
                        >
                            <svg
                                class=move || format!(
                                    "w-6 h-6 mr-4 shrink-0 {}",
                                    if is_selected.get() { "text-gold" } else { "text-white/50" }
                                )
                                fill="none"
                                stroke="currentColor"
                                viewBox="0 0 24 24"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d=service_icon(service)
                                />
                            </svg>
                            <span class=move || format!(
                                "font-serif text-xl {}",
                                if is_selected.get() { "text-gold" } else { "text-white" }
                            )>
                                {service.label()}
                            </span>
                        </button>
                    }
                }).collect_view()}
            </div>

            <InlineError
                message=Signal::derive(move || ctx.error_for(BookingField::Service))
                centered=true
            />
        </div>
    }
}
