//! Pricing tiers per service category and the FAQ accordion.

use leptos::prelude::*;

use crate::components::pricing_card::PricingCard;
use crate::content::{pricing_for, FAQS};
use crate::services::booking_wizard::ServiceType;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let active_service = RwSignal::new(ServiceType::Wedding);

    view! {
        <div class="pt-32 pb-24 bg-obsidian min-h-screen">
            <div class="max-w-7xl mx-auto px-6">
                <header class="text-center mb-16">
                    <p class="text-gold text-xs uppercase tracking-widest font-sans mb-3">"Investment"</p>
                    <h1 class="font-serif text-5xl text-white">"Services & Pricing"</h1>
                </header>

                <div class="flex flex-wrap justify-center gap-2 mb-16">
                    {ServiceType::all().iter().map(|service| {
                        let service = *service;
                        view! {
                            <button
                                type="button"
                                class=move || format!(
                                    "px-6 py-2 text-xs uppercase tracking-widest font-sans transition-colors {}",
                                    if active_service.get() == service {
                                        "bg-gold text-obsidian"
                                    } else {
                                        "text-offwhite/50 hover:text-white border border-white/10"
                                    }
                                )
                                on:click=move |_| active_service.set(service)
                            >
                                {service.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-32">
                    {move || {
                        pricing_for(active_service.get())
                            .iter()
                            .map(|tier| view! { <PricingCard tier=tier /> })
                            .collect_view()
                    }}
                </div>

                <FaqAccordion />
            </div>
        </div>
    }
}

#[component]
fn FaqAccordion() -> impl IntoView {
    // One entry open at a time.
    let open_index = RwSignal::new(None::<usize>);

    view! {
        <section class="max-w-3xl mx-auto">
            <h2 class="font-serif text-3xl text-white text-center mb-12">"Common Questions"</h2>
            <div class="divide-y divide-white/10 border-y border-white/10">
                {FAQS.iter().enumerate().map(|(index, entry)| {
                    let is_open = Signal::derive(move || open_index.get() == Some(index));
                    view! {
                        <div>
                            <button
                                type="button"
                                class="w-full flex items-center justify-between py-6 text-left group"
                                on:click=move |_| {
                                    open_index.update(|open| {
                                        *open = if *open == Some(index) { None } else { Some(index) };
                                    })
                                }
                            >
                                <span class="font-serif text-lg text-white group-hover:text-gold transition-colors pr-6">
                                    {entry.question}
                                </span>
                                <span class=move || format!(
                                    "text-gold transition-transform shrink-0 {}",
                                    if is_open.get() { "rotate-45" } else { "" }
                                )>
                                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4" />
                                    </svg>
                                </span>
                            </button>
                            <Show when=move || is_open.get()>
                                <p class="pb-6 text-offwhite/60 text-sm leading-relaxed pr-12">
                                    {entry.answer}
                                </p>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
