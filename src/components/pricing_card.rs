use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::PricingTier;
use crate::utils::formatting::format_price;

#[component]
pub fn PricingCard(tier: &'static PricingTier) -> impl IntoView {
    let card_class = if tier.is_popular {
        "relative border border-gold bg-white/[0.03] p-10 flex flex-col"
    } else {
        "relative border border-white/10 p-10 flex flex-col hover:border-white/30 transition-colors"
    };

    view! {
        <div class=card_class>
            <Show when=move || tier.is_popular>
                <span class="absolute -top-3 left-1/2 -translate-x-1/2 bg-gold text-obsidian
                             text-[10px] uppercase tracking-widest px-4 py-1 font-sans">
                    "Most Requested"
                </span>
            </Show>

            <p class="text-xs uppercase tracking-widest text-offwhite/50 font-sans">{tier.tier}</p>
            <p class="font-serif text-4xl text-white mt-4">{format_price(tier.price)}</p>
            <p class="text-offwhite/40 text-sm mt-1 mb-8">{tier.duration}</p>

            <ul class="space-y-3 flex-1">
                {tier.features.iter().map(|feature| view! {
                    <li class="flex items-start gap-3 text-offwhite/70 text-sm">
                        <svg class="w-4 h-4 text-gold mt-0.5 shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
                        </svg>
                        {*feature}
                    </li>
                }).collect_view()}
            </ul>

            <A
                href="/booking"
                attr:class=if tier.is_popular {
                    "mt-10 block text-center py-3 bg-gold text-obsidian text-xs uppercase tracking-widest
                     font-sans hover:bg-gold/90 transition-colors"
                } else {
                    "mt-10 block text-center py-3 border border-white/20 text-white text-xs uppercase
                     tracking-widest font-sans hover:border-gold hover:text-gold transition-colors"
                }
            >
                "Reserve"
            </A>
        </div>
    }
}
