//! Review Step - read-only summary before submission

use leptos::prelude::*;

use crate::services::booking_wizard::use_booking_context;
use crate::utils::formatting::format_display_date;

/// A single label/value row of the summary card.
#[component]
fn ReviewRow(
    label: &'static str,
    value: Signal<String>,
    #[prop(default = false)] last: bool,
) -> impl IntoView {
    view! {
        <div class=move || format!(
            "grid grid-cols-2 {}",
            if last { "" } else { "border-b border-white/5 pb-4" }
        )>
            <span class="text-gold text-sm tracking-widest uppercase">{label}</span>
            <span class="text-white font-serif whitespace-pre-line">{move || value.get()}</span>
        </div>
    }
}

/// Fourth step: confirm the accumulated draft. No new input; the only
/// action is the Confirm button in the wizard footer.
#[component]
pub fn ReviewStep() -> impl IntoView {
    let ctx = use_booking_context();

    let service = Signal::derive(move || {
        ctx.draft()
            .service_type
            .map(|s| s.label().to_string())
            .unwrap_or_default()
    });
    let date = Signal::derive(move || format_display_date(&ctx.draft().date));
    let name = Signal::derive(move || ctx.draft().name);
    let venue = Signal::derive(move || ctx.draft().venue);
    let contact = Signal::derive(move || {
        let draft = ctx.draft();
        format!("{}\n{}", draft.email, draft.phone)
    });

    view! {
        <div class="space-y-8">
            <div class="text-center mb-10">
                <h3 class="font-serif text-3xl text-white mb-2">"Review & Request"</h3>
                <p class="text-offwhite/50 font-sans tracking-wide">
                    "Please confirm your details before submitting."
                </p>
            </div>

            <div class="bg-obsidian border border-gold/30 rounded-xl p-8 max-w-2xl mx-auto space-y-6">
                <ReviewRow label="Service" value=service />
                <ReviewRow label="Date" value=date />
                <ReviewRow label="Client Name" value=name />
                <ReviewRow label="Venue" value=venue />
                <ReviewRow label="Contact" value=contact last=true />
            </div>
        </div>
    }
}
