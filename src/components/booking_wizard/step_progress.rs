//! Step Progress Rail
//!
//! Numbered markers for the four input steps with a fill bar behind them.
//! The terminal Success step has no marker; the rail is hidden once it is
//! reached.

use leptos::prelude::*;

use crate::services::booking_wizard::{use_booking_context, WizardStep};

fn check_icon() -> impl IntoView {
    view! {
        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="3" d="M5 13l4 4L19 7" />
        </svg>
    }
}

/// One numbered circle plus its label.
#[component]
fn StepMarker(step: WizardStep) -> impl IntoView {
    let ctx = use_booking_context();
    let is_active = Signal::derive(move || ctx.current_step().index() >= step.index());
    let is_passed = Signal::derive(move || ctx.current_step().index() > step.index());

    view! {
        <div class="flex flex-col items-center">
            <div class=move || format!(
                "w-10 h-10 rounded-full flex items-center justify-center text-sm font-sans mb-2
                 transition-colors duration-500 shadow-xl {}",
                if is_active.get() {
                    "bg-gold text-obsidian border-2 border-obsidian"
                } else {
                    "bg-obsidian border border-white/20 text-white/50"
                }
            )>
                {move || {
                    if is_passed.get() {
                        check_icon().into_any()
                    } else {
                        view! { <span>{step.index()}</span> }.into_any()
                    }
                }}
            </div>
            <span class=move || format!(
                "text-xs uppercase tracking-widest font-sans {}",
                if is_active.get() { "text-gold" } else { "text-offwhite/50" }
            )>
                {step.label()}
            </span>
        </div>
    }
}

/// Progress rail across the top of the wizard card.
#[component]
pub fn StepProgress() -> impl IntoView {
    let ctx = use_booking_context();
    let rail = WizardStep::rail();
    let segments = rail.len() - 1;

    // Width of the gold fill between the first and current marker.
    let fill_percent = Signal::derive(move || {
        let index = ctx.current_step().index().min(segments + 1);
        ((index - 1) as f32 / segments as f32 * 100.0).min(100.0)
    });

    view! {
        <div class="px-8 pt-10 pb-6 border-b border-white/10 bg-black/20">
            <div class="flex justify-between relative">
                <div class="absolute top-1/2 left-0 w-full h-1 bg-white/10 -translate-y-1/2 -z-10 rounded">
                    <div
                        class="h-full bg-gold rounded transition-all duration-500"
                        style=move || format!("width: {}%", fill_percent.get())
                    />
                </div>

                {rail.iter().map(|step| {
                    let step = *step;
                    view! { <StepMarker step=step /> }
                }).collect_view()}
            </div>
        </div>
    }
}
