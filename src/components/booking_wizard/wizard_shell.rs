//! Wizard Shell Component
//!
//! Main container for the booking wizard: progress rail, current step view,
//! submission error banner, and the back/next/confirm footer. Provides the
//! booking context, so the draft lives exactly as long as this component.

use leptos::ev;
use leptos::prelude::*;

use crate::services::booking_wizard::{
    provide_booking_context, submit_action, use_booking_context, WizardStep,
};

use super::error_display::ErrorBanner;
use super::step_progress::StepProgress;
use super::steps::{DateStep, DetailsStep, ReviewStep, ServiceStep, SuccessStep};

/// Footer with back/next/confirm controls. Confirm is disabled while a
/// submission is in flight so a draft can never be sent twice.
#[component]
fn WizardNavigation() -> impl IntoView {
    let ctx = use_booking_context();

    let is_first_step = Signal::derive(move || ctx.current_step() == WizardStep::Service);
    let at_review = Signal::derive(move || ctx.current_step() == WizardStep::Review);

    let handle_back = move |_: ev::MouseEvent| {
        ctx.retreat();
    };

    let handle_next = move |_: ev::MouseEvent| {
        ctx.advance();
    };

    let handle_confirm = {
        let submit = submit_action(ctx);
        move |_: ev::MouseEvent| {
            submit();
        }
    };

    view! {
        <div class="px-8 py-6 border-t border-white/10 bg-black/20 flex justify-between items-center z-10">
            {move || {
                if is_first_step.get() {
                    view! { <div></div> }.into_any()
                } else {
                    view! {
                        <button
                            type="button"
                            class="flex items-center space-x-2 text-offwhite/50 hover:text-white
                                   transition-colors uppercase tracking-widest text-xs"
                            on:click=handle_back
                        >
                            <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                            </svg>
                            <span>"Back"</span>
                        </button>
                    }.into_any()
                }
            }}

            {move || {
                if at_review.get() {
                    view! {
                        <button
                            type="button"
                            class="px-8 py-3 bg-gold text-obsidian font-medium tracking-widest uppercase text-xs
                                   hover:bg-white transition-colors flex items-center shadow-lg shadow-gold/20
                                   disabled:opacity-50"
                            disabled=move || ctx.is_submitting()
                            on:click=handle_confirm.clone()
                        >
                            {move || if ctx.is_submitting() { "Submitting..." } else { "Confirm Request" }}
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button
                            type="button"
                            class="px-8 py-3 bg-gold text-obsidian font-medium tracking-widest uppercase text-xs
                                   hover:bg-white transition-colors flex items-center shadow-lg shadow-gold/20"
                            on:click=handle_next
                        >
                            "Next Step"
                            <svg class="w-4 h-4 ml-2" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                            </svg>
                        </button>
                    }.into_any()
                }
            }}
        </div>
    }
}

/// Renders the view for the current step.
#[component]
fn StepContent() -> impl IntoView {
    let ctx = use_booking_context();

    view! {
        {move || match ctx.current_step() {
            WizardStep::Service => view! { <ServiceStep /> }.into_any(),
            WizardStep::Date => view! { <DateStep /> }.into_any(),
            WizardStep::Details => view! { <DetailsStep /> }.into_any(),
            WizardStep::Review => view! { <ReviewStep /> }.into_any(),
            WizardStep::Success => view! { <SuccessStep /> }.into_any(),
        }}
    }
}

/// The booking wizard card.
#[component]
pub fn BookingWizard() -> impl IntoView {
    provide_booking_context();
    let ctx = use_booking_context();

    let is_success = Signal::derive(move || ctx.current_step() == WizardStep::Success);

    let dismiss_error = Callback::new(move |_: ()| {
        ctx.state.update(|s| s.submission_error = None);
    });

    view! {
        <div class="w-full max-w-4xl mx-auto bg-white/5 border border-white/10 rounded-2xl
                    backdrop-blur-md overflow-hidden relative min-h-[600px] flex flex-col">
            <Show when=move || !is_success.get()>
                <StepProgress />
            </Show>

            <div class="flex-1 p-8 md:p-12 relative overflow-hidden flex flex-col justify-center">
                <StepContent />
            </div>

            <ErrorBanner
                message=Signal::derive(move || ctx.submission_error())
                on_dismiss=dismiss_error
            />

            <Show when=move || !is_success.get()>
                <WizardNavigation />
            </Show>
        </div>
    }
}
