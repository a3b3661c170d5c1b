//! Details Step - contact and event information

use leptos::prelude::*;

use crate::components::booking_wizard::error_display::InlineError;
use crate::services::booking_wizard::{use_booking_context, BookingField};

/// A labelled text input wired to one draft field.
#[component]
fn DetailField(
    label: &'static str,
    field: BookingField,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let ctx = use_booking_context();

    view! {
        <div>
            <label class="block text-xs uppercase tracking-widest text-gold mb-2">{label}</label>
            <input
                type=input_type
                class="w-full bg-obsidian border border-white/10 rounded-lg p-4 text-white
                       focus:outline-none focus:border-gold transition-colors"
                placeholder=placeholder
                prop:value=move || ctx.draft().text(field).to_string()
                on:input=move |ev| ctx.set_field(field, &event_target_value(&ev))
            />
            <InlineError
                message=Signal::derive(move || ctx.error_for(field))
                centered=false
            />
        </div>
    }
}

/// Third step: name, email, phone, venue, plus a free-text vision field.
#[component]
pub fn DetailsStep() -> impl IntoView {
    let ctx = use_booking_context();

    view! {
        <div class="space-y-8">
            <div class="text-center mb-10">
                <h3 class="font-serif text-3xl text-white mb-2">"The finer details"</h3>
                <p class="text-offwhite/50 font-sans tracking-wide">
                    "Tell me a little more about yourself and the event."
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <DetailField
                    label="Full Name"
                    field=BookingField::Name
                    placeholder="Emma Watson"
                />
                <DetailField
                    label="Email"
                    field=BookingField::Email
                    placeholder="emma@example.com"
                    input_type="email"
                />
                <DetailField
                    label="Phone"
                    field=BookingField::Phone
                    placeholder="+1 (555) 000-0000"
                    input_type="tel"
                />
                <DetailField
                    label="Venue / Location"
                    field=BookingField::Venue
                    placeholder="The Plaza Hotel, NYC"
                />

                <div class="md:col-span-2">
                    <label class="block text-xs uppercase tracking-widest text-gold mb-2">
                        "Additional Details & Vision"
                    </label>
                    <textarea
                        rows="4"
                        class="w-full bg-obsidian border border-white/10 rounded-lg p-4 text-white
                               focus:outline-none focus:border-gold transition-colors resize-none"
                        placeholder="Tell me about your vibe, specific shots you want, or anything else..."
                        prop:value=move || ctx.draft().details
                        on:input=move |ev| ctx.set_field(BookingField::Details, &event_target_value(&ev))
                    />
                </div>
            </div>
        </div>
    }
}
