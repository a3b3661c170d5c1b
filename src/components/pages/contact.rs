//! Contact page with an inline-validated message form.

use std::collections::BTreeMap;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bindings::booking::{submit_contact_message, ContactMessage};
use crate::services::notification::{use_notification_state, ToastKind};
use crate::services::validation::is_valid_email;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum ContactField {
    Name,
    Email,
    Message,
}

fn validate(name: &str, email: &str, message: &str) -> BTreeMap<ContactField, String> {
    let mut errors = BTreeMap::new();
    if name.trim().len() < 2 {
        errors.insert(
            ContactField::Name,
            "Name must be at least 2 characters".to_string(),
        );
    }
    if !is_valid_email(email.trim()) {
        errors.insert(ContactField::Email, "Invalid email address".to_string());
    }
    if message.trim().len() < 10 {
        errors.insert(
            ContactField::Message,
            "Message must be at least 10 characters".to_string(),
        );
    }
    errors
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let notifications = use_notification_state();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(BTreeMap::<ContactField, String>::new());
    let sending = RwSignal::new(false);

    let error_for = move |field: ContactField| errors.get().get(&field).cloned();

    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let found = validate(
            &name.get_untracked(),
            &email.get_untracked(),
            &message.get_untracked(),
        );
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(BTreeMap::new());
        sending.set(true);

        let payload = ContactMessage {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            message: message.get_untracked().trim().to_string(),
        };
        spawn_local(async move {
            match submit_contact_message(&payload).await {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    notifications.add(
                        ToastKind::Success,
                        "Message sent",
                        Some("We will get back to you within two business days."),
                    );
                }
                Err(err) => {
                    log::warn!("contact submission failed: {err}");
                    notifications.add(
                        ToastKind::Error,
                        "Could not send message",
                        Some("Please try again in a moment."),
                    );
                }
            }
            sending.set(false);
        });
    };

    view! {
        <div class="pt-32 pb-24 bg-obsidian min-h-screen">
            <div class="max-w-7xl mx-auto px-6 grid grid-cols-1 md:grid-cols-2 gap-16">
                <div>
                    <p class="text-gold text-xs uppercase tracking-widest font-sans mb-3">"Contact"</p>
                    <h1 class="font-serif text-5xl text-white leading-tight">
                        "Let's " <span class="italic text-gold">"Talk"</span>
                    </h1>
                    <p class="text-offwhite/60 mt-6 leading-relaxed max-w-md">
                        "For bookings, use the booking page. For everything else, press,
                         collaborations, or just to say hello, this inbox is read daily."
                    </p>
                    <ul class="mt-12 space-y-4 text-offwhite/60 text-sm">
                        <li>"studio@atelierlumen.com"</li>
                        <li>"+1 (212) 555-0184"</li>
                        <li>"48 Mercer Street, New York"</li>
                    </ul>
                </div>

                <form class="space-y-6" on:submit=on_submit>
                    <ContactInput
                        label="Name"
                        value=name
                        error=Signal::derive(move || error_for(ContactField::Name))
                        input_type="text"
                        placeholder="Your name"
                    />
                    <ContactInput
                        label="Email"
                        value=email
                        error=Signal::derive(move || error_for(ContactField::Email))
                        input_type="email"
                        placeholder="you@example.com"
                    />
                    <div>
                        <label class="block text-xs uppercase tracking-widest text-offwhite/50 font-sans mb-2">
                            "Message"
                        </label>
                        <textarea
                            rows="6"
                            placeholder="Tell us what's on your mind"
                            class="w-full bg-white/5 border border-white/10 text-white px-4 py-3 text-sm
                                   focus:border-gold focus:outline-none transition-colors resize-none"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                        {move || error_for(ContactField::Message).map(|msg| view! {
                            <p class="text-red-400 text-xs mt-2">{msg}</p>
                        })}
                    </div>
                    <button
                        type="submit"
                        class="w-full py-4 bg-gold text-obsidian text-xs uppercase tracking-widest
                               font-sans hover:bg-gold/90 transition-colors disabled:opacity-50"
                        disabled=move || sending.get()
                    >
                        {move || if sending.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn ContactInput(
    label: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<String>>,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-xs uppercase tracking-widest text-offwhite/50 font-sans mb-2">
                {label}
            </label>
            <input
                type=input_type
                placeholder=placeholder
                class="w-full bg-white/5 border border-white/10 text-white px-4 py-3 text-sm
                       focus:border-gold focus:outline-none transition-colors"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! {
                <p class="text-red-400 text-xs mt-2">{msg}</p>
            })}
        </div>
    }
}
