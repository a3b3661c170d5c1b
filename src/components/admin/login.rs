//! Admin login form, the only route into the dashboard.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::bindings::auth::Credentials;
use crate::services::auth::{login_action, use_auth_session};

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let session = use_auth_session();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let attempt_login = login_action(session);

    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();
        if session.is_authenticating.get_untracked() {
            return;
        }
        let navigate = navigate.clone();
        attempt_login(
            Credentials {
                username: username.get_untracked().trim().to_string(),
                password: password.get_untracked(),
            },
            Callback::new(move |()| navigate("/admin/dashboard", Default::default())),
        );
    };

    view! {
        <div class="min-h-screen bg-obsidian flex items-center justify-center px-6">
            <div class="w-full max-w-sm">
                <header class="text-center mb-10">
                    <p class="font-serif text-3xl text-white tracking-widest">
                        "ATELIER "
                        <span class="text-gold">"LUMEN"</span>
                    </p>
                    <p class="text-offwhite/40 text-xs uppercase tracking-widest mt-3 font-sans">
                        "Studio Administration"
                    </p>
                </header>

                <form class="space-y-5" on:submit=on_submit>
                    <div>
                        <label class="block text-xs uppercase tracking-widest text-offwhite/50 font-sans mb-2">
                            "Username"
                        </label>
                        <input
                            type="text"
                            autocomplete="username"
                            class="w-full bg-white/5 border border-white/10 text-white px-4 py-3 text-sm
                                   focus:border-gold focus:outline-none transition-colors"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-xs uppercase tracking-widest text-offwhite/50 font-sans mb-2">
                            "Password"
                        </label>
                        <input
                            type="password"
                            autocomplete="current-password"
                            class="w-full bg-white/5 border border-white/10 text-white px-4 py-3 text-sm
                                   focus:border-gold focus:outline-none transition-colors"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>

                    {move || session.error.get().map(|message| view! {
                        <p class="text-red-400 text-xs text-center">{message}</p>
                    })}

                    <button
                        type="submit"
                        class="w-full py-3 bg-gold text-obsidian text-xs uppercase tracking-widest
                               font-sans hover:bg-gold/90 transition-colors disabled:opacity-50"
                        disabled=move || session.is_authenticating.get()
                    >
                        {move || if session.is_authenticating.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
