use leptos::prelude::*;

use crate::components::booking_wizard::BookingWizard;

#[component]
pub fn BookingPage() -> impl IntoView {
    view! {
        <div class="pt-32 pb-24 bg-obsidian min-h-screen">
            <div class="max-w-3xl mx-auto px-6">
                <header class="text-center mb-16">
                    <p class="text-gold text-xs uppercase tracking-widest font-sans mb-3">"Booking"</p>
                    <h1 class="font-serif text-5xl text-white">
                        "Create " <span class="italic text-gold">"History"</span>
                    </h1>
                    <p class="text-offwhite/60 mt-6 max-w-md mx-auto leading-relaxed">
                        "Tell us about your session in four short steps.
                         We reply to every inquiry within two business days."
                    </p>
                </header>
                <BookingWizard />
            </div>
        </div>
    }
}
