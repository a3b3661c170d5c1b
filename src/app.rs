//! Route table and application shell.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::admin::{AdminDashboardPage, AdminLoginPage};
use crate::components::layout::{Footer, Navbar};
use crate::components::notifications::ToastStack;
use crate::components::pages::{
    AboutPage, BookingPage, ContactPage, HomePage, PortfolioPage, ServicesPage,
};
use crate::services::auth::provide_auth_session;
use crate::services::notification::provide_notification_state;

#[component]
pub fn App() -> impl IntoView {
    provide_auth_session();
    provide_notification_state();

    view! {
        <Router>
            <Shell />
        </Router>
    }
}

/// Public routes share the navbar and footer; admin routes render bare.
#[component]
fn Shell() -> impl IntoView {
    let location = use_location();
    let is_admin_route = Signal::derive(move || location.pathname.get().starts_with("/admin"));

    view! {
        <div class="bg-obsidian text-offwhite min-h-screen font-sans">
            <Show when=move || !is_admin_route.get()>
                <Navbar />
            </Show>

            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/portfolio") view=PortfolioPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/booking") view=BookingPage />
                    <Route path=path!("/admin") view=AdminLoginPage />
                    <Route path=path!("/admin/dashboard") view=AdminDashboardPage />
                </Routes>
            </main>

            <Show when=move || !is_admin_route.get()>
                <Footer />
            </Show>

            <ToastStack />
        </div>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-obsidian flex flex-col items-center justify-center px-6 text-center">
            <p class="font-serif text-7xl text-gold">"404"</p>
            <p class="text-offwhite/60 mt-4">"This frame doesn't exist."</p>
            <A
                href="/"
                attr:class="mt-10 px-8 py-3 border border-gold text-gold text-xs uppercase
                            tracking-widest font-sans hover:bg-gold hover:text-obsidian transition-colors"
            >
                "Return Home"
            </A>
        </div>
    }
}
