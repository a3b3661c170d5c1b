//! Site navigation bar, hidden on admin routes.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/portfolio", "Portfolio"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let menu_open = RwSignal::new(false);

    let toggle_menu = move |_: ev::MouseEvent| {
        menu_open.update(|open| *open = !*open);
    };

    view! {
        <header class="fixed top-0 left-0 w-full z-50 bg-obsidian/80 backdrop-blur-md border-b border-white/5">
            <div class="max-w-7xl mx-auto px-6 py-5 flex items-center justify-between">
                <A href="/" attr:class="font-serif text-2xl text-white tracking-widest">
                    "ATELIER "
                    <span class="text-gold">"LUMEN"</span>
                </A>

                // Desktop links
                <nav class="hidden md:flex items-center space-x-10">
                    {NAV_LINKS.iter().map(|(href, label)| {
                        let href = *href;
                        let is_active = Signal::derive(move || location.pathname.get() == href);
                        view! {
                            <A
                                href=href
                                attr:class=move || format!(
                                    "text-xs uppercase tracking-widest font-sans transition-colors {}",
                                    if is_active.get() { "text-gold" } else { "text-offwhite/60 hover:text-white" }
                                )
                            >
                                {*label}
                            </A>
                        }
                    }).collect_view()}

                    <A
                        href="/booking"
                        attr:class="px-6 py-2 border border-gold text-gold hover:bg-gold hover:text-obsidian
                                    transition-colors text-xs uppercase tracking-widest font-sans"
                    >
                        "Book Now"
                    </A>
                </nav>

                // Mobile toggle
                <button
                    type="button"
                    class="md:hidden text-white p-2"
                    on:click=toggle_menu
                >
                    {move || if menu_open.get() {
                        view! {
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                            </svg>
                        }.into_any()
                    } else {
                        view! {
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            </svg>
                        }.into_any()
                    }}
                </button>
            </div>

            // Mobile menu
            <Show when=move || menu_open.get()>
                <nav class="md:hidden bg-obsidian border-t border-white/10 px-6 py-8 space-y-6">
                    {NAV_LINKS.iter().map(|(href, label)| {
                        let href = *href;
                        view! {
                            <A
                                href=href
                                attr:class="block font-serif text-2xl text-white hover:text-gold transition-colors"
                                on:click=move |_| menu_open.set(false)
                            >
                                {*label}
                            </A>
                        }
                    }).collect_view()}
                    <A
                        href="/booking"
                        attr:class="inline-block px-6 py-2 border border-gold text-gold text-xs uppercase tracking-widest"
                        on:click=move |_| menu_open.set(false)
                    >
                        "Book Now"
                    </A>
                </nav>
            </Show>
        </header>
    }
}
