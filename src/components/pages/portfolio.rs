use leptos::prelude::*;

use crate::components::portfolio_grid::PortfolioGrid;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="pt-32 pb-24 bg-obsidian min-h-screen">
            <div class="max-w-7xl mx-auto px-6">
                <header class="text-center mb-16">
                    <p class="text-gold text-xs uppercase tracking-widest font-sans mb-3">"The Archive"</p>
                    <h1 class="font-serif text-5xl text-white">"Portfolio"</h1>
                    <p class="text-offwhite/60 mt-6 max-w-xl mx-auto leading-relaxed">
                        "A curated selection across weddings, fashion editorials,
                         live events, and commercial campaigns."
                    </p>
                </header>
                <PortfolioGrid />
            </div>
        </div>
    }
}
