use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-obsidian border-t border-white/5 py-16">
            <div class="max-w-7xl mx-auto px-6 grid grid-cols-1 md:grid-cols-3 gap-12">
                <div>
                    <p class="font-serif text-2xl text-white tracking-widest mb-4">
                        "ATELIER "
                        <span class="text-gold">"LUMEN"</span>
                    </p>
                    <p class="text-offwhite/50 text-sm leading-relaxed max-w-xs">
                        "Editorial photography for weddings, fashion, and events.
                         Based in New York, available worldwide."
                    </p>
                </div>

                <div>
                    <p class="text-xs uppercase tracking-widest text-gold mb-6 font-sans">"Explore"</p>
                    <ul class="space-y-3">
                        <li><A href="/portfolio" attr:class="text-offwhite/60 hover:text-white text-sm transition-colors">"Portfolio"</A></li>
                        <li><A href="/services" attr:class="text-offwhite/60 hover:text-white text-sm transition-colors">"Services"</A></li>
                        <li><A href="/about" attr:class="text-offwhite/60 hover:text-white text-sm transition-colors">"About"</A></li>
                        <li><A href="/booking" attr:class="text-offwhite/60 hover:text-white text-sm transition-colors">"Book a Session"</A></li>
                    </ul>
                </div>

                <div>
                    <p class="text-xs uppercase tracking-widest text-gold mb-6 font-sans">"Contact"</p>
                    <ul class="space-y-3 text-offwhite/60 text-sm">
                        <li>"studio@atelierlumen.com"</li>
                        <li>"+1 (212) 555-0184"</li>
                        <li>"48 Mercer Street, New York"</li>
                    </ul>
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-6 mt-12 pt-8 border-t border-white/5
                        flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-offwhite/30 text-xs">"© 2026 Atelier Lumen. All rights reserved."</p>
                <A href="/admin" attr:class="text-offwhite/20 hover:text-offwhite/50 text-xs transition-colors">
                    "Studio Login"
                </A>
            </div>
        </footer>
    }
}
