use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="pt-32 pb-24 bg-obsidian min-h-screen">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-16 items-center">
                    <img
                        src="https://images.unsplash.com/photo-1554048612-b6a482bc67e5?q=80&w=1200"
                        alt="Photographer at work"
                        class="w-full h-[640px] object-cover"
                    />
                    <div>
                        <p class="text-gold text-xs uppercase tracking-widest font-sans mb-3">"The Studio"</p>
                        <h1 class="font-serif text-5xl text-white leading-tight">
                            "Behind the " <span class="italic text-gold">"Lens"</span>
                        </h1>
                        <div class="space-y-6 text-offwhite/70 leading-relaxed mt-8">
                            <p>
                                "I started photographing weddings a decade ago with a borrowed camera
                                 and a conviction that the best images are the ones nobody posed for.
                                 That conviction still drives every shoot."
                            </p>
                            <p>
                                "Today the studio works across four disciplines: weddings, fashion
                                 editorials, live events, and commercial campaigns. The through-line
                                 is cinematic restraint. Natural light where possible, deliberate
                                 light where not, and an edit that favors honesty over trend."
                            </p>
                            <p>
                                "Based in New York. Regularly in Lake Como, Paris, and wherever the
                                 story goes next."
                            </p>
                        </div>

                        <div class="grid grid-cols-3 gap-8 mt-12 border-t border-white/10 pt-10">
                            <div>
                                <p class="font-serif text-3xl text-gold">"240+"</p>
                                <p class="text-offwhite/40 text-xs uppercase tracking-widest mt-2 font-sans">"Weddings"</p>
                            </div>
                            <div>
                                <p class="font-serif text-3xl text-gold">"36"</p>
                                <p class="text-offwhite/40 text-xs uppercase tracking-widest mt-2 font-sans">"Editorials"</p>
                            </div>
                            <div>
                                <p class="font-serif text-3xl text-gold">"12"</p>
                                <p class="text-offwhite/40 text-xs uppercase tracking-widest mt-2 font-sans">"Countries"</p>
                            </div>
                        </div>

                        <A
                            href="/contact"
                            attr:class="inline-block mt-12 px-10 py-4 border border-gold text-gold text-xs
                                        uppercase tracking-widest font-sans hover:bg-gold hover:text-obsidian
                                        transition-colors"
                        >
                            "Get in Touch"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}
