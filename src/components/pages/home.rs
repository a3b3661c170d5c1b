use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{portfolio_for, TESTIMONIALS};
use crate::services::booking_wizard::ServiceType;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <Hero />
            <ServiceHighlights />
            <FeaturedWork />
            <TestimonialStrip />
            <ClosingCallToAction />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center bg-obsidian overflow-hidden">
            <img
                src="https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=2400"
                alt="Bride and groom in evening light"
                class="absolute inset-0 w-full h-full object-cover opacity-40"
            />
            <div class="relative z-10 text-center px-6 max-w-4xl">
                <p class="text-gold text-xs uppercase tracking-[0.3em] font-sans mb-6">
                    "Editorial Photography"
                </p>
                <h1 class="font-serif text-5xl md:text-7xl text-white leading-tight">
                    "Moments Composed"
                    <br />
                    <span class="italic text-gold">"Like Cinema"</span>
                </h1>
                <p class="text-offwhite/70 mt-8 max-w-xl mx-auto leading-relaxed">
                    "Weddings, fashion, and events photographed with a director's eye.
                     Every frame intentional. Every story yours."
                </p>
                <div class="mt-12 flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/booking"
                        attr:class="px-10 py-4 bg-gold text-obsidian text-xs uppercase tracking-widest
                                    font-sans hover:bg-gold/90 transition-colors"
                    >
                        "Book a Session"
                    </A>
                    <A
                        href="/portfolio"
                        attr:class="px-10 py-4 border border-white/30 text-white text-xs uppercase
                                    tracking-widest font-sans hover:border-gold hover:text-gold transition-colors"
                    >
                        "View the Work"
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceHighlights() -> impl IntoView {
    view! {
        <section class="py-24 bg-obsidian">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-px bg-white/5">
                    {ServiceType::all().into_iter().map(|service| view! {
                        <A
                            href="/services"
                            attr:class="group bg-obsidian p-10 hover:bg-white/[0.03] transition-colors block"
                        >
                            <p class="text-gold text-[10px] uppercase tracking-widest font-sans mb-4">
                                {format!("0{}", service as usize + 1)}
                            </p>
                            <p class="font-serif text-2xl text-white group-hover:text-gold transition-colors">
                                {service.label()}
                            </p>
                        </A>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturedWork() -> impl IntoView {
    let featured = portfolio_for(None).into_iter().take(3).collect::<Vec<_>>();

    view! {
        <section class="py-24 bg-obsidian">
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex items-end justify-between mb-14">
                    <div>
                        <p class="text-gold text-xs uppercase tracking-widest font-sans mb-3">"Selected Work"</p>
                        <h2 class="font-serif text-4xl text-white">"Recent Stories"</h2>
                    </div>
                    <A href="/portfolio" attr:class="text-offwhite/50 hover:text-gold text-xs uppercase tracking-widest transition-colors hidden md:block">
                        "Full Portfolio"
                    </A>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {featured.into_iter().map(|item| view! {
                        <figure class="group relative overflow-hidden h-[480px]">
                            <img
                                src=item.src
                                alt=item.title
                                loading="lazy"
                                class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105"
                            />
                            <figcaption class="absolute bottom-0 left-0 right-0 p-6 bg-gradient-to-t from-obsidian/90 to-transparent">
                                <p class="font-serif text-xl text-white">{item.title}</p>
                                <p class="text-gold text-[10px] uppercase tracking-widest mt-1 font-sans">
                                    {item.category.category()}
                                </p>
                            </figcaption>
                        </figure>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialStrip() -> impl IntoView {
    view! {
        <section class="py-24 bg-white/[0.02] border-y border-white/5">
            <div class="max-w-7xl mx-auto px-6">
                <p class="text-gold text-xs uppercase tracking-widest font-sans text-center mb-14">
                    "Kind Words"
                </p>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12">
                    {TESTIMONIALS.iter().map(|t| view! {
                        <blockquote class="text-center">
                            <p class="font-serif text-xl text-offwhite/90 italic leading-relaxed">
                                {format!("\u{201c}{}\u{201d}", t.quote)}
                            </p>
                            <footer class="mt-6">
                                <p class="text-white text-sm">{t.author}</p>
                                <p class="text-offwhite/40 text-xs mt-1">{t.role}</p>
                            </footer>
                        </blockquote>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ClosingCallToAction() -> impl IntoView {
    view! {
        <section class="py-32 bg-obsidian text-center px-6">
            <h2 class="font-serif text-4xl md:text-5xl text-white">
                "Your story deserves " <span class="italic text-gold">"this frame"</span>
            </h2>
            <p class="text-offwhite/60 mt-6 max-w-lg mx-auto">
                "Dates book out months in advance. Tell me about your day and let's make it permanent."
            </p>
            <A
                href="/booking"
                attr:class="inline-block mt-10 px-12 py-4 bg-gold text-obsidian text-xs uppercase
                            tracking-widest font-sans hover:bg-gold/90 transition-colors"
            >
                "Start an Inquiry"
            </A>
        </section>
    }
}
