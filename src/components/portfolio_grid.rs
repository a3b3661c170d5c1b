//! Filterable masonry grid of portfolio work.

use leptos::prelude::*;

use crate::content::{portfolio_for, PortfolioItem};
use crate::services::booking_wizard::ServiceType;

#[component]
pub fn PortfolioGrid() -> impl IntoView {
    let filter = RwSignal::new(None::<ServiceType>);

    let filter_button = move |value: Option<ServiceType>, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || format!(
                    "px-5 py-2 text-xs uppercase tracking-widest font-sans transition-colors {}",
                    if filter.get() == value {
                        "text-gold border-b border-gold"
                    } else {
                        "text-offwhite/50 hover:text-white"
                    }
                )
                on:click=move |_| filter.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div>
            <div class="flex flex-wrap justify-center gap-2 mb-14">
                {filter_button(None, "All Work")}
                {ServiceType::all()
                    .iter()
                    .map(|service| filter_button(Some(*service), service.category()))
                    .collect_view()}
            </div>

            // Three column masonry, items dealt round-robin to keep heights balanced.
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {move || {
                    let items = portfolio_for(filter.get());
                    (0..3)
                        .map(|column| {
                            let column_items: Vec<&'static PortfolioItem> = items
                                .iter()
                                .enumerate()
                                .filter(|(i, _)| i % 3 == column)
                                .map(|(_, item)| *item)
                                .collect();
                            view! {
                                <div class="flex flex-col gap-6">
                                    {column_items
                                        .into_iter()
                                        .map(|item| view! { <PortfolioCard item=item /> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn PortfolioCard(item: &'static PortfolioItem) -> impl IntoView {
    view! {
        <figure class="group relative overflow-hidden">
            <img
                src=item.src
                alt=item.title
                loading="lazy"
                class=format!(
                    "w-full {} object-cover transition-transform duration-700 group-hover:scale-105",
                    item.height
                )
            />
            <figcaption class="absolute inset-0 bg-gradient-to-t from-obsidian/90 via-transparent to-transparent
                               opacity-0 group-hover:opacity-100 transition-opacity duration-500
                               flex flex-col justify-end p-6">
                <p class="text-gold text-[10px] uppercase tracking-widest font-sans">
                    {item.category.category()}
                </p>
                <p class="font-serif text-xl text-white mt-1">{item.title}</p>
                <p class="text-offwhite/50 text-xs mt-1">{item.date}</p>
            </figcaption>
        </figure>
    }
}
