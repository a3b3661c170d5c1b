//! Token-gated admin dashboard with mock studio data.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::content::{portfolio_for, MockInquiry, RECENT_INQUIRIES};
use crate::services::auth::use_auth_session;
use crate::utils::formatting::format_display_date;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DashboardTab {
    Overview,
    Portfolio,
    Bookings,
}

impl DashboardTab {
    fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Portfolio => "Portfolio",
            DashboardTab::Bookings => "Bookings",
        }
    }

    fn all() -> &'static [DashboardTab] {
        &[
            DashboardTab::Overview,
            DashboardTab::Portfolio,
            DashboardTab::Bookings,
        ]
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_auth_session();
    let navigate = use_navigate();
    let active_tab = RwSignal::new(DashboardTab::Overview);

    // Unauthenticated sessions never see the dashboard.
    Effect::new(move |_| {
        if !session.token.get().is_authenticated() {
            navigate("/admin", Default::default());
        }
    });

    let sign_out = {
        let navigate = use_navigate();
        move |_| {
            session.sign_out();
            navigate("/admin", Default::default());
        }
    };

    view! {
        <div class="min-h-screen bg-obsidian">
            <header class="border-b border-white/10 px-8 py-5 flex items-center justify-between">
                <p class="font-serif text-xl text-white tracking-widest">
                    "ATELIER "
                    <span class="text-gold">"LUMEN"</span>
                    <span class="text-offwhite/30 text-xs uppercase tracking-widest ml-4 font-sans">
                        "Admin"
                    </span>
                </p>
                <button
                    type="button"
                    class="text-offwhite/50 hover:text-white text-xs uppercase tracking-widest
                           font-sans transition-colors"
                    on:click=sign_out
                >
                    "Sign Out"
                </button>
            </header>

            <div class="max-w-7xl mx-auto px-8 py-10">
                <nav class="flex gap-2 mb-10 border-b border-white/10">
                    {DashboardTab::all().iter().map(|tab| {
                        let tab = *tab;
                        view! {
                            <button
                                type="button"
                                class=move || format!(
                                    "px-5 py-3 text-xs uppercase tracking-widest font-sans transition-colors {}",
                                    if active_tab.get() == tab {
                                        "text-gold border-b-2 border-gold"
                                    } else {
                                        "text-offwhite/50 hover:text-white"
                                    }
                                )
                                on:click=move |_| active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    }).collect_view()}
                </nav>

                {move || match active_tab.get() {
                    DashboardTab::Overview => view! { <OverviewTab /> }.into_any(),
                    DashboardTab::Portfolio => view! { <PortfolioTab /> }.into_any(),
                    DashboardTab::Bookings => view! { <BookingsTab /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: &'static str, delta: &'static str) -> impl IntoView {
    view! {
        <div class="border border-white/10 p-6">
            <p class="text-offwhite/40 text-xs uppercase tracking-widest font-sans">{label}</p>
            <p class="font-serif text-3xl text-white mt-3">{value}</p>
            <p class="text-gold text-xs mt-2">{delta}</p>
        </div>
    }
}

#[component]
fn OverviewTab() -> impl IntoView {
    view! {
        <div>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6 mb-12">
                <StatCard label="Total Bookings" value="156" delta="+12% this month" />
                <StatCard label="Revenue" value="$45,200" delta="+8% this month" />
                <StatCard label="Pending Inquiries" value="23" delta="5 need replies" />
                <StatCard label="Portfolio Items" value="89" delta="4 added this week" />
            </div>

            <h2 class="font-serif text-2xl text-white mb-6">"Recent Inquiries"</h2>
            <InquiryTable inquiries=RECENT_INQUIRIES />
        </div>
    }
}

#[component]
fn InquiryTable(inquiries: &'static [MockInquiry]) -> impl IntoView {
    view! {
        <div class="border border-white/10 overflow-x-auto">
            <table class="w-full text-left text-sm">
                <thead>
                    <tr class="border-b border-white/10 text-offwhite/40 text-xs uppercase tracking-widest font-sans">
                        <th class="px-6 py-4 font-normal">"Client"</th>
                        <th class="px-6 py-4 font-normal">"Service"</th>
                        <th class="px-6 py-4 font-normal">"Date"</th>
                        <th class="px-6 py-4 font-normal">"Status"</th>
                        <th class="px-6 py-4 font-normal text-right">"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {inquiries.iter().map(|inquiry| view! {
                        <tr class="border-b border-white/5 last:border-0 hover:bg-white/[0.02]">
                            <td class="px-6 py-4 text-white">{inquiry.client}</td>
                            <td class="px-6 py-4 text-offwhite/60">{inquiry.service.label()}</td>
                            <td class="px-6 py-4 text-offwhite/60">{format_display_date(inquiry.date)}</td>
                            <td class="px-6 py-4">
                                <span class=format!(
                                    "px-3 py-1 text-[10px] uppercase tracking-widest font-sans {}",
                                    inquiry.status.badge_class()
                                )>
                                    {inquiry.status.label()}
                                </span>
                            </td>
                            <td class="px-6 py-4 text-white text-right">{inquiry.amount}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn PortfolioTab() -> impl IntoView {
    view! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <h2 class="font-serif text-2xl text-white">"Portfolio Manager"</h2>
                <button
                    type="button"
                    class="px-5 py-2 bg-gold text-obsidian text-xs uppercase tracking-widest font-sans opacity-60"
                    disabled=true
                >
                    "Upload"
                </button>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {portfolio_for(None).into_iter().map(|item| view! {
                    <div class="relative group">
                        <img src=item.src alt=item.title class="w-full h-40 object-cover" />
                        <div class="absolute inset-0 bg-obsidian/70 opacity-0 group-hover:opacity-100
                                    transition-opacity flex items-center justify-center">
                            <p class="text-white text-xs text-center px-2">{item.title}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn BookingsTab() -> impl IntoView {
    view! {
        <div>
            <h2 class="font-serif text-2xl text-white mb-6">"All Bookings"</h2>
            <InquiryTable inquiries=RECENT_INQUIRIES />
        </div>
    }
}
