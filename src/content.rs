//! Static site content
//!
//! The portfolio catalog, pricing tiers, FAQ, testimonials, and the mock
//! data behind the admin dashboard. Everything here is in-memory; the site
//! has no CMS.

use crate::services::booking_wizard::ServiceType;

// ============================================================================
// Portfolio
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioItem {
    pub id: u32,
    pub category: ServiceType,
    pub src: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    /// Tailwind height class for the masonry layout.
    pub height: &'static str,
}

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        category: ServiceType::Wedding,
        src: "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=1000&auto=format&fit=crop",
        title: "Lake Como Affair",
        date: "Sep 2023",
        height: "h-[500px]",
    },
    PortfolioItem {
        id: 2,
        category: ServiceType::Fashion,
        src: "https://images.unsplash.com/photo-1542038784456-1ea8e935640e?q=80&w=1000&auto=format&fit=crop",
        title: "Autumn Vogue",
        date: "Nov 2023",
        height: "h-[700px]",
    },
    PortfolioItem {
        id: 3,
        category: ServiceType::Commercial,
        src: "https://images.unsplash.com/photo-1558223363-f2eb01ec7497?q=80&w=1000&auto=format&fit=crop",
        title: "Chanel N°5",
        date: "Jan 2024",
        height: "h-[450px]",
    },
    PortfolioItem {
        id: 4,
        category: ServiceType::Wedding,
        src: "https://images.unsplash.com/photo-1606800052052-a08af7148866?q=80&w=1000&auto=format&fit=crop",
        title: "Tuscan Vows",
        date: "Oct 2023",
        height: "h-[650px]",
    },
    PortfolioItem {
        id: 5,
        category: ServiceType::Events,
        src: "https://images.unsplash.com/photo-1511795409834-432f7b1728d2?q=80&w=1000&auto=format&fit=crop",
        title: "Gala Dinner",
        date: "Dec 2023",
        height: "h-[500px]",
    },
    PortfolioItem {
        id: 6,
        category: ServiceType::Fashion,
        src: "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?q=80&w=1000&auto=format&fit=crop",
        title: "Paris Runway",
        date: "Feb 2024",
        height: "h-[600px]",
    },
    PortfolioItem {
        id: 7,
        category: ServiceType::Commercial,
        src: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=1000&auto=format&fit=crop",
        title: "Porsche Reveal",
        date: "Mar 2024",
        height: "h-[550px]",
    },
    PortfolioItem {
        id: 8,
        category: ServiceType::Wedding,
        src: "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?q=80&w=1000&auto=format&fit=crop",
        title: "Aman Tokyo",
        date: "Apr 2024",
        height: "h-[500px]",
    },
    PortfolioItem {
        id: 9,
        category: ServiceType::Fashion,
        src: "https://images.unsplash.com/photo-1536766820879-059fec98ec0a?q=80&w=1000&auto=format&fit=crop",
        title: "Milan Excl.",
        date: "May 2024",
        height: "h-[750px]",
    },
];

/// Items for a filter tab; `None` means "All".
pub fn portfolio_for(filter: Option<ServiceType>) -> Vec<&'static PortfolioItem> {
    PORTFOLIO
        .iter()
        .filter(|item| filter.map(|f| item.category == f).unwrap_or(true))
        .collect()
}

// ============================================================================
// Pricing
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingTier {
    pub tier: &'static str,
    /// Display price; "Custom" for retainer work.
    pub price: &'static str,
    pub duration: &'static str,
    pub is_popular: bool,
    pub features: &'static [&'static str],
}

const WEDDING_TIERS: &[PricingTier] = &[
    PricingTier {
        tier: "Essential",
        price: "3,500",
        duration: "8 Hours Coverage",
        is_popular: false,
        features: &[
            "1 Photographer",
            "High-Res Digital Gallery",
            "Print Preview Box",
            "Travel within 50 miles",
        ],
    },
    PricingTier {
        tier: "Editorial",
        price: "5,500",
        duration: "10 Hours Coverage",
        is_popular: true,
        features: &[
            "2 Photographers",
            "High-Res Digital Gallery",
            "10x10 Luxury Album",
            "Engagement Session",
            "Travel within 100 miles",
        ],
    },
    PricingTier {
        tier: "The Heirloom",
        price: "8,500",
        duration: "Full Weekend Coverage",
        is_popular: false,
        features: &[
            "Lead Photographer + 2 Associates",
            "Rehearsal Dinner Coverage",
            "12x12 Premium Album",
            "2 Parent Albums",
            "Global Travel Included",
        ],
    },
];

const FASHION_TIERS: &[PricingTier] = &[
    PricingTier {
        tier: "Lookbook",
        price: "1,500",
        duration: "Half Day Studio",
        is_popular: false,
        features: &[
            "1 Model Focus",
            "2 Looks/Changes",
            "15 Retouched Images",
            "Digital Usage Rights",
        ],
    },
    PricingTier {
        tier: "Editorial",
        price: "3,200",
        duration: "Full Day Location",
        is_popular: true,
        features: &[
            "Full Creative Direction",
            "Up to 5 Looks",
            "30 Retouched Images",
            "Commercial Usage Rights",
            "Behind the Scenes Video",
        ],
    },
    PricingTier {
        tier: "Campaign",
        price: "6,500",
        duration: "Multi-Day Project",
        is_popular: false,
        features: &[
            "Extensive Location Scouting",
            "Unlimited Looks",
            "Full Image Catalog",
            "Global Buyout Rights",
            "Dedicated Retoucher",
        ],
    },
];

const EVENTS_TIERS: &[PricingTier] = &[
    PricingTier {
        tier: "Social",
        price: "800",
        duration: "4 Hours Coverage",
        is_popular: false,
        features: &[
            "1 Photographer",
            "Online Digital Gallery",
            "Standard Editing",
            "Next-Day Teasers",
        ],
    },
    PricingTier {
        tier: "Gala",
        price: "1,800",
        duration: "8 Hours Coverage",
        is_popular: true,
        features: &[
            "2 Photographers",
            "Step & Repeat Setup",
            "Expedited 7-Day Delivery",
            "Media Wall Licensing",
        ],
    },
    PricingTier {
        tier: "Festival",
        price: "4,000",
        duration: "3 Day Pass",
        is_popular: false,
        features: &[
            "Team of 3 Photographers",
            "Live Editing Station",
            "Instant Social Delivery",
            "Complete Event Documentation",
        ],
    },
];

const COMMERCIAL_TIERS: &[PricingTier] = &[
    PricingTier {
        tier: "Social Media",
        price: "1,200",
        duration: "Half Day Base",
        is_popular: false,
        features: &[
            "Product/Brand Focus",
            "20 Web-Ready Images",
            "1 Year Social Rights",
            "Basic Prop Styling",
        ],
    },
    PricingTier {
        tier: "Brand Identity",
        price: "3,500",
        duration: "Full Day Base",
        is_popular: true,
        features: &[
            "Hero & Lifestyle Images",
            "50 Hi-Res Deliverables",
            "5 Year Web/Print Rights",
            "Collaborative Moodboard",
        ],
    },
    PricingTier {
        tier: "Global Ads",
        price: "Custom",
        duration: "Retainer Available",
        is_popular: false,
        features: &[
            "Extensive Pre-Production",
            "Full Crew Management",
            "Perpetual Buyout Licensing",
            "Priority Scheduling",
        ],
    },
];

pub fn pricing_for(service: ServiceType) -> &'static [PricingTier] {
    match service {
        ServiceType::Wedding => WEDDING_TIERS,
        ServiceType::Fashion => FASHION_TIERS,
        ServiceType::Events => EVENTS_TIERS,
        ServiceType::Commercial => COMMERCIAL_TIERS,
    }
}

// ============================================================================
// FAQ
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How far in advance should we book?",
        answer: "For weddings and major events, I recommend inquiring 9-12 months in advance. For fashion and commercial shoots, a 4-8 week lead time is usually sufficient.",
    },
    FaqEntry {
        question: "Do you travel for shoots?",
        answer: "Absolutely. I am based in New York but hold a valid passport and travel globally for destination weddings and international campaigns. Travel fees are custom calculated based on location.",
    },
    FaqEntry {
        question: "How many images will we receive?",
        answer: "This varies by package. A typical editorial wedding yields 60-80 final, meticulously edited images per hour of coverage. I prioritize quality and storytelling over sheer quantity.",
    },
    FaqEntry {
        question: "Can we get the unedited RAW files?",
        answer: "To ensure my standard of quality and artistic vision is maintained, I do not release unedited or RAW digital files. The final, retouched images represent my completed work.",
    },
    FaqEntry {
        question: "What is your payment structure?",
        answer: "A 30% non-refundable retainer and signed contract are required to secure your date. The remaining balance is divided into manageable installments leading up to the shoot date.",
    },
];

// ============================================================================
// Testimonials
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Every frame felt like a still from a film we wished our wedding could be. Somehow it actually was.",
        author: "Elena & Marco",
        role: "Lake Como Wedding",
    },
    Testimonial {
        quote: "The editorial instinct is rare. We booked a campaign and received a body of work.",
        author: "Amelie Laurent",
        role: "Creative Director, Maison L",
    },
    Testimonial {
        quote: "Discreet, fast, and the gala coverage was online before our guests' cars reached the valet.",
        author: "J. Whitmore",
        role: "Events Chair, The Pierre",
    },
];

// ============================================================================
// Admin mock data
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryStatus {
    Pending,
    Confirmed,
    Completed,
}

impl InquiryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "Pending",
            InquiryStatus::Confirmed => "Confirmed",
            InquiryStatus::Completed => "Completed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "bg-yellow-500/20 text-yellow-300 border border-yellow-500/30",
            InquiryStatus::Confirmed => "bg-blue-500/20 text-blue-300 border border-blue-500/30",
            InquiryStatus::Completed => "bg-green-500/20 text-green-300 border border-green-500/30",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockInquiry {
    pub id: u32,
    pub client: &'static str,
    pub service: ServiceType,
    pub date: &'static str,
    pub status: InquiryStatus,
    pub amount: &'static str,
}

pub const RECENT_INQUIRIES: &[MockInquiry] = &[
    MockInquiry {
        id: 1,
        client: "Emma Watson",
        service: ServiceType::Wedding,
        date: "2024-09-15",
        status: InquiryStatus::Pending,
        amount: "$5,500",
    },
    MockInquiry {
        id: 2,
        client: "Chanel Corp",
        service: ServiceType::Commercial,
        date: "2024-05-20",
        status: InquiryStatus::Confirmed,
        amount: "$12,000",
    },
    MockInquiry {
        id: 3,
        client: "Sophia Rossi",
        service: ServiceType::Fashion,
        date: "2024-06-10",
        status: InquiryStatus::Completed,
        amount: "$3,200",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_filter_all() {
        assert_eq!(portfolio_for(None).len(), PORTFOLIO.len());
    }

    #[test]
    fn test_portfolio_filter_by_category() {
        let weddings = portfolio_for(Some(ServiceType::Wedding));
        assert_eq!(weddings.len(), 3);
        assert!(weddings.iter().all(|i| i.category == ServiceType::Wedding));
    }

    #[test]
    fn test_every_service_has_three_tiers() {
        for service in ServiceType::all() {
            assert_eq!(pricing_for(service).len(), 3);
            assert_eq!(
                pricing_for(service).iter().filter(|t| t.is_popular).count(),
                1
            );
        }
    }
}
