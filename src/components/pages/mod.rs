pub mod about;
pub mod booking;
pub mod contact;
pub mod home;
pub mod portfolio;
pub mod services;

pub use about::AboutPage;
pub use booking::BookingPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use portfolio::PortfolioPage;
pub use services::ServicesPage;
