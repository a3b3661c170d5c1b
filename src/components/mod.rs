pub mod admin;
pub mod booking_wizard;
pub mod layout;
pub mod notifications;
pub mod pages;
pub mod portfolio_grid;
pub mod pricing_card;
