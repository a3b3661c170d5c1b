pub mod auth;
pub mod booking_wizard;
pub mod notification;
pub mod validation;
