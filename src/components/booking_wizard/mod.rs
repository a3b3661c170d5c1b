//! Booking Wizard Components
//!
//! Five-step flow for booking a shoot: service, date, details, review,
//! success. State lives in `services::booking_wizard`; these components
//! only render it and invoke transitions.

pub mod error_display;
pub mod step_progress;
pub mod steps;
pub mod wizard_shell;

pub use step_progress::StepProgress;
pub use steps::*;
pub use wizard_shell::BookingWizard;
