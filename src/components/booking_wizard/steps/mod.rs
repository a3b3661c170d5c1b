//! Wizard Step Components
//!
//! One component per phase of the booking wizard.

mod date_step;
mod details_step;
mod review_step;
mod service_step;
mod success_step;

pub use date_step::DateStep;
pub use details_step::DetailsStep;
pub use review_step::ReviewStep;
pub use service_step::ServiceStep;
pub use success_step::SuccessStep;
