//! Booking Wizard State Machine Tests
//!
//! Exercises the pure transitions with injected dates and submission results,
//! independent of any rendered component.

use wasm_bindgen_test::*;

use atelier_lumen_frontend::services::booking_wizard::{
    BookingField, ServiceType, SubmissionStatus, WizardState, WizardStep,
};
use chrono::NaiveDate;

wasm_bindgen_test_configure!(run_in_browser);

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

fn state_at_review() -> WizardState {
    let today = fixed_today();
    WizardState::new()
        .set_field(BookingField::Service, "wedding")
        .advance(today)
        .set_field(BookingField::Date, "2026-06-15")
        .advance(today)
        .set_field(BookingField::Name, "Elena Marchetti")
        .set_field(BookingField::Email, "elena@example.com")
        .set_field(BookingField::Phone, "5551234567")
        .set_field(BookingField::Venue, "Villa Balbianello")
        .advance(today)
}

// ============================================================================
// WizardStep Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_wizard_step_default() {
    assert_eq!(WizardStep::default(), WizardStep::Service);
}

#[wasm_bindgen_test]
fn test_wizard_step_rail_order() {
    let rail = WizardStep::rail();
    assert_eq!(rail.len(), 4);
    assert_eq!(rail[0], WizardStep::Service);
    assert_eq!(rail[1], WizardStep::Date);
    assert_eq!(rail[2], WizardStep::Details);
    assert_eq!(rail[3], WizardStep::Review);
}

#[wasm_bindgen_test]
fn test_wizard_step_labels() {
    assert_eq!(WizardStep::Service.label(), "Service");
    assert_eq!(WizardStep::Date.label(), "Date");
    assert_eq!(WizardStep::Details.label(), "Details");
    assert_eq!(WizardStep::Review.label(), "Review");
    assert_eq!(WizardStep::Success.label(), "Success");
}

#[wasm_bindgen_test]
fn test_wizard_step_descriptions_nonempty() {
    for step in WizardStep::rail() {
        assert!(!step.description().is_empty(), "step {step:?}");
    }
}

#[wasm_bindgen_test]
fn test_review_has_no_plain_next() {
    assert_eq!(WizardStep::Review.next(), None);
    assert_eq!(WizardStep::Success.next(), None);
    assert_eq!(WizardStep::Service.previous(), None);
    assert_eq!(WizardStep::Success.previous(), None);
}

// ============================================================================
// ServiceType Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_service_type_id_round_trip() {
    for service in ServiceType::all() {
        assert_eq!(ServiceType::from_id(service.id()), Some(service));
    }
    assert_eq!(ServiceType::from_id("astrophotography"), None);
}

// ============================================================================
// Transition Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_advance_blocked_without_service() {
    let state = WizardState::new().advance(fixed_today());
    assert_eq!(state.current_step, WizardStep::Service);
    assert!(state.error_for(BookingField::Service).is_some());
}

#[wasm_bindgen_test]
fn test_advance_clears_stale_errors() {
    let state = WizardState::new()
        .advance(fixed_today())
        .set_field(BookingField::Service, "fashion")
        .advance(fixed_today());
    assert_eq!(state.current_step, WizardStep::Date);
    assert!(state.field_errors.is_empty());
}

#[wasm_bindgen_test]
fn test_retreat_is_lossless() {
    let today = fixed_today();
    let at_date = WizardState::new()
        .set_field(BookingField::Service, "events")
        .advance(today)
        .set_field(BookingField::Date, "2026-07-04");
    let round_trip = at_date.retreat().advance(today);
    assert_eq!(round_trip.current_step, WizardStep::Date);
    assert_eq!(round_trip.draft, at_date.draft);
}

#[wasm_bindgen_test]
fn test_happy_path_reaches_success() {
    let state = state_at_review();
    assert_eq!(state.current_step, WizardStep::Review);

    let submitting = state.begin_submission(fixed_today());
    assert_eq!(submitting.submission, SubmissionStatus::Submitting);

    let done = submitting.resolve_submission(Ok(()));
    assert_eq!(done.current_step, WizardStep::Success);
    assert_eq!(done.submission, SubmissionStatus::Succeeded);
}

#[wasm_bindgen_test]
fn test_double_begin_submission_is_noop() {
    let submitting = state_at_review().begin_submission(fixed_today());
    let again = submitting.begin_submission(fixed_today());
    assert_eq!(again, submitting);
}

#[wasm_bindgen_test]
fn test_failed_submission_keeps_draft_on_review() {
    let submitting = state_at_review().begin_submission(fixed_today());
    let failed = submitting.resolve_submission(Err("network".to_string()));
    assert_eq!(failed.current_step, WizardStep::Review);
    assert_eq!(failed.submission, SubmissionStatus::Failed);
    assert_eq!(failed.submission_error.as_deref(), Some("network"));
    assert_eq!(failed.draft, submitting.draft);

    // Retry is allowed after a failure.
    let retry = failed.begin_submission(fixed_today());
    assert_eq!(retry.submission, SubmissionStatus::Submitting);
    assert_eq!(retry.submission_error, None);
}
