//! Validation Schema Tests
//!
//! Declarative per-step rules evaluated against drafts with a fixed clock.

use wasm_bindgen_test::*;

use atelier_lumen_frontend::services::booking_wizard::{BookingDraft, BookingField, ServiceType, WizardStep};
use atelier_lumen_frontend::services::validation::{rules_for_step, validate_step};
use chrono::NaiveDate;

wasm_bindgen_test_configure!(run_in_browser);

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

fn complete_draft() -> BookingDraft {
    let mut draft = BookingDraft::default();
    draft.service_type = Some(ServiceType::Wedding);
    draft.date = "2026-06-15".to_string();
    draft.name = "Elena Marchetti".to_string();
    draft.email = "elena@example.com".to_string();
    draft.phone = "5551234567".to_string();
    draft.venue = "Villa Balbianello".to_string();
    draft
}

#[wasm_bindgen_test]
fn test_every_step_has_rules_except_success() {
    assert!(!rules_for_step(WizardStep::Service).is_empty());
    assert!(!rules_for_step(WizardStep::Date).is_empty());
    assert!(!rules_for_step(WizardStep::Details).is_empty());
    assert!(!rules_for_step(WizardStep::Review).is_empty());
    assert!(rules_for_step(WizardStep::Success).is_empty());
}

#[wasm_bindgen_test]
fn test_yesterday_rejected_today_accepted() {
    let mut draft = complete_draft();
    let today = fixed_today();

    draft.date = "2026-05-31".to_string();
    let result = validate_step(WizardStep::Date, &draft, today);
    assert_eq!(
        result.errors.get(&BookingField::Date).map(String::as_str),
        Some("Date cannot be in the past")
    );

    draft.date = "2026-06-01".to_string();
    assert!(validate_step(WizardStep::Date, &draft, today).is_valid());
}

#[wasm_bindgen_test]
fn test_details_step_reports_each_field_independently() {
    let mut draft = complete_draft();
    draft.name = "E".to_string();
    draft.phone = "12345".to_string();

    let result = validate_step(WizardStep::Details, &draft, fixed_today());
    assert_eq!(
        result.errors.get(&BookingField::Name).map(String::as_str),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(
        result.errors.get(&BookingField::Phone).map(String::as_str),
        Some("Phone number must be at least 10 digits")
    );
    assert!(!result.errors.contains_key(&BookingField::Email));
    assert!(!result.errors.contains_key(&BookingField::Venue));
}

#[wasm_bindgen_test]
fn test_review_revalidates_whole_draft() {
    let mut draft = complete_draft();
    draft.email = "not-an-email".to_string();
    let result = validate_step(WizardStep::Review, &draft, fixed_today());
    assert_eq!(
        result.errors.get(&BookingField::Email).map(String::as_str),
        Some("Invalid email address")
    );
}
