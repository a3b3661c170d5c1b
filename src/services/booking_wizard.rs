//! Booking Wizard State Management
//!
//! The wizard that walks a client from service selection to a submitted
//! booking request. The state machine itself is a set of pure value-to-value
//! transitions on [`WizardState`], independent of Leptos, so it can be unit
//! tested without a UI harness. [`BookingContext`] wraps the machine in
//! reactive signals for the component tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};

use crate::bindings::booking::submit_booking;
use crate::services::validation::{validate_step, StepValidation};

// ============================================================================
// Types
// ============================================================================

/// The four services the studio offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Wedding,
    Fashion,
    Events,
    Commercial,
}

impl ServiceType {
    /// Stable identifier used in form values and API payloads.
    pub fn id(&self) -> &'static str {
        match self {
            ServiceType::Wedding => "wedding",
            ServiceType::Fashion => "fashion",
            ServiceType::Events => "events",
            ServiceType::Commercial => "commercial",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "wedding" => Some(ServiceType::Wedding),
            "fashion" => Some(ServiceType::Fashion),
            "events" => Some(ServiceType::Events),
            "commercial" => Some(ServiceType::Commercial),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Wedding => "Wedding Photography",
            ServiceType::Fashion => "Fashion & Editorial",
            ServiceType::Events => "Event Coverage",
            ServiceType::Commercial => "Commercial Shots",
        }
    }

    /// Short category name, as shown on portfolio filters.
    pub fn category(&self) -> &'static str {
        match self {
            ServiceType::Wedding => "Weddings",
            ServiceType::Fashion => "Fashion",
            ServiceType::Events => "Events",
            ServiceType::Commercial => "Commercial",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            ServiceType::Wedding,
            ServiceType::Fashion,
            ServiceType::Events,
            ServiceType::Commercial,
        ]
    }
}

/// Every field of the booking draft, used as the key of the error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    Service,
    Date,
    Name,
    Email,
    Phone,
    Venue,
    Details,
}

/// The answers accumulated across the wizard. Created empty when the wizard
/// mounts, discarded on unmount; only [`WizardState::set_field`] writes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub service_type: Option<ServiceType>,
    /// Calendar date as `YYYY-MM-DD`, the value of a date input.
    pub date: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub venue: String,
    pub details: String,
}

impl BookingDraft {
    /// The raw text of a field, as seen by the validators. The service
    /// selection reads as its id so every rule works over `&str`.
    pub fn text(&self, field: BookingField) -> &str {
        match field {
            BookingField::Service => self.service_type.map(|s| s.id()).unwrap_or(""),
            BookingField::Date => &self.date,
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::Venue => &self.venue,
            BookingField::Details => &self.details,
        }
    }
}

/// Wizard step enum - strictly linear, no skip transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Service,
    Date,
    Details,
    Review,
    Success,
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Service => "Service",
            WizardStep::Date => "Date",
            WizardStep::Details => "Details",
            WizardStep::Review => "Review",
            WizardStep::Success => "Success",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Service => "What are we creating?",
            WizardStep::Date => "When is the magic happening?",
            WizardStep::Details => "The finer details",
            WizardStep::Review => "Review and request",
            WizardStep::Success => "Request received",
        }
    }

    /// 1-based position, for the progress rail.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Service => 1,
            WizardStep::Date => 2,
            WizardStep::Details => 3,
            WizardStep::Review => 4,
            WizardStep::Success => 5,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::Service => Some(WizardStep::Date),
            WizardStep::Date => Some(WizardStep::Details),
            WizardStep::Details => Some(WizardStep::Review),
            // Review is only left through a successful submission.
            WizardStep::Review => None,
            WizardStep::Success => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::Service => None,
            WizardStep::Date => Some(WizardStep::Service),
            WizardStep::Details => Some(WizardStep::Date),
            WizardStep::Review => Some(WizardStep::Details),
            // No back navigation from the terminal step.
            WizardStep::Success => None,
        }
    }

    /// The four steps shown on the progress rail; Success has no marker.
    pub fn rail() -> Vec<Self> {
        vec![
            WizardStep::Service,
            WizardStep::Date,
            WizardStep::Details,
            WizardStep::Review,
        ]
    }
}

/// Lifecycle of the one submission a wizard instance performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

// ============================================================================
// State machine
// ============================================================================

/// Complete wizard state. Transitions return the next value rather than
/// mutating in place, so every path is directly testable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub current_step: WizardStep,
    pub draft: BookingDraft,
    pub submission: SubmissionStatus,
    /// Per-field messages from the last failed advance, keyed by field.
    pub field_errors: BTreeMap<BookingField, String>,
    /// Session-level message from a failed submission.
    pub submission_error: Option<String>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one field of the draft. Never advances, never fails; stale
    /// errors stay until the next `advance` re-validates them.
    pub fn set_field(&self, field: BookingField, value: &str) -> WizardState {
        let mut next = self.clone();
        match field {
            BookingField::Service => next.draft.service_type = ServiceType::from_id(value),
            BookingField::Date => next.draft.date = value.to_string(),
            BookingField::Name => next.draft.name = value.to_string(),
            BookingField::Email => next.draft.email = value.to_string(),
            BookingField::Phone => next.draft.phone = value.to_string(),
            BookingField::Venue => next.draft.venue = value.to_string(),
            BookingField::Details => next.draft.details = value.to_string(),
        }
        next
    }

    /// Validate the current step without mutating anything.
    pub fn validate_current(&self, today: NaiveDate) -> StepValidation {
        validate_step(self.current_step, &self.draft, today)
    }

    /// Move forward one step if the current step validates; otherwise record
    /// the field errors and stay put.
    pub fn advance(&self, today: NaiveDate) -> WizardState {
        let mut next = self.clone();
        let Some(target) = self.current_step.next() else {
            return next;
        };

        let validation = self.validate_current(today);
        if validation.is_valid() {
            next.current_step = target;
            next.field_errors.clear();
        } else {
            next.field_errors = validation.errors;
        }
        next
    }

    /// Move back one step. Never validates; the draft is untouched so back
    /// navigation is lossless.
    pub fn retreat(&self) -> WizardState {
        let mut next = self.clone();
        if let Some(target) = self.current_step.previous() {
            next.current_step = target;
            next.field_errors.clear();
        }
        next
    }

    /// Enter `Submitting`, but only from Review, only when no submission is
    /// in flight, and only with a fully valid draft. Anything else is a
    /// no-op, which is what makes a double-click on Confirm harmless.
    pub fn begin_submission(&self, today: NaiveDate) -> WizardState {
        let mut next = self.clone();
        if self.current_step != WizardStep::Review
            || self.submission == SubmissionStatus::Submitting
        {
            return next;
        }

        let validation = self.validate_current(today);
        if !validation.is_valid() {
            next.field_errors = validation.errors;
            return next;
        }

        next.submission = SubmissionStatus::Submitting;
        next.submission_error = None;
        next
    }

    /// Apply the collaborator's answer. Success forces the terminal step;
    /// failure keeps the draft and the Review step so the user can retry.
    pub fn resolve_submission(&self, result: Result<(), String>) -> WizardState {
        let mut next = self.clone();
        if self.submission != SubmissionStatus::Submitting {
            return next;
        }
        match result {
            Ok(()) => {
                next.submission = SubmissionStatus::Succeeded;
                next.current_step = WizardStep::Success;
            }
            Err(message) => {
                next.submission = SubmissionStatus::Failed;
                next.submission_error = Some(message);
            }
        }
        next
    }

    pub fn error_for(&self, field: BookingField) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionStatus::Submitting
    }
}

/// Today's calendar date in the browser's local timezone, matching the
/// timezone the date input displays.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ============================================================================
// Booking Context - Reactive State Management
// ============================================================================

/// Reactive container for one wizard instance. Provided when the booking
/// page mounts; the draft dies with it.
#[derive(Clone, Copy)]
pub struct BookingContext {
    pub state: RwSignal<WizardState>,
}

impl BookingContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(WizardState::new()),
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.get().current_step
    }

    pub fn draft(&self) -> BookingDraft {
        self.state.get().draft.clone()
    }

    pub fn error_for(&self, field: BookingField) -> Option<String> {
        self.state.get().field_errors.get(&field).cloned()
    }

    pub fn submission_error(&self) -> Option<String> {
        self.state.get().submission_error.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.get().is_submitting()
    }

    pub fn set_field(&self, field: BookingField, value: &str) {
        self.state.update(|s| *s = s.set_field(field, value));
    }

    pub fn advance(&self) {
        let today = today();
        self.state.update(|s| *s = s.advance(today));
    }

    pub fn retreat(&self) {
        self.state.update(|s| *s = s.retreat());
    }
}

impl Default for BookingContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_booking_context() {
    provide_context(BookingContext::new());
}

pub fn use_booking_context() -> BookingContext {
    expect_context::<BookingContext>()
}

// ============================================================================
// Actions
// ============================================================================

/// Kick off the one submission, guarded by the state machine: if
/// `begin_submission` refuses (wrong step, already in flight), the
/// collaborator is never called.
pub fn submit_action(ctx: BookingContext) -> impl Fn() + Clone {
    move || {
        let before = ctx.state.get_untracked();
        let next = before.begin_submission(today());
        let started = next.submission == SubmissionStatus::Submitting
            && before.submission != SubmissionStatus::Submitting;
        ctx.state.set(next);

        if !started {
            return;
        }

        let draft = ctx.state.get_untracked().draft.clone();
        spawn_local(async move {
            let result = submit_booking(&draft).await.map(|_| ());
            if let Err(e) = &result {
                log::warn!("booking submission failed: {e}");
            }
            ctx.state.update(|s| *s = s.resolve_submission(result));
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn filled_state() -> WizardState {
        WizardState::new()
            .set_field(BookingField::Service, "fashion")
            .set_field(BookingField::Date, "2030-06-10")
            .set_field(BookingField::Name, "Jane Doe")
            .set_field(BookingField::Email, "jane@x.com")
            .set_field(BookingField::Phone, "1234567890")
            .set_field(BookingField::Venue, "Studio A")
    }

    #[test]
    fn test_step_navigation() {
        assert_eq!(WizardStep::Service.next(), Some(WizardStep::Date));
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::Success.next(), None);
        assert_eq!(WizardStep::Service.previous(), None);
        assert_eq!(WizardStep::Review.previous(), Some(WizardStep::Details));
        assert_eq!(WizardStep::Success.previous(), None);
    }

    #[test]
    fn test_service_ids_round_trip() {
        for service in ServiceType::all() {
            assert_eq!(ServiceType::from_id(service.id()), Some(service));
        }
        assert_eq!(ServiceType::from_id("astro"), None);
    }

    #[test]
    fn test_advance_from_service_requires_selection() {
        let today = day("2024-05-01");
        let state = WizardState::new();

        let stuck = state.advance(today);
        assert_eq!(stuck.current_step, WizardStep::Service);
        assert_eq!(
            stuck.error_for(BookingField::Service),
            Some("Please select a service type")
        );

        let moved = state
            .set_field(BookingField::Service, "wedding")
            .advance(today);
        assert_eq!(moved.current_step, WizardStep::Date);
        assert!(moved.field_errors.is_empty());
    }

    #[test]
    fn test_advance_clears_errors_once_field_passes() {
        let today = day("2024-05-01");
        let failed = WizardState::new().advance(today);
        assert!(!failed.field_errors.is_empty());

        let fixed = failed
            .set_field(BookingField::Service, "events")
            .advance(today);
        assert_eq!(fixed.current_step, WizardStep::Date);
        assert!(fixed.field_errors.is_empty());
    }

    #[test]
    fn test_set_field_is_idempotent() {
        let state = filled_state();
        let again = state.set_field(BookingField::Name, "Jane Doe");
        assert_eq!(state, again);
    }

    #[test]
    fn test_set_field_never_advances() {
        let state = WizardState::new().set_field(BookingField::Service, "commercial");
        assert_eq!(state.current_step, WizardStep::Service);
    }

    #[test]
    fn test_retreat_round_trip_preserves_draft() {
        let today = day("2024-05-01");
        let at_date = filled_state().advance(today);
        assert_eq!(at_date.current_step, WizardStep::Date);

        let back = at_date.retreat();
        assert_eq!(back.current_step, WizardStep::Service);
        assert_eq!(back.draft, at_date.draft);

        // Retreat never validates, even with a mangled draft.
        let mangled = at_date.set_field(BookingField::Service, "").retreat();
        assert_eq!(mangled.current_step, WizardStep::Service);
    }

    #[test]
    fn test_retreat_is_noop_on_first_step() {
        let state = WizardState::new();
        assert_eq!(state.retreat().current_step, WizardStep::Service);
    }

    #[test]
    fn test_begin_submission_only_from_review() {
        let today = day("2024-05-01");
        let state = filled_state();
        assert_eq!(
            state.begin_submission(today).submission,
            SubmissionStatus::Idle
        );

        let at_review = state.advance(today).advance(today).advance(today);
        assert_eq!(at_review.current_step, WizardStep::Review);
        assert_eq!(
            at_review.begin_submission(today).submission,
            SubmissionStatus::Submitting
        );
    }

    #[test]
    fn test_at_most_one_submission_in_flight() {
        let today = day("2024-05-01");
        let submitting = filled_state()
            .advance(today)
            .advance(today)
            .advance(today)
            .begin_submission(today);
        assert!(submitting.is_submitting());

        // A second begin while in flight changes nothing.
        assert_eq!(submitting.begin_submission(today), submitting);
    }

    #[test]
    fn test_submission_failure_is_retryable() {
        let today = day("2024-05-01");
        let submitting = filled_state()
            .advance(today)
            .advance(today)
            .advance(today)
            .begin_submission(today);

        let failed = submitting.resolve_submission(Err("service unavailable".to_string()));
        assert_eq!(failed.submission, SubmissionStatus::Failed);
        assert_eq!(failed.current_step, WizardStep::Review);
        assert_eq!(
            failed.submission_error.as_deref(),
            Some("service unavailable")
        );
        assert_eq!(failed.draft, submitting.draft);

        // Retry clears the banner and goes back in flight.
        let retried = failed.begin_submission(today);
        assert_eq!(retried.submission, SubmissionStatus::Submitting);
        assert!(retried.submission_error.is_none());
    }

    #[test]
    fn test_resolve_without_inflight_submission_is_noop() {
        let state = filled_state();
        assert_eq!(state.resolve_submission(Ok(())), state);
    }

    #[test]
    fn test_happy_path_to_success() {
        let today = day("2024-05-01");
        let mut state = WizardState::new()
            .set_field(BookingField::Service, "fashion")
            .set_field(BookingField::Date, "2030-06-10")
            .set_field(BookingField::Name, "Jane Doe")
            .set_field(BookingField::Email, "jane@x.com")
            .set_field(BookingField::Phone, "1234567890")
            .set_field(BookingField::Venue, "Studio A");

        for expected in [WizardStep::Date, WizardStep::Details, WizardStep::Review] {
            state = state.advance(today);
            assert_eq!(state.current_step, expected);
            assert!(state.field_errors.is_empty());
        }

        state = state.begin_submission(today).resolve_submission(Ok(()));
        assert_eq!(state.current_step, WizardStep::Success);
        assert_eq!(state.submission, SubmissionStatus::Succeeded);
    }

    #[test]
    fn test_advance_is_noop_on_review_and_success() {
        let today = day("2024-05-01");
        let at_review = filled_state().advance(today).advance(today).advance(today);
        assert_eq!(at_review.advance(today).current_step, WizardStep::Review);

        let done = at_review.begin_submission(today).resolve_submission(Ok(()));
        assert_eq!(done.advance(today).current_step, WizardStep::Success);
    }
}
