//! Declarative field validation for the booking wizard
//!
//! Each wizard step owns a static table of `FieldRule`s. A single generic
//! evaluator walks the table, so adding a field or a step is a data change,
//! not a new code path. Rules are checked independently per field; the first
//! failing rule for a field supplies its message.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::booking_wizard::{BookingDraft, BookingField, WizardStep};

/// A typed validation rule applied to a single draft field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// A service option must be selected.
    Selected,
    /// Trimmed value must be at least this many characters.
    MinLen(usize),
    /// Value must match the email-address grammar.
    Email,
    /// Value must parse as `YYYY-MM-DD` and not be earlier than today.
    NotBeforeToday,
}

/// A rule bound to the field it constrains, with its user-facing message.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: BookingField,
    pub rule: Rule,
    pub message: &'static str,
}

const SERVICE_RULES: &[FieldRule] = &[FieldRule {
    field: BookingField::Service,
    rule: Rule::Selected,
    message: "Please select a service type",
}];

const DATE_RULES: &[FieldRule] = &[
    FieldRule {
        field: BookingField::Date,
        rule: Rule::MinLen(1),
        message: "Please select a date",
    },
    FieldRule {
        field: BookingField::Date,
        rule: Rule::NotBeforeToday,
        message: "Date cannot be in the past",
    },
];

const DETAILS_RULES: &[FieldRule] = &[
    FieldRule {
        field: BookingField::Name,
        rule: Rule::MinLen(2),
        message: "Name must be at least 2 characters",
    },
    FieldRule {
        field: BookingField::Email,
        rule: Rule::Email,
        message: "Invalid email address",
    },
    FieldRule {
        field: BookingField::Phone,
        rule: Rule::MinLen(10),
        message: "Phone number must be at least 10 digits",
    },
    FieldRule {
        field: BookingField::Venue,
        rule: Rule::MinLen(2),
        message: "Venue is required",
    },
];

const REVIEW_RULES: &[FieldRule] = &[
    FieldRule {
        field: BookingField::Service,
        rule: Rule::Selected,
        message: "Please select a service type",
    },
    FieldRule {
        field: BookingField::Date,
        rule: Rule::MinLen(1),
        message: "Please select a date",
    },
    FieldRule {
        field: BookingField::Date,
        rule: Rule::NotBeforeToday,
        message: "Date cannot be in the past",
    },
    FieldRule {
        field: BookingField::Name,
        rule: Rule::MinLen(2),
        message: "Name must be at least 2 characters",
    },
    FieldRule {
        field: BookingField::Email,
        rule: Rule::Email,
        message: "Invalid email address",
    },
    FieldRule {
        field: BookingField::Phone,
        rule: Rule::MinLen(10),
        message: "Phone number must be at least 10 digits",
    },
    FieldRule {
        field: BookingField::Venue,
        rule: Rule::MinLen(2),
        message: "Venue is required",
    },
];

/// The rule table gating forward progression out of a step.
///
/// Review re-checks the entire draft so a submission can never leave with
/// invalid data; Success gates nothing.
pub fn rules_for_step(step: WizardStep) -> &'static [FieldRule] {
    match step {
        WizardStep::Service => SERVICE_RULES,
        WizardStep::Date => DATE_RULES,
        WizardStep::Details => DETAILS_RULES,
        WizardStep::Review => REVIEW_RULES,
        WizardStep::Success => &[],
    }
}

/// Result of validating one step against the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepValidation {
    pub errors: BTreeMap<BookingField, String>,
}

impl StepValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate `draft` against the rules of `step`. Pure: mutates nothing.
///
/// Fields are evaluated independently, so the resulting error set does not
/// depend on table order (only which message a multi-rule field reports).
pub fn validate_step(step: WizardStep, draft: &BookingDraft, today: NaiveDate) -> StepValidation {
    let mut result = StepValidation::default();

    for rule in rules_for_step(step) {
        if result.errors.contains_key(&rule.field) {
            continue;
        }
        if !check_rule(rule.rule, rule.field, draft, today) {
            result.errors.insert(rule.field, rule.message.to_string());
        }
    }

    result
}

fn check_rule(rule: Rule, field: BookingField, draft: &BookingDraft, today: NaiveDate) -> bool {
    match rule {
        Rule::Selected => draft.service_type.is_some(),
        Rule::MinLen(min) => draft.text(field).trim().chars().count() >= min,
        Rule::Email => is_valid_email(draft.text(field).trim()),
        Rule::NotBeforeToday => NaiveDate::parse_from_str(draft.text(field).trim(), "%Y-%m-%d")
            .map(|d| d >= today)
            .unwrap_or(false),
    }
}

/// Minimal email grammar: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::booking_wizard::ServiceType;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn valid_draft() -> BookingDraft {
        let mut draft = BookingDraft::default();
        draft.service_type = Some(ServiceType::Fashion);
        draft.date = "2030-06-10".to_string();
        draft.name = "Jane Doe".to_string();
        draft.email = "jane@x.com".to_string();
        draft.phone = "1234567890".to_string();
        draft.venue = "Studio A".to_string();
        draft
    }

    #[test]
    fn test_service_step_requires_selection() {
        let today = day("2024-05-01");
        let draft = BookingDraft::default();

        let result = validate_step(WizardStep::Service, &draft, today);
        assert_eq!(
            result.errors.get(&BookingField::Service).map(String::as_str),
            Some("Please select a service type")
        );

        let mut draft = draft;
        draft.service_type = Some(ServiceType::Wedding);
        assert!(validate_step(WizardStep::Service, &draft, today).is_valid());
    }

    #[test]
    fn test_date_lower_bound() {
        let today = day("2024-05-01");
        let mut draft = valid_draft();

        draft.date = "2024-04-30".to_string(); // yesterday
        assert!(!validate_step(WizardStep::Date, &draft, today).is_valid());

        draft.date = "2024-05-01".to_string(); // today
        assert!(validate_step(WizardStep::Date, &draft, today).is_valid());

        draft.date = "2024-05-02".to_string(); // tomorrow
        assert!(validate_step(WizardStep::Date, &draft, today).is_valid());
    }

    #[test]
    fn test_empty_date_reports_missing_not_past() {
        let today = day("2024-05-01");
        let mut draft = valid_draft();
        draft.date = String::new();

        let result = validate_step(WizardStep::Date, &draft, today);
        assert_eq!(
            result.errors.get(&BookingField::Date).map(String::as_str),
            Some("Please select a date")
        );
    }

    #[test]
    fn test_email_rule() {
        let today = day("2024-05-01");
        let mut draft = valid_draft();

        draft.email = "not-an-email".to_string();
        let result = validate_step(WizardStep::Details, &draft, today);
        assert_eq!(
            result.errors.get(&BookingField::Email).map(String::as_str),
            Some("Invalid email address")
        );

        draft.email = "a@b.com".to_string();
        assert!(validate_step(WizardStep::Details, &draft, today).is_valid());
    }

    #[test]
    fn test_phone_minimum_length() {
        let today = day("2024-05-01");
        let mut draft = valid_draft();

        draft.phone = "123456789".to_string(); // 9 chars
        assert!(!validate_step(WizardStep::Details, &draft, today).is_valid());

        draft.phone = "1234567890".to_string(); // exactly 10
        assert!(validate_step(WizardStep::Details, &draft, today).is_valid());
    }

    #[test]
    fn test_details_errors_are_independent_per_field() {
        let today = day("2024-05-01");
        let mut draft = valid_draft();
        draft.name = "J".to_string();
        draft.email = "nope".to_string();
        draft.venue = String::new();

        let result = validate_step(WizardStep::Details, &draft, today);
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.contains_key(&BookingField::Name));
        assert!(result.errors.contains_key(&BookingField::Email));
        assert!(result.errors.contains_key(&BookingField::Venue));
        assert!(!result.errors.contains_key(&BookingField::Phone));
    }

    #[test]
    fn test_review_checks_full_draft() {
        let today = day("2024-05-01");
        assert!(validate_step(WizardStep::Review, &valid_draft(), today).is_valid());
        assert!(!validate_step(WizardStep::Review, &BookingDraft::default(), today).is_valid());
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@studio.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_success_step_has_no_rules() {
        assert!(rules_for_step(WizardStep::Success).is_empty());
    }
}
