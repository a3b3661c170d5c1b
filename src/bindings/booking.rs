//! Submission collaborator for booking and contact requests
//!
//! The wizard core hands a finished draft to this boundary and only ever
//! sees the `Result`; transport details stay here.

use serde::{Deserialize, Serialize};

use super::http::{post_json, post_json_void};
use crate::services::booking_wizard::{BookingDraft, ServiceType};

/// Wire form of a completed booking draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub service_type: ServiceType,
    pub date: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl BookingRequest {
    /// Build the wire form. Callers must have validated the draft; a missing
    /// service selection is rejected here rather than silently defaulted.
    pub fn from_draft(draft: &BookingDraft) -> Result<Self, String> {
        let service_type = draft
            .service_type
            .ok_or_else(|| "No service selected".to_string())?;
        Ok(Self {
            service_type,
            date: draft.date.trim().to_string(),
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            venue: draft.venue.trim().to_string(),
            details: if draft.details.trim().is_empty() {
                None
            } else {
                Some(draft.details.trim().to_string())
            },
        })
    }
}

/// Acknowledgement returned by the studio backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
    pub reference: String,
}

/// Send a completed booking draft to the studio backend.
pub async fn submit_booking(draft: &BookingDraft) -> Result<BookingReceipt, String> {
    let request = BookingRequest::from_draft(draft)?;
    post_json("/api/bookings", &request).await
}

/// A message from the contact page form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Send a contact-page message to the studio backend.
pub async fn submit_contact_message(message: &ContactMessage) -> Result<(), String> {
    post_json_void("/api/contact", message).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_requires_service_selection() {
        let draft = BookingDraft::default();
        assert!(BookingRequest::from_draft(&draft).is_err());
    }

    #[test]
    fn test_request_trims_and_drops_empty_details() {
        let mut draft = BookingDraft::default();
        draft.service_type = Some(ServiceType::Events);
        draft.date = "2030-06-10".to_string();
        draft.name = "  Jane Doe  ".to_string();
        draft.email = "jane@x.com".to_string();
        draft.phone = "1234567890".to_string();
        draft.venue = "Studio A".to_string();
        draft.details = "   ".to_string();

        let request = BookingRequest::from_draft(&draft).unwrap();
        assert_eq!(request.name, "Jane Doe");
        assert!(request.details.is_none());
    }
}
