//! Inbound event payloads.
//!
//! Every wire field deserializes as optional; required-field checking is an
//! explicit validation step in the dispatcher so the caller gets the fixed
//! 400 body instead of a deserializer error.

use serde::Deserialize;

/// A parent reserved an available toy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub parent_email: Option<String>,
    pub parent_name: Option<String>,
    pub child_name: Option<String>,
    pub item_name: Option<String>,
    pub preferred_day: Option<String>,
    /// Free-text note from the reservation form
    pub note: Option<String>,
}

/// A parent joined the waitlist for a toy that is out on loan.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistRequest {
    pub parent_email: Option<String>,
    pub parent_name: Option<String>,
    pub child_name: Option<String>,
    pub item_name: Option<String>,
}

/// A loan changed status ("On Loan", "Ready for Pickup", "Returned", ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub parent_email: Option<String>,
    pub parent_name: Option<String>,
    pub child_name: Option<String>,
    pub item_name: Option<String>,
    pub new_status: Option<String>,
    pub preferred_day: Option<String>,
}
