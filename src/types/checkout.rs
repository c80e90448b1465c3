use chrono::{DateTime, Utc};
use serde::Serialize;

use super::EntityId;

/// Partial update that flips an assignment's checkout status
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutStatusUpdate {
    pub checkout_status: bool,
}

/// Partial update recording a check-in
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinUpdate {
    pub checkout_status: bool,
    pub checkin_date: DateTime<Utc>,
    pub checked_in_by: EntityId,
}
