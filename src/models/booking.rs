use serde::{Deserialize, Serialize};

/// Identifiers handed to the booking stub. Nothing parses these from the
/// user's text yet, so every booking uses [`BookingRequest::placeholder`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    pub hospital_id: String,
    pub user_id: String,
    pub time_slot: String,
}

impl BookingRequest {
    pub fn placeholder() -> Self {
        Self {
            hospital_id: "H123".to_string(),
            user_id: "U456".to_string(),
            time_slot: "2023-10-15 10:00".to_string(),
        }
    }
}
