use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    RecommendHospital,
    BookAppointment,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::RecommendHospital => "recommend_hospital",
            Intent::BookAppointment => "book_appointment",
            Intent::Unknown => "unknown",
        }
    }
}

/// Slot values found in a single message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedEntities {
    pub location: Option<String>,
    pub specialty: Option<String>,
}
