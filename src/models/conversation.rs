use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Where a conversation is in the slot-filling dialogue.
///
/// The location is carried inside `AwaitingSpecialty`, so a conversation can
/// never wait for a specialty without already knowing where to search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Start,
    AwaitingLocation,
    AwaitingSpecialty { location: String },
}

impl ConversationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::Start => "start",
            ConversationState::AwaitingLocation => "awaiting_location",
            ConversationState::AwaitingSpecialty { .. } => "awaiting_specialty",
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            ConversationState::AwaitingSpecialty { location } => Some(location),
            _ => None,
        }
    }

    /// Rebuilds a state from its stored columns. Anything unrecognised,
    /// including `awaiting_specialty` without a location, falls back to `Start`.
    pub fn parse(state: &str, location: Option<&str>) -> Self {
        match (state, location) {
            ("awaiting_location", _) => ConversationState::AwaitingLocation,
            ("awaiting_specialty", Some(location)) => ConversationState::AwaitingSpecialty {
                location: location.to_string(),
            },
            ("start", _) => ConversationState::Start,
            _ => {
                tracing::warn!(state, "unrecognised stored conversation state, resetting");
                ConversationState::Start
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnInput {
    pub text: String,
    pub state: ConversationState,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnOutput {
    pub response: String,
    pub state: ConversationState,
}

/// A stored conversation row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub session_id: String,
    pub state: ConversationState,
    pub last_activity: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}
