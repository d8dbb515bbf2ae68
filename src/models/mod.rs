pub mod booking;
pub mod conversation;
pub mod hospital;
pub mod intent;

pub use booking::BookingRequest;
pub use conversation::{Conversation, ConversationState, TurnInput, TurnOutput};
pub use hospital::{Hospital, HospitalSummary};
pub use intent::{ExtractedEntities, Intent};
