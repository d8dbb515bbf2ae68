pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::models::ConversationState;

/// Key-value persistence for conversation state, keyed by session id.
///
/// Writes are last-write-wins: two concurrent turns on the same session may
/// both read the same state and the later `set` replaces the earlier one.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, session_id: &str) -> anyhow::Result<Option<ConversationState>>;
    async fn set(&self, session_id: &str, state: &ConversationState) -> anyhow::Result<()>;
}
