use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::SessionStore;
use crate::models::ConversationState;

/// Process-local store. State lives until the process exits.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, ConversationState>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, session_id: &str) -> anyhow::Result<Option<ConversationState>> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|_| anyhow::anyhow!("session map lock poisoned"))?;
        Ok(sessions.get(session_id).cloned())
    }

    async fn set(&self, session_id: &str, state: &ConversationState) -> anyhow::Result<()> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| anyhow::anyhow!("session map lock poisoned"))?;
        sessions.insert(session_id.to_string(), state.clone());
        Ok(())
    }
}
