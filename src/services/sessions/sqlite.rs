use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rusqlite::Connection;

use super::SessionStore;
use crate::db::queries;
use crate::models::{Conversation, ConversationState};

/// Stores conversations in the `sessions` table. Each write pushes the
/// expiry `ttl` into the future; expired rows read as absent.
pub struct SqliteSessionStore {
    db: Arc<Mutex<Connection>>,
    ttl: Duration,
}

impl SqliteSessionStore {
    pub fn new(db: Arc<Mutex<Connection>>, ttl: Duration) -> Self {
        Self { db, ttl }
    }

    pub fn expire_old_sessions(&self) -> anyhow::Result<usize> {
        let db = self
            .db
            .lock()
            .map_err(|_| anyhow::anyhow!("session database lock poisoned"))?;
        queries::expire_old_sessions(&db)
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn get(&self, session_id: &str) -> anyhow::Result<Option<ConversationState>> {
        let db = self
            .db
            .lock()
            .map_err(|_| anyhow::anyhow!("session database lock poisoned"))?;
        Ok(queries::get_session(&db, session_id)?.map(|conv| conv.state))
    }

    async fn set(&self, session_id: &str, state: &ConversationState) -> anyhow::Result<()> {
        let now = Utc::now().naive_utc();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| anyhow::anyhow!("session ttl {} overflows expiry time", self.ttl))?;
        let conv = Conversation {
            session_id: session_id.to_string(),
            state: state.clone(),
            last_activity: now,
            expires_at,
        };

        let db = self
            .db
            .lock()
            .map_err(|_| anyhow::anyhow!("session database lock poisoned"))?;
        queries::save_session(&db, &conv)
    }
}
