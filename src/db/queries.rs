use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{Conversation, ConversationState};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Sessions ──

pub fn get_session(conn: &Connection, session_id: &str) -> anyhow::Result<Option<Conversation>> {
    let now = Utc::now().naive_utc().format(TIMESTAMP_FORMAT).to_string();
    let mut stmt = conn.prepare(
        "SELECT id, state, location, last_activity, expires_at FROM sessions WHERE id = ?1 AND expires_at > ?2",
    )?;

    let result = stmt.query_row(params![session_id, now], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<String>>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    });

    match result {
        Ok((session_id, state_str, location, last_activity_str, expires_at_str)) => {
            let last_activity = NaiveDateTime::parse_from_str(&last_activity_str, TIMESTAMP_FORMAT)
                .unwrap_or_else(|_| Utc::now().naive_utc());
            let expires_at = NaiveDateTime::parse_from_str(&expires_at_str, TIMESTAMP_FORMAT)
                .unwrap_or_else(|_| Utc::now().naive_utc());

            Ok(Some(Conversation {
                session_id,
                state: ConversationState::parse(&state_str, location.as_deref()),
                last_activity,
                expires_at,
            }))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn save_session(conn: &Connection, conv: &Conversation) -> anyhow::Result<()> {
    let last_activity = conv.last_activity.format(TIMESTAMP_FORMAT).to_string();
    let expires_at = conv.expires_at.format(TIMESTAMP_FORMAT).to_string();

    conn.execute(
        "INSERT INTO sessions (id, state, location, last_activity, expires_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
           state = excluded.state,
           location = excluded.location,
           last_activity = excluded.last_activity,
           expires_at = excluded.expires_at",
        params![
            conv.session_id,
            conv.state.as_str(),
            conv.state.location(),
            last_activity,
            expires_at,
        ],
    )?;
    Ok(())
}

pub fn expire_old_sessions(conn: &Connection) -> anyhow::Result<usize> {
    let now = Utc::now().naive_utc().format(TIMESTAMP_FORMAT).to_string();
    let count = conn.execute("DELETE FROM sessions WHERE expires_at <= ?1", params![now])?;
    Ok(count)
}
