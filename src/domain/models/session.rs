use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;

/// Server-side admin session. Only the sha256 hash of the cookie token is
/// stored; the raw value never touches the database.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AdminSession {
    pub token_hash: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn new(user_id: String, token_hash: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token_hash,
            user_id,
            expires_at: now + ttl,
            created_at: now,
        }
    }
}
