use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Server-side record of an admin session. Only the SHA-256 hash of the
/// cookie token is stored.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct SessionRecord {
    pub token_hash: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// The resolved identity attached to a live session.
#[derive(Debug, Serialize, Clone)]
pub struct SessionIdentity {
    pub user_id: String,
    pub email: String,
    pub is_admin: bool,
}
