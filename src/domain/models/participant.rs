use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A certificate recipient. Email is the natural key: the store enforces
/// uniqueness on it and every self-service lookup starts from it, so it is
/// always held lowercase.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Participant {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub organization: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(email: String, full_name: String, organization: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_lowercase(),
            full_name,
            organization,
            created_at: Utc::now(),
        }
    }
}
