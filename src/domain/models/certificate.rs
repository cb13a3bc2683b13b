use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// The free-form payload snapshotted onto a certificate at generation time.
/// Wire keys stay camelCase for compatibility with previously issued rows.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub participant_name: String,
    pub event_name: String,
    pub issue_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifying_authority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
}

/// An issued certificate. Append-only: rows are never mutated, and the
/// template snapshot is never re-derived from the live participant or event.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Certificate {
    pub id: String,
    pub participant_id: String,
    pub event_id: String,
    pub certificate_number: String,
    pub issue_date: NaiveDate,
    pub template_data: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Certificate {
    pub fn new(
        participant_id: String,
        event_id: String,
        certificate_number: String,
        issue_date: NaiveDate,
        template_data: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            participant_id,
            event_id,
            certificate_number,
            issue_date,
            template_data,
            created_at: Utc::now(),
        }
    }

    pub fn template(&self) -> Option<TemplateData> {
        self.template_data
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }
}

/// A certificate inner-joined with its participant and event rows, as
/// returned by search and admin listings. Certificates whose participant or
/// event row is gone never appear here.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct IssuedCertificate {
    pub id: String,
    pub participant_id: String,
    pub event_id: String,
    pub certificate_number: String,
    pub issue_date: NaiveDate,
    pub template_data: Option<String>,
    pub created_at: DateTime<Utc>,
    pub participant_email: String,
    pub participant_full_name: String,
    pub participant_organization: Option<String>,
    pub event_name: String,
}

impl IssuedCertificate {
    pub fn template(&self) -> Option<TemplateData> {
        self.template_data
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }
}
