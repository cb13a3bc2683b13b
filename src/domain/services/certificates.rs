use crate::domain::models::{certificate::TemplateData, event::Event, participant::Participant};
use crate::domain::services::defaults;
use chrono::{Datelike, NaiveDate, Utc};
use rand::Rng;

/// Admin-supplied overrides applied on top of the template defaults.
#[derive(Debug, Default, Clone)]
pub struct CertificateOverrides {
    pub certificate_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub certifying_authority: Option<String>,
    pub position: Option<String>,
    pub venue: Option<String>,
    pub custom_text: Option<String>,
}

/// `{PREFIX}-{0..9999}-{year}`, e.g. `TEKRON-4821-2025`.
///
/// Not guaranteed unique: collisions are possible at scale and are neither
/// detected nor handled anywhere in the system.
pub fn generate_certificate_number(prefix: &str) -> String {
    let serial: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("{}-{}-{}", prefix, serial, Utc::now().year())
}

/// Merges a participant and an event into the template payload snapshotted
/// onto the certificate. Performs no validation beyond shape; every field
/// is still editable by the caller before commit.
pub fn assemble(
    participant: &Participant,
    event: &Event,
    overrides: &CertificateOverrides,
) -> TemplateData {
    TemplateData {
        participant_name: participant.full_name.clone(),
        event_name: event.name.clone(),
        issue_date: overrides
            .issue_date
            .unwrap_or_else(|| Utc::now().date_naive()),
        certifying_authority: Some(
            overrides
                .certifying_authority
                .clone()
                .unwrap_or_else(|| defaults::DEFAULT_CERTIFYING_AUTHORITY.to_string()),
        ),
        position: Some(
            overrides
                .position
                .clone()
                .unwrap_or_else(|| defaults::DEFAULT_POSITION.to_string()),
        ),
        venue: Some(
            overrides
                .venue
                .clone()
                .unwrap_or_else(|| defaults::DEFAULT_VENUE.to_string()),
        ),
        custom_text: Some(
            overrides
                .custom_text
                .clone()
                .unwrap_or_else(|| defaults::DEFAULT_APPRECIATION_TEXT.to_string()),
        ),
    }
}
