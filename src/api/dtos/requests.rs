use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
pub struct ImportQuery {
    pub event_id: Option<String>,
}

#[derive(Deserialize)]
pub struct GenerateCertificateRequest {
    pub participant_id: String,
    pub event_id: String,
    pub certificate_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub certifying_authority: Option<String>,
    pub position: Option<String>,
    pub venue: Option<String>,
    pub custom_text: Option<String>,
}

/// `mode` is `email` (default) or `certificate-id`.
#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub mode: Option<String>,
}
