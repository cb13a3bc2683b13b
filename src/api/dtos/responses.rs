use crate::domain::models::{
    certificate::IssuedCertificate, participant::Participant, roster::RosterRow,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: UserProfile,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub user: Option<UserProfile>,
}

#[derive(Serialize)]
pub struct RosterPreviewResponse {
    pub total: usize,
    pub invalid: usize,
    pub rows: Vec<RosterRow>,
}

#[derive(Serialize)]
pub struct ImportResponse {
    pub imported: usize,
    pub participants: Vec<Participant>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub found: bool,
    pub message: String,
    pub certificates: Vec<IssuedCertificate>,
}
