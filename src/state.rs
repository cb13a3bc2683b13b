use std::sync::Arc;
use crate::domain::ports::{
    AdminUserRepository, CertificateRepository, EventRepository, ParticipantRepository,
    SessionRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_repo: Arc<dyn EventRepository>,
    pub participant_repo: Arc<dyn ParticipantRepository>,
    pub certificate_repo: Arc<dyn CertificateRepository>,
    pub user_repo: Arc<dyn AdminUserRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub auth_service: Arc<AuthService>,
}
