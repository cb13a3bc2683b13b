use crate::domain::models::{
    certificate::{Certificate, IssuedCertificate},
    event::Event,
    participant::Participant,
    session::SessionRecord,
    user::AdminUser,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn list(&self) -> Result<Vec<Event>, AppError>;
}

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Batched insert-or-update keyed on email. The batch must not contain
    /// duplicate emails; callers dedupe first.
    async fn upsert_batch(&self, batch: &[Participant]) -> Result<(), AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Participant>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Participant>, AppError>;
    async fn find_by_emails(&self, emails: &[String]) -> Result<Vec<Participant>, AppError>;
    async fn list(&self) -> Result<Vec<Participant>, AppError>;
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn create(&self, certificate: &Certificate) -> Result<Certificate, AppError>;
    async fn find_by_number(&self, certificate_number: &str) -> Result<Vec<IssuedCertificate>, AppError>;
    async fn list_by_participant(&self, participant_id: &str) -> Result<Vec<IssuedCertificate>, AppError>;
    async fn list(&self) -> Result<Vec<IssuedCertificate>, AppError>;
}

#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    async fn create(&self, user: &AdminUser) -> Result<AdminUser, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<AdminUser>, AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &SessionRecord) -> Result<(), AppError>;
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<SessionRecord>, AppError>;
    async fn delete(&self, token_hash: &str) -> Result<(), AppError>;
}
