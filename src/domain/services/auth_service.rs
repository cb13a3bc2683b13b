use std::sync::Arc;
use crate::domain::{
    models::{session::{SessionIdentity, SessionRecord}, user::AdminUser},
    ports::{AdminUserRepository, SessionRepository},
};
use crate::config::Config;
use crate::error::AppError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use chrono::{Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

pub const ACCESS_DENIED: &str =
    "Access denied. You need administrator privileges to access this area.";

const SESSION_TTL_DAYS: i64 = 7;

/// Session/role gate. Credentials that verify but fail the admin-domain
/// predicate never receive a session, so non-admin identities can never
/// remain authenticated.
pub struct AuthService {
    users: Arc<dyn AdminUserRepository>,
    sessions: Arc<dyn SessionRepository>,
    config: Config,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn AdminUserRepository>,
        sessions: Arc<dyn SessionRepository>,
        config: Config,
    ) -> Self {
        Self { users, sessions, config }
    }

    pub fn is_admin_email(&self, email: &str) -> bool {
        email.to_lowercase().ends_with(&self.config.admin_email_domain)
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(AdminUser, String), AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation("Email and password are required".into()));
        }

        if !self.is_admin_email(email) {
            return Err(AppError::Forbidden(format!(
                "Only {} email addresses are allowed for registration",
                self.config.admin_email_domain
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AppError::Internal)?
            .to_string();

        let user = self.users.create(&AdminUser::new(email.to_string(), password_hash)).await?;
        let token = self.open_session(&user).await?;
        Ok((user, token))
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(AdminUser, String), AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation("Email and password are required".into()));
        }

        let user = self
            .users
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or(AppError::Unauthorized)?;

        let parsed_hash = PasswordHash::new(&user.password_hash).map_err(|_| AppError::Internal)?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Unauthorized)?;

        if !self.is_admin_email(&user.email) {
            return Err(AppError::Forbidden(ACCESS_DENIED.to_string()));
        }

        let token = self.open_session(&user).await?;
        Ok((user, token))
    }

    pub async fn sign_out(&self, raw_token: &str) -> Result<(), AppError> {
        self.sessions.delete(&self.hash_token(raw_token)).await
    }

    /// Resolves a raw session token to an identity. Expired records are
    /// deleted on sight.
    pub async fn session(&self, raw_token: &str) -> Result<Option<SessionIdentity>, AppError> {
        let token_hash = self.hash_token(raw_token);

        let record = match self.sessions.find_by_token_hash(&token_hash).await? {
            Some(r) => r,
            None => return Ok(None),
        };

        if record.expires_at < Utc::now() {
            self.sessions.delete(&token_hash).await?;
            return Ok(None);
        }

        let user = match self.users.find_by_id(&record.user_id).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        Ok(Some(SessionIdentity {
            user_id: user.id,
            is_admin: self.is_admin_email(&user.email),
            email: user.email,
        }))
    }

    async fn open_session(&self, user: &AdminUser) -> Result<String, AppError> {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect();
        let now = Utc::now();

        let record = SessionRecord {
            token_hash: self.hash_token(&token),
            user_id: user.id.clone(),
            expires_at: now + Duration::days(SESSION_TTL_DAYS),
            created_at: now,
        };

        self.sessions.create(&record).await?;
        Ok(token)
    }

    pub fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
