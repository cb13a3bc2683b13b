use crate::domain::{
    models::certificate::{Certificate, IssuedCertificate},
    ports::CertificateRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

const JOINED_SELECT: &str = r#"
    SELECT c.id, c.participant_id, c.event_id, c.certificate_number,
           c.issue_date, c.template_data, c.created_at,
           p.email AS participant_email,
           p.full_name AS participant_full_name,
           p.organization AS participant_organization,
           e.name AS event_name
    FROM certificates c
    JOIN participants p ON p.id = c.participant_id
    JOIN events e ON e.id = c.event_id
"#;

pub struct PostgresCertificateRepo {
    pool: PgPool,
}

impl PostgresCertificateRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CertificateRepository for PostgresCertificateRepo {
    async fn create(&self, certificate: &Certificate) -> Result<Certificate, AppError> {
        sqlx::query_as::<_, Certificate>(
            r#"INSERT INTO certificates
               (id, participant_id, event_id, certificate_number, issue_date, template_data, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING *"#,
        )
        .bind(&certificate.id)
        .bind(&certificate.participant_id)
        .bind(&certificate.event_id)
        .bind(&certificate.certificate_number)
        .bind(certificate.issue_date)
        .bind(&certificate.template_data)
        .bind(certificate.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_number(
        &self,
        certificate_number: &str,
    ) -> Result<Vec<IssuedCertificate>, AppError> {
        sqlx::query_as::<_, IssuedCertificate>(&format!(
            "{JOINED_SELECT} WHERE c.certificate_number = $1"
        ))
        .bind(certificate_number)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_participant(
        &self,
        participant_id: &str,
    ) -> Result<Vec<IssuedCertificate>, AppError> {
        sqlx::query_as::<_, IssuedCertificate>(&format!(
            "{JOINED_SELECT} WHERE c.participant_id = $1 ORDER BY c.issue_date DESC"
        ))
        .bind(participant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<IssuedCertificate>, AppError> {
        sqlx::query_as::<_, IssuedCertificate>(&format!(
            "{JOINED_SELECT} ORDER BY c.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
