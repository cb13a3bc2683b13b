use crate::domain::{models::participant::Participant, ports::ParticipantRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

pub struct PostgresParticipantRepo {
    pool: PgPool,
}

impl PostgresParticipantRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PostgresParticipantRepo {
    async fn upsert_batch(&self, batch: &[Participant]) -> Result<(), AppError> {
        if batch.is_empty() {
            return Ok(());
        }

        // Postgres rejects a multi-row INSERT that updates the same row
        // twice, which is why callers dedupe the batch by email first.
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO participants (id, email, full_name, organization, created_at) ",
        );
        builder.push_values(batch, |mut row, participant| {
            row.push_bind(&participant.id)
                .push_bind(&participant.email)
                .push_bind(&participant.full_name)
                .push_bind(&participant.organization)
                .push_bind(participant.created_at);
        });
        builder.push(
            " ON CONFLICT(email) DO UPDATE SET \
             full_name = excluded.full_name, organization = excluded.organization",
        );

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Participant>, AppError> {
        sqlx::query_as::<_, Participant>("SELECT * FROM participants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Participant>, AppError> {
        sqlx::query_as::<_, Participant>("SELECT * FROM participants WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_emails(&self, emails: &[String]) -> Result<Vec<Participant>, AppError> {
        if emails.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, Participant>("SELECT * FROM participants WHERE email = ANY($1)")
            .bind(emails)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Participant>, AppError> {
        sqlx::query_as::<_, Participant>("SELECT * FROM participants ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
