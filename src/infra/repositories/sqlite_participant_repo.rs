use crate::domain::{models::participant::Participant, ports::ParticipantRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub struct SqliteParticipantRepo {
    pool: SqlitePool,
}

impl SqliteParticipantRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for SqliteParticipantRepo {
    async fn upsert_batch(&self, batch: &[Participant]) -> Result<(), AppError> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
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
        sqlx::query_as::<_, Participant>("SELECT * FROM participants WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Participant>, AppError> {
        sqlx::query_as::<_, Participant>("SELECT * FROM participants WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_emails(&self, emails: &[String]) -> Result<Vec<Participant>, AppError> {
        if emails.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT * FROM participants WHERE email IN (");
        let mut separated = builder.separated(", ");
        for email in emails {
            separated.push_bind(email);
        }
        separated.push_unseparated(")");

        builder
            .build_query_as::<Participant>()
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
