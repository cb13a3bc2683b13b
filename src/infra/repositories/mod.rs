pub mod postgres_certificate_repo;
pub mod postgres_event_repo;
pub mod postgres_participant_repo;
pub mod postgres_session_repo;
pub mod postgres_user_repo;
pub mod sqlite_certificate_repo;
pub mod sqlite_event_repo;
pub mod sqlite_participant_repo;
pub mod sqlite_session_repo;
pub mod sqlite_user_repo;
