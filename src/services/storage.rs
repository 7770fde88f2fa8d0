use thiserror::Error;

use crate::models::{CandidateProfile, Job, Match, MatchCandidate, Role, User};

/// Default page size for enumeration queries
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Errors that can occur when interacting with storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Match already exists for job {job_id} and candidate {candidate_id}")]
    DuplicateMatch { job_id: i64, candidate_id: i64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Filter for job enumeration
#[derive(Debug, Clone)]
pub struct JobFilter {
    pub active_only: bool,
    pub limit: usize,
}

impl Default for JobFilter {
    fn default() -> Self {
        Self {
            active_only: true,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Storage collaborator for the matching engine
///
/// Absence is modeled as `Ok(None)` or an empty vector, never as an
/// error. Two substitutable implementations exist: `MemoryStore` for
/// tests and local runs, `PostgresStore` for production. The backend
/// is responsible for enforcing the one-match-per-pair invariant
/// atomically; the engine's membership check alone cannot rule out a
/// race between concurrent sweeps.
#[allow(async_fn_in_trait)]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: i64) -> Result<Option<User>, StorageError>;

    /// Enumerate users of one role as a keyset-paged sequence
    ///
    /// Returns up to `limit` users with `id > after_id`, ordered by id,
    /// so callers can walk the full set without unbounded queries and
    /// restart from the last id they saw.
    async fn list_users_by_role(
        &self,
        role: Role,
        after_id: i64,
        limit: usize,
    ) -> Result<Vec<User>, StorageError>;

    async fn get_candidate_profile(
        &self,
        user_id: i64,
    ) -> Result<Option<CandidateProfile>, StorageError>;

    async fn get_job(&self, id: i64) -> Result<Option<Job>, StorageError>;

    async fn get_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, StorageError>;

    async fn get_matches_by_candidate(
        &self,
        candidate_id: i64,
    ) -> Result<Vec<Match>, StorageError>;

    async fn get_matches_by_job(&self, job_id: i64) -> Result<Vec<Match>, StorageError>;

    /// Persist a scored pair as a match
    ///
    /// Status and unlock flags take their storage defaults ("pending",
    /// both locked). Fails with `DuplicateMatch` if the pair already
    /// has a match.
    async fn create_match(&self, candidate: &MatchCandidate) -> Result<Match, StorageError>;

    async fn health_check(&self) -> Result<bool, StorageError>;
}
