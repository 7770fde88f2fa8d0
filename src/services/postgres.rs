use std::time::Duration;

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::models::{CandidateProfile, Job, Match, MatchCandidate, Role, User};
use crate::services::storage::{JobFilter, Storage, StorageError};

/// PostgreSQL storage backend
///
/// Owns the marketplace tables the engine reads (users, candidate
/// profiles, jobs) and the matches table it writes. The matches table
/// carries a UNIQUE (job_id, candidate_id) constraint, so concurrent
/// sweeps cannot double-create a pair even if both pass the engine's
/// membership check.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StorageError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }
}

fn map_user(row: &PgRow) -> Result<User, StorageError> {
    let role_text: String = row.get("role");
    let role = Role::parse(&role_text)
        .ok_or_else(|| StorageError::InvalidInput(format!("Unknown role: {}", role_text)))?;

    Ok(User {
        id: row.get("id"),
        email: row.get("email"),
        role,
    })
}

fn map_profile(row: &PgRow) -> CandidateProfile {
    let years: Option<i32> = row.get("years_of_experience");

    CandidateProfile {
        user_id: row.get("user_id"),
        skills: row.get("skills"),
        location: row.get("location"),
        years_of_experience: years.map(|y| y.max(0) as u32),
    }
}

fn map_job(row: &PgRow) -> Job {
    Job {
        id: row.get("id"),
        recruiter_id: row.get("recruiter_id"),
        title: row.get("title"),
        skills: row.get("skills"),
        location: row.get("location"),
        remote_ok: row.get("remote_ok"),
        is_active: row.get("is_active"),
    }
}

fn map_match(row: &PgRow) -> Match {
    Match {
        id: row.get("id"),
        job_id: row.get("job_id"),
        candidate_id: row.get("candidate_id"),
        recruiter_id: row.get("recruiter_id"),
        overall_score: row.get::<i32, _>("overall_score") as u8,
        skills_score: row.get::<i32, _>("skills_score") as u8,
        location_score: row.get::<i32, _>("location_score") as u8,
        experience_score: row.get::<i32, _>("experience_score") as u8,
        matched_skills: row.get("matched_skills"),
        status: row.get("status"),
        unlocked_by_candidate: row.get("unlocked_by_candidate"),
        unlocked_by_recruiter: row.get("unlocked_by_recruiter"),
        created_at: row.get("created_at"),
    }
}

impl Storage for PostgresStore {
    async fn get_user(&self, id: i64) -> Result<Option<User>, StorageError> {
        let row = sqlx::query("SELECT id, email, role FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_user).transpose()
    }

    async fn list_users_by_role(
        &self,
        role: Role,
        after_id: i64,
        limit: usize,
    ) -> Result<Vec<User>, StorageError> {
        let query = r#"
            SELECT id, email, role
            FROM users
            WHERE role = $1 AND id > $2
            ORDER BY id
            LIMIT $3
        "#;

        let rows = sqlx::query(query)
            .bind(role.as_str())
            .bind(after_id)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_user).collect()
    }

    async fn get_candidate_profile(
        &self,
        user_id: i64,
    ) -> Result<Option<CandidateProfile>, StorageError> {
        let query = r#"
            SELECT user_id, skills, location, years_of_experience
            FROM candidate_profiles
            WHERE user_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(map_profile))
    }

    async fn get_job(&self, id: i64) -> Result<Option<Job>, StorageError> {
        let query = r#"
            SELECT id, recruiter_id, title, skills, location, remote_ok, is_active
            FROM jobs
            WHERE id = $1
        "#;

        let row = sqlx::query(query).bind(id).fetch_optional(&self.pool).await?;

        Ok(row.as_ref().map(map_job))
    }

    async fn get_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, StorageError> {
        let query = r#"
            SELECT id, recruiter_id, title, skills, location, remote_ok, is_active
            FROM jobs
            WHERE ($1 = FALSE OR is_active)
            ORDER BY id
            LIMIT $2
        "#;

        let rows = sqlx::query(query)
            .bind(filter.active_only)
            .bind(filter.limit as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(map_job).collect())
    }

    async fn get_matches_by_candidate(
        &self,
        candidate_id: i64,
    ) -> Result<Vec<Match>, StorageError> {
        let query = r#"
            SELECT id, job_id, candidate_id, recruiter_id,
                   overall_score, skills_score, location_score, experience_score,
                   matched_skills, status,
                   unlocked_by_candidate, unlocked_by_recruiter, created_at
            FROM matches
            WHERE candidate_id = $1
        "#;

        let rows = sqlx::query(query)
            .bind(candidate_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(map_match).collect())
    }

    async fn get_matches_by_job(&self, job_id: i64) -> Result<Vec<Match>, StorageError> {
        let query = r#"
            SELECT id, job_id, candidate_id, recruiter_id,
                   overall_score, skills_score, location_score, experience_score,
                   matched_skills, status,
                   unlocked_by_candidate, unlocked_by_recruiter, created_at
            FROM matches
            WHERE job_id = $1
        "#;

        let rows = sqlx::query(query).bind(job_id).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(map_match).collect())
    }

    async fn create_match(&self, candidate: &MatchCandidate) -> Result<Match, StorageError> {
        // Status and unlock flags come from the column defaults. ON
        // CONFLICT DO NOTHING turns a lost uniqueness race into a clean
        // DuplicateMatch instead of a constraint violation.
        let query = r#"
            INSERT INTO matches (job_id, candidate_id, recruiter_id,
                                 overall_score, skills_score, location_score, experience_score,
                                 matched_skills)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (job_id, candidate_id) DO NOTHING
            RETURNING id, job_id, candidate_id, recruiter_id,
                      overall_score, skills_score, location_score, experience_score,
                      matched_skills, status,
                      unlocked_by_candidate, unlocked_by_recruiter, created_at
        "#;

        let row = sqlx::query(query)
            .bind(candidate.job_id)
            .bind(candidate.candidate_id)
            .bind(candidate.recruiter_id)
            .bind(i32::from(candidate.overall_score))
            .bind(i32::from(candidate.skills_score))
            .bind(i32::from(candidate.location_score))
            .bind(i32::from(candidate.experience_score))
            .bind(&candidate.matched_skills)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(map_match(&row)),
            None => Err(StorageError::DuplicateMatch {
                job_id: candidate.job_id,
                candidate_id: candidate.candidate_id,
            }),
        }
    }

    async fn health_check(&self) -> Result<bool, StorageError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
