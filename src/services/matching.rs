use std::collections::HashSet;
use std::sync::Arc;

use crate::core::Matcher;
use crate::models::{Match, MatchCandidate, Role, SweepReport};
use crate::services::storage::{JobFilter, Storage, StorageError, DEFAULT_PAGE_LIMIT};

/// Matching orchestration layer
///
/// Thin glue between the pure `Matcher` and the storage collaborator:
/// resolves entities, skips already-matched pairs, persists accepted
/// results and runs the batch sweep. Absent entities degrade to empty
/// results; only storage failures surface as errors.
pub struct MatchService<S: Storage> {
    store: Arc<S>,
    matcher: Matcher,
}

impl<S: Storage> MatchService<S> {
    pub fn new(store: Arc<S>, matcher: Matcher) -> Self {
        Self { store, matcher }
    }

    /// Find new matches for one candidate across all active jobs
    ///
    /// Missing user, wrong role or missing profile all return an empty
    /// list: absence is an expected outcome, not a failure.
    pub async fn match_candidate_to_jobs(
        &self,
        candidate_id: i64,
    ) -> Result<Vec<MatchCandidate>, StorageError> {
        let user = match self.store.get_user(candidate_id).await? {
            Some(user) if user.role == Role::Candidate => user,
            _ => {
                tracing::debug!("User {} is not a matchable candidate", candidate_id);
                return Ok(vec![]);
            }
        };

        let profile = match self.store.get_candidate_profile(user.id).await? {
            Some(profile) => profile,
            None => {
                tracing::debug!("Candidate {} has no profile yet", candidate_id);
                return Ok(vec![]);
            }
        };

        let jobs = self.store.get_jobs(&JobFilter::default()).await?;

        // One membership query per candidate; checked per job below
        let existing_job_ids: HashSet<i64> = self
            .store
            .get_matches_by_candidate(candidate_id)
            .await?
            .into_iter()
            .map(|m| m.job_id)
            .collect();

        let results =
            self.matcher
                .rank_jobs_for_candidate(candidate_id, &profile, jobs, &existing_job_ids);

        tracing::debug!(
            "Candidate {}: {} new matches above threshold {}",
            candidate_id,
            results.len(),
            self.matcher.threshold()
        );

        Ok(results)
    }

    /// Find new matches for one job across all candidates
    ///
    /// Symmetric to the candidate-side pass. Inactive or missing jobs
    /// return an empty list; candidates without a profile are skipped.
    pub async fn match_jobs_to_candidates(
        &self,
        job_id: i64,
    ) -> Result<Vec<MatchCandidate>, StorageError> {
        let job = match self.store.get_job(job_id).await? {
            Some(job) if job.is_active => job,
            _ => {
                tracing::debug!("Job {} is missing or inactive", job_id);
                return Ok(vec![]);
            }
        };

        let existing_candidate_ids: HashSet<i64> = self
            .store
            .get_matches_by_job(job_id)
            .await?
            .into_iter()
            .map(|m| m.candidate_id)
            .collect();

        let mut profiles = Vec::new();
        let mut after_id = 0;
        loop {
            let page = self
                .store
                .list_users_by_role(Role::Candidate, after_id, DEFAULT_PAGE_LIMIT)
                .await?;
            let Some(last) = page.last() else {
                break;
            };
            after_id = last.id;

            for user in &page {
                if let Some(profile) = self.store.get_candidate_profile(user.id).await? {
                    profiles.push(profile);
                }
            }

            if page.len() < DEFAULT_PAGE_LIMIT {
                break;
            }
        }

        let results = self
            .matcher
            .rank_candidates_for_job(&job, profiles, &existing_candidate_ids);

        tracing::debug!("Job {}: {} new matches above threshold", job_id, results.len());

        Ok(results)
    }

    /// Persist scored pairs as match records
    ///
    /// Callers must already have filtered out existing pairs; no
    /// deduplication happens here. A pair lost to a concurrent writer
    /// is logged and skipped rather than failing the whole batch.
    pub async fn create_matches_from_results(
        &self,
        results: &[MatchCandidate],
    ) -> Result<Vec<Match>, StorageError> {
        let mut created = Vec::with_capacity(results.len());

        for result in results {
            match self.store.create_match(result).await {
                Ok(record) => created.push(record),
                Err(StorageError::DuplicateMatch {
                    job_id,
                    candidate_id,
                }) => {
                    tracing::warn!(
                        "Match for job {} / candidate {} already created concurrently, skipping",
                        job_id,
                        candidate_id
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Ok(created)
    }

    /// Run the matching pass for every candidate in the system
    ///
    /// Each candidate is processed independently: a storage failure for
    /// one candidate is logged and counted, and the sweep moves on, so
    /// a single bad record cannot abort the whole batch.
    pub async fn run_sweep(&self) -> Result<SweepReport, StorageError> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now();

        tracing::info!("Starting matching sweep {}", run_id);

        let mut candidates_processed = 0;
        let mut matches_created = 0;
        let mut failures = 0;

        let mut after_id = 0;
        loop {
            let page = self
                .store
                .list_users_by_role(Role::Candidate, after_id, DEFAULT_PAGE_LIMIT)
                .await?;
            let Some(last) = page.last() else {
                break;
            };
            after_id = last.id;

            for user in &page {
                candidates_processed += 1;
                match self.sweep_candidate(user.id).await {
                    Ok(count) => matches_created += count,
                    Err(e) => {
                        failures += 1;
                        tracing::error!("Matching failed for candidate {}: {}", user.id, e);
                    }
                }
            }

            if page.len() < DEFAULT_PAGE_LIMIT {
                break;
            }
        }

        tracing::info!(
            "Sweep {} finished: {} candidates, {} matches created, {} failures",
            run_id,
            candidates_processed,
            matches_created,
            failures
        );

        Ok(SweepReport {
            run_id,
            candidates_processed,
            matches_created,
            failures,
            started_at,
        })
    }

    async fn sweep_candidate(&self, candidate_id: i64) -> Result<usize, StorageError> {
        let results = self.match_candidate_to_jobs(candidate_id).await?;
        if results.is_empty() {
            return Ok(0);
        }
        let created = self.create_matches_from_results(&results).await?;
        Ok(created.len())
    }

    pub async fn health_check(&self) -> Result<bool, StorageError> {
        self.store.health_check().await
    }
}
