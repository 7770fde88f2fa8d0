use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::models::{CandidateProfile, Job, Match, MatchCandidate, Role, User};
use crate::services::storage::{JobFilter, Storage, StorageError};

/// In-memory storage backend
///
/// Used by tests and local development. Mirrors the relational
/// backend's behavior, including the one-match-per-pair invariant.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<i64, User>,
    profiles: HashMap<i64, CandidateProfile>,
    jobs: HashMap<i64, Job>,
    matches: Vec<Match>,
    next_match_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: User) {
        self.inner.write().await.users.insert(user.id, user);
    }

    pub async fn insert_profile(&self, profile: CandidateProfile) {
        self.inner
            .write()
            .await
            .profiles
            .insert(profile.user_id, profile);
    }

    pub async fn insert_job(&self, job: Job) {
        self.inner.write().await.jobs.insert(job.id, job);
    }

    pub async fn match_count(&self) -> usize {
        self.inner.read().await.matches.len()
    }
}

impl Storage for MemoryStore {
    async fn get_user(&self, id: i64) -> Result<Option<User>, StorageError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn list_users_by_role(
        &self,
        role: Role,
        after_id: i64,
        limit: usize,
    ) -> Result<Vec<User>, StorageError> {
        let inner = self.inner.read().await;
        let mut users: Vec<User> = inner
            .users
            .values()
            .filter(|user| user.role == role && user.id > after_id)
            .cloned()
            .collect();
        users.sort_by_key(|user| user.id);
        users.truncate(limit);
        Ok(users)
    }

    async fn get_candidate_profile(
        &self,
        user_id: i64,
    ) -> Result<Option<CandidateProfile>, StorageError> {
        Ok(self.inner.read().await.profiles.get(&user_id).cloned())
    }

    async fn get_job(&self, id: i64) -> Result<Option<Job>, StorageError> {
        Ok(self.inner.read().await.jobs.get(&id).cloned())
    }

    async fn get_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, StorageError> {
        let inner = self.inner.read().await;
        let mut jobs: Vec<Job> = inner
            .jobs
            .values()
            .filter(|job| !filter.active_only || job.is_active)
            .cloned()
            .collect();
        jobs.sort_by_key(|job| job.id);
        jobs.truncate(filter.limit);
        Ok(jobs)
    }

    async fn get_matches_by_candidate(
        &self,
        candidate_id: i64,
    ) -> Result<Vec<Match>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner
            .matches
            .iter()
            .filter(|m| m.candidate_id == candidate_id)
            .cloned()
            .collect())
    }

    async fn get_matches_by_job(&self, job_id: i64) -> Result<Vec<Match>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner
            .matches
            .iter()
            .filter(|m| m.job_id == job_id)
            .cloned()
            .collect())
    }

    async fn create_match(&self, candidate: &MatchCandidate) -> Result<Match, StorageError> {
        let mut inner = self.inner.write().await;

        let duplicate = inner
            .matches
            .iter()
            .any(|m| m.job_id == candidate.job_id && m.candidate_id == candidate.candidate_id);
        if duplicate {
            return Err(StorageError::DuplicateMatch {
                job_id: candidate.job_id,
                candidate_id: candidate.candidate_id,
            });
        }

        inner.next_match_id += 1;
        let record = Match {
            id: inner.next_match_id,
            job_id: candidate.job_id,
            candidate_id: candidate.candidate_id,
            recruiter_id: candidate.recruiter_id,
            overall_score: candidate.overall_score,
            skills_score: candidate.skills_score,
            location_score: candidate.location_score,
            experience_score: candidate.experience_score,
            matched_skills: candidate.matched_skills.clone(),
            status: "pending".to_string(),
            unlocked_by_candidate: false,
            unlocked_by_recruiter: false,
            created_at: chrono::Utc::now(),
        };
        inner.matches.push(record.clone());
        Ok(record)
    }

    async fn health_check(&self) -> Result<bool, StorageError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate_user(id: i64) -> User {
        User {
            id,
            email: format!("candidate{}@example.com", id),
            role: Role::Candidate,
        }
    }

    fn sample_result(job_id: i64, candidate_id: i64) -> MatchCandidate {
        MatchCandidate {
            job_id,
            candidate_id,
            recruiter_id: 100,
            overall_score: 68,
            skills_score: 60,
            location_score: 100,
            experience_score: 100,
            matched_skills: vec!["rust".to_string()],
        }
    }

    #[tokio::test]
    async fn test_role_listing_is_keyset_paged() {
        let store = MemoryStore::new();
        for id in 1..=5 {
            store.insert_user(candidate_user(id)).await;
        }
        store
            .insert_user(User {
                id: 6,
                email: "recruiter@example.com".to_string(),
                role: Role::Recruiter,
            })
            .await;

        let first = store
            .list_users_by_role(Role::Candidate, 0, 2)
            .await
            .unwrap();
        assert_eq!(first.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2]);

        let rest = store
            .list_users_by_role(Role::Candidate, 2, 10)
            .await
            .unwrap();
        assert_eq!(rest.iter().map(|u| u.id).collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[tokio::test]
    async fn test_inactive_jobs_are_filtered() {
        let store = MemoryStore::new();
        store
            .insert_job(Job {
                id: 1,
                recruiter_id: 100,
                title: "Active".to_string(),
                skills: vec![],
                location: None,
                remote_ok: false,
                is_active: true,
            })
            .await;
        store
            .insert_job(Job {
                id: 2,
                recruiter_id: 100,
                title: "Expired".to_string(),
                skills: vec![],
                location: None,
                remote_ok: false,
                is_active: false,
            })
            .await;

        let jobs = store.get_jobs(&JobFilter::default()).await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, 1);
    }

    #[tokio::test]
    async fn test_create_match_applies_defaults() {
        let store = MemoryStore::new();
        let record = store.create_match(&sample_result(10, 1)).await.unwrap();

        assert_eq!(record.status, "pending");
        assert!(!record.unlocked_by_candidate);
        assert!(!record.unlocked_by_recruiter);
        assert!(record.id > 0);
    }

    #[tokio::test]
    async fn test_duplicate_pair_is_rejected() {
        let store = MemoryStore::new();
        store.create_match(&sample_result(10, 1)).await.unwrap();

        let err = store.create_match(&sample_result(10, 1)).await.unwrap_err();
        assert!(matches!(err, StorageError::DuplicateMatch { .. }));

        // Same candidate against a different job is fine
        store.create_match(&sample_result(11, 1)).await.unwrap();
        assert_eq!(store.match_count().await, 2);
    }
}
