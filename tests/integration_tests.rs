// Integration tests for TalentLink Algo

use std::sync::Arc;

use actix_web::{test, web, App};

use talentlink_algo::core::Matcher;
use talentlink_algo::models::{
    CandidateProfile, Job, Match, MatchCandidate, MatchRunResponse, Role, User,
};
use talentlink_algo::routes::{self, matches::AppState};
use talentlink_algo::services::{JobFilter, MatchService, MemoryStore, Storage, StorageError};

fn candidate(id: i64) -> User {
    User {
        id,
        email: format!("candidate{}@example.com", id),
        role: Role::Candidate,
    }
}

fn profile(user_id: i64, skills: &[&str], location: &str, years: Option<u32>) -> CandidateProfile {
    CandidateProfile {
        user_id,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        location: Some(location.to_string()),
        years_of_experience: years,
    }
}

fn job(id: i64, skills: &[&str], location: &str, remote_ok: bool) -> Job {
    Job {
        id,
        recruiter_id: 100,
        title: format!("Job {}", id),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        location: Some(location.to_string()),
        remote_ok,
        is_active: true,
    }
}

async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());

    store.insert_user(candidate(1)).await;
    store
        .insert_profile(profile(
            1,
            &["JavaScript", "React", "Node.js"],
            "Cape Town, South Africa",
            Some(5),
        ))
        .await;

    store
        .insert_user(User {
            id: 100,
            email: "recruiter@example.com".to_string(),
            role: Role::Recruiter,
        })
        .await;
    store
        .insert_job(job(
            10,
            &["React", "JavaScript", "TypeScript", "Redux", "Node.js"],
            "Cape Town, South Africa",
            true,
        ))
        .await;

    store
}

fn service(store: Arc<MemoryStore>) -> MatchService<MemoryStore> {
    MatchService::new(store, Matcher::with_defaults())
}

#[tokio::test]
async fn test_end_to_end_candidate_matching() {
    let store = seeded_store().await;
    let service = service(store.clone());

    let results = service.match_candidate_to_jobs(1).await.unwrap();

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.job_id, 10);
    assert_eq!(result.recruiter_id, 100);
    assert_eq!(result.skills_score, 60);
    assert_eq!(result.location_score, 100);
    assert_eq!(result.experience_score, 100);
    assert_eq!(result.overall_score, 68);

    let created = service.create_matches_from_results(&results).await.unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].status, "pending");
    assert!(!created[0].unlocked_by_candidate);
    assert!(!created[0].unlocked_by_recruiter);
}

#[tokio::test]
async fn test_existing_match_is_not_recreated() {
    let store = seeded_store().await;
    let service = service(store.clone());

    let first = service.match_candidate_to_jobs(1).await.unwrap();
    service.create_matches_from_results(&first).await.unwrap();

    // Second pass sees the persisted match and proposes nothing
    let second = service.match_candidate_to_jobs(1).await.unwrap();
    assert!(second.is_empty());
    assert_eq!(store.match_count().await, 1);
}

#[tokio::test]
async fn test_missing_candidate_degrades_to_empty() {
    let store = seeded_store().await;
    let service = service(store);

    let results = service.match_candidate_to_jobs(999).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_recruiter_is_not_matched_as_candidate() {
    let store = seeded_store().await;
    let service = service(store);

    let results = service.match_candidate_to_jobs(100).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_candidate_without_profile_degrades_to_empty() {
    let store = Arc::new(MemoryStore::new());
    store.insert_user(candidate(1)).await;
    let service = service(store);

    let results = service.match_candidate_to_jobs(1).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_job_side_matching_is_symmetric() {
    let store = seeded_store().await;
    store.insert_user(candidate(2)).await;
    store
        .insert_profile(profile(2, &["cobol"], "Cape Town, South Africa", Some(5)))
        .await;
    let service = service(store);

    let results = service.match_jobs_to_candidates(10).await.unwrap();

    // Candidate 1 matches, candidate 2's skills are disjoint
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].candidate_id, 1);
    assert_eq!(results[0].overall_score, 68);
}

#[tokio::test]
async fn test_inactive_job_produces_no_matches() {
    let store = seeded_store().await;
    let mut expired = job(11, &["JavaScript"], "Cape Town, South Africa", true);
    expired.is_active = false;
    store.insert_job(expired).await;
    let service = service(store);

    let results = service.match_jobs_to_candidates(11).await.unwrap();
    assert!(results.is_empty());
}

/// Storage wrapper that fails profile lookups for one candidate,
/// simulating a partial backend outage during a sweep.
struct FlakyStore {
    inner: MemoryStore,
    poisoned_user_id: i64,
}

impl Storage for FlakyStore {
    async fn get_user(&self, id: i64) -> Result<Option<User>, StorageError> {
        self.inner.get_user(id).await
    }

    async fn list_users_by_role(
        &self,
        role: Role,
        after_id: i64,
        limit: usize,
    ) -> Result<Vec<User>, StorageError> {
        self.inner.list_users_by_role(role, after_id, limit).await
    }

    async fn get_candidate_profile(
        &self,
        user_id: i64,
    ) -> Result<Option<CandidateProfile>, StorageError> {
        if user_id == self.poisoned_user_id {
            return Err(StorageError::InvalidInput(format!(
                "injected failure for user {}",
                user_id
            )));
        }
        self.inner.get_candidate_profile(user_id).await
    }

    async fn get_job(&self, id: i64) -> Result<Option<Job>, StorageError> {
        self.inner.get_job(id).await
    }

    async fn get_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, StorageError> {
        self.inner.get_jobs(filter).await
    }

    async fn get_matches_by_candidate(
        &self,
        candidate_id: i64,
    ) -> Result<Vec<Match>, StorageError> {
        self.inner.get_matches_by_candidate(candidate_id).await
    }

    async fn get_matches_by_job(&self, job_id: i64) -> Result<Vec<Match>, StorageError> {
        self.inner.get_matches_by_job(job_id).await
    }

    async fn create_match(&self, candidate: &MatchCandidate) -> Result<Match, StorageError> {
        self.inner.create_match(candidate).await
    }

    async fn health_check(&self) -> Result<bool, StorageError> {
        self.inner.health_check().await
    }
}

#[tokio::test]
async fn test_sweep_isolates_per_candidate_failures() {
    let inner = MemoryStore::new();
    for id in 1..=3 {
        inner.insert_user(candidate(id)).await;
        inner
            .insert_profile(profile(
                id,
                &["JavaScript", "React", "Node.js"],
                "Cape Town, South Africa",
                Some(5),
            ))
            .await;
    }
    inner
        .insert_job(job(
            10,
            &["React", "JavaScript", "TypeScript", "Redux", "Node.js"],
            "Cape Town, South Africa",
            true,
        ))
        .await;

    let store = Arc::new(FlakyStore {
        inner,
        poisoned_user_id: 2,
    });
    let service = MatchService::new(store, Matcher::with_defaults());

    let report = service.run_sweep().await.unwrap();

    // The poisoned candidate fails, the other two still get matched
    assert_eq!(report.candidates_processed, 3);
    assert_eq!(report.failures, 1);
    assert_eq!(report.matches_created, 2);
    assert!(!report.run_id.is_empty());
}

#[tokio::test]
async fn test_sweep_is_idempotent() {
    let store = seeded_store().await;
    let service = service(store.clone());

    let first = service.run_sweep().await.unwrap();
    assert_eq!(first.matches_created, 1);

    let second = service.run_sweep().await.unwrap();
    assert_eq!(second.matches_created, 0);
    assert_eq!(store.match_count().await, 1);
}

#[actix_web::test]
async fn test_match_candidate_endpoint() {
    let store = seeded_store().await;
    let state = AppState {
        service: Arc::new(MatchService::new(store, Matcher::with_defaults())),
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure_routes::<MemoryStore>),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/candidate")
        .set_json(serde_json::json!({ "candidateId": 1 }))
        .to_request();
    let response: MatchRunResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.total_scored, 1);
    assert_eq!(response.matches.len(), 1);
    assert_eq!(response.matches[0].overall_score, 68);
}

#[actix_web::test]
async fn test_match_candidate_endpoint_rejects_bad_id() {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        service: Arc::new(MatchService::new(store, Matcher::with_defaults())),
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure_routes::<MemoryStore>),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/candidate")
        .set_json(serde_json::json!({ "candidateId": 0 }))
        .to_request();
    let response = test::call_service(&app, req).await;

    assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
}
