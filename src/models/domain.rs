use serde::{Deserialize, Serialize};

/// Account role in the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Recruiter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Recruiter => "recruiter",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "candidate" => Some(Role::Candidate),
            "recruiter" => Some(Role::Recruiter),
            _ => None,
        }
    }
}

/// Marketplace user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

/// Candidate profile with the fields the matching engine scores on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "yearsOfExperience", default)]
    pub years_of_experience: Option<u32>,
}

/// Job posting owned by a recruiter
///
/// Expired jobs are deactivated rather than deleted, so `is_active`
/// gates whether a job participates in matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    #[serde(rename = "recruiterId")]
    pub recruiter_id: i64,
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "remoteOk", default)]
    pub remote_ok: bool,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Scored candidate-job pair produced by the engine
///
/// Transient output: it only becomes a persisted `Match` once handed
/// to the storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    #[serde(rename = "jobId")]
    pub job_id: i64,
    #[serde(rename = "candidateId")]
    pub candidate_id: i64,
    #[serde(rename = "recruiterId")]
    pub recruiter_id: i64,
    #[serde(rename = "overallScore")]
    pub overall_score: u8,
    #[serde(rename = "skillsScore")]
    pub skills_score: u8,
    #[serde(rename = "locationScore")]
    pub location_score: u8,
    #[serde(rename = "experienceScore")]
    pub experience_score: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
}

/// Persisted candidate-job match
///
/// At most one match exists per (job_id, candidate_id) pair. Contact
/// details stay hidden until the corresponding unlock flag flips, which
/// happens through the payment flow outside this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    #[serde(rename = "jobId")]
    pub job_id: i64,
    #[serde(rename = "candidateId")]
    pub candidate_id: i64,
    #[serde(rename = "recruiterId")]
    pub recruiter_id: i64,
    #[serde(rename = "overallScore")]
    pub overall_score: u8,
    #[serde(rename = "skillsScore")]
    pub skills_score: u8,
    #[serde(rename = "locationScore")]
    pub location_score: u8,
    #[serde(rename = "experienceScore")]
    pub experience_score: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    pub status: String,
    #[serde(rename = "unlockedByCandidate")]
    pub unlocked_by_candidate: bool,
    #[serde(rename = "unlockedByRecruiter")]
    pub unlocked_by_recruiter: bool,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Scoring weights
///
/// Skills dominate the overall score; the defaults must stay at
/// 0.8/0.1/0.1 for behavioral parity with the production matcher.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skills: f64,
    pub location: f64,
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.8,
            location: 0.1,
            experience: 0.1,
        }
    }
}

/// Summary of one batch matching sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    #[serde(rename = "runId")]
    pub run_id: String,
    #[serde(rename = "candidatesProcessed")]
    pub candidates_processed: usize,
    #[serde(rename = "matchesCreated")]
    pub matches_created: usize,
    pub failures: usize,
    #[serde(rename = "startedAt")]
    pub started_at: chrono::DateTime<chrono::Utc>,
}
