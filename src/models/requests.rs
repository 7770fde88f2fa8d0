use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to run the matching pass for one candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchCandidateRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "candidate_id", rename = "candidateId")]
    pub candidate_id: i64,
}

/// Request to run the matching pass for one job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchJobRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "job_id", rename = "jobId")]
    pub job_id: i64,
}
