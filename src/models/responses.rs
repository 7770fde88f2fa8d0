use serde::{Deserialize, Serialize};

use crate::models::domain::Match;

/// Response for the candidate/job matching endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRunResponse {
    pub matches: Vec<Match>,
    #[serde(rename = "totalScored")]
    pub total_scored: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
