// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, Job, Match, MatchCandidate, Role, ScoringWeights, SweepReport, User,
};
pub use requests::{MatchCandidateRequest, MatchJobRequest};
pub use responses::{ErrorResponse, HealthResponse, MatchRunResponse};
