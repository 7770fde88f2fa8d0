use std::collections::HashSet;

use crate::core::scoring::{calculate_match_score, DEFAULT_SCORE_THRESHOLD};
use crate::models::{CandidateProfile, Job, MatchCandidate, ScoringWeights};

/// Match ranking engine
///
/// Pure and stateless: scores candidate-job pairs, drops pairs below
/// the acceptance threshold or already matched, and ranks the rest.
/// Storage access stays with the orchestration layer.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    threshold: u8,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, threshold: u8) -> Self {
        Self { weights, threshold }
    }

    pub fn with_defaults() -> Self {
        Self {
            weights: ScoringWeights::default(),
            threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Score a single candidate-job pair
    pub fn score_pair(
        &self,
        candidate_id: i64,
        profile: &CandidateProfile,
        job: &Job,
    ) -> MatchCandidate {
        let score = calculate_match_score(profile, job, &self.weights);

        MatchCandidate {
            job_id: job.id,
            candidate_id,
            recruiter_id: job.recruiter_id,
            overall_score: score.overall,
            skills_score: score.skills,
            location_score: score.location,
            experience_score: score.experience,
            matched_skills: score.matched_skills,
        }
    }

    /// Rank the given jobs for one candidate
    ///
    /// Jobs already matched to the candidate are skipped before scoring;
    /// the rest are thresholded and sorted by overall score, descending.
    pub fn rank_jobs_for_candidate(
        &self,
        candidate_id: i64,
        profile: &CandidateProfile,
        jobs: Vec<Job>,
        existing_job_ids: &HashSet<i64>,
    ) -> Vec<MatchCandidate> {
        let mut results: Vec<MatchCandidate> = jobs
            .into_iter()
            .filter(|job| !existing_job_ids.contains(&job.id))
            .map(|job| self.score_pair(candidate_id, profile, &job))
            .filter(|result| result.overall_score >= self.threshold)
            .collect();

        sort_by_score(&mut results);
        results
    }

    /// Rank the given candidates for one job
    ///
    /// Symmetric to the candidate-side pass: candidates already matched
    /// to the job are skipped, same threshold and ordering.
    pub fn rank_candidates_for_job(
        &self,
        job: &Job,
        candidates: Vec<CandidateProfile>,
        existing_candidate_ids: &HashSet<i64>,
    ) -> Vec<MatchCandidate> {
        let mut results: Vec<MatchCandidate> = candidates
            .into_iter()
            .filter(|profile| !existing_candidate_ids.contains(&profile.user_id))
            .map(|profile| self.score_pair(profile.user_id, &profile, job))
            .filter(|result| result.overall_score >= self.threshold)
            .collect();

        sort_by_score(&mut results);
        results
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Sort descending by overall score; the sort is stable so ties keep
/// their enumeration order
fn sort_by_score(results: &mut [MatchCandidate]) {
    results.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
}
