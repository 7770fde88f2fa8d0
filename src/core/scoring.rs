use crate::core::{
    experience::calculate_experience_score,
    location::calculate_location_score,
    skills::{calculate_skills_score, SkillScore},
};
use crate::models::{CandidateProfile, Job, ScoringWeights};

/// Minimum overall score for a pair to be proposed as a match
///
/// Inclusive: a pair scoring exactly 60 is accepted. Overridable
/// through configuration, but the default must stay at 60 for parity
/// with the production matcher.
pub const DEFAULT_SCORE_THRESHOLD: u8 = 60;

/// Component and combined scores for one candidate-job pair
#[derive(Debug, Clone, PartialEq)]
pub struct PairScore {
    pub overall: u8,
    pub skills: u8,
    pub location: u8,
    pub experience: u8,
    pub matched_skills: Vec<String>,
}

/// Calculate the overall match score (0-100) for a candidate-job pair
///
/// Scoring formula:
/// score = (
///     skills_score * 0.8 +        # Share of job skills covered
///     location_score * 0.1 +      # Textual location affinity
///     experience_score * 0.1      # Years-of-experience bucket
/// )
pub fn calculate_match_score(
    profile: &CandidateProfile,
    job: &Job,
    weights: &ScoringWeights,
) -> PairScore {
    let SkillScore {
        score: skills,
        matched_skills,
        ..
    } = calculate_skills_score(&profile.skills, &job.skills);

    let location = calculate_location_score(
        profile.location.as_deref(),
        job.location.as_deref(),
        job.remote_ok,
    )
    .score;

    let experience = calculate_experience_score(profile.years_of_experience);

    let overall = combine_scores(skills, location, experience, weights);

    PairScore {
        overall,
        skills,
        location,
        experience,
        matched_skills,
    }
}

/// Weighted combination of the three sub-scores, rounded and clamped
#[inline]
pub fn combine_scores(skills: u8, location: u8, experience: u8, weights: &ScoringWeights) -> u8 {
    let total = f64::from(skills) * weights.skills
        + f64::from(location) * weights.location
        + f64::from(experience) * weights.experience;

    total.round().clamp(0.0, 100.0) as u8
}
