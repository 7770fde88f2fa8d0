/// Result of scoring a candidate's skills against a job's requirements
#[derive(Debug, Clone, PartialEq)]
pub struct SkillScore {
    /// Percentage of job skills covered, 0-100
    pub score: u8,
    /// Candidate skills (normalized) that matched a job skill
    pub matched_skills: Vec<String>,
    /// Number of skills the job asks for
    pub total_skills: usize,
}

/// Normalize a free-text skill for comparison
#[inline]
fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Check whether two normalized skills refer to the same technology
///
/// Exact equality or substring containment in either direction, so
/// "js" matches "javascript" and "react" matches "react.js". The
/// containment rule is deliberately loose; it also lets "java" match
/// "javascript", which production accepted as the cost of catching
/// suffix variants like "React" vs "React.js".
#[inline]
fn skills_overlap(a: &str, b: &str) -> bool {
    a == b || a.contains(b) || b.contains(a)
}

/// Score a candidate's skill list against a job's required skills
///
/// The score is the share of job skills covered by the candidate,
/// rounded to a whole percentage and clamped to 100. Either list being
/// empty yields a zero score with no matched skills.
pub fn calculate_skills_score(candidate_skills: &[String], job_skills: &[String]) -> SkillScore {
    if candidate_skills.is_empty() || job_skills.is_empty() {
        return SkillScore {
            score: 0,
            matched_skills: vec![],
            total_skills: job_skills.len(),
        };
    }

    let job_normalized: Vec<String> = job_skills.iter().map(|s| normalize(s)).collect();

    let matched_skills: Vec<String> = candidate_skills
        .iter()
        .map(|s| normalize(s))
        .filter(|candidate| job_normalized.iter().any(|job| skills_overlap(candidate, job)))
        .collect();

    let ratio = matched_skills.len() as f64 / job_skills.len() as f64;
    let score = (ratio * 100.0).round().min(100.0) as u8;

    SkillScore {
        score,
        matched_skills,
        total_skills: job_skills.len(),
    }
}
