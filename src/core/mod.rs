// Core algorithm exports
pub mod experience;
pub mod location;
pub mod matcher;
pub mod scoring;
pub mod skills;

pub use experience::calculate_experience_score;
pub use location::{calculate_location_score, LocationScore};
pub use matcher::Matcher;
pub use scoring::{calculate_match_score, combine_scores, PairScore, DEFAULT_SCORE_THRESHOLD};
pub use skills::{calculate_skills_score, SkillScore};
