/// Result of comparing a candidate's location to a job's location
#[derive(Debug, Clone, PartialEq)]
pub struct LocationScore {
    /// Location affinity, 0-100
    pub score: u8,
    /// Known distance in kilometers; only 0.0 for identical strings,
    /// `None` everywhere else since no geocoding is performed
    pub distance_km: Option<f64>,
}

/// Compare two free-text locations
///
/// This is a textual heuristic, not geospatial:
/// - identical strings score 100 (distance 0)
/// - one string containing the other scores 80 ("Cape Town" inside
///   "Cape Town, South Africa"); comparison is case-sensitive
/// - disjoint strings still score 70 when the job is remote-friendly
/// - anything else, including a missing location on either side, is 0
pub fn calculate_location_score(
    candidate_location: Option<&str>,
    job_location: Option<&str>,
    remote_ok: bool,
) -> LocationScore {
    let candidate = candidate_location.filter(|loc| !loc.is_empty());
    let job = job_location.filter(|loc| !loc.is_empty());

    match (candidate, job) {
        (Some(candidate), Some(job)) => {
            if candidate == job {
                LocationScore {
                    score: 100,
                    distance_km: Some(0.0),
                }
            } else if candidate.contains(job) || job.contains(candidate) {
                LocationScore {
                    score: 80,
                    distance_km: None,
                }
            } else if remote_ok {
                LocationScore {
                    score: 70,
                    distance_km: None,
                }
            } else {
                LocationScore {
                    score: 0,
                    distance_km: None,
                }
            }
        }
        _ => LocationScore {
            score: 0,
            distance_km: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_locations_score_100() {
        let result = calculate_location_score(
            Some("Cape Town, South Africa"),
            Some("Cape Town, South Africa"),
            false,
        );

        assert_eq!(result.score, 100);
        assert_eq!(result.distance_km, Some(0.0));
    }

    #[test]
    fn test_substring_location_scores_80() {
        let result =
            calculate_location_score(Some("Cape Town"), Some("Cape Town, South Africa"), false);

        assert_eq!(result.score, 80);
        assert_eq!(result.distance_km, None);
    }

    #[test]
    fn test_substring_works_in_both_directions() {
        let result =
            calculate_location_score(Some("Cape Town, South Africa"), Some("Cape Town"), false);

        assert_eq!(result.score, 80);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        // "cape town" is not a substring of "Cape Town", so this falls
        // through to the remote/zero branch.
        let result = calculate_location_score(Some("cape town"), Some("Cape Town"), false);

        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_disjoint_locations_with_remote_job_score_70() {
        let result = calculate_location_score(Some("Johannesburg"), Some("Cape Town"), true);

        assert_eq!(result.score, 70);
        assert_eq!(result.distance_km, None);
    }

    #[test]
    fn test_disjoint_locations_onsite_job_score_zero() {
        let result = calculate_location_score(Some("Johannesburg"), Some("Cape Town"), false);

        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_missing_candidate_location_scores_zero() {
        let result = calculate_location_score(None, Some("Cape Town"), true);

        assert_eq!(result.score, 0);
        assert_eq!(result.distance_km, None);
    }

    #[test]
    fn test_missing_job_location_scores_zero() {
        let result = calculate_location_score(Some("Cape Town"), None, false);

        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_empty_string_treated_as_missing() {
        let result = calculate_location_score(Some(""), Some("Cape Town"), true);

        assert_eq!(result.score, 0);
    }
}
