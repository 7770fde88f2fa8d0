/// Map years of experience to a coarse 0-100 score
///
/// Fixed buckets, not interpolated:
///
/// | years   | score |
/// |---------|-------|
/// | missing | 50    |
/// | < 1     | 20    |
/// | 1-2     | 60    |
/// | 3-4     | 80    |
/// | >= 5    | 100   |
///
/// Missing data gets the neutral 50 so candidates who never filled in
/// the field are not penalized.
#[inline]
pub fn calculate_experience_score(years_of_experience: Option<u32>) -> u8 {
    match years_of_experience {
        None => 50,
        Some(years) if years < 1 => 20,
        Some(years) if years < 3 => 60,
        Some(years) if years < 5 => 80,
        Some(_) => 100,
    }
}
