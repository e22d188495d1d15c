//! Length section - checks password minimum and maximum length.

use super::{Measurements, SectionResult, noun};
use crate::criteria::Criteria;

/// Checks the password length against `min_length` and `max_length`.
///
/// Both bounds fold into one category. `required` reports the violated
/// bound; when only the maximum is exceeded that is the maximum, otherwise
/// the minimum if one is configured, else the maximum.
///
/// # Returns
/// - failed result with a "too short" or "too long" message when one bound
///   is violated, or a combined message when both are (inverted bounds)
/// - passed result otherwise
pub fn length_section(m: &Measurements, criteria: &Criteria) -> SectionResult {
    let len = m.length;
    let too_short = criteria.min_length.filter(|&min| len < min);
    let too_long = criteria.max_length.filter(|&max| len > max);

    let required = match (too_short, too_long) {
        (None, Some(max)) => Some(max),
        _ => criteria.min_length.or(criteria.max_length),
    };

    let error = match (too_short, too_long) {
        (Some(min), Some(max)) => format!(
            "Password must be between {} and {} characters long",
            min, max
        ),
        (Some(min), None) => format!(
            "Password must be at least {} {} long",
            min,
            noun(min, "character", "characters")
        ),
        (None, Some(max)) => format!(
            "Password must be at most {} {} long",
            max,
            noun(max, "character", "characters")
        ),
        (None, None) => return SectionResult::passed(len, required),
    };

    SectionResult::failed(len, required, error)
}
