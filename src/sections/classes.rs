//! Character class sections - uppercase, lowercase, digits, special chars.

use super::{Measurements, SectionResult, noun};
use crate::criteria::Criteria;

/// Fails when `min` is set and `current` is strictly below it.
fn min_count(
    current: usize,
    min: Option<usize>,
    singular: &str,
    plural: &str,
) -> SectionResult {
    match min {
        Some(min) if current < min => SectionResult::failed(
            current,
            Some(min),
            format!(
                "Password must contain at least {} {}",
                min,
                noun(min, singular, plural)
            ),
        ),
        _ => SectionResult::passed(current, min),
    }
}

pub fn uppercase_section(m: &Measurements, criteria: &Criteria) -> SectionResult {
    min_count(
        m.uppercase,
        criteria.min_uppercase,
        "uppercase letter",
        "uppercase letters",
    )
}

pub fn lowercase_section(m: &Measurements, criteria: &Criteria) -> SectionResult {
    min_count(
        m.lowercase,
        criteria.min_lowercase,
        "lowercase letter",
        "lowercase letters",
    )
}

pub fn digits_section(m: &Measurements, criteria: &Criteria) -> SectionResult {
    min_count(m.digits, criteria.min_digits, "digit", "digits")
}

/// Counts come from the set returned by [`Criteria::special_chars`].
pub fn special_chars_section(m: &Measurements, criteria: &Criteria) -> SectionResult {
    min_count(
        m.special_chars,
        criteria.min_special_chars,
        "special character",
        "special characters",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(password: &str) -> Measurements {
        Measurements::measure(password, crate::criteria::DEFAULT_SPECIAL_CHARS)
    }

    #[test]
    fn test_uppercase_section_missing() {
        let criteria = Criteria::new().with_min_uppercase(1);
        let result = uppercase_section(&measure("lowercase123!"), &criteria);
        assert!(!result.detail.valid);
        assert_eq!(
            result.error,
            Some("Password must contain at least 1 uppercase letter".to_string())
        );
    }

    #[test]
    fn test_uppercase_section_boundary() {
        let criteria = Criteria::new().with_min_uppercase(2);
        assert!(uppercase_section(&measure("ABc"), &criteria).detail.valid);

        let result = uppercase_section(&measure("Abc"), &criteria);
        assert!(!result.detail.valid);
        assert_eq!(result.detail.current, 1);
        assert_eq!(result.detail.required, Some(2));
        assert_eq!(
            result.error,
            Some("Password must contain at least 2 uppercase letters".to_string())
        );
    }

    #[test]
    fn test_lowercase_section_missing() {
        let criteria = Criteria::new().with_min_lowercase(3);
        let result = lowercase_section(&measure("UPPERCASE123!"), &criteria);
        assert!(!result.detail.valid);
        assert_eq!(
            result.error,
            Some("Password must contain at least 3 lowercase letters".to_string())
        );
    }

    #[test]
    fn test_digits_section_missing() {
        let result = digits_section(&measure("NoNumbers!"), &Criteria::new().with_min_digits(1));
        assert_eq!(
            result.error,
            Some("Password must contain at least 1 digit".to_string())
        );
    }

    #[test]
    fn test_special_chars_section_missing() {
        let criteria = Criteria::new().with_min_special_chars(2);
        let result = special_chars_section(&measure("NoSpecial123"), &criteria);
        assert_eq!(
            result.error,
            Some("Password must contain at least 2 special characters".to_string())
        );
    }

    #[test]
    fn test_zero_minimum_always_passes() {
        let result = digits_section(&measure(""), &Criteria::new().with_min_digits(0));
        assert!(result.detail.valid);
        assert_eq!(result.detail.required, Some(0));
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_unconstrained_sections_pass() {
        let m = measure("");
        let criteria = Criteria::new();
        let sections: [crate::sections::Section; 4] =
            [uppercase_section, lowercase_section, digits_section, special_chars_section];
        for section in sections {
            let result = section(&m, &criteria);
            assert!(result.detail.valid);
            assert_eq!(result.detail.required, None);
            assert_eq!(result.error, None);
        }
    }
}
