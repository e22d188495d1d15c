//! Password criteria sections
//!
//! Each section checks one category of the measured password against its
//! threshold and reports the category outcome plus an optional message.

mod classes;
mod length;
mod measure;

pub use classes::{digits_section, lowercase_section, special_chars_section, uppercase_section};
pub use length::length_section;
pub use measure::Measurements;

use crate::criteria::Criteria;
use crate::result::CategoryResult;

/// Result of a section evaluation.
/// - `detail` - measured count, threshold in effect, validity
/// - `error` - human-readable message when the category failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResult {
    pub detail: CategoryResult,
    pub error: Option<String>,
}

/// Signature shared by every section.
pub type Section = fn(&Measurements, &Criteria) -> SectionResult;

impl SectionResult {
    fn passed(current: usize, required: Option<usize>) -> Self {
        Self {
            detail: CategoryResult { current, required, valid: true },
            error: None,
        }
    }

    fn failed(current: usize, required: Option<usize>, error: String) -> Self {
        Self {
            detail: CategoryResult { current, required, valid: false },
            error: Some(error),
        }
    }
}

/// Picks the singular or plural noun for `count`.
fn noun<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
