//! Criteria evaluator - main validation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::criteria::Criteria;
use crate::result::{Category, ValidationDetails, ValidationResult};
use crate::sections::{
    Measurements, Section, digits_section, length_section, lowercase_section,
    special_chars_section, uppercase_section,
};

/// Sections in [`Category::ALL`] order.
const SECTIONS: [Section; 5] = [
    length_section,
    uppercase_section,
    lowercase_section,
    digits_section,
    special_chars_section,
];

/// Evaluates a password against `criteria`.
///
/// Never fails: every unmet threshold shows up as a message in `errors` and
/// an invalid entry in `details`. Unchecked criteria (see
/// [`Criteria::validate`]) are compared as given.
///
/// # Arguments
/// * `password` - The password to check
/// * `criteria` - Thresholds to check against; absent fields always pass
///
/// # Returns
/// A `ValidationResult` with the verdict, ordered messages and per-category
/// details.
pub fn evaluate(password: &SecretString, criteria: &Criteria) -> ValidationResult {
    let m = Measurements::measure(password.expose_secret(), criteria.special_chars());

    let outcomes = SECTIONS.map(|section| section(&m, criteria));
    let errors: Vec<String> = outcomes.iter().filter_map(|o| o.error.clone()).collect();

    let [length, uppercase, lowercase, digits, special_chars] = outcomes.map(|o| o.detail);
    let details = ValidationDetails { length, uppercase, lowercase, digits, special_chars };
    let is_valid = Category::ALL.iter().all(|c| details.get(*c).valid);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        is_valid,
        failed = errors.len(),
        length = m.length,
        "password criteria evaluated"
    );

    ValidationResult { is_valid, errors, details }
}

/// Returns `true` if the password meets every threshold in `criteria`.
///
/// Shorthand for `evaluate(password, criteria).is_valid`, for callers that
/// only need a predicate (schema refinements, guards).
pub fn is_valid_password(password: &SecretString, criteria: &Criteria) -> bool {
    evaluate(password, criteria).is_valid
}

/// Async version that sends the validation result via channel.
///
/// A closed receiver is logged (with the `tracing` feature) and otherwise
/// ignored.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    criteria: &Criteria,
    tx: mpsc::Sender<ValidationResult>,
) {
    let result = evaluate(password, criteria);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", _e);
    }
}
