//! Password criteria validation library
//!
//! This library checks a password against declarative criteria (length
//! bounds and minimum counts of uppercase, lowercase, digit and special
//! characters) and reports a per-category breakdown with human-readable
//! messages for every failed category.
//!
//! # Features
//!
//! - `async` (default): Enables delivering results over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Deserializable `Criteria`, serializable `ValidationResult`
//!
//! # Environment Variables
//!
//! - `PWD_CRITERIA_PRESET`: Preset loaded by `criteria_from_env`
//!   (default: `basic`)
//!
//! # Example
//!
//! ```rust
//! use pwd_criteria::{evaluate, Criteria, STRONG};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("abcdefgh".to_string().into());
//!
//! let result = evaluate(&password, &STRONG);
//! assert!(!result.is_valid);
//! assert_eq!(result.errors.len(), 3);
//!
//! let relaxed = Criteria::new().with_min_length(8).with_min_lowercase(1);
//! assert!(evaluate(&password, &relaxed).is_valid);
//! ```

// Internal modules
mod criteria;
mod evaluator;
mod result;
mod sections;

// Public API
pub use criteria::{
    AVAILABLE_PRESETS, BASIC, Criteria, CriteriaError, DEFAULT_SPECIAL_CHARS, PRESET_ENV_VAR,
    STRONG, criteria_from_env, get_preset_name, preset,
};
pub use evaluator::{evaluate, is_valid_password};
pub use result::{Category, CategoryResult, ValidationDetails, ValidationResult};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
