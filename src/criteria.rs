//! Criteria configuration module
//!
//! Declarative thresholds a password is checked against, the built-in
//! presets and the preset lookup used by environment-driven callers.

use thiserror::Error;

/// Characters counted as "special" when no custom set is configured.
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"|,.<>/?`~";

/// Environment variable naming the preset returned by [`criteria_from_env`].
pub const PRESET_ENV_VAR: &str = "PWD_CRITERIA_PRESET";

/// Available preset names.
pub const AVAILABLE_PRESETS: &[&str] = &["basic", "strong"];

/// Minimum length 6, nothing else.
pub const BASIC: Criteria = Criteria {
    min_length: Some(6),
    max_length: None,
    min_uppercase: None,
    min_lowercase: None,
    min_digits: None,
    min_special_chars: None,
    special_chars: None,
};

/// Minimum length 8 with at least one character of every class.
pub const STRONG: Criteria = Criteria {
    min_length: Some(8),
    max_length: None,
    min_uppercase: Some(1),
    min_lowercase: Some(1),
    min_digits: Some(1),
    min_special_chars: Some(1),
    special_chars: None,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Minimum length {min} is greater than maximum length {max}")]
    InvertedLength { min: usize, max: usize },
    #[error("Special character set is empty but {required} special characters are required")]
    EmptySpecialChars { required: usize },
    #[error("Unknown preset: '{0}'. Available presets: basic, strong")]
    UnknownPreset(String),
}

/// Optional thresholds a password must meet.
///
/// Every field left as `None` is "no constraint" and never fails
/// validation. The default value has no constraints at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Criteria {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min_length: Option<usize>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_length: Option<usize>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min_uppercase: Option<usize>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min_lowercase: Option<usize>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min_digits: Option<usize>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min_special_chars: Option<usize>,
    /// Literal characters counted as special. `None` means
    /// [`DEFAULT_SPECIAL_CHARS`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub special_chars: Option<String>,
}

impl Criteria {
    /// Criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn with_min_uppercase(mut self, min: usize) -> Self {
        self.min_uppercase = Some(min);
        self
    }

    pub fn with_min_lowercase(mut self, min: usize) -> Self {
        self.min_lowercase = Some(min);
        self
    }

    pub fn with_min_digits(mut self, min: usize) -> Self {
        self.min_digits = Some(min);
        self
    }

    pub fn with_min_special_chars(mut self, min: usize) -> Self {
        self.min_special_chars = Some(min);
        self
    }

    /// Replaces the special character set. Each character of `chars` is
    /// matched literally.
    pub fn with_special_chars(mut self, chars: impl Into<String>) -> Self {
        self.special_chars = Some(chars.into());
        self
    }

    /// Returns the special character set in effect.
    pub fn special_chars(&self) -> &str {
        self.special_chars.as_deref().unwrap_or(DEFAULT_SPECIAL_CHARS)
    }

    /// Checks the criteria for combinations no password can satisfy.
    ///
    /// The evaluator never calls this: unchecked criteria are measured and
    /// compared as given. Call it where criteria enter the application
    /// (config files, admin forms) to reject them early.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `min_length` is greater than `max_length`
    /// - the special set is empty while a positive special minimum is set
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(CriteriaError::InvertedLength { min, max });
            }
        }

        match self.min_special_chars {
            Some(required) if required > 0 && self.special_chars().is_empty() => {
                Err(CriteriaError::EmptySpecialChars { required })
            }
            _ => Ok(()),
        }
    }
}

/// Deserialization shape of [`Criteria`].
///
/// `specialCharsPattern` holds a regex character-class body (`\-`, `\[`,
/// `\]` escapes); it is unescaped into a literal set. `specialChars` wins
/// when both are present.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct CriteriaConfig {
    min_length: Option<usize>,
    max_length: Option<usize>,
    min_uppercase: Option<usize>,
    min_lowercase: Option<usize>,
    min_digits: Option<usize>,
    min_special_chars: Option<usize>,
    special_chars: Option<String>,
    special_chars_pattern: Option<String>,
}

#[cfg(feature = "serde")]
impl From<CriteriaConfig> for Criteria {
    fn from(config: CriteriaConfig) -> Self {
        let special_chars = config
            .special_chars
            .or_else(|| config.special_chars_pattern.as_deref().map(unescape_class_body));

        Criteria {
            min_length: config.min_length,
            max_length: config.max_length,
            min_uppercase: config.min_uppercase,
            min_lowercase: config.min_lowercase,
            min_digits: config.min_digits,
            min_special_chars: config.min_special_chars,
            special_chars,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Criteria {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <CriteriaConfig as serde::Deserialize>::deserialize(deserializer).map(Criteria::from)
    }
}

/// Turns a regex character-class body into its literal characters:
/// `\x` becomes `x`, a trailing lone `\` is kept.
#[cfg(feature = "serde")]
fn unescape_class_body(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    out
}

/// Looks up a built-in preset by name (case-insensitive).
///
/// # Errors
///
/// Returns [`CriteriaError::UnknownPreset`] if the name is not one of
/// [`AVAILABLE_PRESETS`].
pub fn preset(name: &str) -> Result<Criteria, CriteriaError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "basic" => Ok(BASIC),
        "strong" => Ok(STRONG),
        _ => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Unknown password criteria preset: {}", name);
            Err(CriteriaError::UnknownPreset(name.to_string()))
        }
    }
}

/// Returns the preset name to use.
///
/// Priority:
/// 1. Environment variable `PWD_CRITERIA_PRESET`
/// 2. Default `basic`
pub fn get_preset_name() -> String {
    std::env::var(PRESET_ENV_VAR).unwrap_or_else(|_| "basic".to_string())
}

/// Loads the preset named by `PWD_CRITERIA_PRESET`, or [`BASIC`] if unset.
///
/// # Errors
///
/// Returns [`CriteriaError::UnknownPreset`] if the variable names an
/// unknown preset.
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_CRITERIA_PRESET", "strong"); }
/// let criteria = pwd_criteria::criteria_from_env()?;
/// ```
pub fn criteria_from_env() -> Result<Criteria, CriteriaError> {
    preset(&get_preset_name())
}
