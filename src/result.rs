//! Validation result model.

/// One of the five checked dimensions, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Uppercase,
    Lowercase,
    Digits,
    SpecialChars,
}

impl Category {
    /// All categories in the order their errors are reported.
    pub const ALL: [Category; 5] = [
        Category::Length,
        Category::Uppercase,
        Category::Lowercase,
        Category::Digits,
        Category::SpecialChars,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Uppercase => "uppercase",
            Category::Lowercase => "lowercase",
            Category::Digits => "digits",
            Category::SpecialChars => "specialChars",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryResult {
    /// Measured count (characters for length).
    pub current: usize,
    /// Threshold in effect, `None` if the category was unconstrained.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub required: Option<usize>,
    pub valid: bool,
}

/// Per-category results, one field per [`Category`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ValidationDetails {
    pub length: CategoryResult,
    pub uppercase: CategoryResult,
    pub lowercase: CategoryResult,
    pub digits: CategoryResult,
    pub special_chars: CategoryResult,
}

impl ValidationDetails {
    pub fn get(&self, category: Category) -> &CategoryResult {
        match category {
            Category::Length => &self.length,
            Category::Uppercase => &self.uppercase,
            Category::Lowercase => &self.lowercase,
            Category::Digits => &self.digits,
            Category::SpecialChars => &self.special_chars,
        }
    }
}

/// Full outcome of one evaluation.
///
/// `is_valid` is true iff `errors` is empty iff every category in
/// `details` is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// One message per failed category, in [`Category::ALL`] order.
    pub errors: Vec<String>,
    pub details: ValidationDetails,
}

impl ValidationResult {
    /// Returns the detail record for `category`.
    pub fn category(&self, category: Category) -> &CategoryResult {
        self.details.get(category)
    }

    /// Iterates over the failed categories in reporting order.
    pub fn failed_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|c| !self.details.get(*c).valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(current: usize, required: Option<usize>, valid: bool) -> CategoryResult {
        CategoryResult { current, required, valid }
    }

    fn sample() -> ValidationResult {
        ValidationResult {
            is_valid: false,
            errors: vec![
                "Password must contain at least 1 uppercase letter".to_string(),
                "Password must contain at least 2 digits".to_string(),
            ],
            details: ValidationDetails {
                length: detail(5, Some(4), true),
                uppercase: detail(0, Some(1), false),
                lowercase: detail(5, None, true),
                digits: detail(0, Some(2), false),
                special_chars: detail(0, None, true),
            },
        }
    }

    #[test]
    fn test_category_order_and_names() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec!["length", "uppercase", "lowercase", "digits", "specialChars"]
        );
        assert_eq!(Category::SpecialChars.to_string(), "specialChars");
    }

    #[test]
    fn test_category_lookup() {
        let result = sample();
        assert_eq!(result.category(Category::Length), &detail(5, Some(4), true));
        assert_eq!(result.category(Category::Digits), &detail(0, Some(2), false));
    }

    #[test]
    fn test_failed_categories() {
        let result = sample();
        let failed: Vec<_> = result.failed_categories().collect();
        assert_eq!(failed, vec![Category::Uppercase, Category::Digits]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(sample()).expect("Failed to serialize");
        assert_eq!(json["isValid"], serde_json::json!(false));
        assert_eq!(json["errors"].as_array().map(|e| e.len()), Some(2));
        assert_eq!(
            json["details"]["specialChars"],
            serde_json::json!({ "current": 0, "valid": true })
        );
        assert_eq!(
            json["details"]["digits"],
            serde_json::json!({ "current": 0, "required": 2, "valid": false })
        );
    }
}
