//! Single-pass measurement of a password's character composition.

/// Character counts of one password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Measurements {
    pub length: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub special_chars: usize,
}

impl Measurements {
    /// Counts the characters of `password`.
    ///
    /// Classes are independent: a character is tested against every class
    /// and `special_chars` is a literal membership test against `special_set`.
    pub fn measure(password: &str, special_set: &str) -> Self {
        let mut m = Measurements::default();
        for c in password.chars() {
            m.length += 1;
            if c.is_ascii_uppercase() {
                m.uppercase += 1;
            }
            if c.is_ascii_lowercase() {
                m.lowercase += 1;
            }
            if c.is_ascii_digit() {
                m.digits += 1;
            }
            if special_set.contains(c) {
                m.special_chars += 1;
            }
        }
        m
    }
}
