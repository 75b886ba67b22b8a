//! Phone number value object.

use super::ModemDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_DIGITS: usize = 3;
const MAX_DIGITS: usize = 20;
const VISIBLE_DIGITS: usize = 4;

/// Validated subscriber or service-centre number.
///
/// Spaces, dashes, dots and parentheses are stripped. The remainder must be
/// an optional leading `+` followed by 3 to 20 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a validated phone number.
    ///
    /// # Errors
    ///
    /// Returns [`ModemDomainError::EmptyPhoneNumber`] when nothing remains
    /// after stripping separators, or
    /// [`ModemDomainError::InvalidPhoneNumber`] when the remainder is not a
    /// plausible number.
    pub fn new(value: impl Into<String>) -> Result<Self, ModemDomainError> {
        let raw = value.into();
        let normalized: String = raw
            .chars()
            .filter(|character| !matches!(character, ' ' | '-' | '.' | '(' | ')'))
            .collect();

        if normalized.is_empty() {
            return Err(ModemDomainError::EmptyPhoneNumber);
        }

        let digits = normalized.strip_prefix('+').unwrap_or(&normalized);
        let is_valid = digits.chars().all(|character| character.is_ascii_digit())
            && (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len());
        if !is_valid {
            return Err(ModemDomainError::InvalidPhoneNumber(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalised number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the number is in international form.
    #[must_use]
    pub fn is_international(&self) -> bool {
        self.0.starts_with('+')
    }

    /// Returns the number with all but the last four digits masked, for logs.
    #[must_use]
    pub fn masked(&self) -> String {
        let (prefix, digits) = if self.is_international() {
            ("+", self.0.get(1..).unwrap_or_default())
        } else {
            ("", self.0.as_str())
        };
        let hidden = digits.len().saturating_sub(VISIBLE_DIGITS);
        let visible = digits.get(hidden..).unwrap_or_default();
        format!("{prefix}{}{visible}", "*".repeat(hidden))
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ModemDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
