use lazy_static::lazy_static;
use std::fmt;
use validator::Validate;

use crate::domain::shared::errors::DomainError;

pub const INVALID_CODE_IN_URL: &str = "Invalid or missing country code in URL";

lazy_static! {
    static ref ISO_CODE_REGEX: regex::Regex = regex::Regex::new(r"^[A-Z]{2}$").unwrap();
}

/// Two-letter ISO 3166-1 alpha-2 country code, always upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Validate)]
pub struct IsoCode {
    #[validate(regex(path = *ISO_CODE_REGEX))]
    value: String,
}

impl IsoCode {
    /// Normalise a raw path segment into an `IsoCode`.
    ///
    /// Input is case-insensitive but otherwise taken verbatim: surrounding
    /// whitespace counts towards the length. Anything that is not exactly two
    /// ASCII letters is rejected with `DomainError::InvalidInput`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.chars().count() != 2 {
            return Err(DomainError::InvalidInput(INVALID_CODE_IN_URL.into()));
        }

        let code = Self {
            value: raw.to_uppercase(),
        };
        code.validate().map_err(|_| {
            DomainError::InvalidInput(
                "Invalid ISO code. Please provide a valid 2-letter ISO code.".into(),
            )
        })?;
        Ok(code)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for IsoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
