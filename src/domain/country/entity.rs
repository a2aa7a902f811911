use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::shared::errors::DomainError;

/// Country metadata as resolved from the metadata service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub continents: Vec<String>,
    pub population: u64,
    /// Language code to language name.
    pub languages: BTreeMap<String, String>,
    pub borders: Vec<String>,
    pub capital: Vec<String>,
    pub flag: String,
}

impl CountryRecord {
    /// Check the mandatory fields the info endpoint relies on.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing = if self.name.trim().is_empty() {
            Some("name")
        } else if self.flag.trim().is_empty() {
            Some("flag")
        } else if self.population == 0 {
            Some("population")
        } else if self.primary_capital().is_none() {
            Some("capital")
        } else if self.languages.is_empty() {
            Some("languages")
        } else if self.continents.is_empty() {
            Some("continents")
        } else {
            None
        };

        match missing {
            Some(field) => Err(DomainError::UpstreamInvalidData(format!(
                "country record for '{}' has no usable {}",
                self.name, field
            ))),
            None => Ok(()),
        }
    }

    /// First listed capital, if it is non-empty.
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital
            .first()
            .map(String::as_str)
            .filter(|c| !c.trim().is_empty())
    }
}
