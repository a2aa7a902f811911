use crate::domain::shared::errors::DomainError;

pub const INVALID_LIMIT: &str = "Invalid 'limit' parameter. It must be a positive integer.";

/// Maximum number of cities to return, parsed from the `limit` query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityLimit(pub usize);

impl CityLimit {
    /// `None` or an empty string means no limit.
    pub fn parse(raw: Option<&str>) -> Result<Option<Self>, DomainError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(None),
            Some(value) => value
                .parse::<usize>()
                .map(|limit| Some(Self(limit)))
                .map_err(|_| DomainError::InvalidInput(INVALID_LIMIT.into())),
        }
    }
}
