use crate::domain::shared::errors::DomainError;

pub const INVALID_RANGE_FORMAT: &str =
    "Invalid year limit format. Expected '<startYear>-<endYear>'.";

/// Inclusive `[start, end]` year window parsed from `"<start>-<end>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i64,
    pub end: i64,
}

impl YearRange {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let (start, end) = match raw.split('-').collect::<Vec<_>>().as_slice() {
            [start, end] => (*start, *end),
            _ => {
                return Err(DomainError::InvalidInput(INVALID_RANGE_FORMAT.into()));
            }
        };

        let start = start
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|year| *year >= 0)
            .ok_or_else(|| DomainError::InvalidInput("Invalid start year".into()))?;

        let end = end
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|year| *year >= start)
            .ok_or_else(|| DomainError::InvalidInput("Invalid end year".into()))?;

        Ok(Self { start, end })
    }

    pub fn contains(&self, year: i64) -> bool {
        (self.start..=self.end).contains(&year)
    }
}
