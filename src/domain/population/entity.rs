use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::value_objects::YearRange;

/// One `(year, value)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PopulationCount {
    #[ts(type = "number")]
    pub year: i64,
    #[ts(type = "number")]
    pub value: i64,
}

/// Population observations for one country, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationSeries {
    pub counts: Vec<PopulationCount>,
}

/// Observations kept by a filter together with their floor mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationSummary {
    pub mean: i64,
    pub values: Vec<PopulationCount>,
}

impl PopulationSeries {
    /// Build a series from loosely-typed entries, dropping any entry that
    /// lacks a year or a value.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Option<i64>, Option<i64>)>,
    {
        let counts = entries
            .into_iter()
            .filter_map(|entry| match entry {
                (Some(year), Some(value)) => Some(PopulationCount { year, value }),
                _ => None,
            })
            .collect();
        Self { counts }
    }

    /// Keep the counts inside `range` (all of them when `None`) and average
    /// their values with floor division. An empty selection has mean 0.
    pub fn summarize(self, range: Option<YearRange>) -> PopulationSummary {
        let values: Vec<PopulationCount> = self
            .counts
            .into_iter()
            .filter(|count| range.is_none_or(|r| r.contains(count.year)))
            .collect();

        let mean = if values.is_empty() {
            0
        } else {
            let total: i128 = values.iter().map(|c| i128::from(c.value)).sum();
            let mean = total.div_euclid(values.len() as i128);
            i64::try_from(mean).unwrap_or(i64::MAX)
        };

        PopulationSummary { mean, values }
    }
}
