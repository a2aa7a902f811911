use crate::domain::population::entity::{PopulationCount, PopulationSummary};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PopulationResponse {
    #[ts(type = "number")]
    pub mean: i64,
    pub values: Vec<PopulationCount>,
}

impl From<PopulationSummary> for PopulationResponse {
    fn from(summary: PopulationSummary) -> Self {
        Self {
            mean: summary.mean,
            values: summary.values,
        }
    }
}
