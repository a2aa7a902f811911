use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InfoResponse {
    pub name: String,
    pub continents: Vec<String>,
    #[ts(type = "number")]
    pub population: u64,
    pub languages: BTreeMap<String, String>,
    pub bordering: Vec<String>,
    pub flag: String,
    pub capital: String,
    pub cities: Vec<String>,
}
