use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StatusResponse {
    pub countries_now_api: u16,
    pub rest_countries_api: u16,
    pub version: String,
    /// Seconds since startup, two decimals and an `s` suffix (`"12.34s"`).
    pub uptime: String,
}
