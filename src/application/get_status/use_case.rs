use super::dto::StatusResponse;
use crate::{API_VERSION, domain::shared::probe::UpstreamProbe};
use std::{sync::Arc, time::Instant};

pub struct GetStatusUseCase {
    countries_now: Arc<dyn UpstreamProbe>,
    rest_countries: Arc<dyn UpstreamProbe>,
    started_at: Instant,
}

impl GetStatusUseCase {
    pub fn new(
        countries_now: Arc<dyn UpstreamProbe>,
        rest_countries: Arc<dyn UpstreamProbe>,
        started_at: Instant,
    ) -> Self {
        Self {
            countries_now,
            rest_countries,
            started_at,
        }
    }

    pub async fn execute(&self) -> StatusResponse {
        let countries_now_api = self.countries_now.probe().await;
        let rest_countries_api = self.rest_countries.probe().await;

        StatusResponse {
            countries_now_api,
            rest_countries_api,
            version: API_VERSION.to_string(),
            uptime: format!("{:.2}s", self.started_at.elapsed().as_secs_f64()),
        }
    }
}
