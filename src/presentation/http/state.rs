use crate::domain::{
    city::repository::CityRepository, country::repository::CountryRepository,
    population::repository::PopulationRepository, shared::probe::UpstreamProbe,
};
use std::{sync::Arc, time::Instant};

#[derive(Clone)]
pub struct AppState {
    pub countries: Arc<dyn CountryRepository>,
    pub cities: Arc<dyn CityRepository>,
    pub population: Arc<dyn PopulationRepository>,
    pub countries_now_probe: Arc<dyn UpstreamProbe>,
    pub rest_countries_probe: Arc<dyn UpstreamProbe>,
    /// Captured once at startup; uptime is measured from here.
    pub started_at: Instant,
}
