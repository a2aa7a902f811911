use super::dto::PopulationResponse;
use crate::domain::{
    country::{repository::CountryRepository, value_objects::IsoCode},
    population::{repository::PopulationRepository, value_objects::YearRange},
    shared::errors::DomainError,
};
use std::sync::Arc;

pub struct GetPopulationUseCase {
    countries: Arc<dyn CountryRepository>,
    population: Arc<dyn PopulationRepository>,
}

impl GetPopulationUseCase {
    pub fn new(
        countries: Arc<dyn CountryRepository>,
        population: Arc<dyn PopulationRepository>,
    ) -> Self {
        Self {
            countries,
            population,
        }
    }

    pub async fn execute(
        &self,
        code: &IsoCode,
        range: Option<YearRange>,
    ) -> Result<PopulationResponse, DomainError> {
        let name = self
            .countries
            .resolve_name(code)
            .await
            .map_err(|err| match err {
                DomainError::NotFound(detail) => {
                    tracing::info!(code = %code, detail = %detail, "no country mapping for code");
                    DomainError::InvalidInput(
                        "Invalid ISO code. Use a valid 2-letter ISO code.".into(),
                    )
                }
                other => other,
            })?;
        tracing::debug!(code = %code, name = %name, "fetching population series");

        let series = self.population.find_by_country(&name).await?;
        Ok(series.summarize(range).into())
    }
}
