use super::dto::InfoResponse;
use crate::domain::{
    city::{repository::CityRepository, value_objects::CityLimit},
    country::{repository::CountryRepository, value_objects::IsoCode},
    shared::errors::DomainError,
};
use std::sync::Arc;

pub struct GetCountryInfoUseCase {
    countries: Arc<dyn CountryRepository>,
    cities: Arc<dyn CityRepository>,
}

impl GetCountryInfoUseCase {
    pub fn new(countries: Arc<dyn CountryRepository>, cities: Arc<dyn CityRepository>) -> Self {
        Self { countries, cities }
    }

    /// Merge country metadata with its sorted (and optionally limited) cities.
    ///
    /// The repository has already checked the record's mandatory fields. The
    /// city lookup only starts once the metadata lookup has resolved the
    /// country's common name.
    pub async fn execute(
        &self,
        code: &IsoCode,
        limit: Option<CityLimit>,
    ) -> Result<InfoResponse, DomainError> {
        let country = self.countries.find_by_code(code).await?;
        tracing::debug!(code = %code, name = %country.name, "country metadata resolved");

        let cities = self
            .cities
            .find_by_country(&country.name)
            .await?
            .sorted_and_limited(limit.map(|l| l.0));

        let capital = country.primary_capital().unwrap_or_default().to_string();

        Ok(InfoResponse {
            name: country.name,
            continents: country.continents,
            population: country.population,
            languages: country.languages,
            bordering: country.borders,
            flag: country.flag,
            capital,
            cities,
        })
    }
}
