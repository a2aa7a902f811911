use super::client::{body_error, probe_status, transport_error};
use crate::domain::{
    city::{entity::CityList, repository::CityRepository},
    population::{entity::PopulationSeries, repository::PopulationRepository},
    shared::{errors::DomainError, probe::UpstreamProbe},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

const SERVICE: &str = "countriesnow";

#[derive(Debug, Serialize)]
struct CountryQuery<'a> {
    country: &'a str,
}

#[derive(Debug, Deserialize)]
struct CitiesEnvelope {
    #[serde(default)]
    data: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PopulationData {
    #[serde(rename = "populationCounts", default)]
    population_counts: Vec<RawPopulationCount>,
}

#[derive(Debug, Deserialize)]
struct PopulationEnvelope {
    #[serde(default)]
    data: PopulationData,
}

#[derive(Debug, Deserialize)]
struct RawPopulationCount {
    year: Option<i64>,
    value: Option<i64>,
}

/// Cities and population adapter (CountriesNow v0.1 wire format).
pub struct CountriesNowClient {
    client: reqwest::Client,
    base_url: String,
}

impl CountriesNowClient {
    /// `base_url` must end with `/`.
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn post_country<T: DeserializeOwned>(
        &self,
        path: &str,
        country_name: &str,
    ) -> Result<T, DomainError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(&CountryQuery {
                country: country_name,
            })
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let status = response.status();
        tracing::debug!(service = SERVICE, %url, %status, country = country_name, "lookup answered");
        if !status.is_success() {
            tracing::warn!(service = SERVICE, %status, country = country_name, "non-success status");
            return Err(DomainError::UpstreamUnavailable(format!(
                "{SERVICE} answered {status} for {country_name}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| body_error(SERVICE, e, DomainError::UpstreamUnavailable))
    }
}

#[async_trait]
impl CityRepository for CountriesNowClient {
    async fn find_by_country(&self, country_name: &str) -> Result<CityList, DomainError> {
        let envelope: CitiesEnvelope = self.post_country("countries/cities", country_name).await?;
        Ok(CityList::new(envelope.data))
    }
}

#[async_trait]
impl PopulationRepository for CountriesNowClient {
    async fn find_by_country(&self, country_name: &str) -> Result<PopulationSeries, DomainError> {
        let envelope: PopulationEnvelope = self
            .post_country("countries/population", country_name)
            .await?;

        let total = envelope.data.population_counts.len();
        let series = PopulationSeries::from_entries(
            envelope
                .data
                .population_counts
                .into_iter()
                .map(|count| (count.year, count.value)),
        );
        if series.counts.len() < total {
            tracing::debug!(
                skipped = total - series.counts.len(),
                country = country_name,
                "skipped incomplete population entries"
            );
        }
        Ok(series)
    }
}

#[async_trait]
impl UpstreamProbe for CountriesNowClient {
    async fn probe(&self) -> u16 {
        probe_status(&self.client, SERVICE, &format!("{}countries/", self.base_url)).await
    }
}
