use super::client::{body_error, probe_status, transport_error};
use crate::domain::{
    country::{entity::CountryRecord, repository::CountryRepository, value_objects::IsoCode},
    shared::{errors::DomainError, probe::UpstreamProbe},
};
use async_trait::async_trait;
use serde::{Deserialize, de::DeserializeOwned};
use std::collections::BTreeMap;

const SERVICE: &str = "restcountries";

#[derive(Debug, Default, Deserialize)]
struct RestCountryName {
    #[serde(default)]
    common: String,
}

#[derive(Debug, Default, Deserialize)]
struct RestFlags {
    #[serde(default)]
    png: String,
}

#[derive(Debug, Deserialize)]
struct RestCountry {
    #[serde(default)]
    name: RestCountryName,
    #[serde(default)]
    continents: Vec<String>,
    #[serde(default)]
    population: u64,
    #[serde(default)]
    languages: BTreeMap<String, String>,
    #[serde(default)]
    borders: Vec<String>,
    #[serde(default)]
    capital: Vec<String>,
    #[serde(default)]
    flags: RestFlags,
}

#[derive(Debug, Deserialize)]
struct RestCountryNameOnly {
    #[serde(default)]
    name: RestCountryName,
}

impl From<RestCountry> for CountryRecord {
    fn from(country: RestCountry) -> Self {
        Self {
            name: country.name.common,
            continents: country.continents,
            population: country.population,
            languages: country.languages,
            borders: country.borders,
            capital: country.capital,
            flag: country.flags.png,
        }
    }
}

/// Country-metadata adapter (REST Countries v3.1 wire format).
pub struct RestCountriesClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestCountriesClient {
    /// `base_url` must end with `/`.
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Look a code up and return the first element of the array response.
    async fn fetch_first<T: DeserializeOwned>(&self, code: &IsoCode) -> Result<T, DomainError> {
        let url = format!("{}alpha/{}", self.base_url, code);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let status = response.status();
        tracing::debug!(service = SERVICE, %url, %status, "metadata lookup answered");
        if !status.is_success() {
            return Err(DomainError::NotFound(format!(
                "{SERVICE} answered {status} for {code}"
            )));
        }

        let mut countries: Vec<T> = response
            .json()
            .await
            .map_err(|e| body_error(SERVICE, e, DomainError::UpstreamInvalidData))?;

        if countries.is_empty() {
            return Err(DomainError::NotFound(format!(
                "{SERVICE} returned no country for {code}"
            )));
        }
        Ok(countries.swap_remove(0))
    }
}

#[async_trait]
impl CountryRepository for RestCountriesClient {
    async fn find_by_code(&self, code: &IsoCode) -> Result<CountryRecord, DomainError> {
        let record: CountryRecord = self.fetch_first::<RestCountry>(code).await?.into();
        record.validate()?;
        Ok(record)
    }

    async fn resolve_name(&self, code: &IsoCode) -> Result<String, DomainError> {
        let country: RestCountryNameOnly = self.fetch_first(code).await?;
        let name = country.name.common.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::UpstreamInvalidData(format!(
                "{SERVICE} returned a nameless country for {code}"
            )));
        }
        Ok(name)
    }
}

#[async_trait]
impl UpstreamProbe for RestCountriesClient {
    async fn probe(&self) -> u16 {
        probe_status(&self.client, SERVICE, &format!("{}all", self.base_url)).await
    }
}
