use super::entity::PopulationSeries;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PopulationRepository: Send + Sync {
    /// Full population history for a country, keyed by its common name.
    async fn find_by_country(&self, country_name: &str) -> Result<PopulationSeries, DomainError>;
}
