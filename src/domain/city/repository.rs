use super::entity::CityList;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Cities for a country, keyed by its common name rather than its ISO code.
    async fn find_by_country(&self, country_name: &str) -> Result<CityList, DomainError>;
}
