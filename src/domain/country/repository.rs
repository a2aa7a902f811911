use super::{entity::CountryRecord, value_objects::IsoCode};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Full metadata record, checked against the mandatory-field invariant.
    async fn find_by_code(&self, code: &IsoCode) -> Result<CountryRecord, DomainError>;

    /// Common name only. Records missing other fields still resolve.
    async fn resolve_name(&self, code: &IsoCode) -> Result<String, DomainError>;
}
