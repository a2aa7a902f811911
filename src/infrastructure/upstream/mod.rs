pub mod client;
pub mod countries_now;
pub mod rest_countries;

pub use client::build_http_client;
pub use countries_now::CountriesNowClient;
pub use rest_countries::RestCountriesClient;
