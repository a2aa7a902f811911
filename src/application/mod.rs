pub mod get_country_info;
pub mod get_population;
pub mod get_status;
