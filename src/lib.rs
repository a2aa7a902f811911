pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// API version segment used in every route and reported by the status endpoint.
pub const API_VERSION: &str = "v1";
