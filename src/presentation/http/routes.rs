use super::{
    handlers::{fallback, info, population, root, status},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{MethodFilter, MethodRouter, on},
};

pub const ROOT_PATH: &str = "/countryinfo/v1";
pub const INFO_PATH: &str = "/countryinfo/v1/info/";
pub const POPULATION_PATH: &str = "/countryinfo/v1/population/";
pub const STATUS_PATH: &str = "/countryinfo/v1/status/";

/// GET-only route; every other method, HEAD included, answers 501.
fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: axum::handler::Handler<T, AppState>,
    T: 'static,
{
    on(MethodFilter::GET, handler).fallback(fallback::method_not_supported)
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Landing
        .route("/", get_only(root::usage_hint))
        .route(ROOT_PATH, get_only(root::usage_hint))
        .route("/countryinfo/v1/", get_only(root::usage_hint))
        // Info
        .route(INFO_PATH, get_only(fallback::missing_country_code))
        .route("/countryinfo/v1/info", get_only(fallback::missing_country_code))
        .route(
            "/countryinfo/v1/info/{code}",
            get_only(info::get_country_info),
        )
        .route(
            "/countryinfo/v1/info/{code}/",
            get_only(info::get_country_info),
        )
        // Population
        .route(POPULATION_PATH, get_only(fallback::missing_country_code))
        .route(
            "/countryinfo/v1/population",
            get_only(fallback::missing_country_code),
        )
        .route(
            "/countryinfo/v1/population/{code}",
            get_only(population::get_population),
        )
        .route(
            "/countryinfo/v1/population/{code}/",
            get_only(population::get_population),
        )
        // Status
        .route(STATUS_PATH, get_only(status::get_status))
        .route("/countryinfo/v1/status", get_only(status::get_status))
        .fallback(fallback::not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
