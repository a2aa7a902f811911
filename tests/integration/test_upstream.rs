use super::helpers::{closed_upstream, expect_status, get, read_json, send, spawn_upstream};
use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get as get_route, post},
};
use countryinfo::{
    domain::{
        city::repository::CityRepository,
        country::{repository::CountryRepository, value_objects::IsoCode},
        population::{entity::PopulationCount, repository::PopulationRepository},
        shared::{errors::DomainError, probe::UpstreamProbe},
    },
    infrastructure::upstream::{CountriesNowClient, RestCountriesClient, build_http_client},
    presentation::http::{routes::create_router, state::AppState},
};
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration, time::Instant};

fn client(timeout: Duration) -> reqwest::Client {
    build_http_client(timeout, "countryinfo-tests").expect("client should build")
}

fn code(raw: &str) -> IsoCode {
    IsoCode::parse(raw).expect("valid test code")
}

fn norway_json() -> Value {
    json!({
        "name": { "common": "Norway", "official": "Kingdom of Norway" },
        "cca2": "NO",
        "continents": ["Europe"],
        "population": 5379475,
        "languages": { "nno": "Norwegian Nynorsk", "nob": "Norwegian Bokmål", "smi": "Sami" },
        "borders": ["FIN", "SWE", "RUS"],
        "capital": ["Oslo"],
        "flags": { "png": "https://flagcdn.com/w320/no.png", "svg": "https://flagcdn.com/no.svg" }
    })
}

fn rest_countries_router() -> Router {
    Router::new()
        .route(
            "/alpha/{code}",
            get_route(|Path(code): Path<String>| async move {
                match code.as_str() {
                    "NO" => Json(json!([norway_json()])).into_response(),
                    // No capital, no languages: fine for name lookups only.
                    "AQ" => Json(json!([{
                        "name": { "common": "Antarctica" },
                        "continents": ["Antarctica"],
                        "population": 1000,
                        "flags": { "png": "https://flagcdn.com/w320/aq.png" }
                    }]))
                    .into_response(),
                    "XE" => Json(json!([])).into_response(),
                    "XB" => "not json".into_response(),
                    _ => (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "status": 404, "message": "Not Found" })),
                    )
                        .into_response(),
                }
            }),
        )
        .route("/all", get_route(|| async { StatusCode::OK }))
}

fn countries_now_router() -> Router {
    Router::new()
        .route(
            "/countries/cities",
            post(|Json(body): Json<Value>| async move {
                match body["country"].as_str() {
                    Some("Norway") => Json(json!({
                        "error": false,
                        "msg": "cities in Norway retrieved",
                        "data": ["Oslo", "Bergen", "Alta"]
                    }))
                    .into_response(),
                    Some("Antarctica") => {
                        Json(json!({ "error": false, "msg": "none", "data": [] })).into_response()
                    }
                    Some("Garbled") => "<html>oops</html>".into_response(),
                    _ => (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "error": true, "msg": "country not found" })),
                    )
                        .into_response(),
                }
            }),
        )
        .route(
            "/countries/population",
            post(|Json(body): Json<Value>| async move {
                match body["country"].as_str() {
                    Some("Norway") => Json(json!({
                        "error": false,
                        "data": {
                            "country": "Norway",
                            "code": "NOR",
                            "populationCounts": [
                                { "year": 2020, "value": 30 },
                                { "year": 2000, "value": 10 },
                                { "value": 999 },
                                { "year": 2010 },
                                { "year": 2010, "value": 20 }
                            ]
                        }
                    }))
                    .into_response(),
                    _ => (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "error": true, "msg": "country not found" })),
                    )
                        .into_response(),
                }
            }),
        )
        .route("/countries/", get_route(|| async { StatusCode::OK }))
}

fn slow_router() -> Router {
    Router::new().route(
        "/alpha/{code}",
        get_route(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!([norway_json()]))
        }),
    )
}

#[tokio::test]
async fn rest_countries_decodes_first_element() {
    let base = spawn_upstream(rest_countries_router()).await;
    let adapter = RestCountriesClient::new(client(Duration::from_secs(2)), base);

    let record = adapter.find_by_code(&code("no")).await.unwrap();

    assert_eq!(record.name, "Norway");
    assert_eq!(record.population, 5_379_475);
    assert_eq!(record.capital, vec!["Oslo"]);
    assert_eq!(record.borders, vec!["FIN", "SWE", "RUS"]);
    assert_eq!(record.flag, "https://flagcdn.com/w320/no.png");
    assert_eq!(record.languages.len(), 3);
}

#[tokio::test]
async fn rest_countries_maps_missing_country_to_not_found() {
    let base = spawn_upstream(rest_countries_router()).await;
    let adapter = RestCountriesClient::new(client(Duration::from_secs(2)), base);

    assert!(matches!(
        adapter.find_by_code(&code("zz")).await,
        Err(DomainError::NotFound(_))
    ));
    assert!(matches!(
        adapter.find_by_code(&code("xe")).await,
        Err(DomainError::NotFound(_))
    ));
    assert!(matches!(
        adapter.resolve_name(&code("zz")).await,
        Err(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn rest_countries_flags_incomplete_records() {
    let base = spawn_upstream(rest_countries_router()).await;
    let adapter = RestCountriesClient::new(client(Duration::from_secs(2)), base);

    assert!(matches!(
        adapter.find_by_code(&code("aq")).await,
        Err(DomainError::UpstreamInvalidData(_))
    ));
    assert!(matches!(
        adapter.find_by_code(&code("xb")).await,
        Err(DomainError::UpstreamInvalidData(_))
    ));
}

#[tokio::test]
async fn rest_countries_resolves_name_of_incomplete_record() {
    let base = spawn_upstream(rest_countries_router()).await;
    let adapter = RestCountriesClient::new(client(Duration::from_secs(2)), base);

    assert_eq!(adapter.resolve_name(&code("aq")).await.unwrap(), "Antarctica");
}

#[tokio::test]
async fn unreachable_upstream_is_unavailable() {
    let base = closed_upstream().await;
    let countries = RestCountriesClient::new(client(Duration::from_secs(2)), base.clone());
    let cities = CountriesNowClient::new(client(Duration::from_secs(2)), base);

    assert!(matches!(
        countries.find_by_code(&code("no")).await,
        Err(DomainError::UpstreamUnavailable(_))
    ));
    assert!(matches!(
        CityRepository::find_by_country(&cities, "Norway").await,
        Err(DomainError::UpstreamUnavailable(_))
    ));
    assert_eq!(countries.probe().await, 503);
    assert_eq!(cities.probe().await, 503);
}

#[tokio::test]
async fn slow_upstream_times_out_as_unavailable() {
    let base = spawn_upstream(slow_router()).await;
    let adapter = RestCountriesClient::new(client(Duration::from_millis(200)), base);

    let started = Instant::now();
    let result = adapter.find_by_code(&code("no")).await;

    assert!(matches!(result, Err(DomainError::UpstreamUnavailable(_))));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn countries_now_returns_cities_by_name() {
    let base = spawn_upstream(countries_now_router()).await;
    let adapter = CountriesNowClient::new(client(Duration::from_secs(2)), base);

    let cities = CityRepository::find_by_country(&adapter, "Norway").await.unwrap();
    assert_eq!(cities.names, vec!["Oslo", "Bergen", "Alta"]);

    let none = CityRepository::find_by_country(&adapter, "Antarctica").await.unwrap();
    assert!(none.names.is_empty());
}

#[tokio::test]
async fn countries_now_rejects_non_json_and_error_status() {
    let base = spawn_upstream(countries_now_router()).await;
    let adapter = CountriesNowClient::new(client(Duration::from_secs(2)), base);

    assert!(matches!(
        CityRepository::find_by_country(&adapter, "Garbled").await,
        Err(DomainError::UpstreamUnavailable(_))
    ));
    assert!(matches!(
        CityRepository::find_by_country(&adapter, "Atlantis").await,
        Err(DomainError::UpstreamUnavailable(_))
    ));
}

#[tokio::test]
async fn countries_now_population_skips_incomplete_entries() {
    let base = spawn_upstream(countries_now_router()).await;
    let adapter = CountriesNowClient::new(client(Duration::from_secs(2)), base);

    let series = PopulationRepository::find_by_country(&adapter, "Norway")
        .await
        .unwrap();
    assert_eq!(
        series.counts,
        vec![
            PopulationCount { year: 2020, value: 30 },
            PopulationCount { year: 2000, value: 10 },
            PopulationCount { year: 2010, value: 20 },
        ]
    );
}

#[tokio::test]
async fn probes_report_upstream_status() {
    let countries_base = spawn_upstream(rest_countries_router()).await;
    let cities_base = spawn_upstream(countries_now_router()).await;

    let countries = RestCountriesClient::new(client(Duration::from_secs(2)), countries_base);
    let cities = CountriesNowClient::new(client(Duration::from_secs(2)), cities_base);

    assert_eq!(countries.probe().await, 200);
    assert_eq!(cities.probe().await, 200);
}

#[tokio::test]
async fn full_stack_against_local_upstreams() {
    let countries_base = spawn_upstream(rest_countries_router()).await;
    let cities_base = spawn_upstream(countries_now_router()).await;
    let http = client(Duration::from_secs(2));

    let rest_countries = Arc::new(RestCountriesClient::new(http.clone(), countries_base));
    let countries_now = Arc::new(CountriesNowClient::new(http, cities_base));
    let app = create_router(AppState {
        countries: rest_countries.clone(),
        cities: countries_now.clone(),
        population: countries_now.clone(),
        countries_now_probe: countries_now,
        rest_countries_probe: rest_countries,
        started_at: Instant::now(),
    });

    let res = send(&app, get("/countryinfo/v1/info/no?limit=2")).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["name"], "Norway");
    assert_eq!(body["capital"], "Oslo");
    assert_eq!(body["cities"], json!(["Alta", "Bergen"]));

    let res = send(&app, get("/countryinfo/v1/population/no?limit=2005-2015")).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body, json!({ "mean": 20, "values": [{ "year": 2010, "value": 20 }] }));

    let res = send(&app, get("/countryinfo/v1/info/zz")).await;
    expect_status(res, StatusCode::NOT_FOUND).await;

    let res = send(&app, get("/countryinfo/v1/status/")).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["countriesNowApi"], 200);
    assert_eq!(body["restCountriesApi"], 200);
}
