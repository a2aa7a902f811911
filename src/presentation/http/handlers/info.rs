use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::Response,
};
use serde::Deserialize;

use crate::{
    application::get_country_info::use_case::GetCountryInfoUseCase,
    domain::{
        city::value_objects::{CityLimit, INVALID_LIMIT},
        country::value_objects::{INVALID_CODE_IN_URL, IsoCode},
    },
    presentation::http::{errors::AppError, responses::json_ok, state::AppState},
};

#[derive(Debug, Deserialize, Default)]
pub struct InfoQuery {
    pub limit: Option<String>,
}

pub async fn get_country_info(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
    params: Result<Query<InfoQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Path(code) = code.map_err(|rejection| {
        tracing::debug!(%rejection, "country code not extracted");
        AppError::BadRequest(INVALID_CODE_IN_URL.into())
    })?;
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!(%rejection, "info query not extracted");
        AppError::BadRequest(INVALID_LIMIT.into())
    })?;

    let code = IsoCode::parse(&code)?;
    let limit = CityLimit::parse(params.limit.as_deref())?;
    tracing::info!(code = %code, limit = ?limit.map(|l| l.0), "country info requested");

    let use_case = GetCountryInfoUseCase::new(state.countries.clone(), state.cities.clone());
    let info = use_case.execute(&code, limit).await?;

    json_ok(&info)
}
