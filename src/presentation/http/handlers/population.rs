use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::Response,
};
use serde::Deserialize;

use crate::{
    application::get_population::use_case::GetPopulationUseCase,
    domain::{
        country::value_objects::{INVALID_CODE_IN_URL, IsoCode},
        population::value_objects::{INVALID_RANGE_FORMAT, YearRange},
    },
    presentation::http::{errors::AppError, responses::json_ok, state::AppState},
};

#[derive(Debug, Deserialize, Default)]
pub struct PopulationQuery {
    /// `"<startYear>-<endYear>"`
    pub limit: Option<String>,
}

pub async fn get_population(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
    params: Result<Query<PopulationQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Path(code) = code.map_err(|rejection| {
        tracing::debug!(%rejection, "country code not extracted");
        AppError::BadRequest(INVALID_CODE_IN_URL.into())
    })?;
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!(%rejection, "population query not extracted");
        AppError::BadRequest(INVALID_RANGE_FORMAT.into())
    })?;

    let code = IsoCode::parse(&code)?;
    let range = params
        .limit
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map(YearRange::parse)
        .transpose()?;
    tracing::info!(code = %code, range = ?range, "population requested");

    let use_case = GetPopulationUseCase::new(state.countries.clone(), state.population.clone());
    let population = use_case.execute(&code, range).await?;

    json_ok(&population)
}
