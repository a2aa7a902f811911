use axum::{extract::State, response::Response};

use crate::{
    application::get_status::use_case::GetStatusUseCase,
    presentation::http::{errors::AppError, responses::json_ok, state::AppState},
};

pub async fn get_status(State(state): State<AppState>) -> Result<Response, AppError> {
    let use_case = GetStatusUseCase::new(
        state.countries_now_probe.clone(),
        state.rest_countries_probe.clone(),
        state.started_at,
    );
    let status = use_case.execute().await;
    tracing::debug!(?status, "status collected");

    json_ok(&status)
}
