use axum::http::Method;

use crate::{
    domain::country::value_objects::INVALID_CODE_IN_URL, presentation::http::errors::AppError,
};

/// Answer for any method other than GET on a known path.
pub async fn method_not_supported(method: Method) -> AppError {
    AppError::MethodNotSupported(method)
}

/// Answer for `/info/` and `/population/` without a country code.
pub async fn missing_country_code() -> AppError {
    AppError::BadRequest(INVALID_CODE_IN_URL.into())
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Resource not found".into())
}
