use axum::response::Html;

use crate::presentation::http::routes::{INFO_PATH, POPULATION_PATH, STATUS_PATH};

/// Landing page pointing at the real endpoints.
pub async fn usage_hint() -> Html<String> {
    Html(format!(
        "This service does not provide any functionality on root path level. \
         Please use paths <a href=\"{info}\">{info}</a>, \
         <a href=\"{population}\">{population}</a> or \
         <a href=\"{status}\">{status}</a>.",
        info = INFO_PATH,
        population = POPULATION_PATH,
        status = STATUS_PATH,
    ))
}
