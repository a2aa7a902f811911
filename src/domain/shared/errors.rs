use thiserror::Error;

/// Failures raised while resolving a request against the upstream services.
///
/// The `String` payloads carry diagnostic detail for the logs. Only
/// `InvalidInput` and `NotFound` messages are ever shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("Upstream returned invalid data: {0}")]
    UpstreamInvalidData(String),
}
