use async_trait::async_trait;

/// Reachability check for an upstream service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamProbe: Send + Sync {
    /// HTTP status code the service answered with, or `503` when it could
    /// not be reached at all.
    async fn probe(&self) -> u16;
}
