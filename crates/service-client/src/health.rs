use tracing::debug;

use crate::client::ApiError;

/// Liveness probing for a remote service.
///
/// Implementors provide the fallible [`probe`](HealthCheck::probe); the
/// boolean [`is_available`](HealthCheck::is_available) is derived from it and
/// drops the error detail.
pub trait HealthCheck: Send + Sync {
    /// Issue one request against the health endpoint. Returns the raw response
    /// on a 2xx status and the underlying error otherwise.
    fn probe(
        &self,
    ) -> impl std::future::Future<Output = Result<reqwest::Response, ApiError>> + Send;

    /// `true` when [`probe`](HealthCheck::probe) succeeds, `false` for every
    /// failure (DNS, refused connection, timeout, non-2xx status).
    fn is_available(&self) -> impl std::future::Future<Output = bool> + Send {
        async move {
            match self.probe().await {
                Ok(_) => true,
                Err(e) => {
                    debug!(error = %e, "health probe failed");
                    false
                }
            }
        }
    }
}
