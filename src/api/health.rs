use poem_openapi::{payload::Json, OpenApi, Tags};
use crate::types::dto::HealthResponse;
use chrono::Utc;

const STATUS_HEALTHY: &str = "healthy";

/// Liveness endpoint for load balancers and container probes
pub struct HealthApi;

#[derive(Tags)]
enum HealthTags {
    /// Service liveness
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Report that the patient intake service is up
    ///
    /// The service holds no backing resources, so reaching this handler is
    /// enough to answer healthy.
    #[oai(path = "/health", method = "get", tag = "HealthTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        tracing::trace!("Health check");

        Json(HealthResponse {
            status: STATUS_HEALTHY.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
