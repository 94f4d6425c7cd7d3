use poem::Route;
use poem_openapi::OpenApiService;
use std::sync::Arc;

use crate::api::{HealthApi, PatientApi};
use crate::services::PatientService;

/// Compose the application routes
///
/// API endpoints are served from the root so the intake route is `/Patient`.
/// Swagger UI is nested under `/swagger`.
///
/// # Arguments
/// * `patient_service` - Validation service shared by all requests
/// * `server_url` - Public base URL advertised in the OpenAPI document
pub fn create_routes(patient_service: Arc<PatientService>, server_url: &str) -> Route {
    let patient_api = PatientApi::new(patient_service);

    let api_service = OpenApiService::new(
        (HealthApi, patient_api),
        "Patient API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/swagger", ui)
        .nest("/", api_service)
}
