use std::sync::Arc;

use patient_api::api::create_routes;
use patient_api::config::{init_logging, BootstrapSettings};
use patient_api::services::PatientService;
use poem::{listener::TcpListener, Server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded {:?}", settings);

    let patient_service = Arc::new(PatientService::new());
    let app = create_routes(patient_service, &settings.public_url());

    tracing::info!("Starting server on http://{}", settings.server_address());
    tracing::info!("Swagger UI available at {}/swagger", settings.public_url());

    Server::new(TcpListener::bind(settings.server_address()))
        .run(app)
        .await?;

    Ok(())
}
