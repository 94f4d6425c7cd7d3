// API layer - HTTP endpoints
pub mod health;
pub mod patient;
pub mod routes;

pub use health::HealthApi;
pub use patient::PatientApi;
pub use routes::create_routes;
