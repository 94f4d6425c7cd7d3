// Request and response payloads
pub mod common;
pub mod patient;

pub use common::{ErrorResponse, HealthResponse};
pub use patient::Patient;
