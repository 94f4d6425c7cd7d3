use chrono::Utc;
use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Error body returned when a request is rejected
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,

    /// Moment the error was produced (RFC 3339, UTC)
    pub timestamp: String,
}

impl ErrorResponse {
    /// Build an error body stamped with the current time
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
