use crate::errors::internal::ValidationError;
use crate::types::dto::ErrorResponse;
use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

/// Patient endpoint error types
#[derive(ApiResponse, Debug)]
pub enum PatientApiError {
    /// A required patient field is missing or empty
    #[oai(status = 428)]
    FirstNameRequired(Json<ErrorResponse>),
}

impl PatientApiError {
    /// Convert ValidationError to PatientApiError
    ///
    /// This is the only place validation failures are mapped to HTTP responses.
    /// The timestamp is taken at the moment of conversion.
    pub fn from_validation_error(err: ValidationError) -> Self {
        match &err {
            ValidationError::FirstNameRequired => {
                tracing::debug!("Patient rejected: {}", err);
                PatientApiError::FirstNameRequired(Json(ErrorResponse::new(err.to_string())))
            }
        }
    }

    /// Get the error body carried by the variant
    pub fn response(&self) -> &ErrorResponse {
        match self {
            PatientApiError::FirstNameRequired(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.response().message.clone()
    }
}

impl From<ValidationError> for PatientApiError {
    fn from(err: ValidationError) -> Self {
        Self::from_validation_error(err)
    }
}

impl fmt::Display for PatientApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
