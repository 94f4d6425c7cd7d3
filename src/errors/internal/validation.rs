use thiserror::Error;

/// Validation failures raised by `PatientService`
///
/// Not exposed via API. Endpoints convert these with
/// `PatientApiError::from_validation_error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `firstName` is absent or the empty string
    #[error("required first name")]
    FirstNameRequired,
}
