use poem_openapi::{payload::Json, OpenApi, Tags};
use crate::errors::PatientApiError;
use crate::services::PatientService;
use crate::types::dto::Patient;
use std::sync::Arc;

/// Patient intake API endpoints
pub struct PatientApi {
    patient_service: Arc<PatientService>,
}

impl PatientApi {
    /// Create a new PatientApi with the given PatientService
    pub fn new(patient_service: Arc<PatientService>) -> Self {
        Self { patient_service }
    }
}

/// API tags for patient endpoints
#[derive(Tags)]
enum PatientTags {
    /// Patient intake endpoints
    Patient,
}

#[OpenApi]
impl PatientApi {
    /// Submit a patient record
    ///
    /// Echoes the record back when `firstName` is present and non-empty,
    /// otherwise responds 428 with a timestamped error body.
    #[oai(path = "/Patient", method = "post", tag = "PatientTags::Patient")]
    async fn create_patient(&self, body: Json<Patient>) -> Result<Json<Patient>, PatientApiError> {
        let patient = self
            .patient_service
            .create_patient(body.0)
            .map_err(PatientApiError::from_validation_error)?;

        tracing::info!("Patient record accepted");

        Ok(Json(patient))
    }
}
