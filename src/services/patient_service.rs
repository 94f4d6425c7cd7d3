use crate::errors::internal::ValidationError;
use crate::types::dto::Patient;

/// Patient service that enforces the intake rules
///
/// The only rule: `first_name` must be present and not the empty string.
/// No trimming is applied, so a single space passes.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatientService;

impl PatientService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a patient record and hand it back unchanged
    ///
    /// # Arguments
    /// * `patient` - The deserialized patient record
    ///
    /// # Returns
    /// * `Ok(Patient)` - The same record, untouched
    /// * `Err(ValidationError::FirstNameRequired)` - `first_name` is absent or empty
    pub fn create_patient(&self, patient: Patient) -> Result<Patient, ValidationError> {
        match patient.first_name.as_deref() {
            Some(first_name) if !first_name.is_empty() => Ok(patient),
            _ => Err(ValidationError::FirstNameRequired),
        }
    }
}
