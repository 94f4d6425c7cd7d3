// API-facing error types
pub mod patient;

pub use patient::PatientApiError;
