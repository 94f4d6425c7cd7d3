use chrono::NaiveDate;
use poem_openapi::Object;

/// Patient record submitted to and echoed back by `POST /Patient`
///
/// Every field is optional on the wire. Unknown fields are ignored and a
/// missing `age` defaults to 0. Only `firstName` is checked, by
/// `PatientService::create_patient`.
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct Patient {
    /// Given name (required to be non-empty)
    pub first_name: Option<String>,

    /// Middle name
    pub middle_name: Option<String>,

    /// Family name
    pub last_name: Option<String>,

    /// Age in years
    #[oai(default)]
    pub age: i32,

    /// Date of birth (YYYY-MM-DD)
    #[oai(rename = "dob")]
    pub date_of_birth: Option<NaiveDate>,
}
