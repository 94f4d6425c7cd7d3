// Common test utilities for integration tests
#![allow(dead_code)]

use patient_api::api::create_routes;
use patient_api::services::PatientService;
use poem::http::StatusCode;
use poem::test::{TestClient, TestResponse};
use poem::Route;
use serde_json::Value;
use std::sync::Arc;

/// Creates a test client over the full application routes
pub fn test_client() -> TestClient<Route> {
    let patient_service = Arc::new(PatientService::new());
    TestClient::new(create_routes(patient_service, "http://localhost:3000"))
}

/// Splits a response into its status and parsed JSON body
pub async fn into_status_and_json(resp: TestResponse) -> (StatusCode, Value) {
    let status = resp.0.status();
    let body = resp
        .0
        .into_body()
        .into_string()
        .await
        .expect("Failed to read response body");
    let json = serde_json::from_str(&body).expect("Response body is not JSON");
    (status, json)
}

/// POSTs a JSON body to /Patient
pub async fn post_patient(cli: &TestClient<Route>, body: &Value) -> (StatusCode, Value) {
    let resp = cli.post("/Patient").body_json(body).send().await;
    into_status_and_json(resp).await
}

/// True when the field is missing or explicitly null
pub fn is_absent(json: &Value, field: &str) -> bool {
    json.get(field).map_or(true, Value::is_null)
}
