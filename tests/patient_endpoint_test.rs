mod common;

use chrono::DateTime;
use common::{is_absent, post_patient, test_client};
use poem::http::StatusCode;
use serde_json::json;

fn assert_first_name_required(status: StatusCode, body: &serde_json::Value) {
    assert_eq!(status, StatusCode::PRECONDITION_REQUIRED);
    assert_eq!(body["message"], "required first name");

    let timestamp = body["timestamp"].as_str().expect("timestamp should be a string");
    assert!(!timestamp.is_empty());
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_valid_patient_is_echoed() {
    let cli = test_client();

    let (status, body) = post_patient(
        &cli,
        &json!({"firstName": "Ann", "lastName": "Lee", "age": 30}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Ann");
    assert_eq!(body["lastName"], "Lee");
    assert_eq!(body["age"], 30);
    assert!(is_absent(&body, "middleName"));
    assert!(is_absent(&body, "dob"));
}

#[tokio::test]
async fn test_all_fields_are_echoed_unchanged() {
    let cli = test_client();
    let request = json!({
        "firstName": "Ann",
        "middleName": "Marie",
        "lastName": "Lee",
        "age": 30,
        "dob": "1994-05-17"
    });

    let (status, body) = post_patient(&cli, &request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, request);
}

#[tokio::test]
async fn test_missing_first_name_returns_428() {
    let cli = test_client();

    let (status, body) = post_patient(&cli, &json!({"lastName": "Lee", "age": 30})).await;

    assert_first_name_required(status, &body);
}

#[tokio::test]
async fn test_empty_first_name_returns_428() {
    let cli = test_client();

    let (status, body) = post_patient(&cli, &json!({"firstName": "", "age": 5})).await;

    assert_first_name_required(status, &body);
}

#[tokio::test]
async fn test_null_first_name_returns_428() {
    let cli = test_client();

    let (status, body) = post_patient(&cli, &json!({"firstName": null, "age": 5})).await;

    assert_first_name_required(status, &body);
}

#[tokio::test]
async fn test_single_space_first_name_passes() {
    let cli = test_client();

    let (status, body) = post_patient(&cli, &json!({"firstName": " ", "age": 5})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], " ");
    assert_eq!(body["age"], 5);
}

#[tokio::test]
async fn test_missing_age_defaults_to_zero() {
    let cli = test_client();

    let (status, body) = post_patient(&cli, &json!({"firstName": "Ann"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["age"], 0);
}

#[tokio::test]
async fn test_null_age_defaults_to_zero() {
    let cli = test_client();

    let (status, body) = post_patient(&cli, &json!({"firstName": "Ann", "age": null})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["age"], 0);
}

#[tokio::test]
async fn test_dob_accepts_calendar_date() {
    let cli = test_client();

    let (status, body) = post_patient(&cli, &json!({"firstName": "Ann", "dob": "2001-02-28"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dob"], "2001-02-28");
}

#[tokio::test]
async fn test_dob_datetime_is_rejected_as_bad_request() {
    let cli = test_client();

    let resp = cli
        .post("/Patient")
        .body_json(&json!({"firstName": "Ann", "dob": "1994-05-17T00:00:00.000+0000"}))
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dob_epoch_millis_is_rejected_as_bad_request() {
    let cli = test_client();

    let resp = cli
        .post("/Patient")
        .body_json(&json!({"firstName": "Ann", "dob": 800000000000_i64}))
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_fields_are_ignored() {
    let cli = test_client();

    let (status, body) = post_patient(
        &cli,
        &json!({"firstName": "Ann", "age": 30, "ward": "B12"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Ann");
    assert!(body.get("ward").is_none());
}

#[tokio::test]
async fn test_repeated_valid_requests_give_identical_responses() {
    let cli = test_client();
    let request = json!({"firstName": "Ann", "lastName": "Lee", "age": 30});

    let first = post_patient(&cli, &request).await;
    let second = post_patient(&cli, &request).await;

    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_malformed_body_is_rejected_as_bad_request() {
    let cli = test_client();

    let resp = cli
        .post("/Patient")
        .content_type("application/json")
        .body("{\"firstName\": ")
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_field_type_is_rejected_as_bad_request() {
    let cli = test_client();

    let resp = cli
        .post("/Patient")
        .body_json(&json!({"firstName": "Ann", "age": "thirty"}))
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
}
