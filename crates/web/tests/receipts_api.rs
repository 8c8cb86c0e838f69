//! End-to-end tests for the receipt endpoints

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use storage::Database;
use tower::ServiceExt;
use web::{AppState, UnknownReceiptPolicy, create_router};

fn test_app() -> Router {
    create_router(AppState::new(Database::new(), UnknownReceiptPolicy::ZeroPoints))
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" }
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    let gatorade = json!({ "shortDescription": "Gatorade", "price": "2.25" });
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [gatorade, gatorade, gatorade, gatorade],
        "total": "9.00"
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

async fn submit(app: &Router, receipt: &Value) -> (StatusCode, Value) {
    send(
        app,
        Request::post("/receipts/process")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(receipt.to_string()))
            .unwrap(),
    )
    .await
}

async fn points(app: &Router, id: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::get(format!("/receipts/{id}/points"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn submit_ok(app: &Router, receipt: &Value) -> String {
    let (status, body) = submit(app, receipt).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {body}");
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_process_returns_id() {
    let app = test_app();

    let (status, body) = submit(&app, &target_receipt()).await;

    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_target_receipt_points() {
    let app = test_app();
    let id = submit_ok(&app, &target_receipt()).await;

    let (status, body) = points(&app, &id).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "points": 16 }));
}

#[tokio::test]
async fn test_corner_market_receipt_points() {
    let app = test_app();
    let id = submit_ok(&app, &corner_market_receipt()).await;

    let (_, body) = points(&app, &id).await;

    assert_eq!(body["points"], 101);
}

#[tokio::test]
async fn test_points_are_stable_across_queries() {
    let app = test_app();
    let id = submit_ok(&app, &corner_market_receipt()).await;

    let (_, first) = points(&app, &id).await;
    let (_, second) = points(&app, &id).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_identical_submissions_get_distinct_ids() {
    let app = test_app();

    let first = submit_ok(&app, &target_receipt()).await;
    let second = submit_ok(&app, &target_receipt()).await;

    assert_ne!(first, second);
    assert_eq!(points(&app, &first).await.1["points"], 16);
    assert_eq!(points(&app, &second).await.1["points"], 16);
}

#[tokio::test]
async fn test_caller_supplied_id_is_ignored() {
    let app = test_app();
    let mut receipt = target_receipt();
    receipt["id"] = json!("my-own-id");

    let id = submit_ok(&app, &receipt).await;

    assert_ne!(id, "my-own-id");
}

#[tokio::test]
async fn test_unknown_id_scores_zero() {
    let app = test_app();

    let (status, body) = points(&app, &uuid::Uuid::new_v4().to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "points": 0 }));

    let (status, body) = points(&app, "not-a-uuid").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "points": 0 }));
}

#[tokio::test]
async fn test_unknown_id_is_not_found_with_strict_lookup() {
    let app = create_router(AppState::new(Database::new(), UnknownReceiptPolicy::NotFound));

    let (status, body) = points(&app, &uuid::Uuid::new_v4().to_string()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Resource not found");

    let id = submit_ok(&app, &target_receipt()).await;
    let (status, _) = points(&app, &id).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_total_is_rejected() {
    let app = test_app();
    let mut receipt = target_receipt();
    receipt["total"] = json!("35,35");

    let (status, body) = submit(&app, &receipt).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    let details = body["details"].as_array().unwrap();
    assert!(details[0].as_str().unwrap().starts_with("total:"));
}

#[tokio::test]
async fn test_malformed_date_and_time_are_rejected() {
    let app = test_app();

    let mut receipt = target_receipt();
    receipt["purchaseDate"] = json!("01/01/2022");
    let (status, _) = submit(&app, &receipt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut receipt = target_receipt();
    receipt["purchaseTime"] = json!("1:01 PM");
    let (status, _) = submit(&app, &receipt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_item_price_is_rejected() {
    let app = test_app();
    let mut receipt = target_receipt();
    receipt["items"][1]["price"] = json!("twelve");

    let (status, body) = submit(&app, &receipt).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let app = test_app();
    let mut receipt = target_receipt();
    receipt.as_object_mut().unwrap().remove("retailer");

    let (status, body) = submit(&app, &receipt).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("retailer"));
}

#[tokio::test]
async fn test_empty_items_are_accepted() {
    let app = test_app();
    let mut receipt = target_receipt();
    receipt["items"] = json!([]);

    let id = submit_ok(&app, &receipt).await;
    let (_, body) = points(&app, &id).await;

    // 6 retailer + 6 odd day
    assert_eq!(body["points"], 12);
}

#[tokio::test]
async fn test_rejected_submission_is_not_stored() {
    let db = Database::new();
    let app = create_router(AppState::new(db.clone(), UnknownReceiptPolicy::ZeroPoints));
    let mut receipt = target_receipt();
    receipt["total"] = json!("abc");

    let (status, _) = submit(&app, &receipt).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        storage::repository::receipt::ReceiptRepository::new(&db)
            .is_empty()
            .await
    );
}

#[tokio::test]
async fn test_openapi_document_lists_receipt_paths() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Request::get("/api-docs/openapi.json")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/receipts/process"].is_object());
    assert!(body["paths"]["/receipts/{id}/points"].is_object());
}

#[tokio::test]
async fn test_underscore_grouped_total_is_rejected() {
    let app = test_app();
    let mut receipt = target_receipt();
    receipt["total"] = json!("1_000.00");

    let (status, body) = submit(&app, &receipt).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}

#[tokio::test]
async fn test_validation_details_include_item_errors() {
    let app = test_app();
    let mut receipt = target_receipt();
    receipt["total"] = json!("lots");
    receipt["items"][0]["price"] = json!("cheap");

    let (status, body) = submit(&app, &receipt).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap())
        .collect();
    assert_eq!(details.len(), 2);
    assert!(details[0].starts_with("items[0].price:"));
    assert!(details[1].starts_with("total:"));
}
