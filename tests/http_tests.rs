#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use tour_invoice::core::RenderConfig;
use tour_invoice::pdf;
use tour_invoice::server::{AppState, router};

fn app() -> Router {
    router(AppState::new(RenderConfig::default()))
}

fn sample() -> Value {
    json!({
        "booking_id": "bk_123456789",
        "payment_id": "pay_987654321",
        "customer_name": "John Doe",
        "guide_name": "Bali Explorer",
        "date": "2026-04-05",
        "price": 150.0,
        "currency": "USD",
        "locale": "en_US"
    })
}

async fn post_raw(body: impl Into<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app()
        .oneshot(
            Request::post("/generate-invoice")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes.to_vec())
}

async fn post(payload: &Value) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    post_raw(payload.to_string()).await
}

fn details(body: &[u8]) -> Vec<(String, String)> {
    let json: Value = serde_json::from_slice(body).unwrap();
    json["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| {
            (
                d["field"].as_str().unwrap().to_string(),
                d["kind"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[tokio::test]
async fn returns_pdf_with_headers() {
    let (status, headers, body) = post(&sample()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/pdf")
    );
    assert!(body.starts_with(b"%PDF-"));

    let cd = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(cd.to_lowercase().contains("attachment"));
    assert!(cd.contains("filename=\"invoice_bk_123456789.pdf\""), "{cd}");
}

#[tokio::test]
async fn minimal_request_renders_expected_text() {
    let payload = json!({
        "customer_name": "John Doe",
        "guide_name": "Bali Explorer",
        "date": "2026-04-05",
        "price": 150.0,
        "currency": "USD"
    });
    let (status, _, body) = post(&payload).await;
    assert_eq!(status, StatusCode::OK);

    let text = pdf::extract_text(&body).unwrap();
    for expected in ["John Doe", "Bali Explorer", "2026-04-05", "150.00", "USD"] {
        assert!(text.contains(expected), "missing {expected:?} in:\n{text}");
    }
    assert!(!text.contains("Booking ID"));
}

#[tokio::test]
async fn identifiers_are_printed() {
    let mut payload = sample();
    payload["booking_id"] = json!("B123");
    payload["payment_id"] = json!("P456");
    let (status, _, body) = post(&payload).await;
    assert_eq!(status, StatusCode::OK);

    let text = pdf::extract_text(&body).unwrap();
    assert!(text.contains("B123"), "{text}");
    assert!(text.contains("P456"), "{text}");
}

#[tokio::test]
async fn missing_price_is_422() {
    let mut payload = sample();
    payload.as_object_mut().unwrap().remove("price");
    let (status, headers, body) = post(&payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
    assert_eq!(
        details(&body),
        vec![("price".to_string(), "MissingField".to_string())]
    );
}

#[tokio::test]
async fn missing_customer_is_422() {
    let mut payload = sample();
    payload.as_object_mut().unwrap().remove("customer_name");
    let (status, _, body) = post(&payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(details(&body)[0].0, "customer_name");
}

#[tokio::test]
async fn negative_price_is_422_invalid_value() {
    let mut payload = sample();
    payload["price"] = json!(-10);
    let (status, _, body) = post(&payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        details(&body),
        vec![("price".to_string(), "InvalidValue".to_string())]
    );
}

#[tokio::test]
async fn bad_date_is_422_invalid_format() {
    let mut payload = sample();
    payload["date"] = json!("2026-13-45");
    let (status, _, body) = post(&payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        details(&body),
        vec![("date".to_string(), "InvalidFormat".to_string())]
    );
}

#[tokio::test]
async fn non_numeric_price_types_are_invalid_values() {
    for price in [json!(true), json!([1]), json!({ "a": 1 })] {
        let mut payload = sample();
        payload["price"] = price.clone();
        let (status, _, body) = post(&payload).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{price}");
        assert_eq!(
            details(&body),
            vec![("price".to_string(), "InvalidValue".to_string())]
        );
        assert!(!String::from_utf8_lossy(&body).contains("PriceInput"));
    }
}

#[tokio::test]
async fn wrong_typed_text_fields_are_named() {
    let mut payload = sample();
    payload["customer_name"] = json!(42);
    payload["currency"] = json!(5);
    let (status, _, body) = post(&payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        details(&body),
        vec![
            ("customer_name".to_string(), "InvalidFormat".to_string()),
            ("currency".to_string(), "InvalidFormat".to_string()),
        ]
    );
}

#[tokio::test]
async fn huge_price_is_out_of_range() {
    let (status, _, body) = post_raw(
        r#"{"customer_name":"John Doe","guide_name":"Bali Explorer","date":"2026-04-05","price":1.2345678901234568e29,"currency":"USD"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["details"][0]["kind"], "InvalidValue");
    assert!(
        json["details"][0]["message"]
            .as_str()
            .unwrap()
            .contains("out of range")
    );
}

#[tokio::test]
async fn non_object_body_is_422() {
    let (status, _, body) = post_raw("[1, 2, 3]").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        details(&body),
        vec![("body".to_string(), "InvalidFormat".to_string())]
    );
}

#[tokio::test]
async fn signed_year_is_rejected() {
    let mut payload = sample();
    payload["date"] = json!("+999-01-01");
    let (status, _, body) = post(&payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        details(&body),
        vec![("date".to_string(), "InvalidFormat".to_string())]
    );
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (status, _, body) = post_raw("{\"customer_name\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().starts_with("malformed JSON body"));
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn spaces_in_booking_id_are_sanitized() {
    let mut payload = sample();
    payload["booking_id"] = json!("bk 123 456");
    let (status, headers, _) = post(&payload).await;
    assert_eq!(status, StatusCode::OK);
    let cd = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(cd.contains("filename=\"invoice_bk_123_456.pdf\""), "{cd}");
}

#[tokio::test]
async fn various_currency_and_locale_pairs() {
    for (currency, locale) in [
        ("IDR", "id_ID"),
        ("EUR", "fr_FR"),
        ("JPY", "ja_JP"),
        ("XXX", "en_US"),
        ("USD", "bad_locale"),
    ] {
        let mut payload = sample();
        payload["currency"] = json!(currency);
        payload["locale"] = json!(locale);
        let (status, _, body) = post(&payload).await;
        assert_eq!(status, StatusCode::OK, "{currency}/{locale}");
        assert!(body.starts_with(b"%PDF-"));
    }
}

#[tokio::test]
async fn get_is_not_allowed() {
    let response = app()
        .oneshot(
            Request::get("/generate-invoice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({ "status": "ok" }));
}
