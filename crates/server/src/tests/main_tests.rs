use super::*;
use axum::{
    body::{self, Body},
    http::{header, Request, StatusCode},
};
use shared::protocol::{AddressReceived, ADDRESS_INTAKE_ROUTE};
use tower::ServiceExt;

#[tokio::test]
async fn default_settings_build_a_serving_router() {
    let app = build_router(&Settings::default()).expect("router");

    let request = Request::post(ADDRESS_INTAKE_ROUTE)
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({
                "street": "1 Main St",
                "city": "Springfield",
                "state": "IL",
                "zip": "62701",
            })
            .to_string(),
        ))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );

    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let ack: AddressReceived = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(
        ack.echoed_address().map(|address| address.city),
        Some("Springfield".to_string())
    );
}

#[test]
fn configured_origin_must_be_a_header_value() {
    let settings = Settings {
        allowed_origin: "http://local\nhost:3000".to_string(),
        ..Settings::default()
    };
    assert!(build_router(&settings).is_err());
}
