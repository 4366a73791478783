use anyhow::Context;
use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{AddressReceived, ADDRESS_INTAKE_ROUTE, HEALTH_ROUTE},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
};
use tracing::{info, warn};

pub const MAX_ADDRESS_BODY_BYTES: usize = 100 * 1024;

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// Routes for the intake endpoint, restricted to a single browser origin.
pub fn routes(allowed_origin: &str) -> anyhow::Result<Router> {
    Ok(Router::new()
        .route(HEALTH_ROUTE, get(healthz))
        .route(ADDRESS_INTAKE_ROUTE, post(receive_address))
        .layer(RequestBodyLimitLayer::new(MAX_ADDRESS_BODY_BYTES))
        .layer(cors_layer(allowed_origin)?))
}

pub fn cors_layer(allowed_origin: &str) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(allowed_origin.trim())
        .with_context(|| format!("invalid allowed origin '{allowed_origin}'"))?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

async fn healthz() -> &'static str {
    "ok"
}

/// Echoes any JSON object or array back. Bodies that are empty or not sent as
/// `application/json` are acknowledged as `{}`. Nothing is validated or stored.
async fn receive_address(
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<AddressReceived>)> {
    let body = body.map_err(|rejection| {
        warn!(status = %rejection.status(), "rejected address payload");
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(ApiError::new(ErrorCode::Validation, rejection.body_text())),
        )
    })?;

    let address = if body.is_empty() || !is_json_content(&headers) {
        serde_json::Value::Object(Default::default())
    } else {
        serde_json::from_slice::<serde_json::Value>(&body).map_err(|err| {
            warn!(error = %err, "malformed address payload");
            bad_request(format!("malformed JSON body: {err}"))
        })?
    };

    if !(address.is_object() || address.is_array()) {
        return Err(bad_request("address payload must be a JSON object"));
    }

    info!(%address, "received address");
    Ok((StatusCode::CREATED, Json(AddressReceived::echo(address))))
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::new(ErrorCode::Validation, message)),
    )
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
