//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;
use crate::utils::plantuml_codec::decode_token;

const SELF_TEST_DIAGRAM: &str = "@startuml\nA -> B\n@enduml";

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Encoder self-test passed
/// - **503 Service Unavailable**: Encoder self-test failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "encoder": {
///       "status": "ok",
///       "message": "Self-test round trip succeeded"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let encoder_check = check_encoder(&state);

    let healthy = encoder_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            encoder: encoder_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Encodes a tiny diagram and checks it decodes back unchanged.
fn check_encoder(state: &AppState) -> CheckStatus {
    let round_trip = state
        .encoder
        .encode(SELF_TEST_DIAGRAM)
        .map_err(|e| e.to_string())
        .and_then(|diagram| decode_token(&diagram.encoded).map_err(|e| e.to_string()));

    match round_trip {
        Ok(text) if text == SELF_TEST_DIAGRAM => CheckStatus {
            status: "ok".to_string(),
            message: Some("Self-test round trip succeeded".to_string()),
        },
        Ok(_) => CheckStatus {
            status: "error".to_string(),
            message: Some("Self-test round trip mismatch".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Encoder error: {}", e)),
        },
    }
}
