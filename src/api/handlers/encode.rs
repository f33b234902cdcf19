//! Handler for the direct encode endpoint.

use axum::{Json, body::Bytes, extract::State, extract::rejection::BytesRejection};

use crate::api::dto::encode::{BodyError, EncodeRequest, EncodeResponse};
use crate::error::{AppError, FlatError};
use crate::state::AppState;

/// Encodes a PlantUML diagram into a viewer URL.
///
/// # Endpoint
///
/// `POST /api/encode-plantuml`
///
/// # Request Body
///
/// ```json
/// { "plantumlCode": "@startuml\nA -> B\n@enduml" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "success",
///   "url": "https://www.plantuml.com/plantuml/svg/SyfFKj2rKt3CoKnELR1Io4ZDoSa70000",
///   "encoded": "SyfFKj2rKt3CoKnELR1Io4ZDoSa70000",
///   "format": "svg"
/// }
/// ```
///
/// # Errors
///
/// - **400** `EMPTY_CODE` - missing, non-string or blank `plantumlCode`
/// - **413** `CODE_TOO_LARGE` - source above the size ceiling
/// - **500** `ENCODING_FAILED` - unreadable body or compression fault
pub async fn encode_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<EncodeResponse>, FlatError> {
    let request = EncodeRequest::from_body(body).map_err(|e| match e {
        BodyError::TooLarge => AppError::CodeTooLarge {
            max_bytes: state.encoder.policy().max_bytes,
        },
        other => AppError::EncodingFailed {
            reason: other.to_string(),
        },
    })?;

    let diagram = state.encoder.encode_validated(request.plantuml_code())?;

    Ok(Json(EncodeResponse::success(diagram)))
}

/// Rejects every method the encode route does not serve.
pub async fn encode_method_not_allowed() -> FlatError {
    FlatError(AppError::MethodNotAllowed { allowed: "POST" })
}
