//! DTOs for the direct encode endpoint and the tool call body.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::EncodedDiagram;

/// Request body field holding the diagram source.
pub const PLANTUML_CODE_FIELD: &str = "plantumlCode";

/// Why a request body could not be turned into an [`EncodeRequest`].
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("request body exceeds the configured limit")]
    TooLarge,

    #[error("failed to read request body: {0}")]
    Read(String),

    #[error("request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request body is JSON null")]
    Null,
}

/// Diagram source extracted from a request body.
///
/// The body is parsed loosely: a missing or non-string `plantumlCode` is
/// kept as `None` so the validator reports it as `EMPTY_CODE` rather than
/// failing deserialization.
#[derive(Debug, Default)]
pub struct EncodeRequest {
    pub plantuml_code: Option<String>,
}

impl EncodeRequest {
    /// Parses a JSON body. An empty body is a parse error.
    pub fn from_body(body: Result<Bytes, BytesRejection>) -> Result<Self, BodyError> {
        let body = read(body)?;
        Self::parse(&body)
    }

    /// Parses a JSON body, treating an empty body as `{}`.
    pub fn from_body_or_default(body: Result<Bytes, BytesRejection>) -> Result<Self, BodyError> {
        let body = read(body)?;
        if body.is_empty() {
            return Ok(Self::default());
        }
        Self::parse(&body)
    }

    pub fn plantuml_code(&self) -> Option<&str> {
        self.plantuml_code.as_deref()
    }

    fn parse(body: &[u8]) -> Result<Self, BodyError> {
        let value: Value = serde_json::from_slice(body)?;
        if value.is_null() {
            return Err(BodyError::Null);
        }

        let plantuml_code = value
            .get(PLANTUML_CODE_FIELD)
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self { plantuml_code })
    }
}

fn read(body: Result<Bytes, BytesRejection>) -> Result<Bytes, BodyError> {
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            BodyError::TooLarge
        } else {
            BodyError::Read(rejection.body_text())
        }
    })
}

/// Successful direct encode response.
///
/// ```json
/// {
///   "status": "success",
///   "url": "https://www.plantuml.com/plantuml/svg/SyfFKj2rKt3CoKnELR1Io4ZDoSa70000",
///   "encoded": "SyfFKj2rKt3CoKnELR1Io4ZDoSa70000",
///   "format": "svg"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub diagram: EncodedDiagram,
}

impl EncodeResponse {
    pub fn success(diagram: EncodedDiagram) -> Self {
        Self {
            status: "success",
            diagram,
        }
    }
}
