//! Encoded diagram entity returned by the encoder.

use serde::Serialize;

/// Viewer prefix on the public PlantUML server. Tokens are appended verbatim.
pub const DEFAULT_VIEWER_BASE_URL: &str = "https://www.plantuml.com/plantuml/svg/";

/// Output format rendered by the viewer URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramFormat {
    Svg,
}

impl DiagramFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagramFormat::Svg => "svg",
        }
    }
}

/// A diagram token together with the composed viewer URL.
///
/// Serializes as `{ "url": ..., "encoded": ..., "format": "svg" }`, the shape
/// shared by the direct encode response and the tool call result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedDiagram {
    pub url: String,
    pub encoded: String,
    pub format: DiagramFormat,
}

impl EncodedDiagram {
    /// Builds the entity from a token, joining it onto `viewer_base_url`.
    ///
    /// No escaping is applied: the token alphabet is already URL-safe.
    pub fn new(encoded: String, viewer_base_url: &str) -> Self {
        Self {
            url: format!("{viewer_base_url}{encoded}"),
            encoded,
            format: DiagramFormat::Svg,
        }
    }
}
