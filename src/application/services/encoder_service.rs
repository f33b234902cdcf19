//! Validation-then-encode service behind both HTTP interfaces.

use crate::domain::entities::{DEFAULT_VIEWER_BASE_URL, EncodedDiagram};
use crate::domain::validation::{ValidationPolicy, Verdict};
use crate::error::AppError;
use crate::utils::plantuml_codec::encode_token;

/// Service turning diagram source into viewer links.
///
/// Stateless apart from its immutable policy, so a single instance is shared
/// across all requests without locking.
#[derive(Debug, Clone)]
pub struct EncoderService {
    policy: ValidationPolicy,
    viewer_base_url: String,
}

impl Default for EncoderService {
    fn default() -> Self {
        Self::new(ValidationPolicy::default(), DEFAULT_VIEWER_BASE_URL)
    }
}

impl EncoderService {
    /// Creates a new encoder service.
    ///
    /// # Arguments
    ///
    /// - `policy` - size ceiling applied by [`Self::validate`]
    /// - `viewer_base_url` - prefix tokens are appended to (must end with `/`)
    pub fn new(policy: ValidationPolicy, viewer_base_url: impl Into<String>) -> Self {
        Self {
            policy,
            viewer_base_url: viewer_base_url.into(),
        }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn viewer_base_url(&self) -> &str {
        &self.viewer_base_url
    }

    /// Runs the validator and hands back the accepted text.
    ///
    /// # Errors
    ///
    /// - [`AppError::EmptyCode`] if the candidate is absent or blank
    /// - [`AppError::CodeTooLarge`] if it exceeds the policy ceiling
    pub fn validate<'a>(&self, candidate: Option<&'a str>) -> Result<&'a str, AppError> {
        match self.policy.validate(candidate) {
            Verdict::Valid => candidate.ok_or(AppError::EmptyCode),
            Verdict::Invalid(reason) => Err(AppError::from_invalid(reason, self.policy.max_bytes)),
        }
    }

    /// Encodes text without validating it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EncodingFailed`] if compression fails.
    pub fn encode(&self, text: &str) -> Result<EncodedDiagram, AppError> {
        let encoded = encode_token(text)?;

        tracing::debug!(
            input_bytes = text.len(),
            token_len = encoded.len(),
            "Encoded PlantUML diagram"
        );

        Ok(EncodedDiagram::new(encoded, &self.viewer_base_url))
    }

    /// Validates the candidate and, only if it passes, encodes it.
    ///
    /// # Errors
    ///
    /// See [`Self::validate`] and [`Self::encode`].
    pub fn encode_validated(&self, candidate: Option<&str>) -> Result<EncodedDiagram, AppError> {
        let text = self.validate(candidate)?;
        self.encode(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::plantuml_codec::decode_token;

    const DIAGRAM: &str = "@startuml\nA -> B\n@enduml";

    #[test]
    fn test_encode_validated_success() {
        let service = EncoderService::default();
        let diagram = service.encode_validated(Some(DIAGRAM)).unwrap();

        assert!(!diagram.encoded.is_empty());
        assert_eq!(
            diagram.url,
            format!("https://www.plantuml.com/plantuml/svg/{}", diagram.encoded)
        );
        assert_eq!(decode_token(&diagram.encoded).unwrap(), DIAGRAM);
    }

    #[test]
    fn test_encode_validated_is_deterministic() {
        let service = EncoderService::default();

        let first = service.encode_validated(Some(DIAGRAM)).unwrap();
        let second = service.encode_validated(Some(DIAGRAM)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let service = EncoderService::default();

        assert!(matches!(
            service.encode_validated(Some("  \n ")),
            Err(AppError::EmptyCode)
        ));
        assert!(matches!(
            service.encode_validated(None),
            Err(AppError::EmptyCode)
        ));
    }

    #[test]
    fn test_oversized_input_reports_ceiling() {
        let service = EncoderService::new(ValidationPolicy::new(16), DEFAULT_VIEWER_BASE_URL);

        match service.encode_validated(Some("@startuml\n@enduml\n")) {
            Err(AppError::CodeTooLarge { max_bytes }) => assert_eq!(max_bytes, 16),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_encode_skips_validation() {
        let service = EncoderService::default();
        let diagram = service.encode("").unwrap();

        assert!(!diagram.encoded.is_empty());
    }

    #[test]
    fn test_custom_viewer_base_url() {
        let service = EncoderService::new(
            ValidationPolicy::default(),
            "https://plantuml.internal.example/svg/",
        );
        let diagram = service.encode_validated(Some(DIAGRAM)).unwrap();

        assert!(
            diagram
                .url
                .starts_with("https://plantuml.internal.example/svg/")
        );
        assert!(diagram.url.ends_with(&diagram.encoded));
    }
}
