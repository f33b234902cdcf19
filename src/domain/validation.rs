//! Input gate in front of the encoder.
//!
//! Two checks run in a fixed order: emptiness first, then size. The size check
//! measures the original, unstripped UTF-8 byte length and is inclusive at the
//! ceiling.

/// Default ceiling for diagram source, in bytes (50 KiB).
pub const DEFAULT_MAX_CODE_BYTES: usize = 50 * 1024;

/// Machine-readable reason a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Absent, not a string, or whitespace only.
    EmptyCode,
    /// UTF-8 byte length above the configured ceiling.
    CodeTooLarge,
}

impl InvalidReason {
    pub fn code(&self) -> &'static str {
        match self {
            InvalidReason::EmptyCode => "EMPTY_CODE",
            InvalidReason::CodeTooLarge => "CODE_TOO_LARGE",
        }
    }
}

/// Outcome of [`ValidationPolicy::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(InvalidReason),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Size and emptiness policy applied to candidate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub max_bytes: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_CODE_BYTES,
        }
    }
}

impl ValidationPolicy {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Checks a candidate against the policy.
    ///
    /// `None` stands for a missing or non-string value in the request.
    pub fn validate(&self, candidate: Option<&str>) -> Verdict {
        let Some(text) = candidate else {
            return Verdict::Invalid(InvalidReason::EmptyCode);
        };

        if is_blank(text) {
            return Verdict::Invalid(InvalidReason::EmptyCode);
        }

        if text.len() > self.max_bytes {
            return Verdict::Invalid(InvalidReason::CodeTooLarge);
        }

        Verdict::Valid
    }
}

/// Validates a candidate against the default 50 KiB policy.
pub fn validate(candidate: Option<&str>) -> Verdict {
    ValidationPolicy::default().validate(candidate)
}

// True when JavaScript's String.prototype.trim would leave nothing.
fn is_blank(text: &str) -> bool {
    text.chars().all(is_trimmed_whitespace)
}

/// ECMAScript `WhiteSpace` plus `LineTerminator`. Narrower than
/// `char::is_whitespace`: U+0085 is kept, U+FEFF is stripped.
fn is_trimmed_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{b}'
            | '\u{c}'
            | ' '
            | '\u{a0}'
            | '\u{feff}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\n'
            | '\r'
            | '\u{2028}'
            | '\u{2029}'
    )
}
