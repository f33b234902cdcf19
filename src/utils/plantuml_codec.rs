//! PlantUML text encoding.
//!
//! The public PlantUML server accepts diagrams as a path token built in three
//! steps:
//!
//! 1. raw DEFLATE of the UTF-8 source (no zlib header, no checksum trailer)
//! 2. standard Base64 of the compressed bytes
//! 3. position-wise transliteration from the Base64 alphabet into
//!    `0-9A-Za-z-_`
//!
//! Output is deterministic for one compression backend. Other DEFLATE
//! implementations may emit a different, equally valid stream for the same
//! input, so tokens are never compared against values produced elsewhere.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use std::io::{Read, Write};
use thiserror::Error;

/// Token alphabet, ordered to match [`BASE64_ALPHABET`] position by position.
pub const PLANTUML_ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// Standard Base64 alphabet (RFC 4648).
pub const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

// Zero marks "not in alphabet"; neither alphabet contains NUL.
const BASE64_TO_PLANTUML: [u8; 256] = translation_table(BASE64_ALPHABET, PLANTUML_ALPHABET);
const PLANTUML_TO_BASE64: [u8; 256] = translation_table(PLANTUML_ALPHABET, BASE64_ALPHABET);

const fn translation_table(from: &[u8; 64], to: &[u8; 64]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 64 {
        table[from[i] as usize] = to[i];
        i += 1;
    }
    table
}

/// Errors raised by the codec.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("deflate failed: {0}")]
    Deflate(#[source] std::io::Error),

    #[error("inflate failed: {0}")]
    Inflate(#[source] std::io::Error),

    #[error("invalid token character {ch:?} at position {position}")]
    InvalidToken { ch: char, position: usize },

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded diagram is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encodes diagram source into a PlantUML token.
///
/// Performs no validation: an empty string still yields a (short) token.
///
/// # Errors
///
/// Returns [`CodecError::Deflate`] if the compressor fails.
///
/// # Examples
///
/// ```ignore
/// let token = encode_token("@startuml\nA -> B\n@enduml")?;
/// assert!(token.bytes().all(|b| PLANTUML_ALPHABET.contains(&b)));
/// ```
pub fn encode_token(text: &str) -> Result<String, CodecError> {
    let compressed = deflate_raw(text.as_bytes())?;
    let base64 = STANDARD_NO_PAD.encode(compressed);
    Ok(to_plantuml_alphabet(&base64))
}

/// Reverses [`encode_token`], returning the original diagram source.
///
/// # Errors
///
/// - [`CodecError::InvalidToken`] for characters outside the token alphabet
/// - [`CodecError::Base64`] for a token of impossible length
/// - [`CodecError::Inflate`] for a corrupt compressed stream
/// - [`CodecError::Utf8`] if the inflated bytes are not UTF-8
pub fn decode_token(token: &str) -> Result<String, CodecError> {
    let mut base64 = String::with_capacity(token.len());

    for (position, ch) in token.chars().enumerate() {
        let mapped = u8::try_from(ch)
            .map(|b| PLANTUML_TO_BASE64[b as usize])
            .unwrap_or(0);

        if mapped == 0 {
            return Err(CodecError::InvalidToken { ch, position });
        }

        base64.push(mapped as char);
    }

    let compressed = STANDARD_NO_PAD.decode(base64)?;
    let text = inflate_raw(&compressed)?;

    Ok(String::from_utf8(text)?)
}

fn deflate_raw(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(data.len() / 2), Compression::best());
    encoder.write_all(data).map_err(CodecError::Deflate)?;
    encoder.finish().map_err(CodecError::Deflate)
}

fn inflate_raw(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut text = Vec::with_capacity(data.len() * 4);
    DeflateDecoder::new(data)
        .read_to_end(&mut text)
        .map_err(CodecError::Inflate)?;
    Ok(text)
}

/// Maps standard Base64 text onto the token alphabet.
///
/// Characters outside the Base64 alphabet are dropped. Unpadded Base64 never
/// produces one, so a miss is a broken invariant rather than input to handle.
fn to_plantuml_alphabet(base64: &str) -> String {
    base64
        .bytes()
        .filter_map(|b| {
            let mapped = transliterate(b);
            debug_assert!(mapped.is_some(), "byte {b:#04x} is not base64");
            mapped
        })
        .collect()
}

fn transliterate(b: u8) -> Option<char> {
    let mapped = BASE64_TO_PLANTUML[b as usize];
    (mapped != 0).then_some(mapped as char)
}
