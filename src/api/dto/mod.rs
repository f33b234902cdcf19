//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Request bodies are parsed
//! leniently so that type mismatches surface as validation codes instead of
//! extractor rejections.

pub mod encode;
pub mod health;
pub mod tools;
