//! Domain layer containing the encoder's values and validation rules.
//!
//! Everything in this layer is pure: no I/O, no shared state, no HTTP types.
//!
//! # Architecture
//!
//! - [`entities`] - Encoded diagram and tool descriptor values
//! - [`validation`] - Emptiness and size gate applied before encoding
//!
//! The encoding algorithm itself lives in [`crate::utils::plantuml_codec`],
//! and [`crate::application::services`] wires validation and encoding together.

pub mod entities;
pub mod validation;
