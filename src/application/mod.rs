//! Application layer services.
//!
//! Services combine the domain's validation gate with the codec and expose a
//! small API to HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::encoder_service::EncoderService`] - Validate, then encode
//! - [`services::tool_registry::ToolRegistry`] - Name-based tool dispatch

pub mod services;
