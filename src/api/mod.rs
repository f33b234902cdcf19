//! HTTP API layer.
//!
//! This layer translates HTTP requests into encoder operations and formats
//! responses according to the two API contracts (direct encode and tools).
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
