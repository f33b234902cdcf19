//! HTTP middleware for request processing.
//!
//! Provides cross-origin headers and observability middleware.

pub mod cors;
pub mod tracing;
