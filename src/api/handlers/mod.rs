//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod encode;
pub mod health;
pub mod tools;

pub use encode::{encode_handler, encode_method_not_allowed};
pub use health::health_handler;
pub use tools::{
    tool_call_handler, tool_call_method_not_allowed, tool_call_without_name_handler,
    tools_discovery_handler, tools_discovery_method_not_allowed,
};
