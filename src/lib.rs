//! # PlantUML Encoder
//!
//! A small HTTP service that turns PlantUML source into a viewer URL on the
//! public PlantUML server. The service never contacts that server; it only
//! builds the link.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Encoded diagram values and the validation gate
//! - **Application Layer** ([`application`]) - Encoder service and tool registry
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//! - **Utilities** ([`utils`]) - The DEFLATE + Base64 + alphabet codec
//!
//! ## Interfaces
//!
//! - `POST /api/encode-plantuml` - encode directly
//! - `GET /api/tools`, `POST /api/tools/{tool}` - discover and call tools
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//!
//! curl -X POST http://localhost:3000/api/encode-plantuml \
//!   -H 'Content-Type: application/json' \
//!   -d '{"plantumlCode":"@startuml\nA -> B\n@enduml"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{EncoderService, ToolId, ToolRegistry};
    pub use crate::domain::entities::EncodedDiagram;
    pub use crate::domain::validation::{ValidationPolicy, Verdict};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::plantuml_codec::{decode_token, encode_token};
}
