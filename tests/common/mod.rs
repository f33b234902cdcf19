#![allow(dead_code)]

use axum_test::TestServer;
use plantuml_encoder::application::services::EncoderService;
use plantuml_encoder::domain::validation::ValidationPolicy;
use plantuml_encoder::routes::build_router;
use plantuml_encoder::state::AppState;

pub const VIEWER_PREFIX: &str = "https://www.plantuml.com/plantuml/svg/";

pub const TOKEN_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

pub const BODY_LIMIT: usize = 1024 * 1024;

pub fn create_test_state() -> AppState {
    AppState::new(EncoderService::default())
}

pub fn create_test_server() -> TestServer {
    TestServer::new(build_router(create_test_state(), BODY_LIMIT)).unwrap()
}

pub fn create_test_server_with_limits(max_code_bytes: usize, body_limit: usize) -> TestServer {
    let encoder = EncoderService::new(ValidationPolicy::new(max_code_bytes), VIEWER_PREFIX);
    TestServer::new(build_router(AppState::new(encoder), body_limit)).unwrap()
}

pub fn is_token(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| TOKEN_ALPHABET.contains(c))
}

/// `@startuml\nA --> B\n@enduml` padded with spaces to exactly `len` bytes.
pub fn padded_diagram(len: usize) -> String {
    let base = "@startuml\nA --> B\n@enduml";
    format!("{}{}", base, " ".repeat(len - base.len()))
}

/// Far above the 50KB ceiling.
pub fn oversized_diagram() -> String {
    format!("@startuml\n{}\n@enduml", "A --> B\n".repeat(20_000))
}
