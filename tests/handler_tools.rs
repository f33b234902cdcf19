mod common;

use axum::body::Bytes;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_tools_discovery() {
    let server = common::create_test_server();

    let response = server.get("/api/tools").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let tools = json["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 1);

    let tool = &tools[0];
    assert_eq!(tool["id"], "encodePlantUML");
    assert_eq!(tool["name"], "encodePlantUML");
    assert!(tool["description"].is_string());
    assert_eq!(tool["inputSchema"]["type"], "object");
    assert_eq!(
        tool["inputSchema"]["properties"]["plantumlCode"]["type"],
        "string"
    );
    assert!(tool["inputSchema"]["properties"]["plantumlCode"]["description"].is_string());
    assert_eq!(tool["inputSchema"]["required"], json!(["plantumlCode"]));
}

#[tokio::test]
async fn test_tools_discovery_method_not_allowed() {
    let server = common::create_test_server();

    let response = server.put("/api/tools").json(&json!({})).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(json["error"]["message"], "Only GET method is allowed");
}

#[tokio::test]
async fn test_tools_discovery_preflight() {
    let server = common::create_test_server();

    let response = server.method(Method::OPTIONS, "/api/tools").await;

    response.assert_status_ok();
    assert!(response.text().is_empty());
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(
        response.header("access-control-allow-methods"),
        "GET, OPTIONS"
    );
}

#[tokio::test]
async fn test_tool_call_success() {
    let server = common::create_test_server();

    let response = server
        .post("/api/tools/encodePlantUML")
        .json(&json!({ "plantumlCode": "@startuml\nA --> B\n@enduml" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["result"]["format"], "svg");

    let encoded = json["result"]["encoded"].as_str().unwrap();
    assert!(common::is_token(encoded));
    assert_eq!(
        json["result"]["url"],
        format!("{}{}", common::VIEWER_PREFIX, encoded)
    );
}

#[tokio::test]
async fn test_tool_call_matches_direct_encode() {
    let server = common::create_test_server();
    let body = json!({ "plantumlCode": "@startuml\nactor User\nUser -> (Encode)\n@enduml" });

    let direct = server.post("/api/encode-plantuml").json(&body).await;
    let tool = server
        .post("/api/tools/encodePlantUML")
        .json(&body)
        .await;

    let direct = direct.json::<serde_json::Value>();
    let tool = tool.json::<serde_json::Value>();
    assert_eq!(direct["encoded"], tool["result"]["encoded"]);
    assert_eq!(direct["url"], tool["result"]["url"]);
}

#[tokio::test]
async fn test_tool_call_empty_code() {
    let server = common::create_test_server();

    let response = server
        .post("/api/tools/encodePlantUML")
        .json(&json!({ "plantumlCode": "" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "EMPTY_CODE");
    assert!(json["error"]["message"].is_string());
}

#[tokio::test]
async fn test_tool_call_empty_body() {
    let server = common::create_test_server();

    let response = server.post("/api/tools/encodePlantUML").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "EMPTY_CODE"
    );
}

#[tokio::test]
async fn test_tool_call_code_too_large() {
    let server = common::create_test_server();

    let response = server
        .post("/api/tools/encodePlantUML")
        .json(&json!({ "plantumlCode": common::oversized_diagram() }))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "CODE_TOO_LARGE");
}

#[tokio::test]
async fn test_tool_call_exactly_at_size_limit() {
    let server = common::create_test_server();

    let response = server
        .post("/api/tools/encodePlantUML")
        .json(&json!({ "plantumlCode": common::padded_diagram(51_200) }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["success"], true);
}

#[tokio::test]
async fn test_tool_call_unknown_tool() {
    let server = common::create_test_server();

    let response = server
        .post("/api/tools/unknownTool")
        .json(&json!({ "plantumlCode": "@startuml\nA --> B\n@enduml" }))
        .await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "TOOL_NOT_FOUND");
    assert_eq!(json["error"]["message"], "Tool 'unknownTool' not found");
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_tool_call_uses_last_segment() {
    let server = common::create_test_server();

    let response = server
        .post("/api/tools/v1/encodePlantUML")
        .json(&json!({ "plantumlCode": "@startuml\nA --> B\n@enduml" }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_tool_call_without_name() {
    let server = common::create_test_server();

    let response = server
        .post("/api/tools")
        .json(&json!({ "plantumlCode": "@startuml\nA --> B\n@enduml" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "TOOL_NAME_REQUIRED");
    assert_eq!(json["error"]["message"], "Tool name is required in the path");
    assert_eq!(
        response.header("access-control-allow-methods"),
        "POST, OPTIONS"
    );
}

#[tokio::test]
async fn test_tools_delete_method_not_allowed() {
    let server = common::create_test_server();

    let response = server.delete("/api/tools").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "METHOD_NOT_ALLOWED"
    );
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_tools_preflight_for_post() {
    let server = common::create_test_server();

    let response = server
        .method(Method::OPTIONS, "/api/tools")
        .add_header("access-control-request-method", "POST")
        .await;

    response.assert_status_ok();
    assert!(response.text().is_empty());
    assert_eq!(
        response.header("access-control-allow-methods"),
        "POST, OPTIONS"
    );
}

#[tokio::test]
async fn test_tools_discovery_advertises_get() {
    let server = common::create_test_server();

    let response = server.get("/api/tools").await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(
        response.header("access-control-allow-methods"),
        "GET, OPTIONS"
    );
}

#[tokio::test]
async fn test_tool_call_collection_name_is_not_a_tool() {
    let server = common::create_test_server();

    let response = server
        .post("/api/tools/tools")
        .json(&json!({ "plantumlCode": "@startuml\nA --> B\n@enduml" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "TOOL_NAME_REQUIRED"
    );
}

#[tokio::test]
async fn test_tool_call_malformed_body() {
    let server = common::create_test_server();

    let response = server
        .post("/api/tools/unknownTool")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"not json"))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn test_tool_call_method_not_allowed() {
    let server = common::create_test_server();

    let response = server.get("/api/tools/encodePlantUML").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(json["error"]["message"], "Only POST method is allowed");
}

#[tokio::test]
async fn test_tool_call_preflight() {
    let server = common::create_test_server();

    let response = server
        .method(Method::OPTIONS, "/api/tools/encodePlantUML")
        .await;

    response.assert_status_ok();
    assert!(response.text().is_empty());
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(
        response.header("access-control-allow-headers"),
        "Content-Type"
    );
    assert_eq!(
        response.header("access-control-allow-methods"),
        "POST, OPTIONS"
    );
}
