//! Tool descriptors published by the discovery endpoint.

use serde::Serialize;
use std::collections::BTreeMap;

/// A callable tool as advertised to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: InputSchema,
}

/// JSON-Schema fragment describing a tool's argument object.
#[derive(Debug, Clone, Serialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub properties: BTreeMap<&'static str, PropertySchema>,
    pub required: Vec<&'static str>,
}

/// A single argument property.
#[derive(Debug, Clone, Serialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub description: &'static str,
}

impl InputSchema {
    /// Object schema with one required string property.
    pub fn single_string(name: &'static str, description: &'static str) -> Self {
        let mut properties = BTreeMap::new();
        properties.insert(
            name,
            PropertySchema {
                schema_type: "string",
                description,
            },
        );

        Self {
            schema_type: "object",
            properties,
            required: vec![name],
        }
    }
}
