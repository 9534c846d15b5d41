//! MCP-style transport wire shapes
//!
//! The tool-execution client side: tool input schemas keep their
//! per-property schemas as dynamic values, call arguments are a native
//! map, and results are ordered content lists with an error flag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tool as exposed by the transport client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpTool {
    /// Tool name
    pub name: String,
    /// Tool description; the empty string means "no description"
    #[serde(default)]
    pub description: String,
    /// Input parameter schema
    #[serde(default)]
    pub input_schema: McpInputSchema,
}

impl McpTool {
    /// Create a new tool with an empty object schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            input_schema: McpInputSchema::default(),
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set input schema
    pub fn with_input_schema(mut self, schema: McpInputSchema) -> Self {
        self.input_schema = schema;
        self
    }
}

/// Input schema of a transport tool
///
/// Only the top level is typed; each entry in `properties` is a dynamic
/// JSON Schema value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpInputSchema {
    /// Schema type, conventionally `"object"`
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Property schemas as dynamic values
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
    /// Names of required properties
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Whether additional properties are allowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
}

impl Default for McpInputSchema {
    fn default() -> Self {
        Self {
            schema_type: "object".to_owned(),
            properties: Map::new(),
            required: Vec::new(),
            additional_properties: None,
        }
    }
}

/// A tool call in transport shape: name plus native-map arguments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct McpToolCall {
    /// Name of the tool to call
    pub name: String,
    /// Call arguments; absent means "no arguments"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Map<String, Value>>,
}

impl McpToolCall {
    /// Create a new tool call
    pub fn new(name: impl Into<String>, arguments: Option<Map<String, Value>>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// One content item of a tool execution result
///
/// Unrecognized discriminators deserialize to [`McpContent::Unknown`]
/// instead of failing: a partially unrenderable result is more useful
/// than a hard error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum McpContent {
    /// Text content
    Text {
        /// The text payload
        text: String,
    },
    /// Image content
    Image {
        /// Base64-encoded image data
        data: String,
    },
    /// Resource reference
    Resource {
        /// Resource URI
        uri: String,
    },
    /// Content with an unrecognized discriminator
    #[serde(other)]
    Unknown,
}

impl McpContent {
    /// Create text content
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create image content from base64 data
    pub fn image(data: impl Into<String>) -> Self {
        Self::Image { data: data.into() }
    }

    /// Create a resource reference
    pub fn resource(uri: impl Into<String>) -> Self {
        Self::Resource { uri: uri.into() }
    }
}

/// Result of executing a tool call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpToolResult {
    /// Ordered result content
    pub content: Vec<McpContent>,
    /// Whether the execution produced an error
    #[serde(default)]
    pub is_error: bool,
}

impl McpToolResult {
    /// Create a successful result
    pub fn success(content: Vec<McpContent>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Create an error result
    pub fn error(content: Vec<McpContent>) -> Self {
        Self {
            content,
            is_error: true,
        }
    }
}
