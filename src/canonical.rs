//! Canonical tool-calling model
//!
//! The protocol-neutral hub every converter translates through: a typed
//! recursive schema tree, a tool definition, and an invocation record.
//! Nothing here is a wire format; the `openai` and `mcp` modules own the
//! boundary shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The JSON Schema kind of a [`SchemaNode`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// Object with named properties
    #[default]
    Object,
    /// String value
    String,
    /// Floating point number
    Number,
    /// Integer number
    Integer,
    /// Boolean value
    Boolean,
    /// Array of items
    Array,
}

impl SchemaKind {
    /// The JSON Schema `type` string for this kind
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
        }
    }

    /// Parse a `type` string, if it names a known kind
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "object" => Some(Self::Object),
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            "array" => Some(Self::Array),
            _ => None,
        }
    }

    /// Whether this kind carries numeric bounds by convention
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Integer)
    }
}

/// One node of the canonical recursive schema tree
///
/// Semantic validity is the producer's problem, not this model's:
/// `required` entries may name missing properties, bounds may sit on a
/// non-numeric kind, an array may lack `items`. All of that is carried
/// as-is and never rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    /// Schema kind (`object`, `string`, ...)
    #[serde(rename = "type")]
    pub kind: SchemaKind,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allowed values; empty means "no enum"
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    /// Default value, carried opaquely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Minimum numeric value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Maximum numeric value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Minimum string length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum string length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Item schema for `kind = Array`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    /// Named property schemas for `kind = Object`
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, SchemaNode>,
    /// Names of required properties, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Whether properties beyond `properties` are allowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
}

impl SchemaNode {
    /// Create a node of the given kind
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Create an empty object schema
    pub fn object() -> Self {
        Self::new(SchemaKind::Object)
    }

    /// Create a string schema
    pub fn string() -> Self {
        Self::new(SchemaKind::String)
    }

    /// Create a number schema
    pub fn number() -> Self {
        Self::new(SchemaKind::Number)
    }

    /// Create an integer schema
    pub fn integer() -> Self {
        Self::new(SchemaKind::Integer)
    }

    /// Create a boolean schema
    pub fn boolean() -> Self {
        Self::new(SchemaKind::Boolean)
    }

    /// Create an array schema with the given item schema
    pub fn array(items: SchemaNode) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(SchemaKind::Array)
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set allowed values
    pub fn with_enum(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.enum_values = values.into_iter().collect();
        self
    }

    /// Set default value
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Add a named property schema
    pub fn add_property(mut self, name: impl Into<String>, schema: SchemaNode) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Mark a property name as required
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }
}

/// A canonical tool definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name
    pub name: String,
    /// Tool description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parameter schema, conventionally an object
    pub parameters: SchemaNode,
}

impl ToolDefinition {
    /// Create a new tool definition
    pub fn new(name: impl Into<String>, parameters: SchemaNode) -> Self {
        Self {
            name: name.into(),
            description: None,
            parameters,
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A canonical request to execute a named tool
///
/// The id is a correlation token, not a secret. Canonical form always
/// carries one; boundaries that cannot supply an id get a generated one
/// from the [`InvocationMapper`](crate::translator::InvocationMapper).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    /// Correlation id linking the call to its result
    pub id: String,
    /// Name of the tool to execute
    pub tool_name: String,
    /// Arguments as a native key/value map
    pub arguments: HashMap<String, Value>,
}

impl Invocation {
    /// Create a new invocation
    pub fn new(
        id: impl Into<String>,
        tool_name: impl Into<String>,
        arguments: HashMap<String, Value>,
    ) -> Self {
        Self {
            id: id.into(),
            tool_name: tool_name.into(),
            arguments,
        }
    }
}
