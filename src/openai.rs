//! OpenAI-style function-calling wire shapes
//!
//! The chat-completion request side: tools are `function` wrappers around
//! a dynamic JSON Schema value, and tool calls carry their arguments as a
//! JSON-encoded string.
//! Reference: <https://platform.openai.com/docs/guides/function-calling>

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool type discriminator, always `"function"`
pub const TOOL_TYPE_FUNCTION: &str = "function";

/// Tool choice values accepted as plain strings
pub mod tool_choice {
    /// Never call a tool
    pub const NONE: &str = "none";
    /// Let the model decide (the default)
    pub const AUTO: &str = "auto";
    /// Force the model to call some tool
    pub const REQUIRED: &str = "required";
}

/// A tool (function) offered to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAITool {
    /// Tool type, always `"function"`
    #[serde(rename = "type")]
    pub tool_type: String,
    /// The function declaration
    pub function: OpenAIFunction,
}

/// Function declaration inside a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIFunction {
    /// Function name
    pub name: String,
    /// Function description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema of the parameters, as a dynamic value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

impl OpenAITool {
    /// Create a function tool
    pub fn function(
        name: impl Into<String>,
        description: Option<impl Into<String>>,
        parameters: Option<Value>,
    ) -> Self {
        Self {
            tool_type: TOOL_TYPE_FUNCTION.to_owned(),
            function: OpenAIFunction {
                name: name.into(),
                description: description.map(Into::into),
                parameters,
            },
        }
    }
}

/// A tool call issued by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIToolCall {
    /// Call id correlating the call with its result message
    pub id: String,
    /// Call type, always `"function"`
    #[serde(rename = "type")]
    pub call_type: String,
    /// The concrete function call
    pub function: OpenAIFunctionCall,
}

/// Function name and arguments of a tool call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIFunctionCall {
    /// Name of the called function
    pub name: String,
    /// Arguments as a JSON-encoded object string
    pub arguments: String,
}

impl OpenAIToolCall {
    /// Create a new tool call
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            call_type: TOOL_TYPE_FUNCTION.to_owned(),
            function: OpenAIFunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

/// Tool choice object forcing a specific function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIToolChoiceFunction {
    /// Always `"function"`
    #[serde(rename = "type")]
    pub tool_type: String,
    /// The function to force
    pub function: OpenAIFunctionName,
}

/// Bare function name, used by forced tool choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIFunctionName {
    /// Name of the function to call
    pub name: String,
}

impl OpenAIToolChoiceFunction {
    /// Force the model to call the named function
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tool_type: TOOL_TYPE_FUNCTION.to_owned(),
            function: OpenAIFunctionName { name: name.into() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_serialization_omits_absent_fields() {
        let tool = OpenAITool::function("ping", None::<String>, None);

        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value["type"], "function");
        assert_eq!(value["function"]["name"], "ping");
        assert!(value["function"].get("description").is_none());
        assert!(value["function"].get("parameters").is_none());
    }

    #[test]
    fn test_tool_deserialization() {
        let tool: OpenAITool = serde_json::from_value(json!({
            "type": "function",
            "function": {
                "name": "get_weather",
                "description": "Get the current weather",
                "parameters": { "type": "object" }
            }
        }))
        .unwrap();

        assert_eq!(tool.function.name, "get_weather");
        assert_eq!(
            tool.function.description.as_deref(),
            Some("Get the current weather")
        );
        assert_eq!(tool.function.parameters, Some(json!({ "type": "object" })));
    }

    #[test]
    fn test_forced_tool_choice_shape() {
        let choice = OpenAIToolChoiceFunction::new("get_weather");

        let value = serde_json::to_value(&choice).unwrap();
        assert_eq!(value, json!({
            "type": "function",
            "function": { "name": "get_weather" }
        }));
    }
}
