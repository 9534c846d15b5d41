//! Tool definition conversion between the three formats
//!
//! The canonical [`ToolDefinition`] is the hub; the direct
//! caller⇄transport edge is literally the two-hop composition through
//! it, so the two paths cannot drift apart.

use crate::canonical::{SchemaKind, SchemaNode, ToolDefinition};
use crate::error::BridgeResult;
use crate::mcp::{McpInputSchema, McpTool};
use crate::openai::OpenAITool;
use crate::translator::schema::{schema_from_parameters, schema_from_value, schema_to_value};
use serde_json::Map;
use tracing::warn;

/// Converter between caller, canonical, and transport tool definitions
pub struct ToolTranslator;

impl ToolTranslator {
    // ==========================================================================
    // Caller -> Canonical
    // ==========================================================================

    /// Convert an OpenAI tool to a canonical definition
    ///
    /// Absent `parameters` canonicalize to an empty object schema, never
    /// an error; the only failure mode is a parameters value that cannot
    /// be serialized to JSON at all.
    pub fn openai_to_canonical(tool: &OpenAITool) -> BridgeResult<ToolDefinition> {
        let parameters = schema_from_parameters(tool.function.parameters.as_ref())?;

        Ok(ToolDefinition {
            name: tool.function.name.clone(),
            description: tool.function.description.clone(),
            parameters,
        })
    }

    /// Convert a canonical definition to an OpenAI tool
    pub fn canonical_to_openai(tool: &ToolDefinition) -> OpenAITool {
        OpenAITool::function(
            tool.name.clone(),
            tool.description.clone(),
            Some(schema_to_value(&tool.parameters)),
        )
    }

    // ==========================================================================
    // Canonical <-> Transport
    // ==========================================================================

    /// Convert a canonical definition to a transport tool
    ///
    /// A `None` description becomes the empty string, which is the
    /// transport's only way to say "no description".
    pub fn canonical_to_mcp(tool: &ToolDefinition) -> McpTool {
        let schema = &tool.parameters;

        let mut properties = Map::new();
        for (name, property) in &schema.properties {
            properties.insert(name.clone(), schema_to_value(property));
        }

        McpTool {
            name: tool.name.clone(),
            description: tool.description.clone().unwrap_or_default(),
            input_schema: McpInputSchema {
                schema_type: schema.kind.as_str().to_owned(),
                properties,
                required: schema.required.clone(),
                additional_properties: schema.additional_properties,
            },
        }
    }

    /// Convert a transport tool to a canonical definition
    ///
    /// An empty-string description canonicalizes to `None`; property
    /// values that are not JSON objects are skipped.
    pub fn mcp_to_canonical(tool: &McpTool) -> ToolDefinition {
        let schema = &tool.input_schema;

        let kind = SchemaKind::parse(&schema.schema_type).unwrap_or(SchemaKind::Object);
        let mut parameters = SchemaNode::new(kind);

        for (name, property) in &schema.properties {
            if property.is_object() {
                parameters
                    .properties
                    .insert(name.clone(), schema_from_value(property));
            } else {
                warn!(property = name.as_str(), "skipping non-object property schema");
            }
        }

        parameters.required = schema.required.clone();
        parameters.additional_properties = schema.additional_properties;

        let description = if tool.description.is_empty() {
            None
        } else {
            Some(tool.description.clone())
        };

        ToolDefinition {
            name: tool.name.clone(),
            description,
            parameters,
        }
    }

    // ==========================================================================
    // Caller <-> Transport (direct path)
    // ==========================================================================

    /// Convert an OpenAI tool straight to a transport tool
    ///
    /// Implemented as the composition through canonical form.
    pub fn openai_to_mcp(tool: &OpenAITool) -> BridgeResult<McpTool> {
        Ok(Self::canonical_to_mcp(&Self::openai_to_canonical(tool)?))
    }

    /// Convert a transport tool straight to an OpenAI tool
    pub fn mcp_to_openai(tool: &McpTool) -> OpenAITool {
        Self::canonical_to_openai(&Self::mcp_to_canonical(tool))
    }

    // ==========================================================================
    // Batch conversion
    // ==========================================================================

    /// Convert a slice of OpenAI tools to canonical definitions
    pub fn openai_tools_to_canonical(tools: &[OpenAITool]) -> BridgeResult<Vec<ToolDefinition>> {
        tools.iter().map(Self::openai_to_canonical).collect()
    }

    /// Convert a slice of canonical definitions to OpenAI tools
    pub fn canonical_tools_to_openai(tools: &[ToolDefinition]) -> Vec<OpenAITool> {
        tools.iter().map(Self::canonical_to_openai).collect()
    }

    /// Convert a slice of OpenAI tools to transport tools
    pub fn openai_tools_to_mcp(tools: &[OpenAITool]) -> BridgeResult<Vec<McpTool>> {
        tools.iter().map(Self::openai_to_mcp).collect()
    }

    /// Convert a slice of transport tools to OpenAI tools
    pub fn mcp_tools_to_openai(tools: &[McpTool]) -> Vec<OpenAITool> {
        tools.iter().map(Self::mcp_to_openai).collect()
    }

    /// Convert a slice of canonical definitions to transport tools
    pub fn canonical_tools_to_mcp(tools: &[ToolDefinition]) -> Vec<McpTool> {
        tools.iter().map(Self::canonical_to_mcp).collect()
    }

    /// Convert a slice of transport tools to canonical definitions
    pub fn mcp_tools_to_canonical(tools: &[McpTool]) -> Vec<ToolDefinition> {
        tools.iter().map(Self::mcp_to_canonical).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn weather_tool() -> OpenAITool {
        OpenAITool::function(
            "get_weather",
            Some("Get the current weather in a given location"),
            Some(json!({
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": "The city and state, e.g. San Francisco, CA"
                    },
                    "unit": {
                        "type": "string",
                        "enum": ["celsius", "fahrenheit"]
                    }
                },
                "required": ["location"]
            })),
        )
    }

    #[test]
    fn test_openai_to_canonical() {
        let tool = ToolTranslator::openai_to_canonical(&weather_tool()).unwrap();

        assert_eq!(tool.name, "get_weather");
        assert_eq!(
            tool.description.as_deref(),
            Some("Get the current weather in a given location")
        );
        assert_eq!(tool.parameters.kind, SchemaKind::Object);
        assert_eq!(tool.parameters.properties.len(), 2);
        assert_eq!(tool.parameters.required, vec!["location"]);
        assert_eq!(
            tool.parameters.properties["unit"].enum_values,
            vec![json!("celsius"), json!("fahrenheit")]
        );
    }

    #[test]
    fn test_openai_without_parameters() {
        let tool = OpenAITool::function("ping", None::<String>, None);

        let canonical = ToolTranslator::openai_to_canonical(&tool).unwrap();
        assert_eq!(canonical.parameters, SchemaNode::object());

        let mcp = ToolTranslator::canonical_to_mcp(&canonical);
        assert_eq!(mcp.input_schema.schema_type, "object");
        assert!(mcp.input_schema.properties.is_empty());
    }

    #[test]
    fn test_canonical_to_mcp() {
        let canonical = ToolTranslator::openai_to_canonical(&weather_tool()).unwrap();

        let mcp = ToolTranslator::canonical_to_mcp(&canonical);

        assert_eq!(mcp.name, "get_weather");
        assert_eq!(mcp.description, "Get the current weather in a given location");
        assert_eq!(mcp.input_schema.schema_type, "object");
        assert_eq!(mcp.input_schema.required, vec!["location"]);
        assert_eq!(
            mcp.input_schema.properties["location"]["type"],
            json!("string")
        );
    }

    #[test]
    fn test_mcp_to_canonical_narrows_empty_description() {
        let mcp = McpTool::new("web_search");

        let canonical = ToolTranslator::mcp_to_canonical(&mcp);

        assert!(canonical.description.is_none());
    }

    #[test]
    fn test_mcp_to_canonical_skips_non_object_properties() {
        let mcp = McpTool::new("odd").with_input_schema(McpInputSchema {
            properties: [
                ("good".to_owned(), json!({ "type": "string" })),
                ("bad".to_owned(), json!("not a schema")),
            ]
            .into_iter()
            .collect(),
            ..McpInputSchema::default()
        });

        let canonical = ToolTranslator::mcp_to_canonical(&mcp);

        assert_eq!(canonical.parameters.properties.len(), 1);
        assert!(canonical.parameters.properties.contains_key("good"));
    }

    #[test]
    fn test_mcp_round_trip_is_stable() {
        let mcp = McpTool::new("web_search")
            .with_description("Search the web for information")
            .with_input_schema(McpInputSchema {
                properties: [
                    (
                        "query".to_owned(),
                        json!({ "type": "string", "description": "Search query" }),
                    ),
                    (
                        "max_results".to_owned(),
                        json!({ "type": "integer", "default": 10 }),
                    ),
                ]
                .into_iter()
                .collect(),
                required: vec!["query".to_owned()],
                ..McpInputSchema::default()
            });

        let once = ToolTranslator::canonical_to_mcp(&ToolTranslator::mcp_to_canonical(&mcp));
        let twice = ToolTranslator::canonical_to_mcp(&ToolTranslator::mcp_to_canonical(&once));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_direct_path_matches_composed_path() {
        let tool = weather_tool();

        let direct = ToolTranslator::openai_to_mcp(&tool).unwrap();
        let composed = ToolTranslator::canonical_to_mcp(
            &ToolTranslator::openai_to_canonical(&tool).unwrap(),
        );

        assert_eq!(direct, composed);
    }

    #[test]
    fn test_batch_conversion_preserves_order() {
        let tools = vec![
            OpenAITool::function("tool1", Some("Tool 1"), Some(json!({ "type": "object" }))),
            OpenAITool::function("tool2", Some("Tool 2"), Some(json!({ "type": "object" }))),
        ];

        let mcp_tools = ToolTranslator::openai_tools_to_mcp(&tools).unwrap();
        assert_eq!(mcp_tools.len(), 2);
        assert_eq!(mcp_tools[0].name, "tool1");
        assert_eq!(mcp_tools[1].name, "tool2");

        let back = ToolTranslator::mcp_tools_to_openai(&mcp_tools);
        assert_eq!(back[0].function.name, "tool1");
        assert_eq!(back[1].function.name, "tool2");
    }
}
