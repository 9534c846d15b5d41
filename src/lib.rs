//! Toolbridge
//!
//! This crate normalizes tool-calling (function-calling) declarations,
//! invocations, and results across the three shapes that show up when an
//! LLM provider and an external tool-execution client have to agree on
//! what a "tool" is:
//!
//! - the OpenAI-style chat-completion shape (`openai`), where parameters
//!   are a dynamic JSON Schema value and call arguments travel as a
//!   JSON-encoded string,
//! - a protocol-neutral canonical model (`canonical`) used as the hub,
//! - the MCP-style shape (`mcp`), where per-property schemas stay dynamic
//!   and call arguments are a native map.
//!
//! All converters are pure tree walks over already-decoded JSON values;
//! the only impure operation in the crate is call-id generation, which
//! takes an injectable random source.
//!
//! ## Example
//!
//! ```rust
//! use toolbridge::{ToolTranslator, OpenAITool};
//! use serde_json::json;
//!
//! let tool = OpenAITool::function(
//!     "get_weather",
//!     Some("Get the current weather in a given location"),
//!     Some(json!({
//!         "type": "object",
//!         "properties": {
//!             "location": { "type": "string" }
//!         },
//!         "required": ["location"]
//!     })),
//! );
//!
//! let mcp_tool = ToolTranslator::openai_to_mcp(&tool)?;
//! assert_eq!(mcp_tool.name, "get_weather");
//! # Ok::<(), toolbridge::BridgeError>(())
//! ```

pub mod canonical;
pub mod error;
pub mod mcp;
pub mod openai;
pub mod translator;

// Re-export commonly used types
pub use canonical::{Invocation, SchemaKind, SchemaNode, ToolDefinition};
pub use error::{BridgeError, BridgeResult};
pub use mcp::{McpContent, McpInputSchema, McpTool, McpToolCall, McpToolResult};
pub use openai::{OpenAIFunction, OpenAIFunctionCall, OpenAITool, OpenAIToolCall};
pub use translator::{InvocationMapper, ToolTranslator, flatten_result};
