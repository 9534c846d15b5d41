//! Invocation mapping and call-id generation
//!
//! The caller carries tool-call arguments as a JSON-encoded string and
//! always supplies a call id; the transport carries arguments as a
//! native map and supplies no id at all. Canonical form requires an id,
//! so the mapper owns a random-byte source and mints one wherever a
//! boundary leaves it out. Ids are correlation tokens, not secrets: the
//! load-bearing property is uniqueness across concurrent calls.

use crate::canonical::Invocation;
use crate::error::{BridgeError, BridgeResult};
use crate::mcp::McpToolCall;
use crate::openai::OpenAIToolCall;
use rand::RngCore;
use rand::rngs::OsRng;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::Write as _;

/// Prefix of every generated call id
const CALL_ID_PREFIX: &str = "call_";

/// Random bytes per generated call id
const CALL_ID_BYTES: usize = 8;

/// Converter between caller, canonical, and transport tool calls
///
/// Generic over its random source so tests can supply a seeded rng and
/// assert exact ids; the default source is [`OsRng`], which draws fresh
/// system entropy on every call and is safe to use from any thread.
#[derive(Debug, Clone)]
pub struct InvocationMapper<R = OsRng> {
    rng: R,
}

impl InvocationMapper {
    /// Create a mapper backed by system entropy
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for InvocationMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> InvocationMapper<R> {
    /// Create a mapper with an explicit random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Convert an OpenAI tool call to a canonical invocation
    ///
    /// The arguments string must be a JSON object; the empty string
    /// parses to an empty map. Anything else, including valid JSON that
    /// is not an object, is an [`BridgeError::ArgumentParse`] carrying
    /// the original string. The supplied id is preserved verbatim.
    pub fn openai_call_to_canonical(&self, call: &OpenAIToolCall) -> BridgeResult<Invocation> {
        let arguments: HashMap<String, Value> = if call.function.arguments.is_empty() {
            HashMap::new()
        } else {
            serde_json::from_str::<Map<String, Value>>(&call.function.arguments)
                .map_err(|err| {
                    BridgeError::argument_parse(
                        &call.function.name,
                        &call.function.arguments,
                        err.to_string(),
                    )
                })?
                .into_iter()
                .collect()
        };

        Ok(Invocation {
            id: call.id.clone(),
            tool_name: call.function.name.clone(),
            arguments,
        })
    }

    /// Convert a transport tool call to a canonical invocation
    ///
    /// Absent arguments become an empty map. The transport supplies no
    /// call id, so a fresh one is generated.
    pub fn mcp_call_to_canonical(&mut self, call: &McpToolCall) -> Invocation {
        let arguments = call
            .arguments
            .clone()
            .map(|map| map.into_iter().collect())
            .unwrap_or_default();

        Invocation {
            id: self.generate_call_id(),
            tool_name: call.name.clone(),
            arguments,
        }
    }

    /// Convert a canonical invocation to an OpenAI tool call
    ///
    /// An invocation constructed by hand may lack an id; a fresh one is
    /// generated at this boundary too.
    pub fn canonical_to_openai_call(&mut self, invocation: &Invocation) -> OpenAIToolCall {
        let arguments: Value = invocation
            .arguments
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let id = if invocation.id.is_empty() {
            self.generate_call_id()
        } else {
            invocation.id.clone()
        };

        OpenAIToolCall::new(id, invocation.tool_name.clone(), arguments.to_string())
    }

    /// Convert a canonical invocation to a transport tool call
    pub fn canonical_to_mcp_call(&self, invocation: &Invocation) -> McpToolCall {
        let arguments: Map<String, Value> = invocation
            .arguments
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        McpToolCall::new(invocation.tool_name.clone(), Some(arguments))
    }

    /// Generate a fresh call id: `call_` plus 8 random bytes, hex-encoded
    pub fn generate_call_id(&mut self) -> String {
        let mut bytes = [0u8; CALL_ID_BYTES];
        self.rng.fill_bytes(&mut bytes);

        let mut id = String::with_capacity(CALL_ID_PREFIX.len() + CALL_ID_BYTES * 2);
        id.push_str(CALL_ID_PREFIX);
        for byte in bytes {
            let _ = write!(id, "{byte:02x}");
        }
        id
    }
}
