//! Translation engine between caller, canonical, and transport formats
//!
//! Three recursive converters plus a result-flattening step:
//!
//! - [`schema`] — the generic-tree walk between dynamic JSON Schema
//!   values and the canonical [`SchemaNode`](crate::canonical::SchemaNode)
//! - [`tools`] — tool definition conversion, including the direct
//!   caller⇄transport path
//! - [`calls`] — invocation mapping and call-id generation
//! - [`results`] — flattening multi-part tool results into text
//!
//! Everything here is a pure function over already-decoded values; only
//! call-id generation draws entropy, from an injectable source.

pub mod calls;
pub mod results;
pub mod schema;
pub mod tools;


pub use calls::InvocationMapper;
pub use results::flatten_result;
pub use schema::{schema_from_parameters, schema_from_value, schema_to_value};
pub use tools::ToolTranslator;
