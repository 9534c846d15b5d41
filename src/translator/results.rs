//! Flattening multi-part tool results into a single text payload
//!
//! The caller side of the bridge expects one string per tool result, so
//! the transport's ordered content list has to collapse. Error results
//! keep only their first message; success results with several parts are
//! joined as a JSON array so the boundary between parts survives.

use crate::mcp::{McpContent, McpToolResult};
use serde_json::Value;

/// Fallback message for an error result that carries no readable text
const UNKNOWN_ERROR: &str = "Error: Unknown error occurred";

/// Flatten a transport tool result into a single text payload
///
/// Error results yield `Error: ` plus the first content item's text, or
/// a fixed fallback when nothing readable is present. Success results
/// yield the empty string for no content, the text verbatim for one
/// item, and a JSON array of the texts for several, so that part
/// boundaries are not lost to naive concatenation.
pub fn flatten_result(result: &McpToolResult) -> String {
    if result.is_error {
        return match result.content.first().and_then(content_text) {
            Some(text) => format!("Error: {text}"),
            None => UNKNOWN_ERROR.to_owned(),
        };
    }

    let texts: Vec<String> = result
        .content
        .iter()
        .filter_map(content_text)
        .filter(|text| !text.is_empty())
        .collect();

    match texts.len() {
        0 => String::new(),
        1 => texts.into_iter().next().unwrap_or_default(),
        _ => Value::from(texts).to_string(),
    }
}

/// Extract the renderable text of one content item
///
/// Images flatten to their base64 data and resources to their URI;
/// unrecognized content has nothing renderable.
fn content_text(content: &McpContent) -> Option<String> {
    match content {
        McpContent::Text { text } => Some(text.clone()),
        McpContent::Image { data } => Some(data.clone()),
        McpContent::Resource { uri } => Some(uri.clone()),
        McpContent::Unknown => None,
    }
}
