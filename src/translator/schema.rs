//! Generic-tree walk between dynamic JSON Schema values and [`SchemaNode`]
//!
//! This is the one recursive conversion both the caller and the transport
//! side reuse. Reading is deliberately forgiving: unrecognized keys are
//! dropped, a missing `type` means `object`, and nothing short of a value
//! that cannot be serialized to JSON at all is an error. Writing omits
//! every field with an empty canonical value, because on the caller side
//! the presence of a key carries meaning.

use crate::canonical::{SchemaKind, SchemaNode};
use crate::error::{BridgeError, BridgeResult};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::warn;

/// Convert a dynamic `parameters` value into a canonical schema tree.
///
/// The value is first serialized to a [`serde_json::Value`]; this
/// normalization step absorbs whatever serializable type the caller
/// holds the schema in, and is the only way this function can fail
/// ([`BridgeError::SchemaSerialization`]). An absent or non-object value
/// canonicalizes to an empty object schema.
pub fn schema_from_parameters<T: Serialize>(parameters: Option<&T>) -> BridgeResult<SchemaNode> {
    let Some(parameters) = parameters else {
        return Ok(SchemaNode::object());
    };

    let value = serde_json::to_value(parameters)
        .map_err(|err| BridgeError::schema_serialization(err.to_string()))?;

    Ok(schema_from_value(&value))
}

/// Walk a generic JSON tree into a [`SchemaNode`].
///
/// Recognized keys are `type`, `description`, `enum`, `default`,
/// `minimum`, `maximum`, `minLength`, `maxLength`, `items`,
/// `properties`, `required`, and `additionalProperties`; everything else
/// is dropped silently (forward-compatible, lossy by design).
pub fn schema_from_value(value: &Value) -> SchemaNode {
    let Some(map) = value.as_object() else {
        return SchemaNode::object();
    };

    let kind = match map.get("type").and_then(Value::as_str) {
        None => SchemaKind::Object,
        Some(name) => SchemaKind::parse(name).unwrap_or_else(|| {
            warn!(kind = name, "unrecognized schema type, treating as object");
            SchemaKind::Object
        }),
    };

    let mut node = SchemaNode::new(kind);

    node.description = map
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_owned);

    if let Some(values) = map.get("enum").and_then(Value::as_array) {
        node.enum_values = values.clone();
    }

    node.default = map.get("default").cloned();

    // Numeric bounds decode as f64 regardless of the source notation,
    // and are carried even on non-numeric kinds (passed through, never
    // rejected).
    node.minimum = map.get("minimum").and_then(Value::as_f64);
    node.maximum = map.get("maximum").and_then(Value::as_f64);
    node.min_length = map.get("minLength").and_then(Value::as_f64).map(|n| n as u64);
    node.max_length = map.get("maxLength").and_then(Value::as_f64).map(|n| n as u64);

    if let Some(items) = map.get("items").filter(|value| value.is_object()) {
        node.items = Some(Box::new(schema_from_value(items)));
    }

    if let Some(properties) = map.get("properties").and_then(Value::as_object) {
        for (name, property) in properties {
            if property.is_object() {
                node.properties
                    .insert(name.clone(), schema_from_value(property));
            } else {
                warn!(property = name.as_str(), "skipping non-object property schema");
            }
        }
    }

    if let Some(required) = map.get("required").and_then(Value::as_array) {
        for entry in required {
            match entry.as_str() {
                Some(name) => node.required.push(name.to_owned()),
                None => warn!("skipping non-string entry in required list"),
            }
        }
    }

    node.additional_properties = map.get("additionalProperties").and_then(Value::as_bool);

    node
}

/// Walk a [`SchemaNode`] back into a generic JSON object.
///
/// Fields with an empty canonical value are omitted rather than emitted
/// as null or empty; `type` is always present, including
/// `"type": "object"` for an object with no properties.
pub fn schema_to_value(node: &SchemaNode) -> Value {
    let mut map = Map::new();

    map.insert("type".to_owned(), json!(node.kind.as_str()));

    if let Some(description) = &node.description {
        map.insert("description".to_owned(), json!(description));
    }

    if !node.enum_values.is_empty() {
        map.insert("enum".to_owned(), Value::Array(node.enum_values.clone()));
    }

    if let Some(default) = &node.default {
        map.insert("default".to_owned(), default.clone());
    }

    if let Some(minimum) = node.minimum {
        map.insert("minimum".to_owned(), json!(minimum));
    }

    if let Some(maximum) = node.maximum {
        map.insert("maximum".to_owned(), json!(maximum));
    }

    if let Some(min_length) = node.min_length {
        map.insert("minLength".to_owned(), json!(min_length));
    }

    if let Some(max_length) = node.max_length {
        map.insert("maxLength".to_owned(), json!(max_length));
    }

    if let Some(items) = &node.items {
        map.insert("items".to_owned(), schema_to_value(items));
    }

    if !node.properties.is_empty() {
        let mut properties = Map::new();
        for (name, property) in &node.properties {
            properties.insert(name.clone(), schema_to_value(property));
        }
        map.insert("properties".to_owned(), Value::Object(properties));
    }

    if !node.required.is_empty() {
        map.insert("required".to_owned(), json!(node.required));
    }

    if let Some(additional) = node.additional_properties {
        map.insert("additionalProperties".to_owned(), json!(additional));
    }

    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_parameters_yield_empty_object_schema() {
        let node = schema_from_parameters(None::<&Value>).unwrap();

        assert_eq!(node, SchemaNode::object());
    }

    #[test]
    fn test_non_object_value_yields_empty_object_schema() {
        assert_eq!(schema_from_value(&json!("oops")), SchemaNode::object());
        assert_eq!(schema_from_value(&json!([1, 2])), SchemaNode::object());
        assert_eq!(schema_from_value(&Value::Null), SchemaNode::object());
    }

    #[test]
    fn test_type_absent_defaults_to_object() {
        let node = schema_from_value(&json!({
            "properties": {
                "name": { "type": "string" }
            }
        }));

        assert_eq!(node.kind, SchemaKind::Object);
        assert_eq!(node.properties["name"].kind, SchemaKind::String);
    }

    #[test]
    fn test_recognized_keys_are_mapped() {
        let node = schema_from_value(&json!({
            "type": "integer",
            "description": "Result count",
            "default": 10,
            "minimum": 0,
            "maximum": 100
        }));

        assert_eq!(node.kind, SchemaKind::Integer);
        assert_eq!(node.description.as_deref(), Some("Result count"));
        assert_eq!(node.default, Some(json!(10)));
        assert_eq!(node.minimum, Some(0.0));
        assert_eq!(node.maximum, Some(100.0));
    }

    #[test]
    fn test_unrecognized_keys_dropped() {
        let node = schema_from_value(&json!({
            "type": "string",
            "format": "date-time",
            "x-vendor": true
        }));

        assert_eq!(node, SchemaNode::string());
        assert_eq!(schema_to_value(&node), json!({ "type": "string" }));
    }

    #[test]
    fn test_non_string_required_entries_skipped() {
        let node = schema_from_value(&json!({
            "type": "object",
            "required": ["name", 7, null, "age"]
        }));

        assert_eq!(node.required, vec!["name", "age"]);
    }

    #[test]
    fn test_string_bounds() {
        let node = schema_from_value(&json!({
            "type": "string",
            "minLength": 1,
            "maxLength": 64
        }));

        assert_eq!(node.min_length, Some(1));
        assert_eq!(node.max_length, Some(64));
        assert_eq!(
            schema_to_value(&node),
            json!({ "type": "string", "minLength": 1, "maxLength": 64 })
        );
    }

    #[test]
    fn test_nested_array_of_objects() {
        let node = schema_from_value(&json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer" }
                },
                "required": ["id"]
            }
        }));

        let items = node.items.as_deref().expect("items schema");
        assert_eq!(items.kind, SchemaKind::Object);
        assert_eq!(items.properties["id"].kind, SchemaKind::Integer);
        assert_eq!(items.required, vec!["id"]);
    }

    #[test]
    fn test_empty_object_still_emits_type() {
        assert_eq!(
            schema_to_value(&SchemaNode::object()),
            json!({ "type": "object" })
        );
    }

    #[test]
    fn test_canonical_fixed_point() {
        let original = schema_from_value(&json!({
            "type": "object",
            "description": "Search parameters",
            "properties": {
                "query": { "type": "string", "minLength": 1 },
                "limit": { "type": "integer", "minimum": 1, "maximum": 50, "default": 10 },
                "tags": {
                    "type": "array",
                    "items": { "type": "string", "enum": ["a", "b"] }
                }
            },
            "required": ["query"],
            "additionalProperties": false
        }));

        let emitted = schema_to_value(&original);
        let reparsed = schema_from_value(&emitted);

        assert_eq!(reparsed, original);
        assert_eq!(schema_to_value(&reparsed), emitted);
    }
}
