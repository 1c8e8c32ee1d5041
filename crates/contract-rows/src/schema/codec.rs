//! JSON boundary for the typed schema model.
//!
//! The storage shape is stringly typed: which keys are present decides
//! what a node is. Inference priority on read is `$ref`, then object,
//! then array, then primitive. Serialization emits the canonical shape
//! for each variant; `properties` entry order is preserved exactly,
//! scalar keys within a node are written in canonical order.

use serde_json::{json, Map, Value};

use contract_rows_pointer::{make_reference, strip_reference_prefix};
use contract_rows_util::CaseInsensitiveMap;

use super::document::{ContractDocument, CONTRACT_KEY};
use super::node::{ArraySchema, ObjectSchema, PrimitiveSchema, ReferenceSchema, SchemaNode};
use crate::error::ContractError;

/// Parses a contract string into a document.
pub fn parse_document(text: &str) -> Result<ContractDocument, ContractError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(map) = value else {
        return Err(ContractError::MissingContract);
    };
    let entries: CaseInsensitiveMap<SchemaNode> = map
        .iter()
        .map(|(name, entry)| (name.clone(), value_to_node(entry)))
        .collect();
    if !entries.contains_key(CONTRACT_KEY) {
        return Err(ContractError::MissingContract);
    }
    Ok(ContractDocument { entries })
}

/// Converts one stored schema object into a typed node.
pub fn value_to_node(value: &Value) -> SchemaNode {
    let Some(obj) = value.as_object() else {
        return SchemaNode::Primitive(PrimitiveSchema::default());
    };

    if let Some(target) = obj.get("$ref").and_then(Value::as_str) {
        return SchemaNode::Reference(ReferenceSchema {
            target: strip_reference_prefix(target).to_string(),
        });
    }

    let type_ = obj.get("type").and_then(Value::as_str);

    if type_ == Some("object") || obj.contains_key("properties") {
        let properties = obj
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(name, child)| (name.clone(), value_to_node(child)))
                    .collect()
            })
            .unwrap_or_default();
        return SchemaNode::Object(ObjectSchema { properties });
    }

    if type_ == Some("array") {
        let items = obj
            .get("items")
            .map(value_to_node)
            .unwrap_or_else(|| SchemaNode::Primitive(PrimitiveSchema::default()));
        return SchemaNode::Array(ArraySchema {
            items: Box::new(items),
        });
    }

    SchemaNode::Primitive(PrimitiveSchema {
        type_: type_.map(str::to_string),
        format: obj.get("format").and_then(Value::as_str).map(str::to_string),
        pattern: obj.get("pattern").and_then(Value::as_str).map(str::to_string),
        example: obj.get("example").cloned(),
    })
}

/// Serializes a typed node into its canonical stored shape.
pub fn node_to_value(node: &SchemaNode) -> Value {
    match node {
        SchemaNode::Reference(reference) => {
            // A reference carries nothing besides the pointer
            json!({ "$ref": make_reference(&reference.target) })
        }
        SchemaNode::Object(object) => {
            let mut properties = Map::new();
            for (name, child) in &object.properties {
                properties.insert(name.clone(), node_to_value(child));
            }
            json!({ "type": "object", "properties": properties })
        }
        SchemaNode::Array(array) => {
            json!({ "type": "array", "items": node_to_value(&array.items) })
        }
        SchemaNode::Primitive(primitive) => {
            let mut out = Map::new();
            if let Some(type_) = &primitive.type_ {
                out.insert("type".to_string(), Value::String(type_.clone()));
            }
            if let Some(format) = &primitive.format {
                out.insert("format".to_string(), Value::String(format.clone()));
            }
            if let Some(pattern) = &primitive.pattern {
                out.insert("pattern".to_string(), Value::String(pattern.clone()));
            }
            if let Some(example) = &primitive.example {
                out.insert("example".to_string(), example.clone());
            }
            Value::Object(out)
        }
    }
}

/// Serializes a whole document, entries in stored order.
pub fn document_to_value(doc: &ContractDocument) -> Value {
    let mut out = Map::new();
    for (name, node) in doc.entries.iter() {
        out.insert(name.clone(), node_to_value(node));
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_wins_over_other_keys() {
        let node = value_to_node(&json!({"$ref": "#/Guid", "type": "string"}));
        assert!(matches!(
            node,
            SchemaNode::Reference(ReferenceSchema { ref target }) if target == "Guid"
        ));
    }

    #[test]
    fn test_object_inference() {
        // Explicit type
        let node = value_to_node(&json!({"type": "object", "properties": {"A": {"type": "string"}}}));
        assert_eq!(node.kind(), "object");

        // Properties alone imply an object
        let node = value_to_node(&json!({"properties": {"A": {"type": "string"}}}));
        assert_eq!(node.kind(), "object");

        // Object with no properties key
        let node = value_to_node(&json!({"type": "object"}));
        assert_eq!(node.as_object().unwrap().properties.len(), 0);
    }

    #[test]
    fn test_array_inference() {
        let node = value_to_node(&json!({"type": "array", "items": {"type": "integer"}}));
        let SchemaNode::Array(arr) = node else {
            panic!("expected array");
        };
        assert_eq!(arr.item_type(), Some("integer".to_string()));
    }

    #[test]
    fn test_primitive_fields() {
        let node = value_to_node(&json!({
            "type": "string",
            "pattern": ".*",
            "example": "hello"
        }));
        let primitive = node.as_primitive().unwrap();
        assert_eq!(primitive.type_.as_deref(), Some("string"));
        assert_eq!(primitive.pattern.as_deref(), Some(".*"));
        assert_eq!(primitive.example, Some(json!("hello")));
        assert_eq!(primitive.format, None);
    }

    #[test]
    fn test_node_round_trip_preserves_property_order() {
        let source = json!({
            "type": "object",
            "properties": {
                "Zeta": {"type": "string"},
                "Alpha": {"type": "integer"},
                "Mid": {"type": "array", "items": {"$ref": "#/Guid"}}
            }
        });
        let round_tripped = node_to_value(&value_to_node(&source));
        assert_eq!(round_tripped, source);

        let keys: Vec<&String> = round_tripped["properties"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_reference_serializes_bare() {
        let node = SchemaNode::Reference(ReferenceSchema {
            target: "Guid".to_string(),
        });
        assert_eq!(node_to_value(&node), json!({"$ref": "#/Guid"}));
    }
}
