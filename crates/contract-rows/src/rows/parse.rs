//! Contract string to row tree.

use indexmap::IndexMap;

use crate::schema::{ContractDocument, SchemaNode};

use super::row::Row;

/// Parses a contract string into the editing row tree.
///
/// Returns `None` on malformed JSON or when the document has no
/// `Contract` entry - the caller surfaces that as "cannot display or
/// edit". Parsed rows carry no `row_id`; identity assignment belongs to
/// the UI collaborator.
///
/// # Example
///
/// ```
/// use contract_rows::parse_contract_array;
///
/// let contract = r#"{"Contract":{"type":"object","properties":{
///     "Name":{"type":"string","pattern":".*"},
///     "Age":{"type":"integer"}}}}"#;
/// let rows = parse_contract_array(contract).unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].name, "Name");
/// assert_eq!(rows[0].pattern.as_deref(), Some(".*"));
/// assert_eq!(rows[1].name, "Age");
/// assert_eq!(rows[1].type_.as_deref(), Some("integer"));
/// ```
pub fn parse_contract_array(contract: &str) -> Option<Vec<Row>> {
    let doc: ContractDocument = contract.parse().ok()?;
    let root = doc.contract()?;
    match root.child_properties() {
        Some(properties) => Some(rows_from_properties(properties, &doc)),
        None => Some(Vec::new()),
    }
}

/// Builds one row per property, in key order, recursively.
pub(crate) fn rows_from_properties(
    properties: &IndexMap<String, SchemaNode>,
    doc: &ContractDocument,
) -> Vec<Row> {
    properties
        .iter()
        .map(|(name, node)| row_from_property(name, node, doc))
        .collect()
}

fn row_from_property(name: &str, node: &SchemaNode, doc: &ContractDocument) -> Row {
    let mut row = Row {
        name: name.to_string(),
        ..Default::default()
    };

    match node {
        SchemaNode::Reference(reference) => {
            // Effective type comes from the definition at read time
            row.reference = Some(reference.target.clone());
            row.is_locked = Some(true);
            match doc.resolve(&reference.target) {
                Some(SchemaNode::Primitive(definition)) => {
                    row.type_ = definition.type_.clone();
                    row.format = definition.format.clone();
                    row.pattern = definition.pattern.clone();
                }
                Some(SchemaNode::Object(_)) => {
                    row.type_ = Some("object".to_string());
                }
                _ => {}
            }
        }
        SchemaNode::Object(object) => {
            row.properties = Some(rows_from_properties(&object.properties, doc));
        }
        SchemaNode::Array(array) => {
            row.type_ = array.item_type();
            if let SchemaNode::Object(items) = array.items.as_ref() {
                row.properties = Some(rows_from_properties(&items.properties, doc));
            }
        }
        SchemaNode::Primitive(primitive) => {
            row.type_ = primitive.type_.clone();
            row.pattern = primitive.pattern.clone();
            row.example = primitive.example.clone();
            if primitive.format.is_some() {
                // Format-bearing primitives are structural, not freely retypeable
                row.format = primitive.format.clone();
                row.is_locked = Some(true);
            }
        }
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "Contract": {
            "type": "object",
            "properties": {
                "Id": {"$ref": "#/Guid"},
                "Timestamp": {"type": "string", "format": "date-time"},
                "Name": {"type": "string", "pattern": ".*"},
                "Address": {
                    "type": "object",
                    "properties": {
                        "Street": {"type": "string"},
                        "Number": {"type": "integer"}
                    }
                },
                "Tags": {"type": "array", "items": {"type": "string"}}
            }
        },
        "Guid": {"type": "string", "format": "uuid", "pattern": "^[0-9a-fA-F-]{36}$"}
    }"##;

    #[test]
    fn test_malformed_json_is_none() {
        assert!(parse_contract_array("{not json").is_none());
    }

    #[test]
    fn test_missing_contract_is_none() {
        assert!(parse_contract_array(r#"{"Guid":{"type":"string"}}"#).is_none());
        assert!(parse_contract_array("[1,2]").is_none());
    }

    #[test]
    fn test_rows_follow_key_order() {
        let rows = parse_contract_array(SAMPLE).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Id", "Timestamp", "Name", "Address", "Tags"]);
    }

    #[test]
    fn test_reference_inherits_and_locks() {
        let rows = parse_contract_array(SAMPLE).unwrap();
        let id = &rows[0];
        assert_eq!(id.reference.as_deref(), Some("Guid"));
        assert_eq!(id.type_.as_deref(), Some("string"));
        assert_eq!(id.format.as_deref(), Some("uuid"));
        assert_eq!(id.pattern.as_deref(), Some("^[0-9a-fA-F-]{36}$"));
        assert_eq!(id.is_locked, Some(true));
    }

    #[test]
    fn test_format_primitive_locks() {
        let rows = parse_contract_array(SAMPLE).unwrap();
        let timestamp = &rows[1];
        assert_eq!(timestamp.type_.as_deref(), Some("string"));
        assert_eq!(timestamp.format.as_deref(), Some("date-time"));
        assert_eq!(timestamp.is_locked, Some(true));
        assert_eq!(timestamp.reference, None);
    }

    #[test]
    fn test_plain_primitive_is_unlocked() {
        let rows = parse_contract_array(SAMPLE).unwrap();
        let name = &rows[2];
        assert_eq!(name.type_.as_deref(), Some("string"));
        assert_eq!(name.pattern.as_deref(), Some(".*"));
        assert_eq!(name.is_locked, None);
    }

    #[test]
    fn test_object_recurses() {
        let rows = parse_contract_array(SAMPLE).unwrap();
        let address = &rows[3];
        assert_eq!(address.type_, None);
        assert_eq!(address.is_locked, None);
        let children = address.properties.as_ref().unwrap();
        assert_eq!(children[0].name, "Street");
        assert_eq!(children[1].name, "Number");
    }

    #[test]
    fn test_array_derives_item_type() {
        let rows = parse_contract_array(SAMPLE).unwrap();
        let tags = &rows[4];
        assert_eq!(tags.type_.as_deref(), Some("string"));
        assert_eq!(tags.properties, None);
    }

    #[test]
    fn test_array_of_refs_and_objects() {
        let contract = r##"{
            "Contract": {"type": "object", "properties": {
                "Ids": {"type": "array", "items": {"$ref": "#/Guid"}},
                "Stops": {"type": "array", "items": {
                    "type": "object",
                    "properties": {"City": {"type": "string"}}
                }}
            }},
            "Guid": {"type": "string", "format": "uuid"}
        }"##;
        let rows = parse_contract_array(contract).unwrap();

        assert_eq!(rows[0].type_.as_deref(), Some("guid"));

        assert_eq!(rows[1].type_.as_deref(), Some("object"));
        let stops = rows[1].properties.as_ref().unwrap();
        assert_eq!(stops[0].name, "City");
    }

    #[test]
    fn test_dangling_reference_keeps_name() {
        let contract = r##"{"Contract":{"type":"object","properties":{
            "Id": {"$ref": "#/Missing"}}}}"##;
        let rows = parse_contract_array(contract).unwrap();
        assert_eq!(rows[0].reference.as_deref(), Some("Missing"));
        assert_eq!(rows[0].type_, None);
        assert_eq!(rows[0].is_locked, Some(true));
    }

    #[test]
    fn test_contract_without_properties_is_empty() {
        let rows = parse_contract_array(r#"{"Contract":{"type":"object"}}"#).unwrap();
        assert!(rows.is_empty());
    }
}
