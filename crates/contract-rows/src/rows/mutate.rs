//! Row edits back into the contract string.
//!
//! Mutations are path-targeted: the row tree supplies the name chain of
//! the row being edited, and only that entry of the parsed document is
//! rewritten. Everything outside the target path is carried over
//! exactly as parsed.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::ContractError;
use crate::schema::{
    codec, ArraySchema, ContractDocument, ObjectSchema, PrimitiveSchema, ReferenceSchema,
    SchemaNode,
};

use super::navigate::find_path;
use super::options::{OptionValue, TypeOption};
use super::parse::rows_from_properties;
use super::row::Row;

/// Applies an add, update, rename, or delete to the contract string and
/// returns the new canonical compact serialization.
///
/// The target is located by `edited_row.row_id` through `rows`, the
/// caller's current row tree. A present-and-found id means an in-place
/// replacement (a changed `name` renames the key at its position, and
/// the stored content is overwritten from the row, never merged); an
/// absent or unknown id appends a new root-level entry keyed by the
/// row's `name`. With `is_delete`, the matching entry is removed
/// wherever it sits in the tree; deleting an id the row tree does not
/// know is a no-op.
///
/// # Errors
///
/// - [`ContractError::Json`] / [`ContractError::MissingContract`] - the
///   contract string does not parse
/// - [`ContractError::TargetNotFound`] - the row's name chain does not
///   resolve inside the document (inconsistent row/string pair); the
///   document is never partially rewritten in that case
pub fn update_contract_string(
    edited_row: &Row,
    rows: &[Row],
    contract_string: &str,
    is_delete: bool,
) -> Result<String, ContractError> {
    let mut doc: ContractDocument = contract_string.parse()?;

    if is_delete {
        if let Some(path) = edited_row.row_id.and_then(|id| find_path(rows, id)) {
            delete_at_path(&mut doc, &path)?;
        }
    } else {
        match edited_row.row_id.and_then(|id| find_path(rows, id)) {
            Some(path) => replace_at_path(&mut doc, &path, edited_row)?,
            None => insert_at_root(&mut doc, edited_row)?,
        }
    }

    Ok(doc.to_string())
}

/// Builds the standalone `{"type":"object","properties":{...}}` schema
/// string for a model row, children in row order, compact output.
pub fn create_schema_string(model: &Row) -> String {
    let children = model.properties.as_deref().unwrap_or(&[]);
    let mut properties = IndexMap::new();
    for child in children {
        properties.insert(child.name.clone(), serialize_row(child, None, &[]));
    }
    codec::node_to_value(&SchemaNode::Object(ObjectSchema { properties })).to_string()
}

/// Constructs or updates a row from a chosen type option.
///
/// Editing keeps `existing_row`'s identity; a brand-new row stays
/// unassigned until the UI hands it an id. The row's `type` reflects
/// the option's primitive type even when the option wraps a nested
/// definition, and a `schema_string` on the option is parsed with the
/// regular parser rules, resolving references against the supplied
/// contract string's definitions.
pub fn build_new_object(
    name: &str,
    type_option: &TypeOption,
    example: Option<Value>,
    existing_row: Option<&Row>,
    contract_string: &str,
) -> Result<Row, ContractError> {
    let mut row = Row {
        name: name.to_string(),
        row_id: existing_row.and_then(|r| r.row_id),
        example,
        ..Default::default()
    };

    if let Some(value) = &type_option.value {
        row.type_ = Some(value.type_.clone());
        if let Some(format) = &value.format {
            row.format = Some(format.clone());
            row.is_locked = Some(true);
        }
        if let Some(schema_string) = &value.schema_string {
            let doc: ContractDocument = contract_string.parse()?;
            let schema: Value = serde_json::from_str(schema_string)?;
            if let Some(properties) = codec::value_to_node(&schema).child_properties() {
                row.properties = Some(rows_from_properties(properties, &doc));
            }
        }
    }

    Ok(row)
}

/// Scans the Contract for object-typed, non-reference properties at any
/// depth and returns one option per distinct shape, so the UI can offer
/// reusing an existing nested model. `display_name` is the property's
/// name; ids are 1-based discovery ordinals (0 stays reserved for the
/// sentinel).
pub fn get_existing_options(contract_string: &str) -> Result<Vec<TypeOption>, ContractError> {
    let doc: ContractDocument = contract_string.parse()?;
    let mut out = Vec::new();
    let mut seen = Vec::new();
    if let Some(properties) = doc.contract().and_then(SchemaNode::child_properties) {
        collect_object_options(properties, &mut out, &mut seen);
    }
    Ok(out)
}

fn collect_object_options(
    properties: &IndexMap<String, SchemaNode>,
    out: &mut Vec<TypeOption>,
    seen: &mut Vec<String>,
) {
    for (name, node) in properties {
        match node {
            SchemaNode::Object(object) => {
                let schema_string = codec::node_to_value(node).to_string();
                if !seen.contains(&schema_string) {
                    seen.push(schema_string.clone());
                    out.push(TypeOption {
                        display_name: name.clone(),
                        id: (out.len() + 1) as u64,
                        value: Some(OptionValue {
                            type_: "object".to_string(),
                            format: None,
                            schema_string: Some(schema_string),
                        }),
                    });
                }
                collect_object_options(&object.properties, out, seen);
            }
            SchemaNode::Array(array) => {
                if let SchemaNode::Object(items) = array.items.as_ref() {
                    collect_object_options(&items.properties, out, seen);
                }
            }
            _ => {}
        }
    }
}

// ── Path-targeted document edits ──────────────────────────────────────────

fn delete_at_path(doc: &mut ContractDocument, path: &[String]) -> Result<(), ContractError> {
    let properties = properties_at(doc, &path[..path.len() - 1])?;
    properties
        .shift_remove(&path[path.len() - 1])
        .ok_or(ContractError::TargetNotFound)?;
    Ok(())
}

fn replace_at_path(
    doc: &mut ContractDocument,
    path: &[String],
    edited_row: &Row,
) -> Result<(), ContractError> {
    let defs = doc.definition_names();
    let properties = properties_at(doc, &path[..path.len() - 1])?;
    let old_name = &path[path.len() - 1];

    let mut rebuilt = IndexMap::with_capacity(properties.len());
    let mut replaced = false;
    for (name, node) in std::mem::take(properties) {
        if !replaced && name == *old_name {
            rebuilt.insert(
                edited_row.name.clone(),
                serialize_row(edited_row, Some(&node), &defs),
            );
            replaced = true;
        } else {
            rebuilt.insert(name, node);
        }
    }
    if !replaced {
        return Err(ContractError::TargetNotFound);
    }
    *properties = rebuilt;
    Ok(())
}

fn insert_at_root(doc: &mut ContractDocument, edited_row: &Row) -> Result<(), ContractError> {
    let defs = doc.definition_names();
    let properties = properties_at(doc, &[])?;
    properties.insert(edited_row.name.clone(), serialize_row(edited_row, None, &defs));
    Ok(())
}

/// The mutable `properties` map reached by walking `names` down from
/// `Contract.properties`.
fn properties_at<'a>(
    doc: &'a mut ContractDocument,
    names: &[String],
) -> Result<&'a mut IndexMap<String, SchemaNode>, ContractError> {
    let root = doc.contract_mut().ok_or(ContractError::MissingContract)?;
    let mut properties = root
        .child_properties_mut()
        .ok_or(ContractError::TargetNotFound)?;
    for name in names {
        properties = properties
            .get_mut(name)
            .and_then(SchemaNode::child_properties_mut)
            .ok_or(ContractError::TargetNotFound)?;
    }
    Ok(properties)
}

// ── Row to schema object ──────────────────────────────────────────────────

/// Serializes a row into its stored schema shape, dropping the UI-only
/// fields. `prev` is the node the row is replacing, consulted only to
/// keep an array wrapper an array - it never merges content into the
/// result.
fn serialize_row(row: &Row, prev: Option<&SchemaNode>, defs: &[String]) -> SchemaNode {
    if let Some(reference) = row.reference.as_deref().filter(|r| !r.is_empty()) {
        return SchemaNode::Reference(ReferenceSchema {
            target: reference.to_string(),
        });
    }

    if let Some(SchemaNode::Array(prev_array)) = prev {
        return SchemaNode::Array(ArraySchema {
            items: Box::new(rebuild_items(row, &prev_array.items, defs)),
        });
    }

    if let Some(children) = &row.properties {
        let prev_properties = prev.and_then(SchemaNode::child_properties);
        return SchemaNode::Object(ObjectSchema {
            properties: serialize_children(children, prev_properties, defs),
        });
    }

    SchemaNode::Primitive(PrimitiveSchema {
        type_: row.type_.clone(),
        format: row.format.clone(),
        pattern: row.pattern.clone(),
        example: row.example.clone(),
    })
}

fn serialize_children(
    children: &[Row],
    prev_properties: Option<&IndexMap<String, SchemaNode>>,
    defs: &[String],
) -> IndexMap<String, SchemaNode> {
    let mut out = IndexMap::with_capacity(children.len());
    for child in children {
        let prev_child = prev_properties.and_then(|props| props.get(&child.name));
        out.insert(child.name.clone(), serialize_row(child, prev_child, defs));
    }
    out
}

/// Rebuilds an array's `items` from the edited row. The row's `type` is
/// the derived item type, so: nested `properties` mean object items, a
/// type naming a definition means `$ref` items (stored-case name), an
/// unchanged derived type keeps the previous items verbatim, and
/// anything else becomes a fresh primitive.
fn rebuild_items(row: &Row, prev_items: &SchemaNode, defs: &[String]) -> SchemaNode {
    if let Some(children) = &row.properties {
        let prev_properties = prev_items.child_properties();
        return SchemaNode::Object(ObjectSchema {
            properties: serialize_children(children, prev_properties, defs),
        });
    }

    let Some(type_) = row.type_.as_deref().filter(|t| !t.is_empty()) else {
        return prev_items.clone();
    };

    let stored_definition = defs
        .iter()
        .map(String::as_str)
        .find(|d| d.eq_ignore_ascii_case(type_));
    if let Some(stored) = stored_definition {
        return SchemaNode::Reference(ReferenceSchema {
            target: stored.to_string(),
        });
    }

    if prev_items.derived_type().as_deref() == Some(type_) {
        return prev_items.clone();
    }

    SchemaNode::Primitive(PrimitiveSchema {
        type_: Some(type_.to_string()),
        ..Default::default()
    })
}
