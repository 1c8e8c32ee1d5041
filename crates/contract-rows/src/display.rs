//! Read-only contract summaries.
//!
//! Renders the `Contract` entry as a flat run of `<span>` fragments,
//! one per property, carrying a `--depth` style variable for
//! indentation. Recursion threads an explicit accumulator so the
//! formatter stays reentrant.

use indexmap::IndexMap;

use crate::schema::{ContractDocument, SchemaNode};

/// Renders a contract summary as concatenated HTML `<span>` fragments.
///
/// Each property becomes
/// `<span style="--depth: N">{name} - {type}</span>` with `N` equal to
/// its nesting depth (root = 0). Object and array-of-object properties
/// recurse one level deeper. With `full_details`, a property's pattern
/// is appended as `Pattern: {pattern}` inside the parenthesized
/// annotation, after any format or reference annotation.
pub fn contract_details(doc: &ContractDocument, full_details: bool) -> String {
    let mut out = String::new();
    if let Some(properties) = doc.contract().and_then(SchemaNode::child_properties) {
        render_properties(properties, doc, 0, full_details, &mut out);
    }
    out
}

fn render_properties(
    properties: &IndexMap<String, SchemaNode>,
    doc: &ContractDocument,
    depth: usize,
    full_details: bool,
    out: &mut String,
) {
    for (name, node) in properties {
        match node {
            SchemaNode::Object(object) => {
                push_span(out, depth, name, "object");
                render_properties(&object.properties, doc, depth + 1, full_details, out);
            }
            SchemaNode::Array(array) => {
                let label = match array.item_type() {
                    Some(item) => format!("array ({item})"),
                    None => "array".to_string(),
                };
                push_span(out, depth, name, &label);
                if let SchemaNode::Object(items) = array.items.as_ref() {
                    render_properties(&items.properties, doc, depth + 1, full_details, out);
                }
            }
            SchemaNode::Reference(reference) => {
                let resolved = doc.resolve(&reference.target);
                let base = resolved
                    .and_then(SchemaNode::as_primitive)
                    .and_then(|p| p.type_.as_deref())
                    .unwrap_or("object");
                let pattern = resolved
                    .and_then(SchemaNode::as_primitive)
                    .and_then(|p| p.pattern.as_deref());
                let label = annotate(base, Some(&reference.target), pattern, full_details);
                push_span(out, depth, name, &label);
            }
            SchemaNode::Primitive(primitive) => {
                let base = primitive.type_.as_deref().unwrap_or("object");
                let label = annotate(
                    base,
                    primitive.format.as_deref(),
                    primitive.pattern.as_deref(),
                    full_details,
                );
                push_span(out, depth, name, &label);
            }
        }
    }
}

/// Builds `base`, `base (annotation)`, `base (Pattern: p)`, or
/// `base (annotation; Pattern: p)`.
fn annotate(base: &str, annotation: Option<&str>, pattern: Option<&str>, full_details: bool) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(annotation) = annotation {
        parts.push(annotation.to_string());
    }
    if full_details {
        if let Some(pattern) = pattern {
            parts.push(format!("Pattern: {pattern}"));
        }
    }
    if parts.is_empty() {
        base.to_string()
    } else {
        format!("{base} ({})", parts.join("; "))
    }
}

fn push_span(out: &mut String, depth: usize, name: &str, label: &str) {
    out.push_str(&format!(
        "<span style=\"--depth: {depth}\">{name} - {label}</span>"
    ));
}
