//! Typed schema nodes.
//!
//! The storage format infers a node's shape from which keys are
//! present; internally each shape is a tagged variant so the rest of
//! the crate can match instead of probing string keys.

use indexmap::IndexMap;
use serde_json::Value;

/// A JSON object with named properties, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    pub properties: IndexMap<String, SchemaNode>,
}

/// A homogeneous JSON array.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    pub items: Box<SchemaNode>,
}

impl ArraySchema {
    /// The item type shown for this array: the items' reference name
    /// (lower-cased), else their format, else their type - first
    /// non-empty.
    pub fn item_type(&self) -> Option<String> {
        self.items.derived_type()
    }
}

/// A pointer to a named sibling definition. `target` is the bare
/// definition name, without the `#/` prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSchema {
    pub target: String,
}

/// A scalar value description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveSchema {
    pub type_: Option<String>,
    pub format: Option<String>,
    pub pattern: Option<String>,
    pub example: Option<Value>,
}

/// One schema node of a contract document.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Object(ObjectSchema),
    Array(ArraySchema),
    Reference(ReferenceSchema),
    Primitive(PrimitiveSchema),
}

impl SchemaNode {
    /// Returns the "kind" string identifier for this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Reference(_) => "ref",
            Self::Primitive(_) => "primitive",
        }
    }

    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveSchema> {
        match self {
            Self::Primitive(p) => Some(p),
            _ => None,
        }
    }

    /// The type label a node contributes when it stands for an array's
    /// items: reference name lower-cased, else format, else type;
    /// objects contribute `"object"`.
    pub fn derived_type(&self) -> Option<String> {
        match self {
            Self::Reference(r) => Some(r.target.to_ascii_lowercase()),
            Self::Primitive(p) => p
                .format
                .clone()
                .or_else(|| p.type_.clone())
                .filter(|label| !label.is_empty()),
            Self::Object(_) => Some("object".to_string()),
            Self::Array(_) => None,
        }
    }

    /// The property map nested under this node, when it has one.
    ///
    /// Objects expose their own `properties`; arrays expose the
    /// properties of their object items. Primitives and references
    /// have none.
    pub fn child_properties(&self) -> Option<&IndexMap<String, SchemaNode>> {
        match self {
            Self::Object(obj) => Some(&obj.properties),
            Self::Array(arr) => arr.items.child_properties(),
            _ => None,
        }
    }

    pub fn child_properties_mut(&mut self) -> Option<&mut IndexMap<String, SchemaNode>> {
        match self {
            Self::Object(obj) => Some(&mut obj.properties),
            Self::Array(arr) => arr.items.child_properties_mut(),
            _ => None,
        }
    }
}
