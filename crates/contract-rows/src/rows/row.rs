//! The editing-side projection of one schema property.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the editing tree.
///
/// Rows are ephemeral and UI-owned: `row_id` and `parent_id` are
/// session-local identities assigned by the UI collaborator and are
/// never written into the contract string. `Clone` produces a fully
/// independent deep copy of the row and its nested `properties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_id: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Bare definition name, without the `#/` prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Set when the row's type was derived from a reference or a fixed
    /// format and must not be hand-edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Row>>,
}

impl Row {
    /// The type label shown for this row.
    ///
    /// Priority: lower-cased reference name, else `"{type} ({format})"`
    /// when a format is present, else the plain type, else `"object"`.
    pub fn display_type(&self) -> String {
        if let Some(reference) = &self.reference {
            return reference.to_ascii_lowercase();
        }
        if let Some(format) = &self.format {
            return format!("{} ({format})", self.type_.as_deref().unwrap_or("object"));
        }
        match &self.type_ {
            Some(type_) => type_.clone(),
            None => "object".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_type_reference_wins() {
        let row = Row {
            name: "Id".to_string(),
            reference: Some("X".to_string()),
            format: Some("Y".to_string()),
            type_: Some("Z".to_string()),
            ..Default::default()
        };
        assert_eq!(row.display_type(), "x");
    }

    #[test]
    fn test_display_type_format() {
        let row = Row {
            name: "Timestamp".to_string(),
            format: Some("Y".to_string()),
            type_: Some("Z".to_string()),
            ..Default::default()
        };
        assert_eq!(row.display_type(), "Z (Y)");
    }

    #[test]
    fn test_display_type_plain_and_default() {
        let row = Row {
            name: "Age".to_string(),
            type_: Some("integer".to_string()),
            ..Default::default()
        };
        assert_eq!(row.display_type(), "integer");

        let empty = Row::default();
        assert_eq!(empty.display_type(), "object");
    }

    #[test]
    fn test_serde_boundary_names() {
        let row = Row {
            name: "Id".to_string(),
            row_id: Some(1),
            is_locked: Some(true),
            reference: Some("Guid".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(
            value,
            json!({"name": "Id", "rowId": 1, "reference": "Guid", "isLocked": true})
        );

        let parsed: Row = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, row);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Row {
            name: "Address".to_string(),
            properties: Some(vec![Row {
                name: "Street".to_string(),
                type_: Some("string".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let mut copy = original.clone();
        copy.properties.as_mut().unwrap()[0].name = "Renamed".to_string();
        assert_eq!(original.properties.as_ref().unwrap()[0].name, "Street");
    }
}
