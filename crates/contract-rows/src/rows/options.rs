//! Selectable type options for the editing UI.

use serde::{Deserialize, Serialize};

use contract_rows_util::insertion_sort_by;

/// Display name of the sentinel option that opens the "new model" flow.
pub const DEFINE_NEW_MODEL: &str = "Define a new model";

/// The payload a non-sentinel option carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionValue {
    /// Primitive type of the option, even when it wraps a nested
    /// definition (an object-shaped option still says `"object"`).
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Standalone schema string for a newly defined or reused model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_string: Option<String>,
}

/// One selectable entry in the type picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeOption {
    pub display_name: String,
    pub id: u64,
    pub value: Option<OptionValue>,
}

impl TypeOption {
    /// The canonical trailing sentinel. `id` 0 is reserved for it.
    pub fn define_new_model() -> Self {
        Self {
            display_name: DEFINE_NEW_MODEL.to_string(),
            id: 0,
            value: None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.id == 0
    }
}

/// Sorts options alphabetically (plain case-sensitive ordinal) and
/// appends exactly one sentinel entry at the end.
///
/// Any sentinel already present in the input is dropped first, so the
/// function is idempotent and never duplicates the trailing entry.
pub fn reorder_options(options: Vec<TypeOption>) -> Vec<TypeOption> {
    let mut out: Vec<TypeOption> = options.into_iter().filter(|o| !o.is_sentinel()).collect();
    insertion_sort_by(&mut out, |a, b| a.display_name.cmp(&b.display_name));
    out.push(TypeOption::define_new_model());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(display_name: &str, id: u64) -> TypeOption {
        TypeOption {
            display_name: display_name.to_string(),
            id,
            value: Some(OptionValue {
                type_: "string".to_string(),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_sorts_ordinal_and_appends_sentinel() {
        let out = reorder_options(vec![option("ZZZ", 3), option("AAA", 1), option("BBB", 2)]);
        let names: Vec<&str> = out.iter().map(|o| o.display_name.as_str()).collect();
        assert_eq!(names, vec!["AAA", "BBB", "ZZZ", DEFINE_NEW_MODEL]);
        assert_eq!(out.last().unwrap().id, 0);
        assert_eq!(out.last().unwrap().value, None);
    }

    #[test]
    fn test_existing_sentinel_is_not_duplicated() {
        let out = reorder_options(vec![
            TypeOption::define_new_model(),
            option("BBB", 2),
            TypeOption::define_new_model(),
            option("AAA", 1),
        ]);
        let sentinels = out.iter().filter(|o| o.is_sentinel()).count();
        assert_eq!(sentinels, 1);
        assert_eq!(out.len(), 3);
        assert_eq!(out.last().unwrap().display_name, DEFINE_NEW_MODEL);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![option("BBB", 2), option("AAA", 1)];
        let once = reorder_options(input);
        let twice = reorder_options(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input_yields_sentinel_only() {
        let out = reorder_options(Vec::new());
        assert_eq!(out.len(), 1);
        assert!(out[0].is_sentinel());
    }
}
