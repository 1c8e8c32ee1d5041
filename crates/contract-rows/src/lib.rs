//! contract-rows - contract schema editing core.
//!
//! Edits JSON-Schema-like contract documents through a row-tree
//! projection backed by a string-serialized schema. The contract string
//! is parsed into an ordered row tree for the UI, mutated through an
//! add/update/delete algebra addressed by session-local row identities,
//! and serialized back into a canonical compact document - sibling
//! order and `$ref` pointers round-trip losslessly.
//!
//! # Example
//!
//! ```
//! use contract_rows::{parse_contract_array, update_contract_string, Row};
//!
//! let contract = r#"{"Contract":{"type":"object","properties":{
//!     "Name":{"type":"string"}}}}"#;
//! let rows = parse_contract_array(contract).unwrap();
//! assert_eq!(rows[0].name, "Name");
//!
//! // Append a new root-level property
//! let age = Row {
//!     name: "Age".to_string(),
//!     type_: Some("integer".to_string()),
//!     ..Default::default()
//! };
//! let updated = update_contract_string(&age, &rows, contract, false).unwrap();
//! assert!(updated.contains("\"Age\":{\"type\":\"integer\"}"));
//! ```

pub mod display;
pub mod error;
pub mod rows;
pub mod schema;

// Re-export the most commonly used items at crate root
pub use display::contract_details;
pub use error::ContractError;
pub use rows::{
    build_new_object, create_schema_string, find_parent, find_row, get_existing_options,
    parse_contract_array, reorder_options, update_contract_string, OptionValue, Row, TypeOption,
    DEFINE_NEW_MODEL,
};
pub use schema::{ContractDocument, SchemaNode, CONTRACT_KEY};
