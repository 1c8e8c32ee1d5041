//! The editing-side row tree: parsing, navigation, options, mutation.

pub mod mutate;
pub mod navigate;
pub mod options;
pub mod parse;
pub mod row;

pub use mutate::{
    build_new_object, create_schema_string, get_existing_options, update_contract_string,
};
pub use navigate::{find_parent, find_row};
pub use options::{reorder_options, OptionValue, TypeOption, DEFINE_NEW_MODEL};
pub use parse::parse_contract_array;
pub use row::Row;
