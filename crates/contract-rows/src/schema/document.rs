//! The contract document: an ordered map of named schema entries.

use std::fmt;
use std::str::FromStr;

use contract_rows_util::CaseInsensitiveMap;

use super::codec;
use super::node::SchemaNode;
use crate::error::ContractError;

/// Key of the root entry. Matching is case-insensitive; the stored
/// casing is preserved on output.
pub const CONTRACT_KEY: &str = "Contract";

/// A parsed contract document.
///
/// One entry, keyed `Contract`, is the root schema; every other entry
/// is a reusable definition addressable as `#/<Name>`. Entry order is
/// kept from the source text, and lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractDocument {
    pub entries: CaseInsensitiveMap<SchemaNode>,
}

impl ContractDocument {
    /// The root `Contract` entry.
    pub fn contract(&self) -> Option<&SchemaNode> {
        self.entries.get(CONTRACT_KEY)
    }

    pub fn contract_mut(&mut self) -> Option<&mut SchemaNode> {
        self.entries.get_mut(CONTRACT_KEY)
    }

    /// Resolves a definition by bare name, case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&SchemaNode> {
        self.entries.get(name)
    }

    /// The stored-case name of a definition, matched case-insensitively.
    pub fn stored_definition_name(&self, name: &str) -> Option<&str> {
        self.entries.stored_key(name)
    }

    /// Stored-case names of every non-Contract entry, in document order.
    pub fn definition_names(&self) -> Vec<String> {
        self.entries
            .keys()
            .filter(|key| !key.eq_ignore_ascii_case(CONTRACT_KEY))
            .cloned()
            .collect()
    }
}

impl FromStr for ContractDocument {
    type Err = ContractError;

    /// Parses a contract string.
    ///
    /// # Errors
    ///
    /// - [`ContractError::Json`] - the text is not valid JSON
    /// - [`ContractError::MissingContract`] - the top level is not an
    ///   object or has no `Contract` entry
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_document(s)
    }
}

impl fmt::Display for ContractDocument {
    /// Writes the canonical compact serialization.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", codec::document_to_value(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"Contract":{"type":"object","properties":{"Name":{"type":"string"}}},"Guid":{"type":"string","format":"uuid"}}"#;

    #[test]
    fn test_contract_lookup_is_case_insensitive() {
        let doc: ContractDocument = SAMPLE.parse().unwrap();
        assert!(doc.contract().is_some());
        assert!(doc.resolve("guid").is_some());
        assert_eq!(doc.stored_definition_name("GUID"), Some("Guid"));
    }

    #[test]
    fn test_definition_names_exclude_contract() {
        let doc: ContractDocument = SAMPLE.parse().unwrap();
        assert_eq!(doc.definition_names(), vec!["Guid".to_string()]);
    }

    #[test]
    fn test_missing_contract() {
        let err = "{\"Guid\":{\"type\":\"string\"}}"
            .parse::<ContractDocument>()
            .unwrap_err();
        assert!(matches!(err, ContractError::MissingContract));
    }

    #[test]
    fn test_invalid_json() {
        let err = "not json".parse::<ContractDocument>().unwrap_err();
        assert!(matches!(err, ContractError::Json(_)));
    }
}
