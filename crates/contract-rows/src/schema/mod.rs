//! Typed contract document model and its JSON boundary.

pub mod codec;
pub mod document;
pub mod node;

pub use document::{ContractDocument, CONTRACT_KEY};
pub use node::{ArraySchema, ObjectSchema, PrimitiveSchema, ReferenceSchema, SchemaNode};
