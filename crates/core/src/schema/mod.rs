//! Migration schema file model.
//!
//! A schema file is a JSON document describing one DynamoDB table: its
//! columns, key layout, secondary indexes, throughput, and optional seed
//! items. Parsing is strict (unknown attribute or projection types are
//! rejected at deserialization time); structural rules that serde cannot
//! express live in [`validate_schema`].

mod error;
mod types;
mod validation;

pub use error::{Result, SchemaError};
pub use types::{
    AttributeType, Column, GlobalIndex, LocalIndex, Projection, ProjectionKind, Schema, Throughput,
};
pub use validation::validate_schema;
