//! Core library for dynamigrate.
//!
//! Pure, I/O-free building blocks for schema-driven DynamoDB migrations:
//! the migration schema file model ([`schema`]) and the JSON to
//! `AttributeValue` encoder ([`encode`]). The `dynamigrate` CLI crate
//! provides the imperative shell around these.

pub mod encode;
pub mod schema;
