use serde::Deserialize;

use super::error::Result;

/// Declarative description of one DynamoDB table.
///
/// This mirrors the JSON schema file format:
///
/// ```json
/// {
///   "table": "users",
///   "dropIfExists": true,
///   "provisionedThroughput": { "readCapacityUnits": 5, "writeCapacityUnits": 5 },
///   "columns": [
///     { "name": "id", "type": "S", "index": true, "hash": true }
///   ],
///   "globalIndexes": [],
///   "localIndexes": [],
///   "items": [{ "id": "1", "name": "Ada" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Table name. Must be non-empty.
    pub table: String,

    /// Delete any existing table with the same name before creating.
    #[serde(default)]
    pub drop_if_exists: bool,

    /// Provisioned capacity for the table. When absent the table is
    /// created in PAY_PER_REQUEST billing mode.
    #[serde(default)]
    pub provisioned_throughput: Option<Throughput>,

    /// Column declarations. Columns with `index: true` become attribute
    /// definitions; columns with `hash`/`range` form the primary key.
    #[serde(default)]
    pub columns: Vec<Column>,

    /// Global Secondary Indexes.
    #[serde(default)]
    pub global_indexes: Vec<GlobalIndex>,

    /// Local Secondary Indexes.
    #[serde(default)]
    pub local_indexes: Vec<LocalIndex>,

    /// Seed items inserted after the table becomes active. Each entry
    /// must be a JSON object; values may nest arbitrarily.
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

impl Schema {
    /// Parses a schema from its JSON text.
    pub fn parse(input: &str) -> Result<Self> {
        let schema: Schema = serde_json::from_str(input)?;
        Ok(schema)
    }

    /// Columns that participate in the primary key, hash key first.
    pub fn key_columns(&self) -> Vec<&Column> {
        let mut keys: Vec<&Column> = self.columns.iter().filter(|c| c.hash || c.range).collect();
        keys.sort_by_key(|c| !c.hash);
        keys
    }
}

/// DynamoDB scalar attribute types usable as key attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AttributeType {
    #[serde(rename = "S")]
    String,
    #[serde(rename = "N")]
    Number,
    #[serde(rename = "B")]
    Binary,
}

impl AttributeType {
    /// The wire-format type tag ("S", "N" or "B").
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::String => "S",
            AttributeType::Number => "N",
            AttributeType::Binary => "B",
        }
    }
}

/// One column declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,

    #[serde(rename = "type")]
    pub column_type: AttributeType,

    /// Emit an attribute definition for this column.
    #[serde(default)]
    pub index: bool,

    /// Partition (HASH) key member.
    #[serde(default)]
    pub hash: bool,

    /// Sort (RANGE) key member.
    #[serde(default)]
    pub range: bool,
}

/// Index projection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub projection_type: ProjectionKind,

    #[serde(default, rename = "nonKeys")]
    pub non_keys: Vec<String>,
}

/// Projection kinds supported by DynamoDB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProjectionKind {
    #[serde(rename = "ALL")]
    All,
    #[serde(rename = "KEYS_ONLY")]
    KeysOnly,
    #[serde(rename = "INCLUDE")]
    Include,
}

/// Provisioned read/write capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Throughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

/// Global Secondary Index declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalIndex {
    pub name: String,

    /// Capacity for the index. Absent means the table's billing mode
    /// applies (PAY_PER_REQUEST tables must leave this out).
    #[serde(default)]
    pub provisioned_throughput: Option<Throughput>,

    pub projection: Projection,

    /// Index key columns (`hash`/`range` flags as on table columns).
    pub keys: Vec<Column>,
}

/// Local Secondary Index declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalIndex {
    pub name: String,
    pub projection: Projection,
    pub keys: Vec<Column>,
}
