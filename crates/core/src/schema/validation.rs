use super::error::{Result, SchemaError};
use super::types::{Column, Projection, ProjectionKind, Schema};

/// Validates a parsed schema before any request is built from it.
///
/// Checks the structural rules serde cannot express: a non-empty table
/// name, a hash key column, named indexes, and index key/projection
/// coherence.
pub fn validate_schema(schema: &Schema) -> Result<()> {
    if schema.table.trim().is_empty() {
        return Err(SchemaError::MissingTableName);
    }
    if !schema.columns.iter().any(|c| c.hash) {
        return Err(SchemaError::MissingHashKey {
            table: schema.table.clone(),
        });
    }

    for gsi in &schema.global_indexes {
        validate_index("GSI", &gsi.name, &gsi.keys, &gsi.projection)?;
    }
    for lsi in &schema.local_indexes {
        validate_index("LSI", &lsi.name, &lsi.keys, &lsi.projection)?;
    }

    Ok(())
}

fn validate_index(
    kind: &'static str,
    name: &str,
    keys: &[Column],
    projection: &Projection,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SchemaError::UnnamedIndex { kind });
    }
    if !keys.iter().any(|c| c.hash) {
        return Err(SchemaError::IndexMissingHashKey {
            name: name.to_string(),
        });
    }
    if projection.projection_type == ProjectionKind::Include && projection.non_keys.is_empty() {
        return Err(SchemaError::IncludeWithoutNonKeys {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_schema() -> Schema {
        Schema::parse(
            r#"{
                "table": "users",
                "columns": [{ "name": "id", "type": "S", "index": true, "hash": true }]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_schema_passes() {
        assert!(validate_schema(&base_schema()).is_ok());
    }

    #[test]
    fn test_empty_table_name_rejected() {
        let mut schema = base_schema();
        schema.table = "  ".to_string();
        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::MissingTableName)
        ));
    }

    #[test]
    fn test_missing_hash_key_rejected() {
        let mut schema = base_schema();
        schema.columns[0].hash = false;
        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::MissingHashKey { .. })
        ));
    }

    #[test]
    fn test_unnamed_gsi_rejected() {
        let mut schema = base_schema();
        schema.global_indexes = serde_json::from_str(
            r#"[{
                "name": "",
                "projection": { "type": "ALL" },
                "keys": [{ "name": "email", "type": "S", "hash": true }]
            }]"#,
        )
        .unwrap();
        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::UnnamedIndex { kind: "GSI" })
        ));
    }

    #[test]
    fn test_gsi_without_hash_key_rejected() {
        let mut schema = base_schema();
        schema.global_indexes = serde_json::from_str(
            r#"[{
                "name": "byEmail",
                "projection": { "type": "ALL" },
                "keys": [{ "name": "email", "type": "S", "range": true }]
            }]"#,
        )
        .unwrap();
        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::IndexMissingHashKey { .. })
        ));
    }

    #[test]
    fn test_include_projection_without_non_keys_rejected() {
        let mut schema = base_schema();
        schema.local_indexes = serde_json::from_str(
            r#"[{
                "name": "byCreated",
                "projection": { "type": "INCLUDE" },
                "keys": [{ "name": "id", "type": "S", "hash": true }]
            }]"#,
        )
        .unwrap();
        assert!(matches!(
            validate_schema(&schema),
            Err(SchemaError::IncludeWithoutNonKeys { .. })
        ));
    }
}
