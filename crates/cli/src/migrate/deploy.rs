//! Table creation and deletion (Imperative Shell).
//!
//! Translates the schema model into DynamoDB CreateTable/DeleteTable
//! requests and waits for the table to settle between steps.

use super::client;
use super::error::{MigrateError, Result};
use super::planning::{ApplyPlan, DestroyPlan, IndexStatus, TableStatus};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, GlobalSecondaryIndex, KeySchemaElement, KeyType,
    LocalSecondaryIndex, Projection, ProjectionType, ProvisionedThroughput, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use dynamigrate_core::schema::{self, Schema};
use std::time::Duration;

/// Execute an apply plan's table operations. Seeding happens afterwards.
pub async fn execute_apply_plan(client: &Client, plan: &ApplyPlan) -> Result<()> {
    match plan {
        ApplyPlan::Create {
            schema,
            drop_existing,
        } => {
            if *drop_existing {
                delete_table(client, &schema.table).await?;
                wait_for_table_deleted(client, &schema.table).await?;
            }
            create_table(client, schema).await?;
            wait_for_table_active(client, &schema.table).await?;
            Ok(())
        }
        ApplyPlan::Blocked { table_name } => Err(MigrateError::TableAlreadyExists {
            table_name: table_name.clone(),
        }),
    }
}

/// Execute a destroy plan.
pub async fn execute_destroy_plan(client: &Client, plan: &DestroyPlan) -> Result<()> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            delete_table(client, table_name).await?;
        }
        DestroyPlan::AlreadyGone { .. } => {
            // Nothing to do
        }
    }
    Ok(())
}

async fn create_table(client: &Client, schema: &Schema) -> Result<()> {
    let mut request = client
        .create_table()
        .table_name(&schema.table)
        .set_key_schema(Some(key_schema(&schema.columns)?))
        .set_attribute_definitions(Some(attribute_definitions(schema)?));

    request = match &schema.provisioned_throughput {
        Some(throughput) => request.provisioned_throughput(build_throughput(throughput)?),
        None => request.billing_mode(BillingMode::PayPerRequest),
    };

    for gsi in &schema.global_indexes {
        let mut builder = GlobalSecondaryIndex::builder()
            .index_name(&gsi.name)
            .set_key_schema(Some(key_schema(&gsi.keys)?))
            .projection(build_projection(&gsi.projection));
        if let Some(throughput) = &gsi.provisioned_throughput {
            builder = builder.provisioned_throughput(build_throughput(throughput)?);
        }
        request = request.global_secondary_indexes(
            builder
                .build()
                .map_err(|e| MigrateError::AwsSdk(e.to_string()))?,
        );
    }

    for lsi in &schema.local_indexes {
        request = request.local_secondary_indexes(
            LocalSecondaryIndex::builder()
                .index_name(&lsi.name)
                .set_key_schema(Some(key_schema(&lsi.keys)?))
                .projection(build_projection(&lsi.projection))
                .build()
                .map_err(|e| MigrateError::AwsSdk(e.to_string()))?,
        );
    }

    request
        .send()
        .await
        .map_err(|e| MigrateError::AwsSdk(e.to_string()))?;
    Ok(())
}

async fn delete_table(client: &Client, table_name: &str) -> Result<()> {
    client
        .delete_table()
        .table_name(table_name)
        .send()
        .await
        .map_err(|e| MigrateError::AwsSdk(e.to_string()))?;
    Ok(())
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    let max_attempts = 60;
    let delay = Duration::from_secs(2);

    for _ in 0..max_attempts {
        if let Some(state) = client::get_table_state(client, table_name).await? {
            if state.status == TableStatus::Active
                && state
                    .indexes
                    .iter()
                    .all(|index| index.status == IndexStatus::Active)
            {
                return Ok(());
            }
        }
        tokio::time::sleep(delay).await;
    }

    Err(MigrateError::TableActivationTimeout {
        table_name: table_name.to_string(),
    })
}

async fn wait_for_table_deleted(client: &Client, table_name: &str) -> Result<()> {
    let max_attempts = 60;
    let delay = Duration::from_secs(2);

    for _ in 0..max_attempts {
        if client::get_table_state(client, table_name).await?.is_none() {
            return Ok(());
        }
        tokio::time::sleep(delay).await;
    }

    Err(MigrateError::TableDeletionTimeout {
        table_name: table_name.to_string(),
    })
}

/// Builds the key schema from key-flagged columns, hash key first.
fn key_schema(columns: &[schema::Column]) -> Result<Vec<KeySchemaElement>> {
    let mut elements = Vec::new();
    for column in columns.iter().filter(|c| c.hash || c.range) {
        let key_type = if column.hash {
            KeyType::Hash
        } else {
            KeyType::Range
        };
        elements.push(
            KeySchemaElement::builder()
                .attribute_name(&column.name)
                .key_type(key_type)
                .build()
                .map_err(|e| MigrateError::AwsSdk(e.to_string()))?,
        );
    }
    elements.sort_by_key(|e| e.key_type() != &KeyType::Hash);
    Ok(elements)
}

/// Collects attribute definitions for every key or indexed column,
/// including index keys not declared as table columns, deduplicated by
/// name.
fn attribute_definitions(schema: &Schema) -> Result<Vec<AttributeDefinition>> {
    let mut definitions: Vec<AttributeDefinition> = Vec::new();

    let mut push = |column: &schema::Column| -> Result<()> {
        if definitions
            .iter()
            .any(|d| d.attribute_name() == column.name)
        {
            return Ok(());
        }
        definitions.push(
            AttributeDefinition::builder()
                .attribute_name(&column.name)
                .attribute_type(to_scalar_type(column.column_type))
                .build()
                .map_err(|e| MigrateError::AwsSdk(e.to_string()))?,
        );
        Ok(())
    };

    for column in schema
        .columns
        .iter()
        .filter(|c| c.index || c.hash || c.range)
    {
        push(column)?;
    }
    for gsi in &schema.global_indexes {
        for key in gsi.keys.iter().filter(|c| c.hash || c.range) {
            push(key)?;
        }
    }
    for lsi in &schema.local_indexes {
        for key in lsi.keys.iter().filter(|c| c.hash || c.range) {
            push(key)?;
        }
    }

    Ok(definitions)
}

fn build_projection(projection: &schema::Projection) -> Projection {
    let mut builder = Projection::builder().projection_type(match projection.projection_type {
        schema::ProjectionKind::All => ProjectionType::All,
        schema::ProjectionKind::KeysOnly => ProjectionType::KeysOnly,
        schema::ProjectionKind::Include => ProjectionType::Include,
    });
    if !projection.non_keys.is_empty() {
        builder = builder.set_non_key_attributes(Some(projection.non_keys.clone()));
    }
    builder.build()
}

fn build_throughput(throughput: &schema::Throughput) -> Result<ProvisionedThroughput> {
    ProvisionedThroughput::builder()
        .read_capacity_units(throughput.read_capacity_units)
        .write_capacity_units(throughput.write_capacity_units)
        .build()
        .map_err(|e| MigrateError::AwsSdk(e.to_string()))
}

fn to_scalar_type(attr_type: schema::AttributeType) -> ScalarAttributeType {
    match attr_type {
        schema::AttributeType::String => ScalarAttributeType::S,
        schema::AttributeType::Number => ScalarAttributeType::N,
        schema::AttributeType::Binary => ScalarAttributeType::B,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Schema {
        Schema::parse(
            r#"{
                "table": "users",
                "columns": [
                    { "name": "createdAt", "type": "N", "index": true, "range": true },
                    { "name": "id", "type": "S", "index": true, "hash": true },
                    { "name": "bio", "type": "S" }
                ],
                "globalIndexes": [
                    {
                        "name": "byEmail",
                        "projection": { "type": "INCLUDE", "nonKeys": ["name"] },
                        "keys": [
                            { "name": "email", "type": "S", "hash": true },
                            { "name": "id", "type": "S", "range": true }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_key_schema_hash_first_and_filters_plain_columns() {
        let elements = key_schema(&fixture().columns).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].attribute_name(), "id");
        assert_eq!(elements[0].key_type(), &KeyType::Hash);
        assert_eq!(elements[1].attribute_name(), "createdAt");
        assert_eq!(elements[1].key_type(), &KeyType::Range);
    }

    #[test]
    fn test_attribute_definitions_dedupe_index_keys() {
        let definitions = attribute_definitions(&fixture()).unwrap();
        let names: Vec<&str> = definitions.iter().map(|d| d.attribute_name()).collect();
        // "id" appears both as a table column and a GSI key but is
        // defined once; "bio" is not indexed and gets no definition.
        assert_eq!(names, vec!["createdAt", "id", "email"]);
        assert_eq!(definitions[0].attribute_type(), &ScalarAttributeType::N);
    }

    #[test]
    fn test_build_projection_include_carries_non_keys() {
        let schema = fixture();
        let projection = build_projection(&schema.global_indexes[0].projection);
        assert_eq!(projection.projection_type(), Some(&ProjectionType::Include));
        assert_eq!(projection.non_key_attributes(), ["name".to_string()]);
    }

    #[test]
    fn test_build_projection_all_has_no_non_keys() {
        let projection = build_projection(&schema::Projection {
            projection_type: schema::ProjectionKind::All,
            non_keys: vec![],
        });
        assert_eq!(projection.projection_type(), Some(&ProjectionType::All));
        assert!(projection.non_key_attributes().is_empty());
    }
}
