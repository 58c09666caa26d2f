//! Seed item insertion.

use super::error::{MigrateError, Result};
use aws_sdk_dynamodb::Client;
use dynamigrate_core::encode::encode_item;
use dynamigrate_core::schema::Schema;

/// Inserts the schema's seed items, one PutItem per item.
///
/// Fail-fast: the first item that fails to encode or insert aborts the
/// whole seeding step. Partial seeding with unreported gaps is worse
/// than stopping, so there is no skip-and-continue mode.
pub async fn seed_items(client: &Client, schema: &Schema) -> Result<u32> {
    let mut inserted = 0;

    for item in &schema.items {
        let attributes = encode_item(item)?;
        client
            .put_item()
            .table_name(&schema.table)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(|e| MigrateError::AwsSdk(e.to_string()))?;
        inserted += 1;
    }

    Ok(inserted)
}
