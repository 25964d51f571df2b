//! Put item operation.

use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use tracing::{error, info};

use crate::errors::{Operation, Result, map_sdk_error};
use crate::model::{IdentityRecord, PARTITION_KEY, SORT_KEY, TECH_OWNER_EMAIL};

/// Convert a record into a DynamoDB item with three string attributes.
pub fn identity_item(record: &IdentityRecord) -> HashMap<String, AttributeValue> {
    [
        (PARTITION_KEY, &record.account_id),
        (SORT_KEY, &record.owner_email),
        (TECH_OWNER_EMAIL, &record.tech_owner_email),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), AttributeValue::S(v.clone())))
    .collect()
}

/// Write one identity row, overwriting any row with the same key.
pub async fn put_identity_row(client: &Client, table: &str, record: &IdentityRecord) -> Result<()> {
    client
        .put_item()
        .table_name(table)
        .set_item(Some(identity_item(record)))
        .send()
        .await
        .map_err(|e| {
            error!(table, account_id = %record.account_id, error = ?e, "Failed in put_item");
            map_sdk_error(e, Operation::PutItem, Some(table))
        })?;

    info!(table, account_id = %record.account_id, "Row created");
    Ok(())
}
