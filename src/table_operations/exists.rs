//! Table existence check.

use aws_sdk_dynamodb::Client;
use tracing::error;

use crate::errors::{Operation, Result, map_sdk_error};

/// Check whether `table` is visible to the current credentials.
///
/// Walks every `ListTables` page and stops at the first exact match.
pub async fn table_exists(client: &Client, table: &str) -> Result<bool> {
    let mut names = client.list_tables().into_paginator().items().send();

    while let Some(name) = names.next().await {
        let name = name.map_err(|e| {
            error!(table, error = ?e, "Failed in list_tables");
            map_sdk_error(e, Operation::ListTables, Some(table))
        })?;
        if name == table {
            return Ok(true);
        }
    }

    Ok(false)
}
