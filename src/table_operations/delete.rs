//! Delete table operation.

use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::TableDescription;
use tracing::error;

use crate::errors::{Operation, Result, map_sdk_error};

/// Issue a `DeleteTable` request.
///
/// Returns the table description from the response. The table is usually
/// still in `DELETING` state at this point; see
/// [`wait_for_table_deleted`](super::wait_for_table_deleted).
pub async fn delete_table(client: &Client, table: &str) -> Result<Option<TableDescription>> {
    let output = client
        .delete_table()
        .table_name(table)
        .send()
        .await
        .map_err(|e| {
            error!(table, error = ?e, "Failed in delete_table");
            map_sdk_error(e, Operation::DeleteTable, Some(table))
        })?;

    Ok(output.table_description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ImporterError;
    use crate::test_utils::{delete_table_failing, delete_table_ok};
    use aws_sdk_dynamodb::types::TableStatus;
    use aws_smithy_mocks::{RuleMode, mock_client};

    #[tokio::test]
    async fn returns_description_of_deleting_table() {
        let delete = delete_table_ok("rd-sample");
        let client = mock_client!(aws_sdk_dynamodb, RuleMode::MatchAny, [&delete]);

        let desc = delete_table(&client, "rd-sample")
            .await
            .unwrap()
            .expect("description should be returned");

        assert_eq!(desc.table_name(), Some("rd-sample"));
        assert_eq!(desc.table_status(), Some(&TableStatus::Deleting));
        assert_eq!(delete.num_calls(), 1);
    }

    #[tokio::test]
    async fn failure_names_the_table() {
        let delete = delete_table_failing();
        let client = mock_client!(aws_sdk_dynamodb, RuleMode::MatchAny, [&delete]);

        let err = delete_table(&client, "rd-sample").await.unwrap_err();
        match err {
            ImporterError::Aws {
                operation, table, ..
            } => {
                assert_eq!(operation, Operation::DeleteTable);
                assert_eq!(table.as_deref(), Some("rd-sample"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
