//! Wait for a table to be gone.

use aws_sdk_dynamodb::Client;
use std::time::Duration;
use tracing::{debug, error};

use crate::errors::{ImporterError, Operation, Result, map_sdk_error};

/// Default delay between polls.
const DEFAULT_DELAY: Duration = Duration::from_secs(60);

/// Default number of polls before giving up.
const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Fixed-interval polling bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub delay: Duration,
    pub max_attempts: u32,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        WaitPolicy {
            delay: DEFAULT_DELAY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Block until `DescribeTable` reports the table as not found.
///
/// The first poll happens right away, then every `policy.delay`, for at most
/// `policy.max_attempts` polls. Any describe error other than
/// `ResourceNotFoundException` ends the wait.
pub async fn wait_for_table_deleted(
    client: &Client,
    table: &str,
    policy: &WaitPolicy,
) -> Result<()> {
    for attempt in 1..=policy.max_attempts {
        match client.describe_table().table_name(table).send().await {
            Ok(output) => {
                let status = output.table().and_then(|t| t.table_status());
                debug!(table, attempt, status = ?status, "table still present");
            }
            Err(e)
                if e.as_service_error()
                    .is_some_and(|se| se.is_resource_not_found_exception()) =>
            {
                debug!(table, attempt, "table not found");
                return Ok(());
            }
            Err(e) => {
                error!(table, attempt, error = ?e, "Failed in describe_table");
                return Err(map_sdk_error(e, Operation::DescribeTable, Some(table)));
            }
        }

        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.delay).await;
        }
    }

    error!(
        table,
        attempts = policy.max_attempts,
        "table still exists, giving up"
    );
    Err(ImporterError::DeleteWaitExhausted {
        table: table.to_string(),
        attempts: policy.max_attempts,
    })
}
