//! Delete-then-import workflow.
//!
//! One invocation runs:
//!
//! ```text
//! check existence -> [delete -> wait until gone] -> import -> result
//! ```
//!
//! Every step propagates its error. A failure anywhere aborts the invocation
//! and nothing after it runs.

use aws_sdk_dynamodb::Client;
use tracing::info;

use crate::basic_operations::put_identity_row;
use crate::errors::Result;
use crate::model::{IdentityRecord, ImportRequest, ImportResult, TableDescriptor};
use crate::table_operations::{
    WaitPolicy, build_import_spec, delete_table, import_table, table_exists,
    wait_for_table_deleted,
};

pub struct ImportOrchestrator {
    client: Client,
    wait_policy: WaitPolicy,
}

impl ImportOrchestrator {
    pub fn new(client: Client, wait_policy: WaitPolicy) -> Self {
        ImportOrchestrator {
            client,
            wait_policy,
        }
    }

    /// Make sure no table called `table` exists.
    ///
    /// Deletes an existing table and blocks until DynamoDB no longer
    /// describes it.
    pub async fn ensure_table_absent(&self, table: &str) -> Result<()> {
        if !table_exists(&self.client, table).await? {
            info!("Table: {} not found.", table);
            return Ok(());
        }

        info!(
            "Table: {} found. Deleting Table before data import ..",
            table
        );
        let description = delete_table(&self.client, table).await?;
        info!(response = ?description, "delete_table response");

        wait_for_table_deleted(&self.client, table, &self.wait_policy).await?;
        info!("Table: {} does not exist", table);
        Ok(())
    }

    /// Create `table` from the CSV files in `source_bucket`.
    pub async fn start_import(&self, table: &str, source_bucket: &str) -> Result<ImportResult> {
        info!(
            "Importing data into Table: {} from S3 Bucket: {} ..",
            table, source_bucket
        );
        let spec = build_import_spec(&TableDescriptor::accounts(table), source_bucket)?;
        import_table(&self.client, spec).await
    }

    /// Run the whole workflow for one invocation.
    pub async fn handle(&self, request: &ImportRequest) -> Result<ImportResult> {
        self.ensure_table_absent(&request.table_name).await?;
        self.start_import(&request.table_name, &request.source_bucket)
            .await
    }

    /// Insert one identity row into `table`.
    ///
    /// Not part of [`handle`](Self::handle).
    pub async fn write_identity_row(
        &self,
        table: &str,
        account_id: &str,
        owner_email: &str,
        tech_owner_email: &str,
    ) -> Result<()> {
        let record = IdentityRecord {
            account_id: account_id.to_string(),
            owner_email: owner_email.to_string(),
            tech_owner_email: tech_owner_email.to_string(),
        };
        put_identity_row(&self.client, table, &record).await
    }
}
