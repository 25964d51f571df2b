//! Data types passed through the import workflow.

use serde::{Deserialize, Serialize};

/// Partition key of the imported table.
pub const PARTITION_KEY: &str = "account_id";
/// Sort key of the imported table.
pub const SORT_KEY: &str = "owner_email";
/// Third CSV column, stored as a plain attribute.
pub const TECH_OWNER_EMAIL: &str = "tech_owner_email";

/// Column order of the CSV files in the source bucket.
pub const CSV_HEADER: [&str; 3] = [PARTITION_KEY, SORT_KEY, TECH_OWNER_EMAIL];
pub const CSV_DELIMITER: &str = ",";

/// What to import and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    pub table_name: String,
    pub source_bucket: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    OnDemand,
}

/// Schema of the table created by the import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
    pub name: String,
    pub partition_key: &'static str,
    pub sort_key: &'static str,
    pub billing_mode: BillingMode,
}

impl TableDescriptor {
    /// Composite-key, on-demand table for the account CSV.
    pub fn accounts(name: impl Into<String>) -> Self {
        TableDescriptor {
            name: name.into(),
            partition_key: PARTITION_KEY,
            sort_key: SORT_KEY,
            billing_mode: BillingMode::OnDemand,
        }
    }
}

/// Outcome of a started import, returned as the Lambda response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportResult {
    pub table_arn: String,
    pub import_arn: String,
    pub import_status: String,
    #[serde(rename = "S3Bucket")]
    pub s3_bucket: String,
}

/// One row of the accounts table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub account_id: String,
    pub owner_email: String,
    pub tech_owner_email: String,
}
