//! Recreate a DynamoDB table from a CSV import in S3.
//!
//! On each invocation the function deletes the destination table if it
//! exists, waits for the deletion to finish, then starts an `ImportTable`
//! that creates the table afresh from the source bucket.

pub mod basic_operations;
pub mod client;
pub mod config;
pub mod errors;
pub mod handler;
pub mod logging;
pub mod model;
pub mod orchestrator;
pub mod table_operations;

#[cfg(test)]
mod test_utils;

pub use config::ImporterConfig;
pub use errors::{AwsErrorKind, ImporterError, Operation};
pub use model::{IdentityRecord, ImportRequest, ImportResult, TableDescriptor};
pub use orchestrator::ImportOrchestrator;
pub use table_operations::WaitPolicy;
