//! Table management operations for DynamoDB.
//!
//! This module provides the table lifecycle steps of an import:
//! - `exists` - Check if a table exists
//! - `delete` - Delete a table
//! - `wait` - Wait for a deleted table to disappear
//! - `import` - Create a table from an S3 import

mod delete;
mod exists;
mod import;
mod wait;

// Re-export public functions
pub use delete::delete_table;
pub use exists::table_exists;
pub use import::{ImportSpec, build_import_spec, import_table};
pub use wait::{WaitPolicy, wait_for_table_deleted};
