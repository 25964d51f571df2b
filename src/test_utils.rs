//! Mock DynamoDB rules shared by tests.

use aws_sdk_dynamodb::operation::delete_table::{DeleteTableError, DeleteTableOutput};
use aws_sdk_dynamodb::operation::describe_table::{DescribeTableError, DescribeTableOutput};
use aws_sdk_dynamodb::operation::import_table::{ImportTableError, ImportTableOutput};
use aws_sdk_dynamodb::operation::list_tables::{ListTablesError, ListTablesOutput};
use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::error::{
    InternalServerError, InvalidEndpointException, LimitExceededException, ResourceInUseException,
    ResourceNotFoundException,
};
use aws_sdk_dynamodb::types::{
    ImportStatus, ImportTableDescription, S3BucketSource, TableDescription, TableStatus,
};
use aws_smithy_mocks::{Rule, mock};
use std::time::Duration;

use crate::table_operations::WaitPolicy;

/// Wait policy that polls without sleeping.
pub const NO_DELAY: WaitPolicy = WaitPolicy {
    delay: Duration::ZERO,
    max_attempts: 5,
};

pub const ACCOUNT_PREFIX: &str = "arn:aws:dynamodb:us-east-1:123456789012:table/";

/// `ListTables` answering with the given pages in order.
pub fn list_tables_pages(pages: &[&[&str]]) -> Rule {
    let pages: Vec<Vec<String>> = pages
        .iter()
        .map(|p| p.iter().map(|s| s.to_string()).collect())
        .collect();
    let count = pages.len();

    let mut seq = mock!(aws_sdk_dynamodb::Client::list_tables).sequence();
    for (i, names) in pages.into_iter().enumerate() {
        let last = names.last().cloned().filter(|_| i + 1 < count);
        seq = seq.output(move || {
            ListTablesOutput::builder()
                .set_table_names(Some(names.clone()))
                .set_last_evaluated_table_name(last.clone())
                .build()
        });
    }
    seq.build()
}

pub fn list_tables_failing() -> Rule {
    mock!(aws_sdk_dynamodb::Client::list_tables)
        .sequence()
        .error(|| {
            ListTablesError::InvalidEndpointException(
                InvalidEndpointException::builder()
                    .message("endpoint rejected")
                    .build(),
            )
        })
        .repeatedly()
        .build()
}

pub fn delete_table_ok(table: &str) -> Rule {
    let table = table.to_string();
    mock!(aws_sdk_dynamodb::Client::delete_table)
        .sequence()
        .output(move || {
            DeleteTableOutput::builder()
                .table_description(
                    TableDescription::builder()
                        .table_name(table.clone())
                        .table_arn(format!("{}{}", ACCOUNT_PREFIX, table))
                        .table_status(TableStatus::Deleting)
                        .build(),
                )
                .build()
        })
        .build()
}

pub fn delete_table_failing() -> Rule {
    mock!(aws_sdk_dynamodb::Client::delete_table)
        .sequence()
        .error(|| {
            DeleteTableError::ResourceInUseException(
                ResourceInUseException::builder()
                    .message("table is being created")
                    .build(),
            )
        })
        .repeatedly()
        .build()
}

/// `DescribeTable` reporting the table as `DELETING` `still_present` times,
/// then not found.
pub fn describe_table_sequence(table: &str, still_present: usize) -> Rule {
    let mut seq = mock!(aws_sdk_dynamodb::Client::describe_table).sequence();
    for _ in 0..still_present {
        let table = table.to_string();
        seq = seq.output(move || {
            DescribeTableOutput::builder()
                .table(
                    TableDescription::builder()
                        .table_name(table.clone())
                        .table_status(TableStatus::Deleting)
                        .build(),
                )
                .build()
        });
    }
    seq.error(|| {
        DescribeTableError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Requested resource not found")
                .build(),
        )
    })
    .repeatedly()
    .build()
}

pub fn describe_table_failing() -> Rule {
    mock!(aws_sdk_dynamodb::Client::describe_table)
        .sequence()
        .error(|| {
            DescribeTableError::InternalServerError(
                InternalServerError::builder()
                    .message("internal failure")
                    .build(),
            )
        })
        .repeatedly()
        .build()
}

pub fn import_table_ok(table: &str, bucket: &str) -> Rule {
    let table = table.to_string();
    let bucket = bucket.to_string();
    mock!(aws_sdk_dynamodb::Client::import_table)
        .sequence()
        .output(move || {
            ImportTableOutput::builder()
                .import_table_description(
                    ImportTableDescription::builder()
                        .table_arn(format!("{}{}", ACCOUNT_PREFIX, table))
                        .import_arn(format!("{}{}/import/01", ACCOUNT_PREFIX, table))
                        .import_status(ImportStatus::InProgress)
                        .s3_bucket_source(
                            S3BucketSource::builder()
                                .s3_bucket(bucket.clone())
                                .build()
                                .expect("bucket is set"),
                        )
                        .build(),
                )
                .build()
        })
        .build()
}

pub fn import_table_without_description() -> Rule {
    mock!(aws_sdk_dynamodb::Client::import_table)
        .sequence()
        .output(|| ImportTableOutput::builder().build())
        .build()
}

pub fn import_table_failing() -> Rule {
    mock!(aws_sdk_dynamodb::Client::import_table)
        .sequence()
        .error(|| {
            ImportTableError::LimitExceededException(
                LimitExceededException::builder()
                    .message("too many imports")
                    .build(),
            )
        })
        .repeatedly()
        .build()
}

pub fn put_item_ok() -> Rule {
    mock!(aws_sdk_dynamodb::Client::put_item)
        .sequence()
        .output(|| PutItemOutput::builder().build())
        .build()
}

pub fn put_item_failing() -> Rule {
    mock!(aws_sdk_dynamodb::Client::put_item)
        .sequence()
        .error(|| {
            PutItemError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found")
                    .build(),
            )
        })
        .repeatedly()
        .build()
}
