//! Error types for the importer.
//!
//! This module maps AWS SDK errors to [`ImporterError`].
//! Uses typed `SdkError` variant matching. Service errors are classified by
//! their error code, everything else by the `SdkError` variant alone.

use aws_sdk_dynamodb::error::{BuildError, ProvideErrorMetadata, SdkError};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImporterError>;

/// DynamoDB operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListTables,
    DeleteTable,
    DescribeTable,
    ImportTable,
    PutItem,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ListTables => "list_tables",
            Operation::DeleteTable => "delete_table",
            Operation::DescribeTable => "describe_table",
            Operation::ImportTable => "import_table",
            Operation::PutItem => "put_item",
        };
        f.write_str(name)
    }
}

/// Classification of a failed AWS call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwsErrorKind {
    Connection,
    Credentials,
    AccessDenied,
    Throttled,
    ResourceNotFound,
    ResourceInUse,
    Validation,
    LimitExceeded,
    Other,
}

#[derive(Debug, Error)]
pub enum ImporterError {
    #[error("missing configuration value `{0}`")]
    MissingConfig(&'static str),

    #[error("invalid configuration value `{name}`: {reason}")]
    InvalidConfig { name: &'static str, reason: String },

    #[error("{operation} failed{}: {message}", table_suffix(.table))]
    Aws {
        operation: Operation,
        table: Option<String>,
        kind: AwsErrorKind,
        message: String,
    },

    #[error("table '{table}' still exists after {attempts} attempts")]
    DeleteWaitExhausted { table: String, attempts: u32 },

    #[error("failed to build {what}: {message}")]
    RequestBuild { what: &'static str, message: String },

    #[error("{operation} response is missing `{field}`")]
    MalformedResponse {
        operation: Operation,
        field: &'static str,
    },
}

fn table_suffix(table: &Option<String>) -> String {
    match table {
        Some(t) => format!(" for table '{}'", t),
        None => String::new(),
    }
}

impl ImporterError {
    /// The AWS classification, if this error came from an AWS call.
    pub fn aws_kind(&self) -> Option<AwsErrorKind> {
        match self {
            ImporterError::Aws { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub(crate) fn build(what: &'static str, err: BuildError) -> Self {
        ImporterError::RequestBuild {
            what,
            message: err.to_string(),
        }
    }

    fn aws(
        operation: Operation,
        table: Option<&str>,
        kind: AwsErrorKind,
        message: impl Into<String>,
    ) -> Self {
        ImporterError::Aws {
            operation,
            table: table.map(str::to_string),
            kind,
            message: message.into(),
        }
    }
}

// ========== TYPED ERROR MAPPING ==========

/// Map non-service `SdkError` variants (dispatch failures, timeouts, etc.).
///
/// Returns `None` for `ServiceError`.
fn map_outer_sdk_error<E, R>(
    err: &SdkError<E, R>,
    operation: Operation,
    table: Option<&str>,
) -> Option<ImporterError>
where
    E: fmt::Debug,
    R: fmt::Debug,
{
    let mapped = match err {
        SdkError::DispatchFailure(dispatch) => {
            let msg = if dispatch.is_timeout() {
                "Connection timed out to DynamoDB. Check your network or endpoint."
            } else if dispatch.is_io() {
                "Connection failed to DynamoDB (I/O error). Check if the endpoint is reachable."
            } else {
                "Connection failed to DynamoDB. Check if the endpoint is reachable."
            };
            ImporterError::aws(operation, table, AwsErrorKind::Connection, msg)
        }
        SdkError::TimeoutError(_) => ImporterError::aws(
            operation,
            table,
            AwsErrorKind::Connection,
            "Connection timed out to DynamoDB. Check your network or endpoint.",
        ),
        SdkError::ConstructionFailure(inner) => ImporterError::aws(
            operation,
            table,
            AwsErrorKind::Other,
            format!("Failed to build request: {:?}", inner),
        ),
        SdkError::ResponseError(inner) => ImporterError::aws(
            operation,
            table,
            AwsErrorKind::Other,
            format!("Invalid response from DynamoDB: {:?}", inner),
        ),
        SdkError::ServiceError(_) => return None,
        _ => ImporterError::aws(
            operation,
            table,
            AwsErrorKind::Other,
            format!("Unknown error from DynamoDB: {:?}", err),
        ),
    };
    Some(mapped)
}

/// Classify a DynamoDB service error code.
fn classify_service_code(code: Option<&str>) -> AwsErrorKind {
    match code {
        Some(
            "UnrecognizedClientException"
            | "InvalidAccessKeyId"
            | "SignatureDoesNotMatch"
            | "ExpiredTokenException"
            | "ExpiredToken",
        ) => AwsErrorKind::Credentials,
        Some("AccessDeniedException" | "AccessDenied") => AwsErrorKind::AccessDenied,
        Some(
            "ProvisionedThroughputExceededException"
            | "RequestLimitExceeded"
            | "Throttling"
            | "ThrottlingException"
            | "TooManyRequestsException",
        ) => AwsErrorKind::Throttled,
        Some("ResourceNotFoundException") => AwsErrorKind::ResourceNotFound,
        Some("ResourceInUseException" | "ImportConflictException") => AwsErrorKind::ResourceInUse,
        Some("ValidationException") => AwsErrorKind::Validation,
        Some("LimitExceededException") => AwsErrorKind::LimitExceeded,
        _ => AwsErrorKind::Other,
    }
}

/// Map a DynamoDB `SdkError` to [`ImporterError`].
///
/// For `ServiceError`, uses `ProvideErrorMetadata` to get the error code and message.
pub fn map_sdk_error<E, R>(
    err: SdkError<E, R>,
    operation: Operation,
    table: Option<&str>,
) -> ImporterError
where
    E: ProvideErrorMetadata + fmt::Debug + fmt::Display,
    R: fmt::Debug,
{
    if let Some(mapped) = map_outer_sdk_error(&err, operation, table) {
        return mapped;
    }

    if let Some(service_err) = err.as_service_error() {
        let meta = ProvideErrorMetadata::meta(service_err);
        let kind = classify_service_code(meta.code());
        let message = meta
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| service_err.to_string());
        return ImporterError::aws(operation, table, kind, message);
    }

    ImporterError::aws(
        operation,
        table,
        AwsErrorKind::Other,
        format!("Unexpected DynamoDB error: {:?}", err),
    )
}
