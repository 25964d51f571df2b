//! Import table operation.
//!
//! Builds the `ImportTable` request for the accounts CSV and maps the
//! response into [`ImportResult`].

use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode as SdkBillingMode, CsvOptions, InputFormat,
    InputFormatOptions, KeySchemaElement, KeyType, S3BucketSource, ScalarAttributeType,
    TableCreationParameters,
};
use tracing::{error, info};

use crate::errors::{ImporterError, Operation, Result, map_sdk_error};
use crate::model::{BillingMode, CSV_DELIMITER, CSV_HEADER, ImportResult, TableDescriptor};

/// Everything sent in one `ImportTable` call.
#[derive(Debug, Clone)]
pub struct ImportSpec {
    pub s3_bucket_source: S3BucketSource,
    pub input_format: InputFormat,
    pub input_format_options: InputFormatOptions,
    pub table_creation_parameters: TableCreationParameters,
}

/// Build the import specification for `table` sourced from `bucket`.
///
/// The input is always comma-delimited CSV with the
/// `account_id,owner_email,tech_owner_email` header.
pub fn build_import_spec(table: &TableDescriptor, bucket: &str) -> Result<ImportSpec> {
    let s3_bucket_source = S3BucketSource::builder()
        .s3_bucket(bucket)
        .build()
        .map_err(|e| ImporterError::build("S3 bucket source", e))?;

    let csv = CsvOptions::builder()
        .delimiter(CSV_DELIMITER)
        .set_header_list(Some(CSV_HEADER.iter().map(|h| h.to_string()).collect()))
        .build();

    let table_creation_parameters = TableCreationParameters::builder()
        .table_name(&table.name)
        .attribute_definitions(string_attribute(table.partition_key)?)
        .attribute_definitions(string_attribute(table.sort_key)?)
        .key_schema(key_element(table.partition_key, KeyType::Hash)?)
        .key_schema(key_element(table.sort_key, KeyType::Range)?)
        .billing_mode(sdk_billing_mode(table.billing_mode))
        .build()
        .map_err(|e| ImporterError::build("table creation parameters", e))?;

    Ok(ImportSpec {
        s3_bucket_source,
        input_format: InputFormat::Csv,
        input_format_options: InputFormatOptions::builder().csv(csv).build(),
        table_creation_parameters,
    })
}

fn string_attribute(name: &str) -> Result<AttributeDefinition> {
    AttributeDefinition::builder()
        .attribute_name(name)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| ImporterError::build("attribute definition", e))
}

fn key_element(name: &str, key_type: KeyType) -> Result<KeySchemaElement> {
    KeySchemaElement::builder()
        .attribute_name(name)
        .key_type(key_type)
        .build()
        .map_err(|e| ImporterError::build("key schema element", e))
}

fn sdk_billing_mode(mode: BillingMode) -> SdkBillingMode {
    match mode {
        BillingMode::OnDemand => SdkBillingMode::PayPerRequest,
    }
}

/// Start the import and return the identifiers DynamoDB assigned to it.
pub async fn import_table(client: &Client, spec: ImportSpec) -> Result<ImportResult> {
    let table = spec.table_creation_parameters.table_name().to_string();

    let output = client
        .import_table()
        .s3_bucket_source(spec.s3_bucket_source)
        .input_format(spec.input_format)
        .input_format_options(spec.input_format_options)
        .table_creation_parameters(spec.table_creation_parameters)
        .send()
        .await
        .map_err(|e| {
            error!(table = %table, error = ?e, "Failed in import_table");
            map_sdk_error(e, Operation::ImportTable, Some(&table))
        })?;

    info!(response = ?output, "import_table response");

    let missing = |field: &'static str| ImporterError::MalformedResponse {
        operation: Operation::ImportTable,
        field,
    };

    let desc = output
        .import_table_description()
        .ok_or_else(|| missing("ImportTableDescription"))?;

    Ok(ImportResult {
        table_arn: desc.table_arn().ok_or_else(|| missing("TableArn"))?.to_string(),
        import_arn: desc.import_arn().ok_or_else(|| missing("ImportArn"))?.to_string(),
        import_status: desc
            .import_status()
            .map(|s| s.as_str().to_string())
            .ok_or_else(|| missing("ImportStatus"))?,
        s3_bucket: desc
            .s3_bucket_source()
            .map(|s| s.s3_bucket().to_string())
            .ok_or_else(|| missing("S3BucketSource"))?,
    })
}
