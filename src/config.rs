//! Process configuration.
//!
//! Values come from environment variables set on the Lambda function.

use std::str::FromStr;
use std::time::Duration;

use crate::client::ClientSettings;
use crate::errors::{ImporterError, Result};
use crate::model::ImportRequest;
use crate::table_operations::WaitPolicy;

/// Destination table name.
pub const TABLE_NAME: &str = "table_name";
/// Source bucket for the import.
pub const S3_BUCKET: &str = "s3_bucket";
/// Optional log verbosity.
pub const LOG_LEVEL: &str = "log_level";
/// Optional delay between deletion polls, in seconds.
pub const DELETE_WAIT_DELAY_SECS: &str = "delete_wait_delay_secs";
/// Optional bound on deletion polls.
pub const DELETE_WAIT_MAX_ATTEMPTS: &str = "delete_wait_max_attempts";
/// Optional custom DynamoDB endpoint.
pub const ENDPOINT_URL: &str = "AWS_ENDPOINT_URL_DYNAMODB";

const DEFAULT_LOG_LEVEL: &str = "ERROR";

#[derive(Debug, Clone)]
pub struct ImporterConfig {
    pub request: ImportRequest,
    pub log_level: String,
    pub wait_policy: WaitPolicy,
    pub client: ClientSettings,
}

impl ImporterConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = required(&lookup, TABLE_NAME)?;
        let source_bucket = required(&lookup, S3_BUCKET)?;

        let log_level = optional(&lookup, LOG_LEVEL)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let defaults = WaitPolicy::default();
        let delay = match parse::<u64, _>(&lookup, DELETE_WAIT_DELAY_SECS)? {
            Some(secs) => Duration::from_secs(secs),
            None => defaults.delay,
        };
        let max_attempts = parse::<u32, _>(&lookup, DELETE_WAIT_MAX_ATTEMPTS)?
            .unwrap_or(defaults.max_attempts);
        if max_attempts == 0 {
            return Err(ImporterError::InvalidConfig {
                name: DELETE_WAIT_MAX_ATTEMPTS,
                reason: "must be at least 1".to_string(),
            });
        }

        let region = optional(&lookup, "AWS_REGION")
            .or_else(|| optional(&lookup, "AWS_DEFAULT_REGION"));

        Ok(ImporterConfig {
            request: ImportRequest {
                table_name,
                source_bucket,
            },
            log_level,
            wait_policy: WaitPolicy {
                delay,
                max_attempts,
            },
            client: ClientSettings {
                region,
                endpoint_url: optional(&lookup, ENDPOINT_URL),
            },
        })
    }
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or(ImporterError::MissingConfig(key))
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key)
        .map(|raw| {
            raw.parse::<T>().map_err(|e| ImporterError::InvalidConfig {
                name: key,
                reason: format!("'{}': {}", raw, e),
            })
        })
        .transpose()
}
