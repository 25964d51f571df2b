//! DynamoDB client module.
//!
//! Builds the SDK client once per process. The client is handed to
//! [`ImportOrchestrator`](crate::orchestrator::ImportOrchestrator) rather than
//! kept in a global.

use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::Region;
use tracing::debug;

/// Client options read from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSettings {
    /// AWS region. Falls back to the default provider chain, then us-east-1.
    pub region: Option<String>,
    /// Custom endpoint URL for local testing (DynamoDB Local, localstack).
    pub endpoint_url: Option<String>,
}

/// Build the AWS SDK DynamoDB client with the given configuration.
///
/// Credentials always come from the default chain (the execution role on Lambda).
pub async fn build_client(settings: &ClientSettings) -> Client {
    // Region priority: param > env var > default
    let region_provider = RegionProviderChain::first_try(settings.region.clone().map(Region::new))
        .or_default_provider()
        .or_else("us-east-1");

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let mut dynamo_config = aws_sdk_dynamodb::config::Builder::from(&sdk_config);

    if let Some(url) = &settings.endpoint_url {
        debug!(endpoint_url = %url, "using custom DynamoDB endpoint");
        dynamo_config = dynamo_config.endpoint_url(url);
    }

    Client::from_conf(dynamo_config.build())
}
