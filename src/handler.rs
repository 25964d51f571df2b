//! Lambda entry point.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::model::{ImportRequest, ImportResult};
use crate::orchestrator::ImportOrchestrator;

/// Handle one invocation. The event payload is only logged.
pub async fn function_handler(
    orchestrator: &ImportOrchestrator,
    request: &ImportRequest,
    event: LambdaEvent<Value>,
) -> Result<ImportResult, Error> {
    info!(request_id = %event.context.request_id, "REQUEST RECEIVED: {}", event.payload);

    let result = orchestrator.handle(request).await?;
    Ok(result)
}
