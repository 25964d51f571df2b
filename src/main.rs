use dyndb_importer::client::build_client;
use dyndb_importer::handler::function_handler;
use dyndb_importer::logging::init_tracing;
use dyndb_importer::{ImportOrchestrator, ImporterConfig};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = ImporterConfig::from_env()?;
    init_tracing(&config.log_level);

    let client = build_client(&config.client).await;
    let orchestrator = ImportOrchestrator::new(client, config.wait_policy);

    let orchestrator = &orchestrator;
    let request = &config.request;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(orchestrator, request, event).await
    }))
    .await
}
