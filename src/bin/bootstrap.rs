// Lambda bootstrap entry point for the seed data custom resource

use aws_config::{BehaviorVersion, Region};
use data_loader::core::config::LoaderConfig;
use data_loader::core::models::CustomResourceRequest;
use data_loader::handler::{DataLoader, function_handler};
use data_loader::loader::DynamoBatchWriter;
use data_loader::response::HttpResponder;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    data_loader::setup_logging();

    let config = LoaderConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(
        table = %config.table_name,
        max_concurrent_batches = config.max_concurrent_batches,
        "Starting data loader"
    );

    let mut aws = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = config.region.clone() {
        aws = aws.region(Region::new(region));
    }
    let shared_config = aws.load().await;

    let writer = DynamoBatchWriter::new(aws_sdk_dynamodb::Client::new(&shared_config));
    let reporter = HttpResponder::new(reqwest::Client::new());
    let data_loader = DataLoader::new(config, writer, reporter);
    let data_loader = &data_loader;

    run(service_fn(move |event: LambdaEvent<CustomResourceRequest>| async move {
        function_handler(data_loader, event).await
    }))
    .await
}
