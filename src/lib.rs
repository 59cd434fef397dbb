//! Data Loader - a CloudFormation custom resource that seeds a DynamoDB table.
//!
//! On stack `Create` and `Update` the function reads the bundled
//! `MOCK_DATA.json`, writes its records to the configured table with
//! `BatchWriteItem` in groups of 25, and reports `SUCCESS` or `FAILED` to the
//! request's pre-signed `ResponseURL`. On `Delete` it reports `SUCCESS` and
//! leaves the table untouched.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (`lambda_runtime`) for serverless execution
//! - `aws-sdk-dynamodb` for batch writes, `serde_dynamo` for item conversion
//! - `reqwest` to deliver the completion response
//! - Tokio and `futures` for bounded concurrent batch submission
//!
//! # Example
//!
//! ```no_run
//! use data_loader::core::config::LoaderConfig;
//! use data_loader::handler::DataLoader;
//! use data_loader::loader::DynamoBatchWriter;
//! use data_loader::response::HttpResponder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     data_loader::setup_logging();
//!
//!     let config = LoaderConfig::from_env()?;
//!     let shared = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//!     let data_loader = DataLoader::new(
//!         config,
//!         DynamoBatchWriter::new(aws_sdk_dynamodb::Client::new(&shared)),
//!         HttpResponder::new(reqwest::Client::new()),
//!     );
//!
//!     let summary = data_loader.load().await?;
//!     println!("Loaded {} records in {} batches", summary.records, summary.batches);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod core;
pub mod errors;
pub mod handler;
pub mod loader;
pub mod response;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. The level filter comes from `RUST_LOG` and defaults to `info`.
///
/// # Example
///
/// ```
/// data_loader::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
