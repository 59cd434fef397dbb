#![allow(clippy::missing_errors_doc)]
use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info};

use crate::core::config::LoaderConfig;
use crate::core::models::{CustomResourceRequest, RequestType, ResponseStatus};
use crate::core::records::load_records;
use crate::errors::LoaderError;
use crate::loader::{self, BatchWriter, LoadSummary};
use crate::response::{CompletionReporter, failure_response, success_response};

/// Custom resource handler that seeds the configured table from the bundled data file.
pub struct DataLoader<W, R> {
    config: LoaderConfig,
    writer: W,
    reporter: R,
}

impl<W, R> DataLoader<W, R>
where
    W: BatchWriter,
    R: CompletionReporter,
{
    pub fn new(config: LoaderConfig, writer: W, reporter: R) -> Self {
        Self {
            config,
            writer,
            reporter,
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Dispatches one lifecycle event and reports its outcome exactly once.
    ///
    /// Load failures are reported as `FAILED` and are not returned; the only
    /// error returned is a failure to deliver the report itself.
    pub async fn handle(
        &self,
        request: &CustomResourceRequest,
        log_stream: &str,
    ) -> Result<ResponseStatus, LoaderError> {
        info!(
            request_type = ?request.request_type,
            stack_id = %request.stack_id,
            request_id = %request.request_id,
            logical_resource_id = %request.logical_resource_id,
            "Received custom resource request: {:?}",
            request.resource_properties
        );

        let response = match request.request_type {
            RequestType::Delete => {
                info!("Delete requested; seeded data is left in place");
                success_response(request, log_stream)
            }
            RequestType::Create | RequestType::Update => match self.load().await {
                Ok(summary) => {
                    info!(
                        batches = summary.batches,
                        unprocessed = summary.unprocessed,
                        "done loading {} rows.",
                        summary.records
                    );
                    success_response(request, log_stream)
                }
                Err(e) => {
                    error!("Failed to load data into table {}: {}", self.config.table_name, e);
                    failure_response(request, log_stream, &e)
                }
            },
        };

        self.reporter.report(&request.response_url, &response).await?;
        Ok(response.status)
    }

    /// Reads the data file and writes all of its records to the table.
    pub async fn load(&self) -> Result<LoadSummary, LoaderError> {
        let records = load_records(&self.config.data_file).await?;
        loader::write_records(
            &self.writer,
            &self.config.table_name,
            records,
            self.config.max_concurrent_batches,
        )
        .await
    }
}

/// Lambda entrypoint body. Uses the invocation's log stream as the fallback physical id.
pub async fn function_handler<W, R>(
    data_loader: &DataLoader<W, R>,
    event: LambdaEvent<CustomResourceRequest>,
) -> Result<(), Error>
where
    W: BatchWriter,
    R: CompletionReporter,
{
    let (request, context) = event.into_parts();
    let status = data_loader
        .handle(&request, &context.env_config.log_stream)
        .await
        .map_err(|e| {
            error!("Could not report to CloudFormation: {}", e);
            Error::from(e)
        })?;
    info!("Custom resource request completed with status {:?}", status);
    Ok(())
}

pub use self::function_handler as handler;
