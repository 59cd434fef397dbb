//! Completion signal sent back to CloudFormation.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::core::models::{CustomResourceRequest, CustomResourceResponse, ResponseStatus};
use crate::errors::LoaderError;

fn physical_resource_id(request: &CustomResourceRequest, log_stream: &str) -> String {
    request
        .physical_resource_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| log_stream.to_string())
}

fn base_response(
    request: &CustomResourceRequest,
    log_stream: &str,
    status: ResponseStatus,
    reason: String,
    data: Map<String, Value>,
) -> CustomResourceResponse {
    CustomResourceResponse {
        status,
        reason,
        physical_resource_id: physical_resource_id(request, log_stream),
        stack_id: request.stack_id.clone(),
        request_id: request.request_id.clone(),
        logical_resource_id: request.logical_resource_id.clone(),
        no_echo: false,
        data,
    }
}

/// `SUCCESS` with an empty `Data` payload.
#[must_use]
pub fn success_response(request: &CustomResourceRequest, log_stream: &str) -> CustomResourceResponse {
    base_response(
        request,
        log_stream,
        ResponseStatus::Success,
        format!("See the details in CloudWatch Log Stream: {log_stream}"),
        Map::new(),
    )
}

/// `FAILED` carrying the error message as both `Reason` and `Data.Error`.
#[must_use]
pub fn failure_response(
    request: &CustomResourceRequest,
    log_stream: &str,
    error: &LoaderError,
) -> CustomResourceResponse {
    let message = error.to_string();
    let mut data = Map::new();
    data.insert("Error".to_string(), Value::String(message.clone()));
    base_response(request, log_stream, ResponseStatus::Failed, message, data)
}

#[async_trait]
pub trait CompletionReporter: Send + Sync {
    async fn report(
        &self,
        response_url: &str,
        response: &CustomResourceResponse,
    ) -> Result<(), LoaderError>;
}

/// PUTs the response document to the pre-signed `ResponseURL`.
pub struct HttpResponder {
    http_client: HttpClient,
}

impl HttpResponder {
    #[must_use]
    pub fn new(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl CompletionReporter for HttpResponder {
    async fn report(
        &self,
        response_url: &str,
        response: &CustomResourceResponse,
    ) -> Result<(), LoaderError> {
        let body = serde_json::to_string(response)
            .map_err(|e| LoaderError::ResponseError(format!("Failed to serialize response: {e}")))?;
        info!("Sending completion response: {}", body);

        // The pre-signed S3 URL is signed without a content type.
        let resp = self
            .http_client
            .put(response_url)
            .header(CONTENT_TYPE, "")
            .body(body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!(
                "ResponseURL PUT failed: status={} body={}",
                status, body_text
            );
            return Err(LoaderError::ResponseError(format!(
                "ResponseURL returned status {status}"
            )));
        }

        info!("Completion response delivered: status={}", resp.status());
        Ok(())
    }
}
