use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to read data file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse data file: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to convert record to item: {0}")]
    ConversionError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Failed to send completion response: {0}")]
    ResponseError(String),
}

impl From<serde_dynamo::Error> for LoaderError {
    fn from(error: serde_dynamo::Error) -> Self {
        LoaderError::ConversionError(error.to_string())
    }
}

impl From<reqwest::Error> for LoaderError {
    fn from(error: reqwest::Error) -> Self {
        LoaderError::ResponseError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E> From<SdkError<E>> for LoaderError
where
    E: std::error::Error + 'static,
{
    fn from(error: SdkError<E>) -> Self {
        LoaderError::AwsError(DisplayErrorContext(&error).to_string())
    }
}
