use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::types::{PutRequest, WriteRequest};

use crate::core::records::Item;
use crate::errors::LoaderError;

/// What the store did with one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    pub submitted: usize,
    /// Items returned as `UnprocessedItems`, typically after throttling.
    pub unprocessed: usize,
}

#[async_trait]
pub trait BatchWriter: Send + Sync {
    /// Puts one group of items (at most 25) into `table`.
    async fn write_batch(&self, table: &str, items: Vec<Item>) -> Result<BatchOutcome, LoaderError>;
}

pub struct DynamoBatchWriter {
    client: DynamoClient,
}

impl DynamoBatchWriter {
    #[must_use]
    pub fn new(client: DynamoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BatchWriter for DynamoBatchWriter {
    async fn write_batch(&self, table: &str, items: Vec<Item>) -> Result<BatchOutcome, LoaderError> {
        let submitted = items.len();
        let requests = items
            .into_iter()
            .map(|item| {
                PutRequest::builder()
                    .set_item(Some(item))
                    .build()
                    .map(|put| WriteRequest::builder().put_request(put).build())
            })
            .collect::<Result<Vec<WriteRequest>, _>>()
            .map_err(|e| LoaderError::AwsError(format!("Failed to build put request: {e}")))?;

        let output = self
            .client
            .batch_write_item()
            .request_items(table, requests)
            .send()
            .await?;

        let unprocessed = output
            .unprocessed_items()
            .and_then(|pending| pending.get(table))
            .map_or(0, Vec::len);

        Ok(BatchOutcome {
            submitted,
            unprocessed,
        })
    }
}
