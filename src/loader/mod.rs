//! Batched, concurrent loading of records into the target table

pub mod batch;
pub mod writer;

use futures::{StreamExt, stream};
use tracing::{debug, error, info, warn};

use crate::core::records::{Record, to_item};
use crate::errors::LoaderError;

pub use batch::{BATCH_WRITE_SIZE, partition};
pub use writer::{BatchOutcome, BatchWriter, DynamoBatchWriter};

/// Totals for one completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub records: usize,
    pub batches: usize,
    pub unprocessed: usize,
}

/// Converts `records`, groups them and writes every group to `table` with at
/// most `max_concurrent` requests in flight. Every group is submitted even
/// when an earlier one fails; once all have settled, any failure fails the
/// whole load.
///
/// Items the store hands back as unprocessed are counted and logged but do
/// not fail the load.
///
/// # Errors
///
/// Returns the conversion error of the first bad record (before anything is
/// written), or the error of the first batch write to fail.
pub async fn write_records<W>(
    writer: &W,
    table: &str,
    records: Vec<Record>,
    max_concurrent: usize,
) -> Result<LoadSummary, LoaderError>
where
    W: BatchWriter + ?Sized,
{
    let items = records.iter().map(to_item).collect::<Result<Vec<_>, _>>()?;
    let groups = partition(items);
    let mut summary = LoadSummary {
        records: records.len(),
        batches: groups.len(),
        unprocessed: 0,
    };

    if groups.is_empty() {
        info!("Data file contained no records; nothing to write");
        return Ok(summary);
    }

    info!(
        table,
        records = summary.records,
        batches = summary.batches,
        "Writing records in batches of {}",
        BATCH_WRITE_SIZE
    );

    let results: Vec<Result<(usize, BatchOutcome), LoaderError>> =
        stream::iter(groups.into_iter().enumerate())
            .map(|(index, group)| async move {
                debug!(batch = index, size = group.len(), "Submitting batch");
                writer
                    .write_batch(table, group)
                    .await
                    .map(|outcome| (index, outcome))
                    .inspect_err(|e| error!(batch = index, "Batch write failed: {}", e))
            })
            .buffer_unordered(max_concurrent.max(1))
            .collect()
            .await;

    // Every group has been submitted and settled by now; only then fail.
    let mut first_error = None;
    for result in results {
        match result {
            Ok((index, outcome)) => {
                if outcome.unprocessed > 0 {
                    warn!(
                        batch = index,
                        unprocessed = outcome.unprocessed,
                        submitted = outcome.submitted,
                        "Store returned unprocessed items; they were not written"
                    );
                }
                summary.unprocessed += outcome.unprocessed;
            }
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(summary),
    }
}
