/// Per-request item ceiling of `BatchWriteItem`.
pub const BATCH_WRITE_SIZE: usize = 25;

/// Splits records into consecutive groups of at most [`BATCH_WRITE_SIZE`],
/// keeping their original order. An empty input yields no groups.
#[must_use]
pub fn partition<T>(records: Vec<T>) -> Vec<Vec<T>> {
    let mut groups = Vec::with_capacity(records.len().div_ceil(BATCH_WRITE_SIZE));
    let mut remaining = records.into_iter().peekable();
    while remaining.peek().is_some() {
        groups.push(remaining.by_ref().take(BATCH_WRITE_SIZE).collect());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_group_sizes() {
        for len in [1usize, 24, 25, 26, 50, 51, 99, 250] {
            let groups = partition((0..len).collect());
            assert_eq!(groups.len(), len.div_ceil(BATCH_WRITE_SIZE), "len={len}");

            let (last, full) = groups.split_last().unwrap();
            assert!(full.iter().all(|g| g.len() == BATCH_WRITE_SIZE));
            let expected_last = match len % BATCH_WRITE_SIZE {
                0 => BATCH_WRITE_SIZE,
                rem => rem,
            };
            assert_eq!(last.len(), expected_last, "len={len}");
        }
    }

    #[test]
    fn test_partition_empty() {
        assert!(partition(Vec::<u8>::new()).is_empty());
    }

    #[test]
    fn test_partition_keeps_every_record_once_in_order() {
        let records: Vec<usize> = (0..113).collect();
        let flattened: Vec<usize> = partition(records.clone()).into_iter().flatten().collect();
        assert_eq!(flattened, records);
    }
}
