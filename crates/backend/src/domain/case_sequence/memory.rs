use async_trait::async_trait;
use contracts::domain::case_id::SequenceBucket;
use std::collections::HashMap;
use std::sync::Mutex;

use super::allocator::{AllocatorError, SequenceAllocator};

/// Process-local counters. Lost on restart and not shared between server
/// instances; meant for tests and single-node development.
#[derive(Debug, Default)]
pub struct InMemorySequenceAllocator {
    counters: Mutex<HashMap<SequenceBucket, u64>>,
}

impl InMemorySequenceAllocator {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SequenceAllocator for InMemorySequenceAllocator {
    async fn next_sequence(&self, bucket: &SequenceBucket) -> Result<u64, AllocatorError> {
        let mut counters = self.counters.lock().map_err(|_| AllocatorError::Poisoned)?;
        let counter = counters.entry(*bucket).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }

    async fn current(&self, bucket: &SequenceBucket) -> Result<Option<u64>, AllocatorError> {
        let counters = self.counters.lock().map_err(|_| AllocatorError::Poisoned)?;
        Ok(counters.get(bucket).copied())
    }

    async fn snapshot(&self) -> Result<Vec<(SequenceBucket, u64)>, AllocatorError> {
        let counters = self.counters.lock().map_err(|_| AllocatorError::Poisoned)?;
        let mut items: Vec<(SequenceBucket, u64)> =
            counters.iter().map(|(bucket, value)| (*bucket, *value)).collect();
        items.sort_by(|(a, _), (b, _)| {
            (a.case_type.code(), a.district.code(), a.year)
                .cmp(&(b.case_type.code(), b.district.code(), b.year))
        });
        Ok(items)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{CaseType, District};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn bucket(year: i32) -> SequenceBucket {
        SequenceBucket::new(CaseType::Grievance, District::SpsrNellore, year)
    }

    #[tokio::test]
    async fn test_first_call_returns_one_then_increments() {
        let allocator = InMemorySequenceAllocator::new();
        assert_eq!(allocator.current(&bucket(2025)).await.unwrap(), None);
        for expected in 1..=5 {
            assert_eq!(allocator.next_sequence(&bucket(2025)).await.unwrap(), expected);
        }
        assert_eq!(allocator.current(&bucket(2025)).await.unwrap(), Some(5));
    }

    #[tokio::test]
    async fn test_buckets_are_isolated() {
        let allocator = InMemorySequenceAllocator::new();
        for _ in 0..5 {
            allocator.next_sequence(&bucket(2025)).await.unwrap();
        }
        assert_eq!(allocator.next_sequence(&bucket(2026)).await.unwrap(), 1);

        let other_type = SequenceBucket::new(CaseType::Dispute, District::SpsrNellore, 2025);
        assert_eq!(allocator.next_sequence(&other_type).await.unwrap(), 1);

        let other_district = SequenceBucket::new(CaseType::Grievance, District::Guntur, 2025);
        assert_eq!(allocator.next_sequence(&other_district).await.unwrap(), 1);

        assert_eq!(allocator.next_sequence(&bucket(2025)).await.unwrap(), 6);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_never_share_a_value() {
        let allocator = Arc::new(InMemorySequenceAllocator::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let allocator = Arc::clone(&allocator);
            handles.push(tokio::spawn(async move {
                let mut seen = Vec::new();
                for _ in 0..50 {
                    seen.push(allocator.next_sequence(&bucket(2025)).await.unwrap());
                }
                seen
            }));
        }

        let mut all = HashSet::new();
        for handle in handles {
            let seen = handle.await.unwrap();
            // each task observes strictly increasing values
            assert!(seen.windows(2).all(|w| w[0] < w[1]));
            all.extend(seen);
        }
        assert_eq!(all.len(), 400);
        assert_eq!(all.iter().max(), Some(&400));
        assert_eq!(all.iter().min(), Some(&1));
    }

    #[tokio::test]
    async fn test_snapshot_is_sorted() {
        let allocator = InMemorySequenceAllocator::new();
        allocator.next_sequence(&bucket(2026)).await.unwrap();
        allocator.next_sequence(&bucket(2025)).await.unwrap();
        allocator.next_sequence(&bucket(2025)).await.unwrap();
        let snapshot = allocator.snapshot().await.unwrap();
        assert_eq!(snapshot, vec![(bucket(2025), 2), (bucket(2026), 1)]);
    }
}
