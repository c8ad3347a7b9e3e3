use async_trait::async_trait;
use contracts::domain::case_id::SequenceBucket;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use thiserror::Error;

static ALLOCATOR: OnceCell<Arc<dyn SequenceAllocator>> = OnceCell::new();

#[derive(Debug, Error)]
pub enum AllocatorError {
    #[error("sequence store error: {0}")]
    Store(#[from] sea_orm::DbErr),

    #[error("sequence store returned no value for {0}")]
    NoValue(SequenceBucket),

    #[error("counter for {0} is corrupt: {1}")]
    Corrupt(SequenceBucket, i64),

    #[error("sequence counters are unavailable (lock poisoned)")]
    Poisoned,
}

/// Hands out sequence numbers per bucket.
///
/// The first call for a bucket returns 1, every further call returns one more
/// than the previous call for that exact bucket. Values are never reused, also
/// under concurrent callers.
#[async_trait]
pub trait SequenceAllocator: Send + Sync {
    /// Reserve and return the next sequence for the bucket
    async fn next_sequence(&self, bucket: &SequenceBucket) -> Result<u64, AllocatorError>;

    /// Last value handed out for the bucket, `None` if it was never used
    async fn current(&self, bucket: &SequenceBucket) -> Result<Option<u64>, AllocatorError>;

    /// All counters, ordered by bucket
    async fn snapshot(&self) -> Result<Vec<(SequenceBucket, u64)>, AllocatorError>;

    /// Name for logs
    fn name(&self) -> &'static str;
}

/// Register the allocator used by the HTTP handlers
pub fn install(allocator: Arc<dyn SequenceAllocator>) -> anyhow::Result<()> {
    tracing::info!("Sequence allocator: {}", allocator.name());
    ALLOCATOR
        .set(allocator)
        .map_err(|_| anyhow::anyhow!("sequence allocator already installed"))
}

pub fn installed() -> anyhow::Result<Arc<dyn SequenceAllocator>> {
    ALLOCATOR
        .get()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("sequence allocator has not been installed"))
}
