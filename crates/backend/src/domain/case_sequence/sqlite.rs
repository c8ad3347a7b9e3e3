use async_trait::async_trait;
use contracts::domain::case_id::SequenceBucket;
use contracts::enums::{CaseType, District};
use sea_orm::DatabaseConnection;

use super::allocator::{AllocatorError, SequenceAllocator};
use super::repository;

/// Counters stored in the `case_sequence` table. Survive restarts, and every
/// allocation is one atomic upsert, so concurrent callers (including separate
/// connection pools or server processes sharing the file) are serialised by
/// SQLite.
#[derive(Debug, Clone)]
pub struct SqliteSequenceAllocator {
    conn: DatabaseConnection,
}

impl SqliteSequenceAllocator {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

fn to_sequence(bucket: &SequenceBucket, value: i64) -> Result<u64, AllocatorError> {
    u64::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(AllocatorError::Corrupt(*bucket, value))
}

fn bucket_of(model: &repository::Model) -> Option<SequenceBucket> {
    let case_type = CaseType::from_code(&model.case_type)?;
    let district = District::from_code(&model.district_code)?;
    Some(SequenceBucket::new(case_type, district, model.year))
}

#[async_trait]
impl SequenceAllocator for SqliteSequenceAllocator {
    async fn next_sequence(&self, bucket: &SequenceBucket) -> Result<u64, AllocatorError> {
        let value = repository::increment(&self.conn, bucket)
            .await?
            .ok_or(AllocatorError::NoValue(*bucket))?;
        to_sequence(bucket, value)
    }

    async fn current(&self, bucket: &SequenceBucket) -> Result<Option<u64>, AllocatorError> {
        match repository::get(&self.conn, bucket).await? {
            Some(model) => Ok(Some(to_sequence(bucket, model.last_value)?)),
            None => Ok(None),
        }
    }

    async fn snapshot(&self) -> Result<Vec<(SequenceBucket, u64)>, AllocatorError> {
        let mut items = Vec::new();
        for model in repository::list_all(&self.conn).await? {
            let Some(bucket) = bucket_of(&model) else {
                tracing::warn!(
                    "Skipping counter with unknown codes: {}/{}/{}",
                    model.case_type,
                    model.district_code,
                    model.year
                );
                continue;
            };
            items.push((bucket, to_sequence(&bucket, model.last_value)?));
        }
        Ok(items)
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}
