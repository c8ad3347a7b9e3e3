use chrono::{Datelike, Utc};
use contracts::domain::case_id::dto::{CaseIdParts, IssueCaseIdRequest, IssueCaseIdResponse};
use contracts::domain::case_id::identifier::MAX_YEAR;
use contracts::domain::case_id::{short_url, CaseIdError, CaseIdentifier, SequenceBucket};
use contracts::enums::{CaseType, District};
use thiserror::Error;

use crate::domain::case_sequence::{AllocatorError, SequenceAllocator};

#[derive(Debug, Error)]
pub enum IssueError {
    #[error("unknown case type: {0}")]
    UnknownCaseType(String),

    #[error("year {0} does not fit in 4 digits")]
    YearOutOfRange(i32),

    #[error(transparent)]
    Allocator(#[from] AllocatorError),

    #[error(transparent)]
    Identifier(#[from] CaseIdError),
}

impl IssueError {
    /// Caused by the request rather than by the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            IssueError::UnknownCaseType(_) | IssueError::YearOutOfRange(_)
        )
    }
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Mint a new identifier: resolve year and district, allocate the next
/// sequence of the bucket and append the checksum.
pub async fn format(
    allocator: &dyn SequenceAllocator,
    case_type: CaseType,
    district_name: &str,
    year: Option<i32>,
) -> Result<CaseIdentifier, IssueError> {
    let year = year.unwrap_or_else(current_year);
    // checked before allocating so a bad request does not burn a sequence
    if !(0..=MAX_YEAR).contains(&year) {
        return Err(IssueError::YearOutOfRange(year));
    }

    let district = District::from_name(district_name);
    if district.is_unknown() {
        tracing::warn!("Unknown district {:?}, using {}", district_name, district.code());
    }

    let bucket = SequenceBucket::new(case_type, district, year);
    let sequence = allocator.next_sequence(&bucket).await?;
    let id = CaseIdentifier::from_bucket(&bucket, sequence)?;

    tracing::info!("Issued case id {} (bucket {})", id, bucket);
    Ok(id)
}

/// Handle an issue request coming from a portal form
pub async fn issue(
    allocator: &dyn SequenceAllocator,
    request: IssueCaseIdRequest,
    short_url_host: &str,
) -> Result<IssueCaseIdResponse, IssueError> {
    let case_type = CaseType::from_code(request.case_type.trim())
        .ok_or_else(|| IssueError::UnknownCaseType(request.case_type.clone()))?;

    let id = format(allocator, case_type, &request.district, request.year).await?;
    let canonical = id.to_string();

    Ok(IssueCaseIdResponse {
        short_token: id.short_token(),
        short_url: short_url(short_url_host, &canonical),
        parts: CaseIdParts::from(&id),
        id: canonical,
    })
}
