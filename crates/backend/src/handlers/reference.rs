use axum::{http::StatusCode, Json};
use contracts::domain::case_id::dto::{CodeNameDto, SequenceCounterDto};
use contracts::enums::{CaseType, District};

use crate::domain::case_sequence::allocator;

/// GET /api/case-types
pub async fn list_case_types() -> Json<Vec<CodeNameDto>> {
    Json(
        CaseType::all()
            .into_iter()
            .map(|t| CodeNameDto {
                code: t.code().to_string(),
                name: t.display_name().to_string(),
            })
            .collect(),
    )
}

/// GET /api/districts
pub async fn list_districts() -> Json<Vec<CodeNameDto>> {
    Json(
        District::all()
            .into_iter()
            .map(|d| CodeNameDto {
                code: d.code().to_string(),
                name: d.display_name().to_string(),
            })
            .collect(),
    )
}

/// GET /api/case-sequences
pub async fn list_sequences() -> Result<Json<Vec<SequenceCounterDto>>, StatusCode> {
    let allocator = allocator::installed().map_err(|_| StatusCode::SERVICE_UNAVAILABLE)?;
    match allocator.snapshot().await {
        Ok(items) => Ok(Json(
            items
                .into_iter()
                .map(|(bucket, last_value)| SequenceCounterDto {
                    case_type: bucket.case_type.code().to_string(),
                    district_code: bucket.district.code().to_string(),
                    year: bucket.year,
                    last_value,
                })
                .collect(),
        )),
        Err(e) => {
            tracing::error!("Failed to read sequence counters: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
