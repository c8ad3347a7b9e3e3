use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::case_id::dto::{
    CaseIdParts, IssueCaseIdRequest, IssueCaseIdResponse, ParseCaseIdResponse, ShortUrlResponse,
    ValidateCaseIdResponse,
};
use contracts::domain::case_id::{parse, short_token, short_url, validate};

use crate::domain::case_id::service;
use crate::domain::case_sequence::allocator;
use crate::shared::config;

/// POST /api/case-id
pub async fn issue(
    Json(request): Json<IssueCaseIdRequest>,
) -> Result<Json<IssueCaseIdResponse>, StatusCode> {
    let allocator = allocator::installed().map_err(|e| {
        tracing::error!("Cannot issue case id: {}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    let host = &config::get().case_id.short_url_host;
    match service::issue(allocator.as_ref(), request, host).await {
        Ok(response) => Ok(Json(response)),
        Err(e) if e.is_client_error() => {
            tracing::warn!("Rejected case id request: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
        Err(e) => {
            tracing::error!("Failed to issue case id: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/case-id/:id
pub async fn get_parts(Path(id): Path<String>) -> Result<Json<ParseCaseIdResponse>, StatusCode> {
    match parse(&id) {
        Some(parsed) => Ok(Json(ParseCaseIdResponse {
            valid: parsed.has_valid_checksum(),
            parts: CaseIdParts::from(&parsed),
        })),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// GET /api/case-id/:id/validate
pub async fn validate_id(Path(id): Path<String>) -> Json<ValidateCaseIdResponse> {
    let valid = validate(&id);
    Json(ValidateCaseIdResponse { id, valid })
}

/// GET /api/case-id/:id/short-url
pub async fn get_short_url(Path(id): Path<String>) -> Result<Json<ShortUrlResponse>, StatusCode> {
    if parse(&id).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    let host = &config::get().case_id.short_url_host;
    Ok(Json(ShortUrlResponse {
        short_token: short_token(&id),
        short_url: short_url(host, &id),
    }))
}
