//! Claims handlers
//!
//! Thin boundary: parse and validate the request, call the claim service,
//! map domain errors onto HTTP responses.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use validator::Validate;

use core_kernel::{ClaimId, CustomerId};
use domain_claims::{ClaimFilter, NewAttachment, NewClaim};
use export_pdf::{render_claims_report, PdfReportBuilder, REPORT_TITLE};

use crate::dto::claims::{
    ClaimDetailResponse, ClaimResponse, ClaimStatusRequest, CreateClaimRequest, ListClaimsParams,
    PdfExportResponse,
};
use crate::error::ApiError;
use crate::AppState;

/// Creates a new claim
pub async fn create_claim(
    State(state): State<AppState>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let (claim, entry) = state
        .service
        .create_claim(NewClaim {
            title: request.title,
            description: request.description,
            customer_id: CustomerId::new(request.customer_id),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ClaimResponse::from_created(claim, &entry)),
    ))
}

/// Lists claims, optionally filtered by derived status and search text
pub async fn list_claims(
    State(state): State<AppState>,
    Query(params): Query<ListClaimsParams>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let summaries = state
        .service
        .list_filtered(ClaimFilter {
            status: params.status,
            search: params.search,
        })
        .await?;

    Ok(Json(summaries.into_iter().map(ClaimResponse::from).collect()))
}

/// Gets full claim detail: history plus attachment metadata
pub async fn get_claim_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClaimDetailResponse>, ApiError> {
    let detail = state.service.get_detail(ClaimId::new(id)).await?;
    Ok(Json(ClaimDetailResponse::from(detail)))
}

/// Appends a status entry to the claim's ledger
pub async fn update_claim_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ClaimStatusRequest>,
) -> Result<StatusCode, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    state
        .service
        .append_status(
            ClaimId::new(id),
            request.status,
            request.notes,
            request.asesor_email,
        )
        .await?;

    Ok(StatusCode::OK)
}

/// Records attachment metadata for an uploaded file.
///
/// The blob collaborator owns the bytes; this boundary only inspects the
/// payload for emptiness and declared metadata before handing off.
pub async fn upload_attachment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Result<StatusCode, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("archivo").to_string();
        let content_type = field.content_type().map(|ct| ct.to_string());
        let payload = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        state
            .service
            .add_attachment(
                ClaimId::new(id),
                NewAttachment {
                    file_name,
                    content_type,
                    size_bytes: payload.len() as i64,
                    is_empty: payload.is_empty(),
                },
            )
            .await?;

        return Ok(StatusCode::OK);
    }

    Err(ApiError::BadRequest("missing 'file' part".to_string()))
}

/// Exports all claims as a PDF report, returned base64-encoded
pub async fn export_claims_pdf(
    State(state): State<AppState>,
) -> Result<Json<PdfExportResponse>, ApiError> {
    let claims = state.service.claims_for_export().await?;

    let builder = PdfReportBuilder::new(REPORT_TITLE)?;
    let report = render_claims_report(builder, &claims, Utc::now())?;

    Ok(Json(PdfExportResponse {
        pdf_content: BASE64.encode(&report.bytes),
        filename: report.filename,
        total_claims: report.total_claims,
    }))
}
