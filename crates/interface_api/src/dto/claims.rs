//! Claims DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_claims::{
    Attachment, Claim, ClaimDetail, ClaimStatus, ClaimSummary, StatusEntry,
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    #[validate(length(min = 1, message = "title must not be blank"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be blank"))]
    pub description: String,
    pub customer_id: i64,
}

/// Body of `POST /api/claims/{id}/status`. Field names match the original
/// wire contract, including the snake_case `asesor_email`.
#[derive(Debug, Deserialize, Validate)]
pub struct ClaimStatusRequest {
    pub status: ClaimStatus,
    pub notes: Option<String>,
    #[validate(email(message = "asesor_email must be a valid email"))]
    pub asesor_email: Option<String>,
}

/// Query parameters of `GET /api/claims`
#[derive(Debug, Default, Deserialize)]
pub struct ListClaimsParams {
    pub status: Option<ClaimStatus>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub description: String,
    pub customer_id: i64,
    pub current_status: ClaimStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClaimResponse {
    /// Response for a freshly created claim, whose only entry is the
    /// initial one
    pub fn from_created(claim: Claim, entry: &StatusEntry) -> Self {
        Self {
            id: claim.id.value(),
            code: claim.code,
            title: claim.title,
            description: claim.description,
            customer_id: claim.customer_id.value(),
            current_status: entry.status,
            created_at: claim.created_at,
            updated_at: claim.updated_at,
        }
    }
}

impl From<ClaimSummary> for ClaimResponse {
    fn from(summary: ClaimSummary) -> Self {
        Self {
            id: summary.id.value(),
            code: summary.code,
            title: summary.title,
            description: summary.description,
            customer_id: summary.customer_id.value(),
            current_status: summary.current_status,
            created_at: summary.created_at,
            updated_at: summary.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusHistoryResponse {
    pub id: i64,
    pub status: ClaimStatus,
    pub notes: Option<String>,
    pub handler_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<StatusEntry> for StatusHistoryResponse {
    fn from(entry: StatusEntry) -> Self {
        Self {
            id: entry.id.value(),
            status: entry.status,
            notes: entry.note,
            handler_email: entry.handler_email,
            created_at: entry.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentResponse {
    pub id: i64,
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
}

impl From<Attachment> for AttachmentResponse {
    fn from(attachment: Attachment) -> Self {
        Self {
            id: attachment.id.value(),
            file_name: attachment.file_name,
            content_type: attachment.content_type,
            size_bytes: attachment.size_bytes,
            uploaded_at: attachment.uploaded_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDetailResponse {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub description: String,
    pub customer_id: i64,
    pub current_status: ClaimStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status_history: Vec<StatusHistoryResponse>,
    pub attachments: Vec<AttachmentResponse>,
}

impl From<ClaimDetail> for ClaimDetailResponse {
    fn from(detail: ClaimDetail) -> Self {
        Self {
            id: detail.id.value(),
            code: detail.code,
            title: detail.title,
            description: detail.description,
            customer_id: detail.customer_id.value(),
            current_status: detail.current_status,
            created_at: detail.created_at,
            updated_at: detail.updated_at,
            status_history: detail
                .history
                .into_iter()
                .map(StatusHistoryResponse::from)
                .collect(),
            attachments: detail
                .attachments
                .into_iter()
                .map(AttachmentResponse::from)
                .collect(),
        }
    }
}

/// Exported report, PDF bytes as base64
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfExportResponse {
    pub pdf_content: String,
    pub filename: String,
    pub total_claims: usize,
}
