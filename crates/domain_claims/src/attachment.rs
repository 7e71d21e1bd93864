//! Attachment metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AttachmentId, ClaimId};

/// Metadata describing a file associated with a claim.
///
/// The bytes themselves live with an external blob collaborator; the core
/// only records what was uploaded and where it can be found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub claim_id: ClaimId,
    /// Original filename as uploaded
    pub file_name: String,
    /// Declared content type
    pub content_type: Option<String>,
    /// Declared size of the payload
    pub size_bytes: i64,
    /// Location reference, derived from claim id and filename
    pub location: String,
    /// Server-assigned upload timestamp
    pub uploaded_at: DateTime<Utc>,
}

/// Input for recording an attachment
#[derive(Debug, Clone)]
pub struct NewAttachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: i64,
    /// Whether the uploaded payload was empty, reported by the boundary
    pub is_empty: bool,
}

/// Deterministic location reference for an uploaded file
pub fn storage_location(claim_id: ClaimId, file_name: &str) -> String {
    format!("/uploads/{}/{}", claim_id, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_deterministic() {
        let location = storage_location(ClaimId::new(12), "factura.pdf");
        assert_eq!(location, "/uploads/12/factura.pdf");
        assert_eq!(location, storage_location(ClaimId::new(12), "factura.pdf"));
    }
}
