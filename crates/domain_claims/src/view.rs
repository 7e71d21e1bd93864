//! Read models produced by the query engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, CustomerId};

use crate::attachment::Attachment;
use crate::claim::Claim;
use crate::ledger::{current_status, StatusEntry};
use crate::status::ClaimStatus;

/// A claim joined with its full status ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimWithLedger {
    pub claim: Claim,
    pub entries: Vec<StatusEntry>,
}

impl ClaimWithLedger {
    /// Derived current status, computed on read
    pub fn current_status(&self) -> ClaimStatus {
        current_status(&self.entries)
    }
}

/// One listing row per claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimSummary {
    pub id: ClaimId,
    pub code: String,
    pub title: String,
    pub description: String,
    pub customer_id: CustomerId,
    pub current_status: ClaimStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClaimSummary {
    pub fn from_ledger(view: &ClaimWithLedger) -> Self {
        Self {
            id: view.claim.id,
            code: view.claim.code.clone(),
            title: view.claim.title.clone(),
            description: view.claim.description.clone(),
            customer_id: view.claim.customer_id,
            current_status: view.current_status(),
            created_at: view.claim.created_at,
            updated_at: view.claim.updated_at,
        }
    }
}

/// Full claim detail: history in chronological order plus all attachments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimDetail {
    pub id: ClaimId,
    pub code: String,
    pub title: String,
    pub description: String,
    pub customer_id: CustomerId,
    pub current_status: ClaimStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub history: Vec<StatusEntry>,
    pub attachments: Vec<Attachment>,
}

impl ClaimDetail {
    /// Assembles a detail view. `history` must already be in chronological
    /// order; the derived status is computed from it here.
    pub fn new(claim: Claim, history: Vec<StatusEntry>, attachments: Vec<Attachment>) -> Self {
        let current = current_status(&history);
        Self {
            id: claim.id,
            code: claim.code,
            title: claim.title,
            description: claim.description,
            customer_id: claim.customer_id,
            current_status: current,
            created_at: claim.created_at,
            updated_at: claim.updated_at,
            history,
            attachments,
        }
    }
}

/// Listing filter: derived-status equality and case-insensitive text search
/// over title, description, and code. Both compose with AND.
#[derive(Debug, Clone, Default)]
pub struct ClaimFilter {
    pub status: Option<ClaimStatus>,
    pub search: Option<String>,
}

impl ClaimFilter {
    pub fn matches(&self, view: &ClaimWithLedger) -> bool {
        if let Some(status) = self.status {
            if view.current_status() != status {
                return false;
            }
        }

        if let Some(text) = self.search.as_deref() {
            // Blank search text is equivalent to no filter
            let needle = text.trim().to_lowercase();
            if !needle.is_empty() {
                let claim = &view.claim;
                let hit = claim.title.to_lowercase().contains(&needle)
                    || claim.description.to_lowercase().contains(&needle)
                    || claim.code.to_lowercase().contains(&needle);
                if !hit {
                    return false;
                }
            }
        }

        true
    }
}
