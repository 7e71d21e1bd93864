//! Claim service: registry, ledger appends, attachments, and queries
//!
//! Each public method is one unit of work against the store. Listing and
//! detail reads compose registry and ledger state; the derived current
//! status is always computed here, never persisted.

use std::sync::Arc;

use core_kernel::ClaimId;

use crate::attachment::{storage_location, Attachment, NewAttachment};
use crate::claim::{generate_claim_code, Claim, NewClaim, INITIAL_STATUS_NOTE};
use crate::error::ClaimError;
use crate::ledger::{NewStatusEntry, StatusEntry};
use crate::status::ClaimStatus;
use crate::store::{ClaimStore, NewAttachmentRecord, NewClaimRecord};
use crate::view::{ClaimDetail, ClaimFilter, ClaimSummary, ClaimWithLedger};

/// Attempts at allocating an unused claim code before giving up
const MAX_CODE_ATTEMPTS: usize = 5;

/// Application service over the claim store
#[derive(Clone)]
pub struct ClaimService {
    store: Arc<dyn ClaimStore>,
}

impl ClaimService {
    pub fn new(store: Arc<dyn ClaimStore>) -> Self {
        Self { store }
    }

    /// Creates a claim together with its initial `Ingresado` ledger entry.
    ///
    /// The claim and the entry are persisted in one atomic store operation;
    /// a claim can never be observed without at least one entry.
    pub async fn create_claim(
        &self,
        new_claim: NewClaim,
    ) -> Result<(Claim, StatusEntry), ClaimError> {
        new_claim.validate()?;

        let code = self.unique_code().await?;
        let record = NewClaimRecord {
            code,
            title: new_claim.title,
            description: new_claim.description,
            customer_id: new_claim.customer_id,
        };

        let (claim, entry) = self
            .store
            .create_claim_with_entry(record, ClaimStatus::INITIAL, INITIAL_STATUS_NOTE)
            .await?;

        tracing::info!(claim_id = %claim.id, code = %claim.code, "claim created");
        Ok((claim, entry))
    }

    /// Allocates a code not yet present in the store. The unique constraint
    /// remains the backstop against a concurrent allocation of the same
    /// code.
    async fn unique_code(&self) -> Result<String, ClaimError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_claim_code();
            if !self.store.exists_by_code(&code).await? {
                return Ok(code);
            }
            tracing::warn!(%code, "claim code collision, regenerating");
        }
        Err(ClaimError::Storage(
            "could not allocate a unique claim code".to_string(),
        ))
    }

    pub async fn get_claim(&self, id: ClaimId) -> Result<Claim, ClaimError> {
        self.store
            .find_claim(id)
            .await?
            .ok_or_else(|| ClaimError::ClaimNotFound(format!("claim {id}")))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Claim>, ClaimError> {
        Ok(self.store.find_by_code(code).await?)
    }

    /// Appends a status entry to a claim's ledger.
    pub async fn append_status(
        &self,
        claim_id: ClaimId,
        status: ClaimStatus,
        note: Option<String>,
        handler_email: Option<String>,
    ) -> Result<StatusEntry, ClaimError> {
        self.get_claim(claim_id).await?;

        let entry = self
            .store
            .append_entry(NewStatusEntry {
                claim_id,
                status,
                note,
                handler_email,
            })
            .await?;

        tracing::info!(claim_id = %claim_id, status = %status, "status entry appended");
        Ok(entry)
    }

    /// Records attachment metadata for a claim. The bytes were persisted by
    /// the blob collaborator before this call; only emptiness and declared
    /// metadata arrive here.
    pub async fn add_attachment(
        &self,
        claim_id: ClaimId,
        attachment: NewAttachment,
    ) -> Result<Attachment, ClaimError> {
        self.get_claim(claim_id).await?;

        if attachment.is_empty || attachment.size_bytes == 0 {
            return Err(ClaimError::EmptyFile);
        }

        let record = NewAttachmentRecord {
            location: storage_location(claim_id, &attachment.file_name),
            file_name: attachment.file_name,
            content_type: attachment.content_type,
            size_bytes: attachment.size_bytes,
        };

        let stored = self.store.add_attachment(claim_id, record).await?;
        tracing::info!(claim_id = %claim_id, file = %stored.file_name, "attachment recorded");
        Ok(stored)
    }

    /// One summary per claim, creation time descending
    pub async fn list_summaries(&self) -> Result<Vec<ClaimSummary>, ClaimError> {
        self.list_filtered(ClaimFilter::default()).await
    }

    /// Summaries restricted by derived status and/or search text. An empty
    /// filter behaves as [`list_summaries`](Self::list_summaries).
    pub async fn list_filtered(
        &self,
        filter: ClaimFilter,
    ) -> Result<Vec<ClaimSummary>, ClaimError> {
        let views = self.store.find_all_with_entries().await?;
        Ok(views
            .iter()
            .filter(|view| filter.matches(view))
            .map(ClaimSummary::from_ledger)
            .collect())
    }

    /// Full detail: chronological history plus attachment metadata
    pub async fn get_detail(&self, id: ClaimId) -> Result<ClaimDetail, ClaimError> {
        let claim = self.get_claim(id).await?;

        let mut history = self.store.entries_for(id).await?;
        history.sort_by_key(|entry| (entry.created_at, entry.id));

        let attachments = self.store.attachments_for(id).await?;
        Ok(ClaimDetail::new(claim, history, attachments))
    }

    /// Snapshot of all claims with their ledgers, in listing order, for the
    /// export renderer.
    pub async fn claims_for_export(&self) -> Result<Vec<ClaimWithLedger>, ClaimError> {
        Ok(self.store.find_all_with_entries().await?)
    }
}
