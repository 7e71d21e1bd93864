//! Storage port for the claims domain
//!
//! The domain never talks to a database directly; it consumes this trait.
//! Adapters (PostgreSQL, in-memory) live in `infra_db` and implement it.

use async_trait::async_trait;
use thiserror::Error;

use core_kernel::{ClaimId, CustomerId};

use crate::attachment::Attachment;
use crate::claim::Claim;
use crate::ledger::{NewStatusEntry, StatusEntry};
use crate::status::ClaimStatus;
use crate::view::ClaimWithLedger;

/// Errors raised by storage adapters
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("duplicate value: {0}")]
    Duplicate(String),

    #[error("stored data is inconsistent: {0}")]
    DataIntegrity(String),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Data for persisting a new claim
#[derive(Debug, Clone)]
pub struct NewClaimRecord {
    pub code: String,
    pub title: String,
    pub description: String,
    pub customer_id: CustomerId,
}

/// Data for persisting attachment metadata
#[derive(Debug, Clone)]
pub struct NewAttachmentRecord {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: i64,
    pub location: String,
}

/// Ordered-record store for claims, their ledgers, and their attachments.
///
/// Every method is a single unit of work; reads are read-only. Implementors
/// assign identifiers and server timestamps.
#[async_trait]
pub trait ClaimStore: Send + Sync {
    /// Persists a claim together with its initial ledger entry,
    /// all-or-nothing. A claim must never exist without at least one entry.
    async fn create_claim_with_entry(
        &self,
        claim: NewClaimRecord,
        initial_status: ClaimStatus,
        initial_note: &str,
    ) -> Result<(Claim, StatusEntry), StoreError>;

    async fn find_claim(&self, id: ClaimId) -> Result<Option<Claim>, StoreError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Claim>, StoreError>;

    async fn exists_by_code(&self, code: &str) -> Result<bool, StoreError>;

    /// Appends a ledger entry. Fails with [`StoreError::NotFound`] when the
    /// claim does not exist. Never mutates existing entries.
    async fn append_entry(&self, entry: NewStatusEntry) -> Result<StatusEntry, StoreError>;

    /// Records attachment metadata. Fails with [`StoreError::NotFound`]
    /// when the claim does not exist.
    async fn add_attachment(
        &self,
        claim_id: ClaimId,
        attachment: NewAttachmentRecord,
    ) -> Result<Attachment, StoreError>;

    /// All ledger entries for a claim in `(created_at, id)` ascending order
    async fn entries_for(&self, claim_id: ClaimId) -> Result<Vec<StatusEntry>, StoreError>;

    /// All attachment metadata for a claim in upload order
    async fn attachments_for(&self, claim_id: ClaimId) -> Result<Vec<Attachment>, StoreError>;

    /// All claims with their ledgers eagerly loaded, ordered by creation
    /// time descending (id descending as the secondary key), so the caller
    /// can derive current statuses without further round trips.
    async fn find_all_with_entries(&self) -> Result<Vec<ClaimWithLedger>, StoreError>;
}
