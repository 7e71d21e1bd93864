//! In-memory claim store
//!
//! Arena-style storage behind one Mutex: claims, entries, and attachments
//! live in separate maps keyed by id, children referencing their claim by
//! id. A single lock acquisition per operation gives the same all-or-
//! nothing and read-snapshot semantics the PostgreSQL adapter gets from
//! transactions.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use core_kernel::{AttachmentId, ClaimId, StatusEntryId};
use domain_claims::{
    Attachment, Claim, ClaimStatus, ClaimStore, ClaimWithLedger, NewAttachmentRecord,
    NewClaimRecord, NewStatusEntry, StatusEntry, StoreError,
};

#[derive(Default)]
struct MemoryState {
    claims: BTreeMap<i64, Claim>,
    entries: BTreeMap<i64, StatusEntry>,
    attachments: BTreeMap<i64, Attachment>,
    next_claim_id: i64,
    next_entry_id: i64,
    next_attachment_id: i64,
}

impl MemoryState {
    fn next_claim_id(&mut self) -> i64 {
        self.next_claim_id += 1;
        self.next_claim_id
    }

    fn next_entry_id(&mut self) -> i64 {
        self.next_entry_id += 1;
        self.next_entry_id
    }

    fn next_attachment_id(&mut self) -> i64 {
        self.next_attachment_id += 1;
        self.next_attachment_id
    }

    fn insert_entry(&mut self, entry: NewStatusEntry) -> StatusEntry {
        let stored = StatusEntry {
            id: StatusEntryId::new(self.next_entry_id()),
            claim_id: entry.claim_id,
            status: entry.status,
            note: entry.note,
            handler_email: entry.handler_email,
            created_at: Utc::now(),
        };
        self.entries.insert(stored.id.value(), stored.clone());
        stored
    }

    fn entries_of(&self, claim_id: ClaimId) -> Vec<StatusEntry> {
        let mut entries: Vec<StatusEntry> = self
            .entries
            .values()
            .filter(|entry| entry.claim_id == claim_id)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| (entry.created_at, entry.id));
        entries
    }
}

/// In-memory implementation of the claim store port
#[derive(Default)]
pub struct InMemoryClaimStore {
    state: Mutex<MemoryState>,
}

impl InMemoryClaimStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Backend("claim store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ClaimStore for InMemoryClaimStore {
    async fn create_claim_with_entry(
        &self,
        claim: NewClaimRecord,
        initial_status: ClaimStatus,
        initial_note: &str,
    ) -> Result<(Claim, StatusEntry), StoreError> {
        let mut state = self.lock()?;

        if state.claims.values().any(|c| c.code == claim.code) {
            return Err(StoreError::Duplicate(format!(
                "claim code '{}' already exists",
                claim.code
            )));
        }

        let now = Utc::now();
        let stored = Claim {
            id: ClaimId::new(state.next_claim_id()),
            code: claim.code,
            title: claim.title,
            description: claim.description,
            customer_id: claim.customer_id,
            created_at: now,
            updated_at: now,
        };
        state.claims.insert(stored.id.value(), stored.clone());

        // Same lock acquisition as the claim insert, so the pair is atomic
        let entry = state.insert_entry(NewStatusEntry {
            claim_id: stored.id,
            status: initial_status,
            note: Some(initial_note.to_string()),
            handler_email: None,
        });

        Ok((stored, entry))
    }

    async fn find_claim(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        Ok(self.lock()?.claims.get(&id.value()).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Claim>, StoreError> {
        Ok(self
            .lock()?
            .claims
            .values()
            .find(|claim| claim.code == code)
            .cloned())
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, StoreError> {
        Ok(self.lock()?.claims.values().any(|claim| claim.code == code))
    }

    async fn append_entry(&self, entry: NewStatusEntry) -> Result<StatusEntry, StoreError> {
        let mut state = self.lock()?;
        if !state.claims.contains_key(&entry.claim_id.value()) {
            return Err(StoreError::NotFound(format!("claim {}", entry.claim_id)));
        }
        Ok(state.insert_entry(entry))
    }

    async fn add_attachment(
        &self,
        claim_id: ClaimId,
        attachment: NewAttachmentRecord,
    ) -> Result<Attachment, StoreError> {
        let mut state = self.lock()?;
        if !state.claims.contains_key(&claim_id.value()) {
            return Err(StoreError::NotFound(format!("claim {claim_id}")));
        }

        let stored = Attachment {
            id: AttachmentId::new(state.next_attachment_id()),
            claim_id,
            file_name: attachment.file_name,
            content_type: attachment.content_type,
            size_bytes: attachment.size_bytes,
            location: attachment.location,
            uploaded_at: Utc::now(),
        };
        state.attachments.insert(stored.id.value(), stored.clone());
        Ok(stored)
    }

    async fn entries_for(&self, claim_id: ClaimId) -> Result<Vec<StatusEntry>, StoreError> {
        let state = self.lock()?;
        if !state.claims.contains_key(&claim_id.value()) {
            return Err(StoreError::NotFound(format!("claim {claim_id}")));
        }
        Ok(state.entries_of(claim_id))
    }

    async fn attachments_for(&self, claim_id: ClaimId) -> Result<Vec<Attachment>, StoreError> {
        let state = self.lock()?;
        if !state.claims.contains_key(&claim_id.value()) {
            return Err(StoreError::NotFound(format!("claim {claim_id}")));
        }
        // BTreeMap iteration gives upload (id) order
        Ok(state
            .attachments
            .values()
            .filter(|attachment| attachment.claim_id == claim_id)
            .cloned()
            .collect())
    }

    async fn find_all_with_entries(&self) -> Result<Vec<ClaimWithLedger>, StoreError> {
        let state = self.lock()?;

        let mut claims: Vec<&Claim> = state.claims.values().collect();
        claims.sort_by_key(|claim| (std::cmp::Reverse(claim.created_at), std::cmp::Reverse(claim.id)));

        Ok(claims
            .into_iter()
            .map(|claim| ClaimWithLedger {
                claim: claim.clone(),
                entries: state.entries_of(claim.id),
            })
            .collect())
    }
}
