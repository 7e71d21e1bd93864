//! PostgreSQL claim store
//!
//! Runtime-bound SQLx queries (no compile-time macro checking, so the
//! workspace builds without a live database). Statuses are persisted as
//! their display text and decoded through the domain lookup table; an
//! unmapped stored value surfaces as a data-integrity error rather than a
//! silent default.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use core_kernel::{AttachmentId, ClaimId, CustomerId, StatusEntryId};
use domain_claims::{
    Attachment, Claim, ClaimStatus, ClaimStore, ClaimWithLedger, NewAttachmentRecord,
    NewClaimRecord, NewStatusEntry, StatusEntry, StoreError,
};

use crate::error::DatabaseError;

const CLAIM_COLUMNS: &str = "id, code, title, description, customer_id, created_at, updated_at";
const ENTRY_COLUMNS: &str = "id, claim_id, status, note, handler_email, created_at";
const ATTACHMENT_COLUMNS: &str =
    "id, claim_id, file_name, content_type, size_bytes, location, uploaded_at";

/// Repository-style adapter over a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgClaimStore {
    pool: PgPool,
}

impl PgClaimStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_err(err: sqlx::Error) -> StoreError {
    StoreError::from(DatabaseError::from(&err))
}

#[derive(Debug, sqlx::FromRow)]
struct ClaimRow {
    id: i64,
    code: String,
    title: String,
    description: String,
    customer_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ClaimRow {
    fn into_claim(self) -> Claim {
        Claim {
            id: ClaimId::new(self.id),
            code: self.code,
            title: self.title,
            description: self.description,
            customer_id: CustomerId::new(self.customer_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct StatusEntryRow {
    id: i64,
    claim_id: i64,
    status: String,
    note: Option<String>,
    handler_email: Option<String>,
    created_at: DateTime<Utc>,
}

impl StatusEntryRow {
    fn into_entry(self) -> Result<StatusEntry, StoreError> {
        let status = ClaimStatus::from_stored(&self.status)
            .map_err(|e| StoreError::DataIntegrity(e.to_string()))?;
        Ok(StatusEntry {
            id: StatusEntryId::new(self.id),
            claim_id: ClaimId::new(self.claim_id),
            status,
            note: self.note,
            handler_email: self.handler_email,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AttachmentRow {
    id: i64,
    claim_id: i64,
    file_name: String,
    content_type: Option<String>,
    size_bytes: i64,
    location: String,
    uploaded_at: DateTime<Utc>,
}

impl AttachmentRow {
    fn into_attachment(self) -> Attachment {
        Attachment {
            id: AttachmentId::new(self.id),
            claim_id: ClaimId::new(self.claim_id),
            file_name: self.file_name,
            content_type: self.content_type,
            size_bytes: self.size_bytes,
            location: self.location,
            uploaded_at: self.uploaded_at,
        }
    }
}

#[async_trait]
impl ClaimStore for PgClaimStore {
    async fn create_claim_with_entry(
        &self,
        claim: NewClaimRecord,
        initial_status: ClaimStatus,
        initial_note: &str,
    ) -> Result<(Claim, StatusEntry), StoreError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;
        let now = Utc::now();

        let claim_row = sqlx::query_as::<_, ClaimRow>(
            "INSERT INTO claims (code, title, description, customer_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $5) \
             RETURNING id, code, title, description, customer_id, created_at, updated_at",
        )
        .bind(&claim.code)
        .bind(&claim.title)
        .bind(&claim.description)
        .bind(claim.customer_id.value())
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err)?;

        let entry_row = sqlx::query_as::<_, StatusEntryRow>(
            "INSERT INTO claim_status_entries (claim_id, status, note, handler_email, created_at) \
             VALUES ($1, $2, $3, NULL, $4) \
             RETURNING id, claim_id, status, note, handler_email, created_at",
        )
        .bind(claim_row.id)
        .bind(initial_status.display_name())
        .bind(initial_note)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err)?;

        tx.commit().await.map_err(db_err)?;
        Ok((claim_row.into_claim(), entry_row.into_entry()?))
    }

    async fn find_claim(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        let row = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims WHERE id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(row.map(ClaimRow::into_claim))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Claim>, StoreError> {
        let row = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(row.map(ClaimRow::into_claim))
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM claims WHERE code = $1)",
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(exists)
    }

    async fn append_entry(&self, entry: NewStatusEntry) -> Result<StatusEntry, StoreError> {
        self.require_claim(entry.claim_id).await?;

        let row = sqlx::query_as::<_, StatusEntryRow>(
            "INSERT INTO claim_status_entries (claim_id, status, note, handler_email, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, claim_id, status, note, handler_email, created_at",
        )
        .bind(entry.claim_id.value())
        .bind(entry.status.display_name())
        .bind(&entry.note)
        .bind(&entry.handler_email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        row.into_entry()
    }

    async fn add_attachment(
        &self,
        claim_id: ClaimId,
        attachment: NewAttachmentRecord,
    ) -> Result<Attachment, StoreError> {
        self.require_claim(claim_id).await?;

        let row = sqlx::query_as::<_, AttachmentRow>(
            "INSERT INTO claim_attachments \
             (claim_id, file_name, content_type, size_bytes, location, uploaded_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, claim_id, file_name, content_type, size_bytes, location, uploaded_at",
        )
        .bind(claim_id.value())
        .bind(&attachment.file_name)
        .bind(&attachment.content_type)
        .bind(attachment.size_bytes)
        .bind(&attachment.location)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(row.into_attachment())
    }

    async fn entries_for(&self, claim_id: ClaimId) -> Result<Vec<StatusEntry>, StoreError> {
        self.require_claim(claim_id).await?;

        let rows = sqlx::query_as::<_, StatusEntryRow>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM claim_status_entries \
             WHERE claim_id = $1 ORDER BY created_at, id"
        ))
        .bind(claim_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter().map(StatusEntryRow::into_entry).collect()
    }

    async fn attachments_for(&self, claim_id: ClaimId) -> Result<Vec<Attachment>, StoreError> {
        self.require_claim(claim_id).await?;

        let rows = sqlx::query_as::<_, AttachmentRow>(&format!(
            "SELECT {ATTACHMENT_COLUMNS} FROM claim_attachments \
             WHERE claim_id = $1 ORDER BY id"
        ))
        .bind(claim_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(rows.into_iter().map(AttachmentRow::into_attachment).collect())
    }

    async fn find_all_with_entries(&self) -> Result<Vec<ClaimWithLedger>, StoreError> {
        let claim_rows = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        let entry_rows = sqlx::query_as::<_, StatusEntryRow>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM claim_status_entries ORDER BY claim_id, created_at, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        let mut ledgers: HashMap<i64, Vec<StatusEntry>> = HashMap::new();
        for row in entry_rows {
            let claim_id = row.claim_id;
            ledgers
                .entry(claim_id)
                .or_default()
                .push(row.into_entry()?);
        }

        Ok(claim_rows
            .into_iter()
            .map(|row| {
                let entries = ledgers.remove(&row.id).unwrap_or_default();
                ClaimWithLedger {
                    claim: row.into_claim(),
                    entries,
                }
            })
            .collect())
    }
}

impl PgClaimStore {
    /// Not-found check shared by the child-record operations
    async fn require_claim(&self, claim_id: ClaimId) -> Result<(), StoreError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM claims WHERE id = $1)",
        )
        .bind(claim_id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        if exists {
            Ok(())
        } else {
            Err(StoreError::NotFound(format!("claim {claim_id}")))
        }
    }
}
