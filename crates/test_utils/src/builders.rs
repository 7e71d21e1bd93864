//! Test Data Builders
//!
//! Builder patterns for constructing claims with ledgers using sensible
//! defaults, so tests only spell out the fields they care about.

use chrono::{DateTime, Utc};
use core_kernel::{ClaimId, CustomerId, StatusEntryId};
use domain_claims::{Claim, ClaimStatus, ClaimWithLedger, StatusEntry};

use crate::fixtures::{StringFixtures, TemporalFixtures};

/// Builder for a claim joined with its status ledger
pub struct ClaimLedgerBuilder {
    id: i64,
    code: String,
    title: String,
    description: String,
    customer_id: i64,
    created_at: DateTime<Utc>,
    entries: Vec<StatusEntry>,
    next_entry_id: i64,
}

impl Default for ClaimLedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimLedgerBuilder {
    /// Creates a builder with default values and an empty ledger
    pub fn new() -> Self {
        Self {
            id: 1,
            code: StringFixtures::claim_code().to_string(),
            title: StringFixtures::claim_title().to_string(),
            description: StringFixtures::claim_description().to_string(),
            customer_id: 42,
            created_at: TemporalFixtures::base_time(),
            entries: Vec::new(),
            next_entry_id: 1,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_customer_id(mut self, customer_id: i64) -> Self {
        self.customer_id = customer_id;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Appends a ledger entry with an auto-assigned id, timestamped at the
    /// given offset (seconds) from the fixture base time
    pub fn with_entry(mut self, status: ClaimStatus, offset_seconds: i64) -> Self {
        let id = self.next_entry_id;
        self.next_entry_id += 1;
        self.entries.push(StatusEntry {
            id: StatusEntryId::new(id),
            claim_id: ClaimId::new(self.id),
            status,
            note: None,
            handler_email: None,
            created_at: TemporalFixtures::at_offset(offset_seconds),
        });
        self
    }

    /// Appends a ledger entry with an explicit id, for tie-break tests
    pub fn with_entry_at(
        mut self,
        entry_id: i64,
        status: ClaimStatus,
        offset_seconds: i64,
    ) -> Self {
        self.next_entry_id = self.next_entry_id.max(entry_id + 1);
        self.entries.push(StatusEntry {
            id: StatusEntryId::new(entry_id),
            claim_id: ClaimId::new(self.id),
            status,
            note: None,
            handler_email: None,
            created_at: TemporalFixtures::at_offset(offset_seconds),
        });
        self
    }

    pub fn build(self) -> ClaimWithLedger {
        ClaimWithLedger {
            claim: Claim {
                id: ClaimId::new(self.id),
                code: self.code,
                title: self.title,
                description: self.description,
                customer_id: CustomerId::new(self.customer_id),
                created_at: self.created_at,
                updated_at: self.created_at,
            },
            entries: self.entries,
        }
    }
}
