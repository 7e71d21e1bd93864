//! Append-only status ledger and current-status derivation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, StatusEntryId};

use crate::status::ClaimStatus;

/// One immutable record in a claim's status ledger.
///
/// Entries are never updated or deleted; a correction is a new entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Unique identifier, ascending in insertion order
    pub id: StatusEntryId,
    /// Owning claim
    pub claim_id: ClaimId,
    /// Status value recorded by this entry
    pub status: ClaimStatus,
    /// Free-text note
    pub note: Option<String>,
    /// Identity of the person who made the change
    pub handler_email: Option<String>,
    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Data for appending a new ledger entry
#[derive(Debug, Clone)]
pub struct NewStatusEntry {
    pub claim_id: ClaimId,
    pub status: ClaimStatus,
    pub note: Option<String>,
    pub handler_email: Option<String>,
}

/// Derives the current status from a loaded entry set.
///
/// The winner is the entry with the maximum `(created_at, id)` pair. Entry
/// ids ascend in insertion order, so equal wall-clock timestamps (coarse
/// clock resolution) resolve to the latest append instead of flaking.
/// Returns [`ClaimStatus::INITIAL`] for an empty ledger, which the creation
/// invariant should make unreachable.
pub fn current_status(entries: &[StatusEntry]) -> ClaimStatus {
    entries
        .iter()
        .max_by_key(|entry| (entry.created_at, entry.id))
        .map(|entry| entry.status)
        .unwrap_or(ClaimStatus::INITIAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(id: i64, status: ClaimStatus, at_secs: i64) -> StatusEntry {
        StatusEntry {
            id: StatusEntryId::new(id),
            claim_id: ClaimId::new(1),
            status,
            note: None,
            handler_email: None,
            created_at: Utc.timestamp_opt(at_secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_ledger_falls_back_to_initial() {
        assert_eq!(current_status(&[]), ClaimStatus::Ingresado);
    }

    #[test]
    fn test_latest_timestamp_wins() {
        let entries = vec![
            entry(1, ClaimStatus::Ingresado, 100),
            entry(2, ClaimStatus::EnProceso, 200),
            entry(3, ClaimStatus::Resuelto, 300),
        ];
        assert_eq!(current_status(&entries), ClaimStatus::Resuelto);
    }

    #[test]
    fn test_order_in_slice_is_irrelevant() {
        let entries = vec![
            entry(3, ClaimStatus::Resuelto, 300),
            entry(1, ClaimStatus::Ingresado, 100),
            entry(2, ClaimStatus::EnProceso, 200),
        ];
        assert_eq!(current_status(&entries), ClaimStatus::Resuelto);
    }

    #[test]
    fn test_equal_timestamps_resolve_by_entry_id() {
        let entries = vec![
            entry(7, ClaimStatus::Escalado, 500),
            entry(8, ClaimStatus::Cerrado, 500),
        ];
        assert_eq!(current_status(&entries), ClaimStatus::Cerrado);
    }
}
