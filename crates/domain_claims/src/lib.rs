//! Claims Domain
//!
//! This crate implements the claim lifecycle: an append-only status ledger
//! per claim, the derivation of the current status from that ledger, the
//! attachment metadata registry, and the query/filter engine over claims.
//!
//! # Lifecycle
//!
//! ```text
//! create (Ingresado) -> append status entries -> derived current status
//! ```
//!
//! The ledger is never edited in place; corrections are new entries. The
//! current status is always computed on read from the loaded entry set, so
//! it can never go stale after a concurrent append.

pub mod attachment;
pub mod claim;
pub mod error;
pub mod ledger;
pub mod service;
pub mod status;
pub mod store;
pub mod view;

pub use attachment::{Attachment, NewAttachment};
pub use claim::{Claim, NewClaim, INITIAL_STATUS_NOTE};
pub use error::ClaimError;
pub use ledger::{current_status, NewStatusEntry, StatusEntry};
pub use service::ClaimService;
pub use status::ClaimStatus;
pub use store::{ClaimStore, NewAttachmentRecord, NewClaimRecord, StoreError};
pub use view::{ClaimDetail, ClaimFilter, ClaimSummary, ClaimWithLedger};
