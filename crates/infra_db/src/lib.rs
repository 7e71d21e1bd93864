//! Infrastructure Database Layer
//!
//! Adapters for the `ClaimStore` port defined in `domain_claims`:
//!
//! - [`PgClaimStore`]: PostgreSQL via SQLx, the production store. Statuses
//!   are persisted as their display text and decoded through the domain's
//!   fail-fast lookup table.
//! - [`InMemoryClaimStore`]: a Mutex-guarded arena with the same ordering
//!   and atomicity semantics, used by tests and local runs.
//!
//! Both adapters assign identifiers and server timestamps, keep the ledger
//! append-only, and make claim-plus-initial-entry creation all-or-nothing.

pub mod error;
pub mod memory;
pub mod pool;
pub mod postgres;

pub use error::DatabaseError;
pub use memory::InMemoryClaimStore;
pub use pool::{create_pool, run_migrations};
pub use postgres::PgClaimStore;
