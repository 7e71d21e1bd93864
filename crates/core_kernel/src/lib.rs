//! Core Kernel - Foundational types for the claims system
//!
//! This crate provides the building blocks shared across all modules:
//! - Strongly-typed numeric identifiers
//! - The common error vocabulary (validation, not-found, data integrity)

pub mod error;
pub mod identifiers;

pub use error::CoreError;
pub use identifiers::{AttachmentId, ClaimId, CustomerId, StatusEntryId};
