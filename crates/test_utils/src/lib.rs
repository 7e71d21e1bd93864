//! Test Utilities Crate
//!
//! Shared builders and fixtures for the claims test suite.
//!
//! # Modules
//!
//! - `fixtures`: fixed timestamps and sample values
//! - `builders`: builder patterns for claims with ledgers

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
