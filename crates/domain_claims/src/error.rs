//! Claims domain errors

use thiserror::Error;

use core_kernel::CoreError;

use crate::store::StoreError;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Uploaded file is empty")]
    EmptyFile,

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl From<CoreError> for ClaimError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => ClaimError::Validation(msg),
            CoreError::NotFound(msg) => ClaimError::ClaimNotFound(msg),
            CoreError::DataIntegrity(msg) => ClaimError::DataIntegrity(msg),
        }
    }
}

impl From<StoreError> for ClaimError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => ClaimError::ClaimNotFound(msg),
            StoreError::DataIntegrity(msg) => ClaimError::DataIntegrity(msg),
            StoreError::Duplicate(msg) | StoreError::Backend(msg) => ClaimError::Storage(msg),
        }
    }
}
