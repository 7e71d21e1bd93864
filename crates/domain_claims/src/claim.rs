//! Claim aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{ClaimId, CoreError, CustomerId};

/// System note recorded on the initial ledger entry of every claim
pub const INITIAL_STATUS_NOTE: &str = "Reclamo creado exitosamente";

/// A customer-reported claim.
///
/// The claim owns its ledger entries and attachments by id; child records
/// refer back through `claim_id` and are reached through the query engine,
/// never through live object references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Store-assigned identifier, immutable
    pub id: ClaimId,
    /// Unique human-readable code, `CLM-XXXXXXXX`
    pub code: String,
    pub title: String,
    pub description: String,
    /// Owning customer
    pub customer_id: CustomerId,
    /// Server-assigned, set once at creation
    pub created_at: DateTime<Utc>,
    /// Updated on direct field mutation only; ledger and attachment
    /// additions leave it untouched.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a claim
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub title: String,
    pub description: String,
    pub customer_id: CustomerId,
}

impl NewClaim {
    /// Checks the required fields are non-blank
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("title must not be blank"));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::validation("description must not be blank"));
        }
        Ok(())
    }
}

/// Generates a claim code from the first 8 hex characters of a random UUID,
/// upper-cased. Uniqueness is enforced by the store's constraint; the v4
/// entropy makes a collision on 8 characters implausible in practice.
pub fn generate_claim_code() -> String {
    let entropy = Uuid::new_v4().simple().to_string();
    format!("CLM-{}", entropy[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_format() {
        let code = generate_claim_code();
        assert_eq!(code.len(), 12);
        assert!(code.starts_with("CLM-"));
        assert!(code[4..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_codes_are_not_repeated() {
        let first = generate_claim_code();
        let second = generate_claim_code();
        assert_ne!(first, second);
    }

    #[test]
    fn test_blank_title_rejected() {
        let claim = NewClaim {
            title: "   ".to_string(),
            description: "something broke".to_string(),
            customer_id: CustomerId::new(1),
        };
        assert!(claim.validate().is_err());
    }

    #[test]
    fn test_blank_description_rejected() {
        let claim = NewClaim {
            title: "Leaky faucet".to_string(),
            description: "".to_string(),
            customer_id: CustomerId::new(1),
        };
        assert!(claim.validate().is_err());
    }

    #[test]
    fn test_valid_input_accepted() {
        let claim = NewClaim {
            title: "Leaky faucet".to_string(),
            description: "Kitchen sink".to_string(),
            customer_id: CustomerId::new(42),
        };
        assert!(claim.validate().is_ok());
    }
}
