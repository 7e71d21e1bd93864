//! Claim status enumeration and its persistence mapping

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use core_kernel::CoreError;

/// Claim status
///
/// The lifecycle is a closed enumeration; the order of a claim's statuses
/// is given by its ledger timestamps, never by variant position. The wire
/// representation is the symbolic name (`EN_PROCESO`), the display and
/// persistence representation is the Spanish text (`"En Proceso"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// Newly filed claim
    Ingresado,
    /// Being worked by a handler
    EnProceso,
    /// Resolved
    Resuelto,
    /// Closed
    Cerrado,
    /// Rejected
    Rechazado,
    /// Escalated to a supervisor
    Escalado,
    /// Waiting on information from the customer
    PendienteInformacion,
}

impl ClaimStatus {
    /// The status every claim starts in, and the defensive fallback when a
    /// ledger is unexpectedly empty.
    pub const INITIAL: ClaimStatus = ClaimStatus::Ingresado;

    /// All statuses, used to build the stored-value lookup table
    pub const ALL: [ClaimStatus; 7] = [
        ClaimStatus::Ingresado,
        ClaimStatus::EnProceso,
        ClaimStatus::Resuelto,
        ClaimStatus::Cerrado,
        ClaimStatus::Rechazado,
        ClaimStatus::Escalado,
        ClaimStatus::PendienteInformacion,
    ];

    /// Human-readable display text; this is also the persisted form
    pub fn display_name(&self) -> &'static str {
        match self {
            ClaimStatus::Ingresado => "Ingresado",
            ClaimStatus::EnProceso => "En Proceso",
            ClaimStatus::Resuelto => "Resuelto",
            ClaimStatus::Cerrado => "Cerrado",
            ClaimStatus::Rechazado => "Rechazado",
            ClaimStatus::Escalado => "Escalado",
            ClaimStatus::PendienteInformacion => "Pendiente Información",
        }
    }

    /// Symbolic name as used on the wire
    pub fn symbolic_name(&self) -> &'static str {
        match self {
            ClaimStatus::Ingresado => "INGRESADO",
            ClaimStatus::EnProceso => "EN_PROCESO",
            ClaimStatus::Resuelto => "RESUELTO",
            ClaimStatus::Cerrado => "CERRADO",
            ClaimStatus::Rechazado => "RECHAZADO",
            ClaimStatus::Escalado => "ESCALADO",
            ClaimStatus::PendienteInformacion => "PENDIENTE_INFORMACION",
        }
    }

    /// Decodes a stored status value.
    ///
    /// Accepts the display text first and the symbolic name as a fallback.
    /// An unmapped value is a data-integrity failure, never a silent
    /// default.
    pub fn from_stored(raw: &str) -> Result<Self, CoreError> {
        STORED_LOOKUP
            .get(raw)
            .copied()
            .ok_or_else(|| CoreError::data_integrity(format!("unknown claim status '{raw}'")))
    }
}

/// Bidirectional lookup table, built once. Maps both the display text and
/// the symbolic name of every status back to the variant.
static STORED_LOOKUP: Lazy<HashMap<&'static str, ClaimStatus>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(ClaimStatus::ALL.len() * 2);
    for status in ClaimStatus::ALL {
        map.insert(status.display_name(), status);
        map.insert(status.symbolic_name(), status);
    }
    map
});

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ClaimStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::from_stored(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_roundtrip() {
        for status in ClaimStatus::ALL {
            assert_eq!(ClaimStatus::from_stored(status.display_name()).unwrap(), status);
        }
    }

    #[test]
    fn test_symbolic_name_fallback() {
        assert_eq!(
            ClaimStatus::from_stored("PENDIENTE_INFORMACION").unwrap(),
            ClaimStatus::PendienteInformacion
        );
    }

    #[test]
    fn test_unknown_value_fails_fast() {
        let err = ClaimStatus::from_stored("Archivado").unwrap_err();
        assert!(err.to_string().contains("Archivado"));
    }

    #[test]
    fn test_wire_representation_is_symbolic() {
        let json = serde_json::to_string(&ClaimStatus::EnProceso).unwrap();
        assert_eq!(json, "\"EN_PROCESO\"");

        let back: ClaimStatus = serde_json::from_str("\"PENDIENTE_INFORMACION\"").unwrap();
        assert_eq!(back, ClaimStatus::PendienteInformacion);
    }
}
