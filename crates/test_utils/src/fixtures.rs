//! Fixed test data

use chrono::{DateTime, TimeZone, Utc};

/// Temporal fixtures with deterministic values
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A fixed base instant all relative offsets hang off
    pub fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap()
    }

    /// `base_time` shifted forward by whole seconds
    pub fn at_offset(seconds: i64) -> DateTime<Utc> {
        Self::base_time() + chrono::Duration::seconds(seconds)
    }
}

/// String fixtures for claim fields
pub struct StringFixtures;

impl StringFixtures {
    pub fn claim_code() -> &'static str {
        "CLM-A1B2C3D4"
    }

    pub fn claim_title() -> &'static str {
        "Producto defectuoso"
    }

    pub fn claim_description() -> &'static str {
        "El producto llegó dañado"
    }
}
