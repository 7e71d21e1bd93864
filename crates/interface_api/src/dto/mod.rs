//! Data transfer objects

pub mod claims;
