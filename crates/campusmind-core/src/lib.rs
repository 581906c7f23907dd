//! campusmind-core
//!
//! Pure domain types and platform collection names.
//! No HTTP dependency — this is the shared vocabulary of the CampusMind client.

pub mod collections;
pub mod models;
