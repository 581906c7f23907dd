//! campusmind-chat
//!
//! The conversational core of CampusMind: session lifecycle, message
//! persistence ordering, prompt assembly, and the safety-response policy.
//! The platform is reached only through the traits in [`stores`].

pub mod error;
pub mod prompt;
pub mod session;
pub mod stores;
