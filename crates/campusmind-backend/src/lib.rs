//! campusmind-backend
//!
//! Typed client for the hosted platform's REST API: current-user
//! operations, generic entity CRUD, and the LLM-invocation integration.
//! All application state lives on the platform; this crate is the only
//! place the client speaks HTTP.

pub mod client;
pub mod entities;
pub mod error;
pub mod integrations;
pub mod users;
