//! One controller per page of the client. Each module exposes the
//! load/submit operations the page needs, plus any pure helpers the
//! page logic relies on.

pub mod booking;
pub mod chat;
pub mod dashboard;
pub mod diary;
pub mod forum;
pub mod profile;
pub mod resources;
