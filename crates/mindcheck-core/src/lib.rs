//! mindcheck-core
//!
//! Pure domain types for the wellness checkup: instruments, answer sets,
//! severity bands, recommendations and the final report.
//! No I/O — this is the shared vocabulary of the mindcheck system.

pub mod error;
pub mod models;
