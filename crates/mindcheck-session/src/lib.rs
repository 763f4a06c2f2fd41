//! mindcheck-session
//!
//! The checkup state machine (PHQ-9 → GAD-7 → WHO-5) and the pipeline that
//! turns a completed set of answers into an immutable [`Report`].
//!
//! [`Report`]: mindcheck_core::models::report::Report

pub mod error;
pub mod evaluate;
pub mod session;
pub mod state;

pub use evaluate::evaluate;
pub use session::CheckupSession;
