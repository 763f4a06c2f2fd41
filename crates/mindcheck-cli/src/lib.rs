//! mindcheck-cli library root.
//!
//! Exposes the config, answers-file, output and interactive modules so
//! integration tests can drive them without going through `main`.

pub mod answers;
pub mod config;
pub mod interactive;
pub mod output;
