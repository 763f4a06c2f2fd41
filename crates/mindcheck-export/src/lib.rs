//! mindcheck-export
//!
//! Text and DOCX rendering of checkup reports.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
