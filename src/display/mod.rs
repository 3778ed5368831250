//! Display module for per-cycle reports
//!
//! Renders queue counts and derived metrics as a text block or a JSON line.

pub mod format;
pub mod report;

pub use format::*;
pub use report::*;
