//! Backward and forward synchronization searches.
//!
//! Both operations follow the same lifecycle: open a fresh scanner through a
//! [`crate::scanner::ScannerProvider`], run one query, copy out whatever the
//! caller needs, and drop the scanner before returning. No scanner, node, or
//! name survives a call.

pub mod backward;
pub mod forward;

pub use backward::{edit, edit_command};
pub use forward::{LocateResult, locate};
