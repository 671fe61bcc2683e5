//! Trait seam over the external synchronization-index engine.
//!
//! The index file format and its parser are an external capability, not part
//! of this crate. A viewer plugs its binding in by implementing
//! [`ScannerProvider`] (open + parse, one scanner per document) and
//! [`SyncScanner`] (the two query primitives plus a result cursor).
//!
//! Scanners are scoped resources: [`crate::search::edit`] and
//! [`crate::search::locate`] open one, drain what they need, and drop it
//! before returning. Dropping the scanner releases the index and everything
//! derived from it, which is why [`SyncNode`] is a plain copied-out value
//! rather than a borrow into index memory.

use crate::error::SyncError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One synchronization record, copied out of the index.
///
/// The box describes the visible footprint of the emitted content: `(h, v)`
/// is the origin on the baseline, `height` extends above it and `depth`
/// below, all in page coordinates with y growing downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncNode {
    /// Resolved source file name as recorded by the index. May differ from
    /// the string the query was keyed on when that was an alias.
    pub input: String,
    /// Source line (1-based).
    pub line: u32,
    /// Source column. The index reports 0 or -1 when it has no column
    /// information.
    pub column: i32,
    /// Target page as stored in the index (1-based).
    pub page: u32,
    /// Horizontal origin of the visible box.
    pub h: f32,
    /// Vertical origin of the visible box (on the baseline).
    pub v: f32,
    /// Visible box width.
    pub width: f32,
    /// Visible box height above the baseline.
    pub height: f32,
    /// Visible box depth below the baseline.
    pub depth: f32,
}

/// Query interface over one opened, fully parsed synchronization index.
///
/// Both query methods populate an internal result cursor and return the match
/// count; zero is a valid outcome, not an error. [`next_result`] then drains
/// the matches in index-internal traversal order - no geometric ordering is
/// guaranteed.
///
/// [`next_result`]: SyncScanner::next_result
pub trait SyncScanner {
    /// Backward query: entries whose box covers `(x, y)` on `page` (1-based).
    fn point_query(&mut self, page: u32, x: f32, y: f32) -> usize;

    /// Forward query: entries produced by `(input, line, column)`.
    fn location_query(&mut self, input: &str, line: u32, column: u32) -> usize;

    /// Advance the result cursor of the most recent query.
    fn next_result(&mut self) -> Option<SyncNode>;
}

/// Opens the synchronization index that belongs to a rendered document.
///
/// `open` must hand back a fully parsed scanner or fail; there is no
/// half-open state for callers to clean up. Implementations must not cache or
/// share scanners across calls - every call to `open` yields an independent
/// handle.
pub trait ScannerProvider {
    /// Scanner type produced by this provider.
    type Scanner: SyncScanner;

    /// Locate, open, and parse the index for `output`.
    ///
    /// Fails with [`SyncError::Open`] when no index file can be found or read
    /// and [`SyncError::Parse`] when the file is malformed.
    fn open(&self, output: &Path) -> Result<Self::Scanner, SyncError>;
}
