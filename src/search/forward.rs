//! Forward search: source location to rendered rectangles.
//!
//! Given a source file/line/column, collect the visible boxes of everything
//! it produced, across all pages. The first hit fixes the primary page; every
//! hit is then classified against that fixed page, so a location spanning a
//! page break yields same-page rectangles plus page-tagged overflow.

use crate::error::SyncError;
use crate::geometry::{PageRectangle, Rectangle};
use crate::scanner::{ScannerProvider, SyncScanner};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hits for one source location, split around the primary page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocateResult {
    /// 0-based page of the first hit; `None` when the query matched nothing.
    pub page: Option<u32>,
    /// Hits on the primary page, in index result order.
    pub rects: Vec<Rectangle>,
    /// Hits on other pages. `None` when the caller opted out of collecting
    /// them; `Some` with an empty vec when collected but absent.
    pub other_rects: Option<Vec<PageRectangle>>,
}

impl LocateResult {
    /// Whether the query matched nothing at all.
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
    }
}

/// Forward search: rectangles produced by `(input, line, column)`.
///
/// `keep_other_pages` controls whether hits off the primary page are
/// accumulated into [`LocateResult::other_rects`] or discarded as they are
/// drained.
///
/// Zero matches is a valid outcome, not an error; check
/// [`LocateResult::is_empty`] rather than treating empty collections as
/// failure. An unopenable or malformed index is an error, because without a
/// page number the caller has nothing to show.
pub fn locate<P: ScannerProvider>(
    provider: &P,
    output: &Path,
    input: &str,
    line: u32,
    column: u32,
    keep_other_pages: bool,
) -> Result<LocateResult, SyncError> {
    if output.as_os_str().is_empty() {
        return Err(SyncError::MissingInput("output path"));
    }
    if input.is_empty() {
        return Err(SyncError::MissingInput("source file"));
    }

    let mut scanner = provider.open(output)?;

    let mut result = LocateResult {
        page: None,
        rects: Vec::new(),
        other_rects: keep_other_pages.then(Vec::new),
    };

    if scanner.location_query(input, line, column) > 0 {
        while let Some(node) = scanner.next_result() {
            // The index stores 1-based pages.
            let current_page = node.page.saturating_sub(1);
            let primary_page = *result.page.get_or_insert(current_page);

            let rect = Rectangle::from_node(&node);
            if current_page == primary_page {
                result.rects.push(rect);
            } else if let Some(other) = result.other_rects.as_mut() {
                other.push(PageRectangle {
                    page: current_page,
                    rect,
                });
            }
        }
    }

    Ok(result)
}
