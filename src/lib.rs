//! # srcsync - Source/Output Synchronization Bridge
//!
//! srcsync connects a typeset document's rendered pages to the source markup
//! that produced them, using a synchronization index (a side file recording,
//! for each piece of emitted content, the originating source file/line/column
//! and its geometric box on the rendered page).
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`scanner`] - Trait seam over the external index parser/query engine
//! - [`search`] - The two public operations: backward (`edit`) and forward (`locate`)
//! - [`geometry`] - Page-space rectangles derived from index box records
//! - [`command`] - Editor command templating and detached process launch
//! - [`error`] - Caller-visible error taxonomy
//!
//! ## Quick Start
//!
//! ```ignore
//! use srcsync::search::{edit, locate};
//! use std::path::Path;
//!
//! // Backward search: a click at (x, y) on page 2 opens the editor there.
//! edit(&provider, Path::new("paper.pdf"), 2, 310.0, 520.0,
//!      "vim +%{line} %{input}");
//!
//! // Forward search: highlight everything produced by main.tex line 42.
//! let hits = locate(&provider, Path::new("paper.pdf"), "main.tex", 42, 0, true)?;
//! if let Some(page) = hits.page {
//!     println!("jump to page {page}, {} boxes", hits.rects.len());
//! }
//! ```
//!
//! ## Ownership model
//!
//! Each operation opens its own index scanner, drains the results it needs by
//! copying them out as plain values, and drops the scanner before returning.
//! Nothing a caller receives borrows from the index, so there is no handle to
//! leak and no result to invalidate.

pub mod command;
pub mod error;
pub mod geometry;
pub mod scanner;
pub mod search;

pub use error::SyncError;
pub use geometry::{PageRectangle, Rectangle};
pub use scanner::{ScannerProvider, SyncNode, SyncScanner};
pub use search::{LocateResult, edit, edit_command, locate};
