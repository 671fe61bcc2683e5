//! Backward search: rendered position to source location.
//!
//! Given a click position on a rendered page, look up the source location
//! that produced the content under it and launch the user's editor there.
//! Every failure mode short of a bug degrades to "nothing happens": a viewer
//! click must never take the application down because a side file is stale.

use crate::command::{self, TOKEN_COLUMN, TOKEN_INPUT, TOKEN_LINE};
use crate::scanner::{ScannerProvider, SyncScanner};
use std::path::Path;
use tracing::debug;

/// Resolve the editor invocation for a click at `(x, y)` on `page` (0-based).
///
/// This is [`edit`] without the process launch: it returns the fully
/// substituted argument vector, or `None` when anything along the way rules a
/// launch out (empty inputs, no index, no match at that point, or a template
/// that does not tokenize).
pub fn edit_command<P: ScannerProvider>(
    provider: &P,
    output: &Path,
    page: u32,
    x: f32,
    y: f32,
    editor: &str,
) -> Option<Vec<String>> {
    if output.as_os_str().is_empty() || editor.is_empty() {
        return None;
    }

    let mut scanner = match provider.open(output) {
        Ok(scanner) => scanner,
        Err(err) => {
            debug!("backward search unavailable: {err}");
            return None;
        }
    };

    // The index stores 1-based pages.
    if scanner.point_query(page + 1, x, y) == 0 {
        return None;
    }

    // A point query is assumed to return at most one meaningful hit; any
    // further results are dropped.
    let node = scanner.next_result()?;

    let line = node.line.to_string();
    let column = node.column.to_string();

    let argv = match command::tokenize(editor) {
        Ok(argv) => argv,
        Err(err) => {
            debug!("cannot tokenize editor command '{editor}': {err}");
            return None;
        }
    };

    let argv = command::substitute(&argv, TOKEN_LINE, &line);
    let argv = command::substitute(&argv, TOKEN_COLUMN, &column);
    let argv = command::substitute(&argv, TOKEN_INPUT, &node.input);
    Some(argv)
}

/// Backward search: launch the editor at the source of a rendered position.
///
/// `page` is 0-based. `editor` is a shell-style command template; every
/// occurrence of `%{line}`, `%{column}`, and `%{input}` in its arguments is
/// replaced before launching. The launch is detached and best-effort; this
/// function never reports failure to the caller.
pub fn edit<P: ScannerProvider>(
    provider: &P,
    output: &Path,
    page: u32,
    x: f32,
    y: f32,
    editor: &str,
) {
    if let Some(argv) = edit_command(provider, output, page, x, y, editor) {
        command::spawn_detached(&argv);
    }
}
