//! Page-space rectangles derived from index box records

use crate::scanner::SyncNode;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page coordinates, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Rectangle {
    /// Rectangle covering a node's visible box.
    ///
    /// The box origin sits on the baseline: `height` extends above it and
    /// `depth` below, so the top edge is `v - height` and the bottom edge
    /// `v + depth + height`.
    pub fn from_node(node: &SyncNode) -> Self {
        let x1 = node.h;
        let y1 = node.v - node.height;
        Rectangle {
            x1,
            y1,
            x2: x1 + node.width,
            y2: node.v + node.depth + node.height,
        }
    }

    /// Whether `(x, y)` falls inside the rectangle (edges inclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// A rectangle tagged with the 0-based page it belongs to.
///
/// Only used for forward-search hits that land on a page other than the
/// primary one; same-page hits are plain [`Rectangle`]s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRectangle {
    /// 0-based page number.
    pub page: u32,
    pub rect: Rectangle,
}
