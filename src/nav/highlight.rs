//! Pixel projection for the highlight band and the active-link marker.
//!
//! Every row (link or section sub-link) occupies a fixed row height; the
//! two overlays are positioned by arithmetic over row indices. Offsets are
//! local to the group's link list, with the first link row at 0.

use crate::state::Section;

/// Row height in rem.
pub const ROW_HEIGHT_REM: f64 = 2.25;
/// Vertical inset of the marker inside its row, in rem.
pub const MARKER_OFFSET_REM: f64 = 0.375;

/// Row metrics resolved once from the root font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightMetrics {
    /// Height of one row, px.
    pub row_height: f64,
    /// Fixed marker offset within a row, px.
    pub marker_offset: f64,
}

impl HighlightMetrics {
    pub fn from_root_font() -> Self {
        Self {
            row_height: crate::dom::rem_to_px(ROW_HEIGHT_REM),
            marker_offset: crate::dom::rem_to_px(MARKER_OFFSET_REM),
        }
    }
}

/// A vertical extent in the group's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRect {
    pub top: f64,
    pub height: f64,
}

/// Index within the full ordered section list of the first section that is
/// currently visible in the viewport.
pub fn first_visible_index(sections: &[Section], visible_ids: &[String]) -> Option<usize> {
    sections
        .iter()
        .position(|s| visible_ids.iter().any(|v| v == &s.id))
}

/// Band covering the visible sections of the active link.
///
/// While the band is entering or leaving (`settled == false`) it collapses
/// to a single row so the fade never stretches over stale geometry.
pub fn band_rect(
    metrics: HighlightMetrics,
    active_index: usize,
    first_visible: Option<usize>,
    visible_count: usize,
    settled: bool,
) -> BandRect {
    let h = metrics.row_height;
    let top = h * active_index as f64 + h * first_visible.unwrap_or(0) as f64;
    let rows = if settled { visible_count.max(1) } else { 1 };
    BandRect {
        top,
        height: h * rows as f64,
    }
}

/// Vertical position of the thin marker beside the active link.
pub fn marker_top(metrics: HighlightMetrics, active_index: usize) -> f64 {
    metrics.marker_offset + metrics.row_height * active_index as f64
}

/// Marker height: one row minus the inset on both ends.
pub fn marker_height(metrics: HighlightMetrics) -> f64 {
    metrics.row_height - 2.0 * metrics.marker_offset
}
