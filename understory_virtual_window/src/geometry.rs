// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window geometry for fixed-height rows.
//!
//! [`compute_window`] maps a scroll position onto the contiguous index range that
//! has to be realized, widened by a symmetric buffer, together with the spacer
//! heights that stand in for everything outside it.

use core::ops::Range;

use crate::Scalar;

/// Realized index range plus the spacer heights around it.
///
/// Invariants for any value returned by [`compute_window`]:
/// - `start_index <= end_index <= total_rows`
/// - `top_padding == start_index * row_height`
/// - `bottom_padding == (total_rows - end_index) * row_height`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowGeometry<S: Scalar> {
    /// First realized row.
    pub start_index: usize,
    /// One past the last realized row.
    pub end_index: usize,
    /// Height of the spacer placed before the first realized row.
    pub top_padding: S,
    /// Height of the spacer placed after the last realized row.
    pub bottom_padding: S,
}

impl<S: Scalar> WindowGeometry<S> {
    /// A window with no realized rows and no padding.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            start_index: 0,
            end_index: 0,
            top_padding: S::zero(),
            bottom_padding: S::zero(),
        }
    }

    /// The realized indices as a half-open range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Number of realized rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Returns `true` if no rows are realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    /// Returns `true` if `index` is realized by this window.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }

    /// Total scrollable height: both spacers plus the realized rows.
    #[must_use]
    pub fn content_height(&self, row_height: S) -> S {
        self.top_padding + self.bottom_padding + S::from_usize(self.len()) * row_height
    }
}

/// Computes which rows to realize for a scroll position.
///
/// - `total_rows`: number of rows in the full row set.
/// - `scroll_offset`: distance scrolled from the top, in pixels.
/// - `viewport_height`: height of the scroll container, in pixels.
/// - `row_height`: height of every row, in pixels.
/// - `buffer_size`: rows realized beyond each visible edge.
///
/// Returns `None` when there is nothing to lay out: no rows, a viewport that
/// has not been measured (`<= 0`), or a row height that is not a finite
/// positive number. Hosts skip rendering in that case.
///
/// Negative or non-finite scroll offsets count as `0`. An offset past the end
/// of the content clamps to an empty window at `total_rows` with no bottom
/// padding.
///
/// ```rust
/// use understory_virtual_window::compute_window;
///
/// // Rows 20..25 are on screen; three buffer rows on each side.
/// let window = compute_window(100, 200.0_f64, 50.0, 10.0, 3).unwrap();
/// assert_eq!(window.range(), 17..28);
/// assert_eq!(window.top_padding, 170.0);
/// assert_eq!(window.bottom_padding, 720.0);
///
/// assert!(compute_window(0, 0.0_f64, 50.0, 10.0, 3).is_none());
/// ```
#[must_use]
pub fn compute_window<S: Scalar>(
    total_rows: usize,
    scroll_offset: S,
    viewport_height: S,
    row_height: S,
    buffer_size: usize,
) -> Option<WindowGeometry<S>> {
    if total_rows == 0 || !viewport_height.is_positive_length() {
        return None;
    }
    if !row_height.is_positive_length() {
        return None;
    }

    let offset = scroll_offset.sanitize_length();
    let visible_start = index_from_isize((offset / row_height).floor_to_isize());
    let visible_end = index_from_isize(((offset + viewport_height) / row_height).ceil_to_isize());

    let end_index = visible_end.saturating_add(buffer_size).min(total_rows);
    let start_index = visible_start.saturating_sub(buffer_size).min(end_index);

    Some(WindowGeometry {
        start_index,
        end_index,
        top_padding: S::from_usize(start_index) * row_height,
        bottom_padding: S::from_usize(total_rows - end_index) * row_height,
    })
}

fn index_from_isize(value: isize) -> usize {
    usize::try_from(value).unwrap_or(0)
}
