// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The windowing controller.

use alloc::vec::Vec;
use core::time::Duration;

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::Scalar;
use crate::geometry::{WindowGeometry, compute_window};
use crate::lower::LowerEdge;
use crate::measure::{
    DisplayMetrics, HeightChange, MeasureError, MeasureRequest, MeasureState, Measurement,
};
use crate::options::{OptionsError, VirtualListOptions};
use crate::units::UnitConverter;

/// Snapshot of the current window, as reported to hosts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct VisibleRange {
    /// First realized row.
    pub start: usize,
    /// One past the last realized row.
    pub end: usize,
    /// Number of realized rows.
    pub visible_count: usize,
    /// Number of rows in the full row set.
    pub total_count: usize,
}

/// Notifications for the list's owner, drained with [`Windower::drain_events`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ListEvent {
    /// The realized range or its padding changed; re-render.
    WindowChanged(VisibleRange),
    /// A programmatic jump; apply this offset to the scroll container.
    ScrollTo {
        /// Target scroll offset, in pixels.
        offset: f64,
    },
    /// A scroll reached the trailing edge; the owner may load more rows.
    ScrollToLower,
}

/// The rows to render right now, with the spacers around them.
#[derive(Debug)]
pub struct VisibleWindow<'a, T> {
    geometry: WindowGeometry<f64>,
    rows: &'a [T],
}

impl<'a, T> VisibleWindow<'a, T> {
    /// Index range and padding of this window.
    #[must_use]
    pub fn geometry(&self) -> WindowGeometry<f64> {
        self.geometry
    }

    /// Index of the first realized row in the full row set.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.geometry.start_index
    }

    /// One past the index of the last realized row.
    #[must_use]
    pub fn end_index(&self) -> usize {
        self.geometry.end_index
    }

    /// Spacer height before the realized rows, in pixels.
    #[must_use]
    pub fn top_padding(&self) -> f64 {
        self.geometry.top_padding
    }

    /// Spacer height after the realized rows, in pixels.
    #[must_use]
    pub fn bottom_padding(&self) -> f64 {
        self.geometry.bottom_padding
    }

    /// The realized rows, in display order.
    #[must_use]
    pub fn rows(&self) -> &'a [T] {
        self.rows
    }

    /// Number of realized rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing is realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Realized rows paired with their index in the full row set.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a T)> + use<'a, T> {
        let start = self.geometry.start_index;
        self.rows
            .iter()
            .enumerate()
            .map(move |(offset, row)| (start + offset, row))
    }

    /// Realized rows paired with their render key.
    pub fn keyed<K, F>(
        &self,
        mut key_of: F,
    ) -> impl Iterator<Item = (K, &'a T)> + use<'a, T, K, F>
    where
        F: FnMut(&T) -> K,
    {
        self.rows.iter().map(move |row| (key_of(row), row))
    }
}

/// Virtualizes a fixed-row-height list.
///
/// `Windower` owns the full row set and the viewport state, and keeps the
/// realized window up to date as rows, scroll position, and container size
/// change. It never touches widgets: hosts read [`Windower::window`] and the
/// queued [`ListEvent`]s and render accordingly.
///
/// Until the scroll container has a known height the windower is
/// [`MeasureState::Unmeasured`] and every recompute is a no-op; see the
/// [`measure`](crate::measure) module for the handshake.
///
/// Scroll events go through a hysteresis gate: a new offset is only taken if it
/// moved at least half a row from the last accepted one.
///
/// ```rust
/// use core::time::Duration;
/// use understory_virtual_window::{DisplayMetrics, ListEvent, VirtualListOptions, Windower};
///
/// // 100-unit rows on a 750px-wide display are 100px tall.
/// let options = VirtualListOptions::default().with_item_height(100.0).with_buffer_size(1);
/// let mut list = Windower::new(options).unwrap();
/// list.set_rows((0..50_u32).collect());
///
/// let request = list.attach(DisplayMetrics::new(750.0, 1334.0), Duration::ZERO);
/// list.on_container_measured(request.attach_id, 400.0);
/// assert_eq!(list.window().start_index(), 0);
/// assert_eq!(list.window().end_index(), 5);
///
/// // 40px is below the half-row threshold and is dropped.
/// assert!(!list.on_scroll(40.0));
/// assert!(list.on_scroll(1000.0));
/// assert_eq!(list.window().start_index(), 9);
/// assert_eq!(list.window().end_index(), 15);
///
/// let events: Vec<_> = list.drain_events().collect();
/// assert!(matches!(events.last(), Some(ListEvent::WindowChanged(_))));
/// ```
#[derive(Debug)]
pub struct Windower<T> {
    options: VirtualListOptions,
    rows: Vec<T>,
    measurement: Measurement,
    converter: Option<UnitConverter<f64>>,
    scroll_offset: f64,
    window: WindowGeometry<f64>,
    lower: LowerEdge,
    events: SmallVec<[ListEvent; 4]>,
}

impl<T> Windower<T> {
    /// Creates an empty, detached windower.
    pub fn new(options: VirtualListOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            lower: LowerEdge::new(options.lower_threshold),
            options,
            rows: Vec::new(),
            measurement: Measurement::default(),
            converter: None,
            scroll_offset: 0.0,
            window: WindowGeometry::empty(),
            events: SmallVec::new(),
        })
    }

    /// Returns the active options.
    #[must_use]
    pub fn options(&self) -> &VirtualListOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// The window is recomputed when the row height or buffer size changed. A
    /// new measurement timeout applies from the next [`Windower::attach`].
    pub fn set_options(&mut self, options: VirtualListOptions) -> Result<(), OptionsError> {
        options.validate()?;
        let geometry_changed = options.item_height != self.options.item_height
            || options.buffer_size != self.options.buffer_size;
        self.lower.set_threshold(options.lower_threshold);
        self.options = options;
        if geometry_changed {
            self.recompute();
        }
        Ok(())
    }

    /// Enters the display tree and starts a new measurement cycle.
    ///
    /// The scroll offset and window are reset. The returned request carries the
    /// attach id to tag the platform geometry query with and the deadline after
    /// which [`Windower::poll_measure_timeout`] substitutes the display height.
    pub fn attach(&mut self, metrics: DisplayMetrics, now: Duration) -> MeasureRequest {
        self.converter = UnitConverter::new(metrics.width);
        if self.converter.is_none() {
            warn!(
                width = metrics.width,
                "display width unusable; list rows cannot be sized"
            );
        }
        self.scroll_offset = 0.0;
        self.window = WindowGeometry::empty();
        self.lower.rearm();
        let request = self
            .measurement
            .attach(metrics, now, self.options.measure_timeout());
        debug!(
            attach_id = request.attach_id,
            "list attached; awaiting container measurement"
        );
        request
    }

    /// Leaves the display tree.
    ///
    /// Results of the pending measurement, if any, are ignored from now on.
    pub fn detach(&mut self) {
        self.measurement.detach();
        self.window = WindowGeometry::empty();
    }

    /// Reports the measured container height for an attach cycle.
    ///
    /// The first usable height moves the list to [`MeasureState::Measured`];
    /// later ones recompute if the height changed. Zero or non-finite heights
    /// are ignored, leaving the fallback pending.
    pub fn on_container_measured(&mut self, attach_id: u64, height: f64) {
        if !self.measurement.is_current(attach_id) {
            debug!(attach_id, "ignoring measurement from a stale attach cycle");
            return;
        }
        match self.measurement.apply_height(height) {
            HeightChange::Measured => {
                debug!(height, "list container measured");
                self.recompute();
            }
            HeightChange::Resized => {
                trace!(height, "list container resized");
                self.recompute();
            }
            HeightChange::Unchanged => {
                if !height.is_positive_length() {
                    debug!(height, "ignoring unusable container height");
                }
            }
        }
    }

    /// Reports that the platform geometry query failed.
    ///
    /// The list stays [`MeasureState::Unmeasured`] until the fallback applies.
    pub fn on_measure_failed(&mut self, attach_id: u64, error: MeasureError) {
        if !self.measurement.is_current(attach_id) {
            return;
        }
        warn!(%error, "list container measurement failed; waiting for fallback");
    }

    /// Applies the fallback measurement if the bounded wait has elapsed.
    ///
    /// Returns `true` if the display height was substituted. Calling this after
    /// the real measurement arrived, or before the deadline, does nothing.
    pub fn poll_measure_timeout(&mut self, now: Duration) -> bool {
        let Some(height) = self.measurement.expired_fallback(now) else {
            return false;
        };
        match self.measurement.apply_height(height) {
            HeightChange::Unchanged => {
                warn!(height, "display height unusable; list stays unmeasured");
                false
            }
            HeightChange::Measured | HeightChange::Resized => {
                debug!(height, "container measurement timed out; using display height");
                self.recompute();
                true
            }
        }
    }

    /// Host time at which [`Windower::poll_measure_timeout`] should run, if a
    /// fallback is pending.
    #[must_use]
    pub fn measure_deadline(&self) -> Option<Duration> {
        self.measurement.deadline()
    }

    /// Replaces the full row set and recomputes.
    ///
    /// Once measured, this always queues [`ListEvent::WindowChanged`], even if
    /// the range is unchanged, since the rows inside it may differ.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.lower.rearm();
        self.refresh(true);
    }

    /// Replaces the full row set after checking that row keys are unique.
    ///
    /// On a collision the current rows are kept and the error is returned.
    #[cfg(feature = "hashbrown")]
    pub fn set_rows_checked<K, F>(
        &mut self,
        rows: Vec<T>,
        key_of: F,
    ) -> Result<(), crate::DuplicateKeyError>
    where
        K: core::hash::Hash + Eq,
        F: FnMut(&T) -> K,
    {
        if let Some(err) = crate::keys::find_duplicate_key(&rows, key_of) {
            warn!(%err, key = %self.options.unique_key, "rejecting row set");
            return Err(err);
        }
        self.set_rows(rows);
        Ok(())
    }

    /// Reports a scroll position from the scroll container.
    ///
    /// Returns `true` if the offset moved at least half a row from the last
    /// accepted offset, in which case it is stored and the window recomputed.
    /// Smaller moves are dropped. Either way, reaching the trailing edge queues
    /// [`ListEvent::ScrollToLower`].
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let offset = offset.sanitize_length();
        let threshold = self.row_height_px().map_or(0.0, |height| height / 2.0);
        let accepted = (offset - self.scroll_offset).abs() >= threshold;
        if accepted {
            self.scroll_offset = offset;
            self.recompute();
        }
        self.observe_lower_edge(offset);
        accepted
    }

    /// Jumps so that row `index` is at the top of the viewport.
    ///
    /// The hysteresis gate is bypassed. Indices past the end target the last
    /// row. Queues [`ListEvent::ScrollTo`] for the host scroll container.
    /// Ignored before the first [`Windower::attach`], as rows have no pixel
    /// height yet.
    pub fn scroll_to_index(&mut self, index: usize) {
        let Some(row_height) = self.row_height_px() else {
            debug!(index, "scroll_to_index ignored; list has no display metrics");
            return;
        };
        let index = index.min(self.rows.len().saturating_sub(1));
        let offset = f64::from_usize(index) * row_height;
        self.scroll_offset = offset;
        self.queue(ListEvent::ScrollTo { offset });
        self.recompute();
    }

    /// Returns the current range without recomputing.
    ///
    /// While unmeasured the range is empty; `total_count` still reports the
    /// size of the row set.
    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        let total_count = self.rows.len();
        if self.measurement.state() == MeasureState::Unmeasured {
            return VisibleRange {
                total_count,
                ..VisibleRange::default()
            };
        }
        VisibleRange {
            start: self.window.start_index,
            end: self.window.end_index,
            visible_count: self.window.len(),
            total_count,
        }
    }

    /// The rows to render and the spacers around them.
    #[must_use]
    pub fn window(&self) -> VisibleWindow<'_, T> {
        let range = self.window.range();
        VisibleWindow {
            geometry: self.window,
            rows: self.rows.get(range).unwrap_or(&[]),
        }
    }

    /// Takes all queued notifications, oldest first.
    ///
    /// At most one event of each kind is pending: a newer `WindowChanged` or
    /// `ScrollTo` replaces the queued one, so the queue stays bounded when the
    /// owner drains rarely.
    pub fn drain_events(&mut self) -> impl Iterator<Item = ListEvent> + '_ {
        self.events.drain(..)
    }

    /// Returns the measurement state.
    #[must_use]
    pub fn state(&self) -> MeasureState {
        self.measurement.state()
    }

    /// Returns the full row set.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Returns the last accepted scroll offset, in pixels.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Returns the container height, or `0` while unmeasured.
    #[must_use]
    pub fn container_height(&self) -> f64 {
        self.measurement.container_height()
    }

    /// Row height in pixels, once display metrics are known.
    #[must_use]
    pub fn row_height_px(&self) -> Option<f64> {
        self.converter
            .map(|converter| converter.to_pixels(self.options.item_height))
    }

    /// Total scrollable height of the full row set, in pixels.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.row_height_px()
            .map_or(0.0, |height| f64::from_usize(self.rows.len()) * height)
    }

    fn recompute(&mut self) {
        self.refresh(false);
    }

    /// Recomputes the window; `force` queues `WindowChanged` even if the
    /// geometry is unchanged.
    fn refresh(&mut self, force: bool) {
        if self.measurement.state() == MeasureState::Unmeasured {
            return;
        }
        let Some(row_height) = self.row_height_px() else {
            return;
        };
        let next = compute_window(
            self.rows.len(),
            self.scroll_offset,
            self.measurement.container_height(),
            row_height,
            self.options.buffer_size,
        )
        .unwrap_or_else(WindowGeometry::empty);
        if next == self.window && !force {
            return;
        }
        trace!(
            start = next.start_index,
            end = next.end_index,
            offset = self.scroll_offset,
            "window recomputed"
        );
        self.window = next;
        let range = self.visible_range();
        self.queue(ListEvent::WindowChanged(range));
    }

    fn observe_lower_edge(&mut self, offset: f64) {
        if self.measurement.state() == MeasureState::Unmeasured {
            return;
        }
        let viewport = self.measurement.container_height();
        if self.lower.observe(offset, viewport, self.content_height()) {
            debug!(offset, total = self.rows.len(), "list scrolled to lower edge");
            self.queue(ListEvent::ScrollToLower);
        }
    }

    /// Queues `event`, dropping any pending event of the same kind.
    fn queue(&mut self, event: ListEvent) {
        let kind = core::mem::discriminant(&event);
        self.events
            .retain(|queued| core::mem::discriminant(&*queued) != kind);
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::time::Duration;

    use super::{ListEvent, VisibleRange, Windower};
    use crate::measure::{DisplayMetrics, MeasureError, MeasureState};
    use crate::options::VirtualListOptions;

    /// 750px-wide display: one design unit is one pixel.
    const DISPLAY: DisplayMetrics = DisplayMetrics {
        width: 750.0,
        height: 1334.0,
    };

    fn list(rows: usize, item_height: f64, buffer: usize) -> Windower<usize> {
        let options = VirtualListOptions::default()
            .with_item_height(item_height)
            .with_buffer_size(buffer);
        let mut list = Windower::new(options).unwrap();
        list.set_rows((0..rows).collect());
        list
    }

    fn measured(rows: usize, item_height: f64, buffer: usize, viewport: f64) -> Windower<usize> {
        let mut list = list(rows, item_height, buffer);
        let request = list.attach(DISPLAY, Duration::ZERO);
        list.on_container_measured(request.attach_id, viewport);
        list.drain_events().for_each(drop);
        list
    }

    #[test]
    fn unmeasured_range_is_empty() {
        let mut list = list(20, 100.0, 2);
        list.attach(DISPLAY, Duration::ZERO);
        assert_eq!(list.state(), MeasureState::Unmeasured);
        assert_eq!(
            list.visible_range(),
            VisibleRange {
                start: 0,
                end: 0,
                visible_count: 0,
                total_count: 20,
            }
        );
        assert!(list.window().is_empty());
        assert!(list.on_scroll(500.0));
        assert!(list.window().is_empty());
        assert_eq!(list.drain_events().count(), 0);
    }

    #[test]
    fn measurement_computes_first_window() {
        let mut list = list(20, 100.0, 2);
        let request = list.attach(DISPLAY, Duration::ZERO);
        list.on_container_measured(request.attach_id, 300.0);
        assert_eq!(list.state(), MeasureState::Measured);
        assert_eq!(list.window().start_index(), 0);
        assert_eq!(list.window().end_index(), 5);
        assert_eq!(list.window().bottom_padding(), 1500.0);
        let events: Vec<_> = list.drain_events().collect();
        assert_eq!(
            events,
            [ListEvent::WindowChanged(VisibleRange {
                start: 0,
                end: 5,
                visible_count: 5,
                total_count: 20,
            })]
        );
    }

    #[test]
    fn hysteresis_drops_moves_under_half_a_row() {
        let mut list = measured(100, 100.0, 0, 300.0);
        assert!(!list.on_scroll(40.0));
        assert_eq!(list.scroll_offset(), 0.0);
        assert!(list.on_scroll(60.0));
        assert_eq!(list.scroll_offset(), 60.0);
        // Measured from the last accepted offset, not the last event.
        assert!(!list.on_scroll(100.0));
        assert!(list.on_scroll(110.0));
    }

    #[test]
    fn hysteresis_threshold_is_in_pixels() {
        // 375px display: 100 design units are 50px, threshold 25px.
        let mut list = list(100, 100.0, 0);
        let request = list.attach(DisplayMetrics::new(375.0, 667.0), Duration::ZERO);
        list.on_container_measured(request.attach_id, 300.0);
        assert_eq!(list.row_height_px(), Some(50.0));
        assert!(!list.on_scroll(24.0));
        assert!(list.on_scroll(25.0));
    }

    #[test]
    fn scroll_to_index_bypasses_hysteresis() {
        let mut list = measured(100, 100.0, 1, 300.0);
        list.scroll_to_index(0);
        list.scroll_to_index(42);
        assert_eq!(list.scroll_offset(), 4200.0);
        let range = list.visible_range();
        assert!(range.start <= 42 && 42 < range.end);
        let events: Vec<_> = list.drain_events().collect();
        assert!(events.contains(&ListEvent::ScrollTo { offset: 4200.0 }));
    }

    #[test]
    fn scroll_to_index_clamps_to_last_row() {
        let mut list = measured(10, 100.0, 0, 300.0);
        list.scroll_to_index(99);
        assert_eq!(list.scroll_offset(), 900.0);
        assert_eq!(list.window().geometry().range(), 9..10);
    }

    #[test]
    fn scroll_to_index_before_attach_is_ignored() {
        let mut list = list(10, 100.0, 0);
        list.scroll_to_index(5);
        assert_eq!(list.scroll_offset(), 0.0);
        assert_eq!(list.drain_events().count(), 0);
    }

    #[test]
    fn replacing_rows_recomputes() {
        let mut list = measured(3, 100.0, 0, 300.0);
        assert_eq!(list.window().len(), 3);
        list.set_rows((0..50).collect());
        assert_eq!(list.window().len(), 3);
        assert_eq!(list.window().bottom_padding(), 4700.0);
        list.set_rows(Vec::new());
        assert!(list.window().is_empty());
        assert_eq!(list.visible_range().total_count, 0);
    }

    #[test]
    fn window_rows_are_the_realized_slice() {
        let mut list = measured(100, 100.0, 1, 250.0);
        list.on_scroll(1000.0);
        let window = list.window();
        assert_eq!(window.rows(), &[9, 10, 11, 12, 13]);
        let indices: Vec<_> = window.iter().map(|(index, _)| index).collect();
        assert_eq!(indices, [9, 10, 11, 12, 13]);
        let keys: Vec<_> = window.keyed(|row| row * 2).map(|(key, _)| key).collect();
        assert_eq!(keys, [18, 20, 22, 24, 26]);
    }

    #[test]
    fn fallback_applies_after_deadline() {
        let mut list = list(20, 100.0, 0);
        let request = list.attach(DISPLAY, Duration::from_millis(10));
        assert_eq!(list.measure_deadline(), Some(Duration::from_millis(310)));
        list.on_measure_failed(request.attach_id, MeasureError::NodeNotFound);
        assert_eq!(list.state(), MeasureState::Unmeasured);
        assert!(!list.poll_measure_timeout(Duration::from_millis(200)));
        assert!(list.poll_measure_timeout(Duration::from_millis(310)));
        assert_eq!(list.container_height(), 1334.0);
        assert_eq!(list.window().end_index(), 14);
    }

    #[test]
    fn fallback_never_overrides_real_measurement() {
        let mut list = list(20, 100.0, 0);
        let request = list.attach(DISPLAY, Duration::ZERO);
        list.on_container_measured(request.attach_id, 300.0);
        assert!(!list.poll_measure_timeout(Duration::from_secs(1)));
        assert_eq!(list.container_height(), 300.0);
    }

    #[test]
    fn stale_measurements_are_ignored() {
        let mut list = list(20, 100.0, 0);
        let first = list.attach(DISPLAY, Duration::ZERO);
        list.detach();
        let second = list.attach(DISPLAY, Duration::ZERO);
        list.on_container_measured(first.attach_id, 300.0);
        assert_eq!(list.state(), MeasureState::Unmeasured);
        list.on_container_measured(second.attach_id, 300.0);
        assert_eq!(list.state(), MeasureState::Measured);
    }

    #[test]
    fn zero_height_waits_for_fallback() {
        let mut list = list(20, 100.0, 0);
        let request = list.attach(DISPLAY, Duration::ZERO);
        list.on_container_measured(request.attach_id, 0.0);
        assert_eq!(list.state(), MeasureState::Unmeasured);
        assert!(list.poll_measure_timeout(Duration::from_millis(300)));
        assert_eq!(list.state(), MeasureState::Measured);
    }

    #[test]
    fn remeasure_recomputes() {
        let mut list = measured(100, 100.0, 0, 300.0);
        list.on_container_measured(1, 600.0);
        assert_eq!(list.window().end_index(), 6);
    }

    #[test]
    fn reaching_the_end_notifies_once() {
        // 10 rows of 100px in a 300px viewport: lower offset 700, threshold 50.
        let mut list = measured(10, 100.0, 0, 300.0);
        list.on_scroll(400.0);
        assert!(!list.drain_events().any(|e| e == ListEvent::ScrollToLower));
        list.on_scroll(660.0);
        assert!(list.drain_events().any(|e| e == ListEvent::ScrollToLower));
        // Below the hysteresis threshold, still in the zone: no repeat.
        list.on_scroll(690.0);
        assert!(!list.drain_events().any(|e| e == ListEvent::ScrollToLower));

        // More rows arrive; reaching the new end notifies again.
        list.set_rows((0..20).collect());
        list.on_scroll(1700.0);
        assert!(list.drain_events().any(|e| e == ListEvent::ScrollToLower));
    }

    #[test]
    fn undrained_scrolls_keep_one_window_event() {
        let mut list = measured(10_000, 100.0, 0, 300.0);
        for step in 1..=1_000_u32 {
            assert!(list.on_scroll(f64::from(step) * 100.0));
        }
        let events: Vec<_> = list.drain_events().collect();
        assert_eq!(
            events,
            [ListEvent::WindowChanged(VisibleRange {
                start: 1_000,
                end: 1_003,
                visible_count: 3,
                total_count: 10_000,
            })]
        );
    }

    #[test]
    fn repeated_jumps_keep_the_latest_target() {
        let mut list = measured(100, 100.0, 0, 300.0);
        list.scroll_to_index(10);
        list.scroll_to_index(20);
        list.scroll_to_index(30);
        let events: Vec<_> = list.drain_events().collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], ListEvent::ScrollTo { offset: 3000.0 });
        assert!(matches!(
            events[1],
            ListEvent::WindowChanged(VisibleRange { start: 30, .. })
        ));
    }

    #[test]
    fn same_length_row_set_still_notifies() {
        let mut list = measured(5, 100.0, 0, 300.0);
        list.set_rows((100..105).collect());
        let events: Vec<_> = list.drain_events().collect();
        assert_eq!(
            events,
            [ListEvent::WindowChanged(VisibleRange {
                start: 0,
                end: 3,
                visible_count: 3,
                total_count: 5,
            })]
        );
        assert_eq!(list.window().rows(), &[100, 101, 102]);
    }

    #[test]
    fn set_options_recomputes_on_geometry_change() {
        let mut list = measured(100, 100.0, 0, 300.0);
        let options = list.options().clone().with_buffer_size(2);
        list.set_options(options).unwrap();
        assert_eq!(list.window().end_index(), 5);
        let bad = list.options().clone().with_item_height(-1.0);
        assert!(list.set_options(bad).is_err());
        assert_eq!(list.options().buffer_size, 2);
    }
}
