// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the window geometry and `scroll_to_index`.
//!
//! Lengths are drawn as whole pixels so that padding sums are exact in `f64`.

use core::time::Duration;

use proptest::prelude::*;
use understory_virtual_window::{DisplayMetrics, VirtualListOptions, Windower, compute_window};

proptest! {
    #[test]
    fn range_is_always_valid(
        total in 0_usize..5_000,
        offset in 0_u32..1_000_000,
        viewport in 0_u32..4_000,
        row_height in 1_u32..500,
        buffer in 0_usize..64,
    ) {
        match compute_window(total, f64::from(offset), f64::from(viewport), f64::from(row_height), buffer) {
            Some(window) => {
                prop_assert!(window.start_index <= window.end_index);
                prop_assert!(window.end_index <= total);
            }
            None => prop_assert!(total == 0 || viewport == 0),
        }
    }

    #[test]
    fn scrollable_height_is_conserved(
        total in 1_usize..5_000,
        offset in 0_u32..1_000_000,
        viewport in 1_u32..4_000,
        row_height in 1_u32..500,
        buffer in 0_usize..64,
    ) {
        let h = f64::from(row_height);
        let window = compute_window(total, f64::from(offset), f64::from(viewport), h, buffer).unwrap();
        let realized = (window.end_index - window.start_index) as f64 * h;
        prop_assert_eq!(window.top_padding + window.bottom_padding + realized, total as f64 * h);
        prop_assert_eq!(window.top_padding, window.start_index as f64 * h);
        prop_assert_eq!(window.bottom_padding, (total - window.end_index) as f64 * h);
    }

    #[test]
    fn scrolling_down_never_moves_the_window_up(
        total in 1_usize..5_000,
        offset in 0_u32..500_000,
        delta in 0_u32..500_000,
        viewport in 1_u32..4_000,
        row_height in 1_u32..500,
        buffer in 0_usize..64,
    ) {
        let (vh, h) = (f64::from(viewport), f64::from(row_height));
        let before = compute_window(total, f64::from(offset), vh, h, buffer).unwrap();
        let after = compute_window(total, f64::from(offset) + f64::from(delta), vh, h, buffer).unwrap();
        prop_assert!(after.start_index >= before.start_index);
        prop_assert!(after.end_index >= before.end_index);
    }

    #[test]
    fn scroll_to_index_realizes_the_target(
        total in 1_usize..2_000,
        pick in 0_usize..2_000,
        item_height in 1_u32..400,
        viewport in 1_u32..2_000,
        buffer in 0_usize..16,
    ) {
        let index = pick % total;
        let options = VirtualListOptions::default()
            .with_item_height(f64::from(item_height))
            .with_buffer_size(buffer);
        let mut list = Windower::new(options).unwrap();
        list.set_rows((0..total).collect());
        let request = list.attach(DisplayMetrics::new(750.0, 1334.0), Duration::ZERO);
        list.on_container_measured(request.attach_id, f64::from(viewport));

        list.scroll_to_index(index);
        let range = list.visible_range();
        prop_assert!(range.start <= index && index < range.end);
        prop_assert_eq!(range.visible_count, range.end - range.start);
        prop_assert_eq!(range.total_count, total);
    }
}
