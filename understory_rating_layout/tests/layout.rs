// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-style checks for `compute_row_layout` across button counts,
//! container shapes, and scale factors.

use kurbo::Size;
use understory_rating_layout::{RowLayout, compute_row_layout, effective_scale};

const CONTAINERS: [(f64, f64); 5] = [
    (320.0, 80.0),
    (320.0, 800.0),
    (1.0, 1.0),
    (1024.5, 33.25),
    (90.0, 400.0),
];
const SCALES: [f64; 4] = [1.0, 1.2, 1.3, 2.0];

fn each_layout(mut f: impl FnMut(Size, usize, f64, &RowLayout)) {
    for (w, h) in CONTAINERS {
        for count in 1..=12 {
            for scale in SCALES {
                let container = Size::new(w, h);
                let layout = compute_row_layout(container, count, scale);
                f(container, count, scale, &layout);
            }
        }
    }
}

#[test]
fn gaps_and_buttons_fill_the_container_width() {
    each_layout(|container, count, _, layout| {
        assert_eq!(layout.len(), count);
        let sum = layout.spacing() * (count as f64 + 1.0) + layout.button_size() * count as f64;
        assert!(
            (sum - container.width).abs() < 1e-9 * container.width.max(1.0),
            "row of {count} spans {sum}, expected {}",
            container.width
        );
    });
}

#[test]
fn magnified_button_fits_vertically() {
    each_layout(|container, _, scale, layout| {
        assert!(layout.button_size() <= container.height / effective_scale(scale) + 1e-9);
        assert!(layout.button_size() >= 0.0);
        assert!(layout.spacing() >= -1e-9);
    });
}

#[test]
fn layout_is_pure() {
    each_layout(|container, count, scale, layout| {
        assert_eq!(&compute_row_layout(container, count, scale), layout);
    });
}

#[test]
fn every_center_hits_its_own_button() {
    each_layout(|_, _, _, layout| {
        if layout.button_size() == 0.0 {
            return;
        }
        for (index, center) in layout.centers().iter().enumerate() {
            assert_eq!(layout.hit_test_point(*center), Some(index));
        }
    });
}

#[test]
fn margins_are_never_hits() {
    let layout = compute_row_layout(Size::new(320.0, 80.0), 5, 1.3);
    assert!(layout.spacing() > 0.0);
    assert_eq!(layout.hit_test_x(layout.spacing() / 2.0), None);
    assert_eq!(layout.hit_test_x(320.0 - layout.spacing() / 2.0), None);
}

#[test]
fn long_rows_spill_past_inline_storage() {
    let layout = compute_row_layout(Size::new(2000.0, 100.0), 40, 1.3);
    assert_eq!(layout.len(), 40);
    assert_eq!(layout.hit_test_point(layout.centers()[39]), Some(39));
}
