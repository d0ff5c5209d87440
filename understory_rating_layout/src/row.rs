// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-row button layout.

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

/// Number of button centers stored inline before [`RowLayout`] spills to the heap.
pub const INLINE_BUTTONS: usize = 8;

/// Returns the scale factor layout and presentation should use for a selected button.
///
/// Scales at or below `1.0`, and non-finite scales, disable the visual
/// distinction between selected and resting buttons and map to `1.0`.
#[must_use]
pub fn effective_scale(selected_scale: f64) -> f64 {
    if selected_scale.is_finite() && selected_scale > 1.0 {
        selected_scale
    } else {
        1.0
    }
}

/// Treats negative, NaN, and infinite extents as empty.
fn extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Computes the resting layout of `button_count` buttons in a `container`.
///
/// Every button gets the same square resting size. The size is the largest one
/// for which a button magnified by `selected_scale` still fits vertically and
/// still clears its neighbours horizontally. The remaining width is split into
/// `button_count + 1` equal gaps.
///
/// A `button_count` of zero yields an empty layout. Degenerate containers
/// (zero, negative, or non-finite extents) yield zero-sized buttons.
#[must_use]
pub fn compute_row_layout(container: Size, button_count: usize, selected_scale: f64) -> RowLayout {
    if button_count == 0 {
        return RowLayout::default();
    }

    let width = extent(container.width);
    let height = extent(container.height);
    let scale = effective_scale(selected_scale);
    let n = button_count as f64;

    // With `scale >= 1.0` the denominator is at least `n`, which is non-zero here.
    let width_limited = width / (n + (n + 1.0) * (scale - 1.0) / 2.0);
    let button_size = (height / scale).min(width_limited);
    let spacing = (width - button_size * n) / (n + 1.0);

    let center_y = height / 2.0;
    let centers = (0..button_count)
        .map(|i| {
            Point::new(
                button_size / 2.0 + spacing + i as f64 * (button_size + spacing),
                center_y,
            )
        })
        .collect();

    RowLayout {
        button_size,
        spacing,
        centers,
    }
}

/// The result of a layout pass: one resting size, one gap, and a center per button.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowLayout {
    button_size: f64,
    spacing: f64,
    centers: SmallVec<[Point; INLINE_BUTTONS]>,
}

impl RowLayout {
    /// Returns the side length of every (square) button at resting size.
    #[must_use]
    pub fn button_size(&self) -> f64 {
        self.button_size
    }

    /// Returns the width of each of the `len() + 1` gaps, margins included.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the button centers in index order.
    #[must_use]
    pub fn centers(&self) -> &[Point] {
        &self.centers
    }

    /// Returns the number of laid out buttons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// Returns `true` if no buttons were laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Returns the resting size of a single button.
    ///
    /// Hosts can use this as the intrinsic content size of one rating button.
    #[must_use]
    pub fn intrinsic_size(&self) -> Size {
        Size::new(self.button_size, self.button_size)
    }

    /// Returns the total width covered by all buttons and gaps.
    ///
    /// For a non-empty layout this equals the container width the layout was
    /// computed for, up to floating point rounding.
    #[must_use]
    pub fn occupied_width(&self) -> f64 {
        if self.centers.is_empty() {
            return 0.0;
        }
        let n = self.centers.len() as f64;
        n * self.button_size + (n + 1.0) * self.spacing
    }

    /// Returns the resting frame of button `index`.
    #[must_use]
    pub fn button_rect(&self, index: usize) -> Option<Rect> {
        self.centers
            .get(index)
            .map(|&center| Rect::from_center_size(center, self.intrinsic_size()))
    }

    /// Returns the first button whose horizontal span contains `x`.
    ///
    /// The span is closed: `[left, left + button_size]`. The vertical position
    /// is ignored because buttons occupy the full row height. Zero-sized
    /// buttons, as produced by degenerate containers, are never hit.
    #[must_use]
    pub fn hit_test_x(&self, x: f64) -> Option<usize> {
        if self.button_size <= 0.0 {
            return None;
        }
        let half = self.button_size / 2.0;
        self.centers
            .iter()
            .position(|center| x >= center.x - half && x <= center.x + half)
    }

    /// Returns the button under `point`, ignoring its vertical component.
    #[must_use]
    pub fn hit_test_point(&self, point: Point) -> Option<usize> {
        self.hit_test_x(point.x)
    }
}
