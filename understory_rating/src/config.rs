// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation settings supplied when a widget is built.

use core::time::Duration;

use understory_rating_layout::effective_scale;

/// Scale applied to a selected button when no other value is configured.
pub const DEFAULT_SELECTED_SCALE: f64 = 1.3;

/// Presentation settings for a rating row.
///
/// The defaults match a typical emoji rating control: selected buttons grow to
/// 1.3x over 200 ms and shrink back over 100 ms.
///
/// ```rust
/// use core::time::Duration;
/// use understory_rating::RatingConfig;
///
/// let config = RatingConfig::default()
///     .with_selected_scale(1.2)
///     .with_select_duration(Duration::from_millis(150));
/// assert_eq!(config.selected_scale, 1.2);
/// assert_eq!(config.deselect_duration, Duration::from_millis(100));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RatingConfig {
    /// Linear scale of a selected button relative to its resting size.
    ///
    /// Values at or below `1.0` disable the visual distinction; see
    /// [`RatingConfig::effective_scale`].
    pub selected_scale: f64,
    /// Duration of the effect played when a button becomes selected.
    pub select_duration: Duration,
    /// Duration of the effect played when a button is deselected.
    pub deselect_duration: Duration,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            selected_scale: DEFAULT_SELECTED_SCALE,
            select_duration: Duration::from_millis(200),
            deselect_duration: Duration::from_millis(100),
        }
    }
}

impl RatingConfig {
    /// Returns a copy with `selected_scale` replaced.
    #[must_use]
    pub fn with_selected_scale(mut self, selected_scale: f64) -> Self {
        self.selected_scale = selected_scale;
        self
    }

    /// Returns a copy with `select_duration` replaced.
    #[must_use]
    pub fn with_select_duration(mut self, duration: Duration) -> Self {
        self.select_duration = duration;
        self
    }

    /// Returns a copy with `deselect_duration` replaced.
    #[must_use]
    pub fn with_deselect_duration(mut self, duration: Duration) -> Self {
        self.deselect_duration = duration;
        self
    }

    /// Returns the scale actually used for layout and selection effects.
    ///
    /// This is `selected_scale` when it is finite and greater than `1.0`, and
    /// `1.0` otherwise.
    #[must_use]
    pub fn effective_scale(&self) -> f64 {
        effective_scale(self.selected_scale)
    }
}
