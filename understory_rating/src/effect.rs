// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-and-forget transition effects for selection changes.
//!
//! The widget never waits for an effect to finish. Hosts that animate can map
//! a [`TransitionEffect`] onto their own animation system; hosts that do not
//! can simply read [`ButtonState::is_selected`](crate::ButtonState::is_selected)
//! when painting.

use core::time::Duration;

use crate::button::SelectionChange;
use crate::config::RatingConfig;

/// A request to animate one button's cosmetic scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransitionEffect {
    /// Index of the button to animate.
    pub index: usize,
    /// How long the transition should take.
    pub duration: Duration,
    /// Scale the button should end at, relative to its resting size.
    pub target_scale: f64,
}

impl TransitionEffect {
    /// Effect for a button that just became selected.
    #[must_use]
    pub fn select(index: usize, config: &RatingConfig) -> Self {
        Self {
            index,
            duration: config.select_duration,
            target_scale: config.effective_scale(),
        }
    }

    /// Effect for a button that just lost its selection.
    #[must_use]
    pub fn deselect(index: usize, config: &RatingConfig) -> Self {
        Self {
            index,
            duration: config.deselect_duration,
            target_scale: 1.0,
        }
    }
}

/// Effects for a selection change, deselection first.
pub(crate) fn effects_for(
    change: SelectionChange,
    config: &RatingConfig,
) -> impl Iterator<Item = TransitionEffect> {
    let deselect = change
        .deselected
        .map(|index| TransitionEffect::deselect(index, config));
    let select = change
        .selected
        .map(|index| TransitionEffect::select(index, config));
    deselect.into_iter().chain(select)
}
