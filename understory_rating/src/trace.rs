// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for gesture transitions.
//!
//! The state machine does not log. Embedders that want to answer "why did the
//! rating end up here?" can install a [`GestureTrace`] sink, which receives one
//! [`TransitionRecord`] per processed gesture event.

use alloc::vec::Vec;

use crate::gesture::{GestureEvent, GestureOrigin};

/// What one gesture event did to the selection state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransitionRecord {
    /// The event that was processed.
    pub event: GestureEvent,
    /// The button under the pointer, if any.
    pub hit: Option<usize>,
    /// Rating before the event.
    pub rating_before: Option<usize>,
    /// Rating after the event.
    pub rating: Option<usize>,
    /// Gesture origin after the event.
    pub origin: GestureOrigin,
    /// Whether the event committed the rating to the host.
    pub committed: bool,
}

/// A callback sink for gesture transitions.
pub trait GestureTrace {
    /// Called once for every event the state machine processes.
    fn transition(&mut self, record: &TransitionRecord);
}

impl GestureTrace for () {
    fn transition(&mut self, _record: &TransitionRecord) {}
}

/// Records every transition in order.
///
/// Meant to be borrowed by [`SelectionState::step_with_trace`]. A recorder
/// handed to [`RatingWidget::set_trace`] is owned by the widget and cannot be
/// read back; forward records from a closure instead.
///
/// [`SelectionState::step_with_trace`]: crate::SelectionState::step_with_trace
/// [`RatingWidget::set_trace`]: crate::RatingWidget::set_trace
impl GestureTrace for Vec<TransitionRecord> {
    fn transition(&mut self, record: &TransitionRecord) {
        self.push(*record);
    }
}

impl<F: FnMut(&TransitionRecord)> GestureTrace for F {
    fn transition(&mut self, record: &TransitionRecord) {
        self(record);
    }
}
