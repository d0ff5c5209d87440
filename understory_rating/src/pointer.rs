// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pointer tracking.
//!
//! A rating row follows one pointer at a time. [`PointerTracker`] decides
//! which raw pointer events belong to the active gesture:
//!
//! 1) A down event while idle starts tracking that pointer.
//! 2) Move and up events are accepted only from the tracked pointer.
//! 3) Up or cancel from the tracked pointer returns to idle.
//!
//! Other pointers are ignored for the lifetime of the gesture.
//!
//! ```
//! use understory_rating::pointer::{PointerId, PointerTracker};
//!
//! let mut tracker = PointerTracker::default();
//! assert!(tracker.down(PointerId(1)));
//! assert!(!tracker.down(PointerId(2)));
//! assert!(!tracker.up(PointerId(2)));
//! assert!(tracker.up(PointerId(1)));
//! assert!(!tracker.is_tracking());
//! ```

use kurbo::Point;

/// Identifies one pointer (finger, pen, or mouse) for the lifetime of a gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// The phase of a batch of touches, as delivered by a platform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Touches went down.
    Began,
    /// Touches moved.
    Moved,
    /// Touches were lifted.
    Ended,
    /// The platform took the touches away (for example, a system gesture).
    Cancelled,
}

/// One touch in a batch: which pointer, and where in widget coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Touch {
    /// The pointer this touch belongs to.
    pub pointer: PointerId,
    /// Position in the widget's local coordinate space.
    pub position: Point,
}

/// Tracks the pointer that owns the current gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PointerTracker {
    active: Option<PointerId>,
}

impl PointerTracker {
    /// Returns the pointer owning the current gesture, if any.
    #[must_use]
    pub fn active(&self) -> Option<PointerId> {
        self.active
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Handles a down event and returns whether it starts a gesture.
    ///
    /// A repeated down from the tracked pointer restarts the gesture.
    pub fn down(&mut self, pointer: PointerId) -> bool {
        match self.active {
            Some(active) if active != pointer => false,
            _ => {
                self.active = Some(pointer);
                true
            }
        }
    }

    /// Returns whether a move event from `pointer` belongs to the gesture.
    #[must_use]
    pub fn accepts(&self, pointer: PointerId) -> bool {
        self.active == Some(pointer)
    }

    /// Handles an up event and returns whether it ends the gesture.
    pub fn up(&mut self, pointer: PointerId) -> bool {
        self.finish(pointer)
    }

    /// Handles a cancel event and returns whether it aborts the gesture.
    pub fn cancel(&mut self, pointer: PointerId) -> bool {
        self.finish(pointer)
    }

    /// Drops the current gesture, if any.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Picks the touch from a batch that this tracker cares about.
    ///
    /// A `Began` batch offers its first touch (only when idle, or when that
    /// touch is the tracked pointer). Other phases offer the tracked pointer's
    /// touch. Empty batches offer nothing.
    #[must_use]
    pub fn pick<'a>(&self, phase: TouchPhase, touches: &'a [Touch]) -> Option<&'a Touch> {
        match phase {
            TouchPhase::Began => touches
                .first()
                .filter(|touch| self.active.is_none_or(|active| active == touch.pointer)),
            TouchPhase::Moved | TouchPhase::Ended | TouchPhase::Cancelled => {
                let active = self.active?;
                touches.iter().find(|touch| touch.pointer == active)
            }
        }
    }

    fn finish(&mut self, pointer: PointerId) -> bool {
        if self.accepts(pointer) {
            self.active = None;
            true
        } else {
            false
        }
    }
}
