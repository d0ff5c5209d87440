// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state and the gesture transition table.
//!
//! [`SelectionState`] holds the rating plus the gesture origin: which button
//! (if any) the current gesture started on, or whether it has become a drag.
//! [`SelectionState::step`] folds one already hit-tested event into that state.
//!
//! | Event | Condition | Effect | Commits |
//! |---|---|---|---|
//! | begin on `b` | | origin = `Button(b)` | no |
//! | begin off the row | | origin = `OffButton` | no |
//! | move on `b` | | origin = `Drag`, rating = `b` | no |
//! | end on `b` | rating is `b` and origin is `Button(b)` | rating cleared | yes |
//! | end on `b` | rating is not `b` | rating = `b`, origin = `OffButton` | yes |
//! | end off the row | origin is `OffButton` | rating cleared | yes |
//!
//! Any other combination leaves the state alone. Every `End` commits, even if
//! nothing changed, so hosts can persist idempotently.
//!
//! ## Minimal example
//!
//! ```
//! use understory_rating::gesture::{GestureEvent, SelectionState};
//!
//! let mut state = SelectionState::new(5);
//!
//! // Tap on button 2.
//! state.step(GestureEvent::Begin, Some(2));
//! let step = state.step(GestureEvent::End, Some(2));
//! assert!(step.commit);
//! assert_eq!(state.rating(), Some(2));
//!
//! // Tapping it again toggles the rating off.
//! state.step(GestureEvent::Begin, Some(2));
//! state.step(GestureEvent::End, Some(2));
//! assert_eq!(state.rating(), None);
//! ```

use crate::trace::{GestureTrace, TransitionRecord};

/// Where the current gesture started, or whether it turned into a drag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureOrigin {
    /// The gesture started outside every button, or no gesture has started yet.
    #[default]
    OffButton,
    /// The gesture started on this button and has not moved across the row.
    Button(usize),
    /// The pointer moved over a button after going down.
    Drag,
}

impl GestureOrigin {
    /// Returns the signed encoding: `-1` off the row, `-2` dragging, else the button index.
    #[must_use]
    pub fn to_signed(self) -> isize {
        match self {
            Self::OffButton => -1,
            Self::Drag => -2,
            Self::Button(index) => isize::try_from(index).unwrap_or(isize::MAX),
        }
    }
}

/// A hit-tested pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureEvent {
    /// The pointer went down.
    Begin,
    /// The pointer moved while down.
    Move,
    /// The pointer was released.
    End,
}

/// The outcome of [`SelectionState::step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Step {
    /// The rating changed and the row needs to be repainted.
    pub rating_changed: bool,
    /// The gesture ended and the current rating should be reported to the host.
    pub commit: bool,
}

/// The rating plus the gesture-local origin marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    rating: Option<usize>,
    origin: GestureOrigin,
    max_rating: usize,
}

impl SelectionState {
    /// Creates an empty selection for a row of `max_rating` buttons.
    #[must_use]
    pub const fn new(max_rating: usize) -> Self {
        Self {
            rating: None,
            origin: GestureOrigin::OffButton,
            max_rating,
        }
    }

    /// Returns the current rating, `None` meaning no selection.
    #[must_use]
    pub fn rating(&self) -> Option<usize> {
        self.rating
    }

    /// Returns the current gesture origin.
    #[must_use]
    pub fn origin(&self) -> GestureOrigin {
        self.origin
    }

    /// Returns the number of rating levels.
    #[must_use]
    pub fn max_rating(&self) -> usize {
        self.max_rating
    }

    /// Clamps `rating` to the valid range for this row.
    ///
    /// Ratings past the last button clamp down to the last button rather than
    /// clearing the selection. An empty row can hold no rating.
    #[must_use]
    pub fn clamp(&self, rating: Option<usize>) -> Option<usize> {
        let last = self.max_rating.checked_sub(1)?;
        rating.map(|r| r.min(last))
    }

    /// Sets the rating, clamped, and returns whether it changed.
    #[must_use]
    pub fn set_rating(&mut self, rating: Option<usize>) -> bool {
        let rating = self.clamp(rating);
        let changed = self.rating != rating;
        self.rating = rating;
        changed
    }

    /// Sets the rating from its signed encoding and returns whether it changed.
    ///
    /// Any negative value means no selection.
    #[must_use]
    pub fn set_signed_rating(&mut self, rating: isize) -> bool {
        self.set_rating(usize::try_from(rating).ok())
    }

    /// Changes the number of rating levels, re-clamping the rating.
    ///
    /// The gesture origin is reset since button indices may no longer exist.
    pub fn set_max_rating(&mut self, max_rating: usize) {
        self.max_rating = max_rating;
        self.origin = GestureOrigin::OffButton;
        self.rating = self.clamp(self.rating);
    }

    /// Processes one hit-tested event.
    ///
    /// `hit` is the button under the pointer. Indices outside the row are
    /// treated as no button.
    pub fn step(&mut self, event: GestureEvent, hit: Option<usize>) -> Step {
        self.step_with_trace(event, hit, &mut ())
    }

    /// Like [`SelectionState::step`], reporting the transition to `trace`.
    pub fn step_with_trace(
        &mut self,
        event: GestureEvent,
        hit: Option<usize>,
        trace: &mut (impl GestureTrace + ?Sized),
    ) -> Step {
        let hit = hit.filter(|&index| index < self.max_rating);
        let rating_before = self.rating;
        let commit = match event {
            GestureEvent::Begin => {
                self.origin = hit.map_or(GestureOrigin::OffButton, GestureOrigin::Button);
                false
            }
            GestureEvent::Move => {
                if let Some(index) = hit {
                    self.origin = GestureOrigin::Drag;
                    self.rating = Some(index);
                }
                false
            }
            GestureEvent::End => {
                match hit {
                    Some(index)
                        if self.rating == Some(index)
                            && self.origin == GestureOrigin::Button(index) =>
                    {
                        self.rating = None;
                        self.origin = GestureOrigin::OffButton;
                    }
                    Some(index) if self.rating != Some(index) => {
                        self.origin = GestureOrigin::OffButton;
                        self.rating = Some(index);
                    }
                    None if self.origin == GestureOrigin::OffButton => {
                        self.rating = None;
                    }
                    Some(_) | None => {}
                }
                true
            }
        };

        let step = Step {
            rating_changed: self.rating != rating_before,
            commit,
        };
        trace.transition(&TransitionRecord {
            event,
            hit,
            rating_before,
            rating: self.rating,
            origin: self.origin,
            committed: commit,
        });
        step
    }
}
