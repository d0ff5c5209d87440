// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rating --heading-base-level=0

//! Understory Rating: a headless rating row driven by tap and drag gestures.
//!
//! A rating row is a horizontal strip of icon buttons, one per rating level.
//! The user picks a level by tapping a button or dragging across the row; the
//! widget reports the committed rating to the host when the gesture ends.
//!
//! The crate is split into small pieces that can be used on their own:
//!
//! - [`gesture`]: [`SelectionState`] and the transition table that turns
//!   hit-tested begin/move/end events into a rating.
//! - [`pointer`]: [`PointerTracker`], which follows a single pointer per gesture.
//! - [`trace`]: [`GestureTrace`] hooks for explaining transitions.
//! - [`RatingWidget`]: ties the above to [`understory_rating_layout`] and a row
//!   of [`ButtonState`] records.
//!
//! The widget does not draw. A platform binding reads each button's icon,
//! frame, and selection flag, and may animate the selected button's scale
//! using the [`TransitionEffect`]s the widget emits.
//!
//! ## Gestures
//!
//! - Tapping an unselected button selects it.
//! - Tapping the selected button clears the rating.
//! - Dragging previews the button under the pointer as the rating; releasing
//!   keeps it.
//! - Tapping outside every button clears the rating, but only when the
//!   gesture also started outside every button.
//!
//! Every completed gesture commits, even when the rating did not change.
//! Assigning the rating directly never commits.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::Size;
//! use understory_rating::{PointerId, RatingConfig, RatingWidget};
//!
//! let icons = vec!["cry", "meh", "ok", "like", "love"];
//! let mut widget = RatingWidget::new(
//!     Size::new(300.0, 60.0),
//!     RatingConfig::default().with_selected_scale(1.2),
//!     icons,
//!     |icon| *icon,
//! )
//! .unwrap();
//!
//! let committed = Rc::new(RefCell::new(Vec::new()));
//! let sink = committed.clone();
//! widget.set_on_commit(move |rating| sink.borrow_mut().push(rating));
//!
//! // Tap the middle button.
//! let center = widget.buttons()[2].center();
//! widget.pointer_down(PointerId(0), center);
//! widget.pointer_up(PointerId(0), center);
//! assert_eq!(widget.rating(), Some(2));
//! assert!(widget.buttons()[2].is_selected());
//! assert_eq!(*committed.borrow(), [Some(2)]);
//!
//! // Restoring a persisted value clamps and does not commit.
//! widget.set_rating(Some(10));
//! assert_eq!(widget.rating(), Some(4));
//! assert_eq!(committed.borrow().len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod button;
mod config;
mod effect;
mod error;
pub mod gesture;
pub mod pointer;
pub mod trace;
mod widget;

pub use button::{ButtonRow, ButtonState, SelectionChange};
pub use config::{DEFAULT_SELECTED_SCALE, RatingConfig};
pub use effect::TransitionEffect;
pub use error::ConfigurationError;
pub use gesture::{GestureEvent, GestureOrigin, SelectionState, Step};
pub use pointer::{PointerId, PointerTracker, Touch, TouchPhase};
pub use trace::{GestureTrace, TransitionRecord};
pub use widget::RatingWidget;
