// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rating widget: buttons, layout, selection, and pointer input in one place.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Size};
use understory_rating_layout::{RowLayout, compute_row_layout};

use crate::button::{ButtonRow, ButtonState};
use crate::config::RatingConfig;
use crate::effect::{TransitionEffect, effects_for};
use crate::error::ConfigurationError;
use crate::gesture::{GestureEvent, SelectionState, Step};
use crate::pointer::{PointerId, PointerTracker, Touch, TouchPhase};
use crate::trace::GestureTrace;

type CommitCallback = Box<dyn FnMut(Option<usize>)>;
type TransitionCallback = Box<dyn FnMut(TransitionEffect)>;

/// A horizontal row of icon buttons that the user rates by tapping or dragging.
///
/// The widget owns one [`ButtonState`] per icon, the current [`RowLayout`], and
/// the [`SelectionState`]. Hosts feed it pointer events in widget-local
/// coordinates and read button state back when painting.
///
/// Mutations never lay out implicitly: they mark the widget as needing layout
/// (see [`RatingWidget::needs_layout`]) and the host runs
/// [`RatingWidget::layout`] before painting. Pointer handlers flush a pending
/// layout first so hit testing never sees stale geometry.
///
/// The host is told about the rating through the commit callback, once per
/// completed gesture. Assigning the rating directly never calls it.
pub struct RatingWidget<I> {
    config: RatingConfig,
    container: Size,
    buttons: ButtonRow<I>,
    selection: SelectionState,
    pointer: PointerTracker,
    rating_at_down: Option<usize>,
    layout: RowLayout,
    needs_layout: bool,
    on_commit: Option<CommitCallback>,
    on_transition: Option<TransitionCallback>,
    trace: Option<Box<dyn GestureTrace>>,
}

impl<I: fmt::Debug> fmt::Debug for RatingWidget<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingWidget")
            .field("config", &self.config)
            .field("container", &self.container)
            .field("buttons", &self.buttons)
            .field("selection", &self.selection)
            .field("pointer", &self.pointer)
            .field("rating_at_down", &self.rating_at_down)
            .field("layout", &self.layout)
            .field("needs_layout", &self.needs_layout)
            .finish_non_exhaustive()
    }
}

impl<I> RatingWidget<I> {
    /// Builds a widget with one button per icon and lays it out in `container`.
    ///
    /// `to_inactive` derives the unselected variant of each icon, typically a
    /// grayscale copy supplied by the platform's image toolkit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyIconSet`] if `icons` is empty.
    pub fn new(
        container: Size,
        config: RatingConfig,
        icons: Vec<I>,
        to_inactive: impl FnMut(&I) -> I,
    ) -> Result<Self, ConfigurationError> {
        if icons.is_empty() {
            return Err(ConfigurationError::EmptyIconSet);
        }
        let buttons = ButtonRow::from_icons(icons, to_inactive);
        let mut widget = Self {
            config,
            container,
            selection: SelectionState::new(buttons.len()),
            buttons,
            pointer: PointerTracker::default(),
            rating_at_down: None,
            layout: RowLayout::default(),
            needs_layout: true,
            on_commit: None,
            on_transition: None,
            trace: None,
        };
        widget.layout();
        Ok(widget)
    }

    /// Sets the callback that receives the rating at the end of every gesture.
    pub fn set_on_commit(&mut self, on_commit: impl FnMut(Option<usize>) + 'static) {
        self.on_commit = Some(Box::new(on_commit));
    }

    /// Sets the callback that receives selection transition effects.
    pub fn set_on_transition(&mut self, on_transition: impl FnMut(TransitionEffect) + 'static) {
        self.on_transition = Some(Box::new(on_transition));
    }

    /// Installs a sink for gesture transition records.
    ///
    /// The widget owns the sink, so hosts that want to read records back
    /// pass a closure that forwards them to storage they share with it.
    pub fn set_trace(&mut self, trace: impl GestureTrace + 'static) {
        self.trace = Some(Box::new(trace));
    }

    /// Returns the presentation settings.
    #[must_use]
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Returns the current container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Returns the current rating, `None` meaning no selection.
    #[must_use]
    pub fn rating(&self) -> Option<usize> {
        self.selection.rating()
    }

    /// Returns the number of rating levels (one per icon).
    #[must_use]
    pub fn max_rating(&self) -> usize {
        self.selection.max_rating()
    }

    /// Returns the selection state, including the current gesture origin.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Returns the buttons in index order.
    #[must_use]
    pub fn buttons(&self) -> &[ButtonState<I>] {
        self.buttons.as_slice()
    }

    /// Returns the layout from the most recent layout pass.
    #[must_use]
    pub fn row_layout(&self) -> &RowLayout {
        &self.layout
    }

    /// Returns the resting size of one button from the most recent layout pass.
    #[must_use]
    pub fn intrinsic_size(&self) -> Size {
        self.layout.intrinsic_size()
    }

    /// Returns `true` if a mutation has requested a layout pass.
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Returns `true` while a pointer gesture is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.pointer.is_tracking()
    }

    /// Assigns the rating directly, for example to restore a persisted value.
    ///
    /// The value is clamped to the last button. The commit callback is not
    /// called.
    pub fn set_rating(&mut self, rating: Option<usize>) {
        if self.selection.set_rating(rating) {
            self.sync_selection();
        }
        self.request_layout();
    }

    /// Assigns the rating from its signed encoding, where negative means none.
    ///
    /// Values past the last button clamp down to it. The commit callback is
    /// not called.
    pub fn set_signed_rating(&mut self, rating: isize) {
        if self.selection.set_signed_rating(rating) {
            self.sync_selection();
        }
        self.request_layout();
    }

    /// Changes the container size. The rating is preserved.
    pub fn resize(&mut self, container: Size) {
        if self.container != container {
            self.container = container;
            self.request_layout();
        }
    }

    /// Replaces the icon set, which may change the number of rating levels.
    ///
    /// The rating is clamped to the new range and any gesture in progress is
    /// dropped without a commit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyIconSet`] if `icons` is empty; the
    /// widget is left unchanged.
    pub fn set_icons(
        &mut self,
        icons: Vec<I>,
        to_inactive: impl FnMut(&I) -> I,
    ) -> Result<(), ConfigurationError> {
        if icons.is_empty() {
            return Err(ConfigurationError::EmptyIconSet);
        }
        self.buttons = ButtonRow::from_icons(icons, to_inactive);
        self.selection.set_max_rating(self.buttons.len());
        // The buttons were rebuilt unselected, so sync whether or not the rating moved.
        self.pointer.reset();
        self.sync_selection();
        self.request_layout();
        Ok(())
    }

    /// Marks the widget as needing a layout pass.
    pub fn request_layout(&mut self) {
        self.needs_layout = true;
    }

    /// Runs a layout pass if one has been requested.
    pub fn layout_if_needed(&mut self) {
        if self.needs_layout {
            self.layout();
        }
    }

    /// Recomputes button geometry and re-applies the selection flags.
    pub fn layout(&mut self) {
        self.layout = compute_row_layout(
            self.container,
            self.buttons.len(),
            self.config.selected_scale,
        );
        self.buttons.apply_layout(&self.layout);
        self.sync_selection();
        self.needs_layout = false;
    }

    /// Returns the button under `position`, ignoring its vertical component.
    #[must_use]
    pub fn hit_test(&self, position: Point) -> Option<usize> {
        self.layout.hit_test_point(position)
    }

    /// Handles a pointer going down. Returns the step if the event was accepted.
    ///
    /// A repeated down from the tracked pointer restarts the gesture but keeps
    /// the rating that [`RatingWidget::pointer_cancel`] restores.
    pub fn pointer_down(&mut self, pointer: PointerId, position: Point) -> Option<Step> {
        let restarting = self.pointer.is_tracking();
        if !self.pointer.down(pointer) {
            return None;
        }
        if !restarting {
            self.rating_at_down = self.selection.rating();
        }
        Some(self.dispatch(GestureEvent::Begin, position))
    }

    /// Handles pointer motion. Events from untracked pointers are ignored.
    pub fn pointer_move(&mut self, pointer: PointerId, position: Point) -> Option<Step> {
        if !self.pointer.accepts(pointer) {
            return None;
        }
        Some(self.dispatch(GestureEvent::Move, position))
    }

    /// Handles a pointer release, committing the rating to the host.
    pub fn pointer_up(&mut self, pointer: PointerId, position: Point) -> Option<Step> {
        if !self.pointer.up(pointer) {
            return None;
        }
        Some(self.dispatch(GestureEvent::End, position))
    }

    /// Handles a cancelled pointer.
    ///
    /// The gesture ends without a commit and the rating returns to what it was
    /// when the pointer went down. Returns whether the event was accepted.
    pub fn pointer_cancel(&mut self, pointer: PointerId) -> bool {
        if !self.pointer.cancel(pointer) {
            return false;
        }
        if self.selection.set_rating(self.rating_at_down) {
            self.sync_selection();
            self.request_layout();
        }
        true
    }

    /// Handles a platform batch of touches; only one touch is followed.
    ///
    /// Empty batches, and batches without the tracked pointer, are ignored.
    pub fn handle_touches(&mut self, phase: TouchPhase, touches: &[Touch]) -> Option<Step> {
        let touch = *self.pointer.pick(phase, touches)?;
        match phase {
            TouchPhase::Began => self.pointer_down(touch.pointer, touch.position),
            TouchPhase::Moved => self.pointer_move(touch.pointer, touch.position),
            TouchPhase::Ended => self.pointer_up(touch.pointer, touch.position),
            TouchPhase::Cancelled => {
                self.pointer_cancel(touch.pointer);
                None
            }
        }
    }

    fn dispatch(&mut self, event: GestureEvent, position: Point) -> Step {
        self.layout_if_needed();
        let hit = self.hit_test(position);
        let step = match self.trace.as_deref_mut() {
            Some(trace) => self.selection.step_with_trace(event, hit, trace),
            None => self.selection.step(event, hit),
        };
        if step.rating_changed {
            self.sync_selection();
            self.request_layout();
        }
        if step.commit {
            let rating = self.selection.rating();
            if let Some(on_commit) = self.on_commit.as_mut() {
                on_commit(rating);
            }
        }
        step
    }

    /// Makes the button flags mirror the rating and plays effects for flips.
    fn sync_selection(&mut self) {
        let change = self.buttons.apply_selection(self.selection.rating());
        if let Some(on_transition) = self.on_transition.as_mut() {
            for effect in effects_for(change, &self.config) {
                on_transition(effect);
            }
        }
    }
}
