// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-button records and the single-selection helper.
//!
//! Buttons are plain data owned by the widget. A platform binding reads each
//! [`ButtonState`] (icon, frame, selection flag) and paints it; nothing here
//! depends on a GUI toolkit.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use understory_rating_layout::RowLayout;

/// One rating button: its icons, selection flag, and last laid out geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonState<I> {
    index: usize,
    inactive_icon: I,
    active_icon: I,
    selected: bool,
    center: Point,
    size: Size,
}

impl<I> ButtonState<I> {
    /// Returns the button's position in the row, which is also the rating it stands for.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the icon shown while the button is not selected.
    #[must_use]
    pub fn inactive_icon(&self) -> &I {
        &self.inactive_icon
    }

    /// Returns the icon shown while the button is selected.
    #[must_use]
    pub fn active_icon(&self) -> &I {
        &self.active_icon
    }

    /// Returns the icon matching the current selection flag.
    #[must_use]
    pub fn icon(&self) -> &I {
        if self.selected {
            &self.active_icon
        } else {
            &self.inactive_icon
        }
    }

    /// Returns `true` if this is the selected button.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Returns the button center from the most recent layout pass.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the resting size from the most recent layout pass.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the resting frame from the most recent layout pass.
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }
}

/// Which buttons flipped their selection flag during one update.
///
/// Because at most one button is selected at a time, a single update can
/// deselect at most one button and select at most one button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionChange {
    /// The button that lost its selection, if any.
    pub deselected: Option<usize>,
    /// The button that gained the selection, if any.
    pub selected: Option<usize>,
}

impl SelectionChange {
    /// Returns `true` if no button changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deselected.is_none() && self.selected.is_none()
    }
}

/// The row of buttons, enforcing "at most one selected".
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonRow<I> {
    buttons: Vec<ButtonState<I>>,
}

impl<I> Default for ButtonRow<I> {
    fn default() -> Self {
        Self {
            buttons: Vec::new(),
        }
    }
}

impl<I> ButtonRow<I> {
    /// Builds one unselected button per icon.
    ///
    /// `to_inactive` derives the resting variant of each icon (for example a
    /// grayscale copy); it runs once per icon.
    pub fn from_icons(icons: Vec<I>, mut to_inactive: impl FnMut(&I) -> I) -> Self {
        let buttons = icons
            .into_iter()
            .enumerate()
            .map(|(index, active_icon)| ButtonState {
                index,
                inactive_icon: to_inactive(&active_icon),
                active_icon,
                selected: false,
                center: Point::ZERO,
                size: Size::ZERO,
            })
            .collect();
        Self { buttons }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Returns `true` if the row has no buttons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Returns all buttons in index order.
    #[must_use]
    pub fn as_slice(&self) -> &[ButtonState<I>] {
        &self.buttons
    }

    /// Returns button `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ButtonState<I>> {
        self.buttons.get(index)
    }

    /// Returns the index of the selected button, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.selected)
    }

    /// Copies centers and resting size from `layout` onto the buttons.
    ///
    /// Buttons beyond the layout's length keep their previous geometry.
    pub fn apply_layout(&mut self, layout: &RowLayout) {
        let size = layout.intrinsic_size();
        for (button, center) in self.buttons.iter_mut().zip(layout.centers()) {
            button.center = *center;
            button.size = size;
        }
    }

    /// Clears every selection flag.
    pub fn deselect_all(&mut self) -> SelectionChange {
        let mut change = SelectionChange::default();
        for button in &mut self.buttons {
            if button.selected {
                button.selected = false;
                change.deselected = Some(button.index);
            }
        }
        change
    }

    /// Selects button `index` and deselects every other button.
    ///
    /// Out of range indices leave the row untouched.
    pub fn select_only(&mut self, index: usize) -> SelectionChange {
        if index >= self.buttons.len() {
            return SelectionChange::default();
        }
        let mut change = SelectionChange::default();
        for button in &mut self.buttons {
            let selected = button.index == index;
            if button.selected != selected {
                button.selected = selected;
                if selected {
                    change.selected = Some(button.index);
                } else {
                    change.deselected = Some(button.index);
                }
            }
        }
        change
    }

    /// Makes the selection flags mirror `rating`.
    ///
    /// `None` deselects everything, a valid index selects only that button,
    /// and an out of range index is ignored.
    pub fn apply_selection(&mut self, rating: Option<usize>) -> SelectionChange {
        match rating {
            None => self.deselect_all(),
            Some(index) if index < self.buttons.len() => self.select_only(index),
            Some(_) => SelectionChange::default(),
        }
    }
}
