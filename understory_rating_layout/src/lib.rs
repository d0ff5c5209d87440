// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rating_layout --heading-base-level=0

//! Understory Rating Layout: place a single row of uniformly sized, scalable buttons.
//!
//! This crate computes where the buttons of a rating row go: one resting
//! button size, one gap size, and one center per button. It is pure geometry
//! over [`kurbo`] types and knows nothing about icons, selection, or input.
//!
//! The layout reserves horizontal room so that any button, when magnified by
//! the `selected_scale` factor, still fits between its neighbours, and caps the
//! button size so that the magnified button fits vertically:
//!
//! - `button_size = min(h / s, w / (n + (n + 1) * (s - 1) / 2))`
//! - `spacing = (w - n * button_size) / (n + 1)`
//! - `center[i] = (button_size / 2 + spacing + i * (button_size + spacing), h / 2)`
//!
//! `n` buttons create `n + 1` equal gaps, including the left and right margins,
//! so the row always spans exactly the container width.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_rating_layout::compute_row_layout;
//!
//! // Five buttons in a 300x60 container; selected buttons render at 1.2x.
//! let layout = compute_row_layout(Size::new(300.0, 60.0), 5, 1.2);
//! assert_eq!(layout.len(), 5);
//! assert!(layout.button_size() <= 60.0 / 1.2);
//! assert!((layout.occupied_width() - 300.0).abs() < 1e-9);
//!
//! // Hit testing only looks at the horizontal axis.
//! let center = layout.centers()[2];
//! assert_eq!(layout.hit_test_x(center.x), Some(2));
//! ```
//!
//! Selection-driven magnification is a presentation transform applied on top
//! of this layout; it never changes the stored centers or size.
//!
//! This crate is `no_std`; button centers are stored inline for typical row lengths.

#![no_std]

mod row;

pub use row::{INLINE_BUTTONS, RowLayout, compute_row_layout, effective_scale};
