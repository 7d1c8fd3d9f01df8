// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinwheel View: a headless view that is rotated, pinched, and dragged at once.
//!
//! The view keeps two layers of state:
//!
//! - A [`CommittedTransform`]: rotation, scale, and translation accumulated
//!   from gestures that have ended. It only changes when a gesture ends.
//! - A [`TransientGestureState`](pinwheel_gesture::TransientGestureState):
//!   the value of whatever gesture is in progress, recomputed on every touch.
//!
//! The transform used to draw the graphic, a [`DisplayTransform`], is always
//! the committed layer with the transient layer on top: angles add, scales
//! multiply, and translations add component-wise. It is applied as scale,
//! then rotation (both about the frame center), then translation.
//!
//! This crate does **not** render anything. Callers are expected to:
//! - Translate platform touch events into
//!   [`TouchEvent`](pinwheel_gesture::touch::TouchEvent)s and pass them to
//!   [`SimultaneousView::handle`].
//! - Draw [`Graphic::shape`] with [`SimultaneousView::affine`] using their
//!   own backend.
//!
//! ## Minimal example
//!
//! ```rust
//! use pinwheel_gesture::touch::TouchEvent;
//! use pinwheel_view::SimultaneousView;
//!
//! let mut view = SimultaneousView::default();
//!
//! // Two fingers land, then the second swings a quarter turn and doubles its distance.
//! view.handle(&TouchEvent::began(1, (100.0, 300.0)));
//! view.handle(&TouchEvent::began(2, (200.0, 300.0)));
//! view.handle(&TouchEvent::moved(2, (100.0, 500.0)));
//!
//! let display = view.display_transform();
//! assert!((display.angle.degrees() - 90.0).abs() < 1e-9);
//! assert_eq!(display.scale, 2.0);
//!
//! // Lifting a finger ends the rotate/pinch pair and commits it.
//! view.handle(&TouchEvent::ended(2, (100.0, 500.0)));
//! assert_eq!(view.committed().scale(), 2.0);
//! assert!(!view.transient().is_active());
//! ```
//!
//! ## Shared transient state
//!
//! By default the drag and the rotate/pinch pair share one transient slot,
//! and a reporting drag hides an in-progress rotation or pinch until it ends.
//! [`SlotPolicy::Separate`] gives each its own slot instead.
//!
//! Commits are logged at `debug` level through the `log` facade.
//!
//! This crate is `no_std`.

#![no_std]

mod committed;
mod config;
mod display;
mod graphic;
mod view;

pub use committed::CommittedTransform;
pub use config::{SlotPolicy, ViewConfig};
pub use display::DisplayTransform;
pub use graphic::Graphic;
pub use view::SimultaneousView;
