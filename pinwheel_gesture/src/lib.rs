// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinwheel Gesture: touch recognizers and transient gesture state.
//!
//! This crate turns raw multi-touch samples into the in-progress state of
//! three gestures that may run at the same time:
//!
//! - [`RotationGesture`]: two-finger twist, reported as an [`Angle`].
//! - [`MagnificationGesture`]: two-finger pinch, reported as a scale factor.
//! - [`DragGesture`]: one-finger pan, reported as a [`kurbo::Vec2`].
//!
//! [`Simultaneous`] runs two recognizers on the same touches so that both can
//! report within one touch sequence. Its [`SimultaneousValue`] reduces to a
//! [`TransientGestureState`], the single in-progress value a view composes
//! with its committed transform.
//!
//! Recognizers do not own touch bookkeeping. Hosts feed platform events into
//! a [`touch::Touches`] set and pass that set to each recognizer.
//!
//! ## Example
//!
//! ```rust
//! use pinwheel_gesture::touch::{TouchEvent, Touches};
//! use pinwheel_gesture::{
//!     Gesture, MagnificationGesture, RotationGesture, Simultaneous, TransientGestureState,
//! };
//!
//! let mut pair = Simultaneous::new(RotationGesture::default(), MagnificationGesture::default());
//! let mut touches = Touches::new();
//!
//! touches.apply(&TouchEvent::began(1, (0.0, 0.0)));
//! touches.apply(&TouchEvent::began(2, (100.0, 0.0)));
//! pair.update(&touches);
//!
//! // Spread the fingers without twisting.
//! touches.apply(&TouchEvent::moved(2, (150.0, 0.0)));
//! let state = TransientGestureState::from_simultaneous(pair.update(&touches).unwrap());
//! assert_eq!(state, TransientGestureState::Zooming { scale: 1.5 });
//! assert_eq!(state.rotation_angle().radians(), 0.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//!
//! Recognition events are logged at `trace` level through the `log` facade.
//!
//! This crate is `no_std`.

#![no_std]

mod angle;
mod drag;
mod magnification;
mod rotation;
mod simultaneous;
pub mod touch;
mod transient;

pub use angle::Angle;
pub use drag::DragGesture;
pub use magnification::MagnificationGesture;
pub use rotation::RotationGesture;
pub use simultaneous::{Simultaneous, SimultaneousValue};
pub use transient::TransientGestureState;

use touch::Touches;

/// A recognizer that reads live touches and reports a value once its gesture is recognized.
///
/// A recognizer is *tracking* from the moment it has the touches it needs
/// until it is ended or cancelled. While tracking, it reports `None` until its
/// threshold is crossed, and `Some` from then on.
pub trait Gesture {
    /// Value reported while the gesture is recognized.
    type Value: Copy;

    /// Feeds the current touches and returns the current value.
    fn update(&mut self, touches: &Touches) -> Option<Self::Value>;

    /// Current value without feeding new touches.
    fn value(&self) -> Option<Self::Value>;

    /// Returns `true` while the recognizer is following touches.
    fn is_tracking(&self) -> bool;

    /// Ends the gesture, returning the final value if it was recognized.
    fn end(&mut self) -> Option<Self::Value>;

    /// Abandons the gesture without reporting a final value.
    fn cancel(&mut self);
}
