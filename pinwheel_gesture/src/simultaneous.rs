// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Gesture;
use crate::touch::Touches;

/// Combined sample of two recognizers running on the same touches.
///
/// Either side is `None` while that recognizer has not recognized its gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimultaneousValue<A, B> {
    /// Value of the first recognizer.
    pub first: Option<A>,
    /// Value of the second recognizer.
    pub second: Option<B>,
}

impl<A, B> SimultaneousValue<A, B> {
    /// Creates a sample from its two halves.
    #[must_use]
    pub const fn new(first: Option<A>, second: Option<B>) -> Self {
        Self { first, second }
    }
}

impl<A, B> Default for SimultaneousValue<A, B> {
    fn default() -> Self {
        Self {
            first: None,
            second: None,
        }
    }
}

/// Runs two recognizers side by side so both can report within one touch sequence.
///
/// The pair is tracking while either side is. Ending the pair ends both sides
/// and reports whatever each had recognized.
#[derive(Clone, Debug, Default)]
pub struct Simultaneous<A, B> {
    first: A,
    second: B,
}

impl<A, B> Simultaneous<A, B> {
    /// Combines two recognizers.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// The first recognizer.
    #[must_use]
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The second recognizer.
    #[must_use]
    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A: Gesture, B: Gesture> Gesture for Simultaneous<A, B> {
    type Value = SimultaneousValue<A::Value, B::Value>;

    fn update(&mut self, touches: &Touches) -> Option<Self::Value> {
        let first = self.first.update(touches);
        let second = self.second.update(touches);
        self.is_tracking()
            .then_some(SimultaneousValue::new(first, second))
    }

    fn value(&self) -> Option<Self::Value> {
        self.is_tracking()
            .then(|| SimultaneousValue::new(self.first.value(), self.second.value()))
    }

    fn is_tracking(&self) -> bool {
        self.first.is_tracking() || self.second.is_tracking()
    }

    fn end(&mut self) -> Option<Self::Value> {
        let tracking = self.is_tracking();
        let value = SimultaneousValue::new(self.first.end(), self.second.end());
        tracking.then_some(value)
    }

    fn cancel(&mut self) {
        self.first.cancel();
        self.second.cancel();
    }
}
