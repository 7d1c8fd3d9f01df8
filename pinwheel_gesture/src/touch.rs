// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw touch input: identifiers, phases, and the set of live touches.
//!
//! Hosts translate their platform touch events into [`TouchEvent`]s and feed
//! them to a [`Touches`] set. Recognizers read the set; they never see the
//! events themselves.
//!
//! ```
//! use pinwheel_gesture::touch::{TouchEvent, Touches};
//!
//! let mut touches = Touches::new();
//! touches.apply(&TouchEvent::began(1, (10.0, 10.0)));
//! touches.apply(&TouchEvent::began(2, (50.0, 10.0)));
//! assert_eq!(touches.len(), 2);
//!
//! touches.apply(&TouchEvent::ended(1, (10.0, 10.0)));
//! assert_eq!(touches.len(), 1);
//! assert!(touches.pair().is_none());
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// Identifies one finger for the lifetime of its touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub u64);

/// Lifecycle phase carried by a [`TouchEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger went down.
    Began,
    /// A finger moved while down.
    Moved,
    /// A finger lifted.
    Ended,
    /// The host aborted the touch sequence (for example, an incoming call).
    Cancelled,
}

/// One touch sample delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    /// Which finger this sample belongs to.
    pub id: TouchId,
    /// Lifecycle phase of the sample.
    pub phase: TouchPhase,
    /// Position in view coordinates.
    pub position: Point,
}

impl TouchEvent {
    /// Creates a sample.
    #[must_use]
    pub fn new(id: u64, phase: TouchPhase, position: impl Into<Point>) -> Self {
        Self {
            id: TouchId(id),
            phase,
            position: position.into(),
        }
    }

    /// Shorthand for a [`TouchPhase::Began`] sample.
    #[must_use]
    pub fn began(id: u64, position: impl Into<Point>) -> Self {
        Self::new(id, TouchPhase::Began, position)
    }

    /// Shorthand for a [`TouchPhase::Moved`] sample.
    #[must_use]
    pub fn moved(id: u64, position: impl Into<Point>) -> Self {
        Self::new(id, TouchPhase::Moved, position)
    }

    /// Shorthand for a [`TouchPhase::Ended`] sample.
    #[must_use]
    pub fn ended(id: u64, position: impl Into<Point>) -> Self {
        Self::new(id, TouchPhase::Ended, position)
    }

    /// Shorthand for a [`TouchPhase::Cancelled`] sample.
    #[must_use]
    pub fn cancelled(id: u64, position: impl Into<Point>) -> Self {
        Self::new(id, TouchPhase::Cancelled, position)
    }
}

/// A live touch: a finger currently on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Touch {
    /// Finger identifier.
    pub id: TouchId,
    /// Latest known position.
    pub position: Point,
}

/// The set of live touches, kept in arrival order.
#[derive(Clone, Debug, Default)]
pub struct Touches {
    live: SmallVec<[Touch; 4]>,
}

impl Touches {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event, returning `true` if the set changed.
    ///
    /// Samples for unknown fingers and samples with non-finite positions are
    /// ignored. A repeated `Began` for a live finger is treated as a move.
    pub fn apply(&mut self, event: &TouchEvent) -> bool {
        let index = self.live.iter().position(|t| t.id == event.id);
        match event.phase {
            TouchPhase::Began | TouchPhase::Moved => {
                if !event.position.is_finite() {
                    return false;
                }
                match (index, event.phase) {
                    (Some(i), _) => {
                        self.live[i].position = event.position;
                        true
                    }
                    (None, TouchPhase::Began) => {
                        self.live.push(Touch {
                            id: event.id,
                            position: event.position,
                        });
                        true
                    }
                    (None, _) => false,
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => match index {
                Some(i) => {
                    self.live.remove(i);
                    true
                }
                None => false,
            },
        }
    }

    /// Number of live touches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` when no finger is down.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Latest position of the given finger, if it is live.
    #[must_use]
    pub fn get(&self, id: TouchId) -> Option<Point> {
        self.live.iter().find(|t| t.id == id).map(|t| t.position)
    }

    /// The two oldest live touches.
    #[must_use]
    pub fn pair(&self) -> Option<(Touch, Touch)> {
        match self.live.as_slice() {
            [a, b, ..] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Forgets every live touch.
    pub fn clear(&mut self) {
        self.live.clear();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{TouchEvent, TouchId, TouchPhase, Touches};

    #[test]
    fn began_moved_ended_track_positions() {
        let mut touches = Touches::new();
        assert!(touches.apply(&TouchEvent::began(7, (1.0, 2.0))));
        assert_eq!(touches.get(TouchId(7)), Some(Point::new(1.0, 2.0)));

        assert!(touches.apply(&TouchEvent::moved(7, (3.0, 4.0))));
        assert_eq!(touches.get(TouchId(7)), Some(Point::new(3.0, 4.0)));

        assert!(touches.apply(&TouchEvent::ended(7, (3.0, 4.0))));
        assert!(touches.is_empty());
    }

    #[test]
    fn unknown_fingers_are_ignored() {
        let mut touches = Touches::new();
        assert!(!touches.apply(&TouchEvent::moved(1, (0.0, 0.0))));
        assert!(!touches.apply(&TouchEvent::ended(1, (0.0, 0.0))));
        assert!(!touches.apply(&TouchEvent::cancelled(1, (0.0, 0.0))));
        assert!(touches.is_empty());
    }

    #[test]
    fn non_finite_positions_are_ignored() {
        let mut touches = Touches::new();
        assert!(!touches.apply(&TouchEvent::began(1, (f64::NAN, 0.0))));
        assert!(touches.is_empty());

        touches.apply(&TouchEvent::began(1, (0.0, 0.0)));
        assert!(!touches.apply(&TouchEvent::moved(1, (f64::INFINITY, 0.0))));
        assert_eq!(touches.get(TouchId(1)), Some(Point::ZERO));
    }

    #[test]
    fn pair_is_the_two_oldest_touches() {
        let mut touches = Touches::new();
        touches.apply(&TouchEvent::began(1, (0.0, 0.0)));
        assert!(touches.pair().is_none());

        touches.apply(&TouchEvent::began(2, (1.0, 0.0)));
        touches.apply(&TouchEvent::began(3, (2.0, 0.0)));
        let (a, b) = touches.pair().unwrap();
        assert_eq!((a.id, b.id), (TouchId(1), TouchId(2)));

        // Lifting the oldest promotes the third finger into the pair.
        touches.apply(&TouchEvent::ended(1, (0.0, 0.0)));
        let (a, b) = touches.pair().unwrap();
        assert_eq!((a.id, b.id), (TouchId(2), TouchId(3)));
    }

    #[test]
    fn repeated_began_moves_the_existing_touch() {
        let mut touches = Touches::new();
        touches.apply(&TouchEvent::began(1, (0.0, 0.0)));
        touches.apply(&TouchEvent::new(1, TouchPhase::Began, (5.0, 5.0)));
        assert_eq!(touches.len(), 1);
        assert_eq!(touches.get(TouchId(1)), Some(Point::new(5.0, 5.0)));
    }
}
