// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted touch sequences.

use kurbo::{Point, Vec2};
use pinwheel_gesture::touch::TouchEvent;

/// Which sequence to replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Scenario {
    /// Two fingers twist a quarter turn while spreading to twice their distance.
    RotatePinch,
    /// One finger drags the graphic down and to the right.
    Drag,
    /// Two fingers twist while the first finger also drags.
    Interference,
    /// Every scenario above, one after another.
    All,
}

impl Scenario {
    /// Builds the touch samples for this scenario, interpolating each motion over `steps` samples.
    pub(crate) fn events(self, steps: u32) -> Vec<TouchEvent> {
        let steps = steps.max(1);
        match self {
            Self::RotatePinch => rotate_pinch(steps),
            Self::Drag => drag(steps),
            Self::Interference => interference(steps),
            Self::All => [Self::RotatePinch, Self::Drag, Self::Interference]
                .into_iter()
                .flat_map(|s| s.events(steps))
                .collect(),
        }
    }
}

const CENTER: Point = Point::new(175.0, 325.0);

fn at_angle(anchor: Point, degrees: f64, distance: f64) -> Point {
    let radians = degrees.to_radians();
    anchor + Vec2::new(radians.cos(), radians.sin()) * distance
}

fn fraction(step: u32, steps: u32) -> f64 {
    f64::from(step) / f64::from(steps)
}

fn rotate_pinch(steps: u32) -> Vec<TouchEvent> {
    let mut events = vec![
        TouchEvent::began(1, CENTER),
        TouchEvent::began(2, at_angle(CENTER, 0.0, 80.0)),
    ];
    let mut last = at_angle(CENTER, 0.0, 80.0);
    for step in 1..=steps {
        let t = fraction(step, steps);
        last = at_angle(CENTER, 90.0 * t, 80.0 + 80.0 * t);
        events.push(TouchEvent::moved(2, last));
    }
    events.push(TouchEvent::ended(2, last));
    events.push(TouchEvent::ended(1, CENTER));
    events
}

fn drag(steps: u32) -> Vec<TouchEvent> {
    let start = Point::new(60.0, 60.0);
    let travel = Vec2::new(120.0, 90.0);
    let mut events = vec![TouchEvent::began(1, start)];
    for step in 1..=steps {
        events.push(TouchEvent::moved(1, start + travel * fraction(step, steps)));
    }
    events.push(TouchEvent::ended(1, start + travel));
    events
}

fn interference(steps: u32) -> Vec<TouchEvent> {
    let shift = Vec2::new(0.0, 60.0);
    let mut events = vec![
        TouchEvent::began(1, CENTER),
        TouchEvent::began(2, at_angle(CENTER, 0.0, 100.0)),
    ];
    let (mut first, mut second) = (CENTER, at_angle(CENTER, 0.0, 100.0));
    for step in 1..=steps {
        let t = fraction(step, steps);
        first = CENTER + shift * t;
        second = at_angle(first, 45.0 * t, 100.0);
        events.push(TouchEvent::moved(1, first));
        events.push(TouchEvent::moved(2, second));
    }
    events.push(TouchEvent::ended(2, second));
    events.push(TouchEvent::ended(1, first));
    events
}
