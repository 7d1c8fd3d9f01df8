// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Vec2};
use pinwheel_gesture::touch::{TouchEvent, TouchPhase, Touches};
use pinwheel_gesture::{
    Angle, DragGesture, Gesture, MagnificationGesture, RotationGesture, Simultaneous,
    SimultaneousValue, TransientGestureState,
};

use crate::{CommittedTransform, DisplayTransform, Graphic, SlotPolicy, ViewConfig};

type RotateAndPinch = Simultaneous<RotationGesture, MagnificationGesture>;

/// A graphic that can be rotated, pinched, and dragged at the same time.
///
/// The view owns its touch bookkeeping, the rotate/pinch pair, the drag
/// recognizer, the transient slots, and the committed transform. All state
/// lives for as long as the view and starts fresh on construction.
///
/// Hosts either feed raw touches through [`Self::handle`], or drive the
/// callbacks ([`Self::update_simultaneous`], [`Self::end_simultaneous`],
/// [`Self::update_drag`], [`Self::end_drag`]) from their own recognizers.
#[derive(Clone, Debug)]
pub struct SimultaneousView {
    config: ViewConfig,
    graphic: Graphic,
    touches: Touches,
    pair: RotateAndPinch,
    drag: DragGesture,
    pair_slot: TransientGestureState,
    drag_slot: TransientGestureState,
    committed: CommittedTransform,
}

impl SimultaneousView {
    /// Creates a view with identity committed state.
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            graphic: Graphic::new(config.frame),
            touches: Touches::new(),
            pair: Simultaneous::new(
                RotationGesture::new(config.min_rotation),
                MagnificationGesture::new(config.min_scale_delta),
            ),
            drag: DragGesture::new(config.min_drag_distance),
            pair_slot: TransientGestureState::Inactive,
            drag_slot: TransientGestureState::Inactive,
            committed: CommittedTransform::IDENTITY,
        }
    }

    /// Configuration the view was built with.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The drawing being manipulated.
    #[must_use]
    pub fn graphic(&self) -> &Graphic {
        &self.graphic
    }

    /// Live touches.
    #[must_use]
    pub fn touches(&self) -> &Touches {
        &self.touches
    }

    /// Accumulated state from completed gestures.
    #[must_use]
    pub fn committed(&self) -> &CommittedTransform {
        &self.committed
    }

    /// The in-progress state.
    ///
    /// A reporting drag takes precedence over the rotate/pinch pair. Under
    /// [`SlotPolicy::Separate`] this is only a summary; see
    /// [`Self::pair_state`] and [`Self::drag_state`] for the individual slots.
    #[must_use]
    pub fn transient(&self) -> TransientGestureState {
        if self.drag_slot.is_active() {
            self.drag_slot
        } else {
            self.pair_slot
        }
    }

    /// In-progress state of the rotate/pinch pair.
    #[must_use]
    pub fn pair_state(&self) -> TransientGestureState {
        self.pair_slot
    }

    /// In-progress state of the drag.
    #[must_use]
    pub fn drag_state(&self) -> TransientGestureState {
        self.drag_slot
    }

    /// Transform to draw the graphic with: committed state plus whatever is in progress.
    #[must_use]
    pub fn display_transform(&self) -> DisplayTransform {
        match self.config.slot_policy {
            SlotPolicy::Shared => self.committed.display(&self.transient()),
            SlotPolicy::Separate => self
                .committed
                .display(&self.pair_slot)
                .layer(&self.drag_slot),
        }
    }

    /// Affine map from graphic-local to view coordinates.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.display_transform().to_affine(self.graphic.frame())
    }

    /// Axis-aligned bounds of the graphic as currently displayed.
    #[must_use]
    pub fn display_bounds(&self) -> Rect {
        self.graphic.transformed_bounds(&self.display_transform())
    }

    /// Processes one touch sample.
    ///
    /// The rotate/pinch pair runs while at least two fingers are down and
    /// ends when fewer remain. The drag follows the first finger that lands
    /// while no drag is running and ends when that finger lifts. A lift
    /// position counts as a final move before anything ends. A cancelled
    /// sample abandons every gesture without committing.
    pub fn handle(&mut self, event: &TouchEvent) {
        if event.phase == TouchPhase::Ended {
            // The lift position is the last sample of every gesture the finger takes part in.
            let lift = TouchEvent {
                phase: TouchPhase::Moved,
                ..*event
            };
            if self.touches.apply(&lift) {
                self.feed();
            }
        }
        if !self.touches.apply(event) {
            log::trace!("ignored touch sample {event:?}");
            return;
        }
        if event.phase == TouchPhase::Cancelled {
            self.cancel();
            return;
        }

        if self.touches.len() < 2 {
            if let Some(value) = self.pair.end() {
                self.end_simultaneous(value);
            }
        } else if let Some(value) = self.pair.update(&self.touches) {
            self.update_simultaneous(value);
        }

        if event.phase == TouchPhase::Began && !self.drag.is_tracking() {
            self.drag.begin(event.id, event.position);
        }
        if event.phase == TouchPhase::Ended && self.drag.touch() == Some(event.id) {
            match self.drag.end() {
                Some(translation) => self.end_drag(translation),
                None => self.drag_slot = TransientGestureState::Inactive,
            }
        } else if let Some(translation) = self.drag.update(&self.touches) {
            self.update_drag(translation);
        }
    }

    /// Feeds the live touches to both recognizers without ending either.
    fn feed(&mut self) {
        if self.touches.len() >= 2 {
            if let Some(value) = self.pair.update(&self.touches) {
                self.update_simultaneous(value);
            }
        }
        if let Some(translation) = self.drag.update(&self.touches) {
            self.update_drag(translation);
        }
    }

    /// Records an in-progress rotate/pinch sample.
    pub fn update_simultaneous(&mut self, value: SimultaneousValue<Angle, f64>) {
        let state = TransientGestureState::from_simultaneous(value);
        if state != self.pair_slot {
            log::trace!("pair state: {state:?}");
        }
        self.pair_slot = state;
    }

    /// Commits a finished rotate/pinch pair and clears its transient state.
    pub fn end_simultaneous(&mut self, value: SimultaneousValue<Angle, f64>) {
        self.committed.commit_simultaneous(value);
        self.pair_slot = TransientGestureState::Inactive;
    }

    /// Records an in-progress drag translation.
    pub fn update_drag(&mut self, translation: Vec2) {
        self.drag_slot = TransientGestureState::Dragging { translation };
    }

    /// Commits a finished drag and clears its transient state.
    pub fn end_drag(&mut self, translation: Vec2) {
        self.committed.commit_translation(translation);
        self.drag_slot = TransientGestureState::Inactive;
    }

    /// Abandons every gesture in progress. Committed state is kept.
    pub fn cancel(&mut self) {
        log::debug!("touch sequence cancelled");
        self.touches.clear();
        self.pair.cancel();
        self.drag.cancel();
        self.pair_slot = TransientGestureState::Inactive;
        self.drag_slot = TransientGestureState::Inactive;
    }

    /// Restores the state the view had when it was constructed.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}

impl Default for SimultaneousView {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}
