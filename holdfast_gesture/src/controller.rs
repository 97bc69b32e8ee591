// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture controller: a press-move-release state machine over a geometry transform.
//!
//! ## Usage
//!
//! 1) On pointer press, snapshot an [`Origin`] (see
//!    [`capture_origin`](crate::host::capture_origin)) and call
//!    [`GestureController::begin`]. Non-primary buttons are rejected there.
//! 2) On each document-level pointer move, call [`GestureController::update`]
//!    with the page-space pointer position and apply the returned
//!    [`GeometryEdit`](crate::transform::GeometryEdit).
//! 3) On release, call [`GestureController::finish`] to close the session and
//!    run any finalize policy against the reported [`Completion`].
//! 4) [`GestureController::cancel`] tears down an open session outside the
//!    normal release path and is safe to call when Idle.

use kurbo::{Point, Rect, Vec2};

use crate::transform::{GeometryEdit, GestureTransform};

/// Pointer button identifier.
///
/// Only [`PointerButton::Primary`] opens gesture sessions; the controller
/// ignores presses with any other button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button, pen tip, or single-finger contact.
    Primary,
    /// Middle mouse button (wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Whether a behavior handler consumed the event it was given.
///
/// A consumed event corresponds to the original behaviors' "prevent default
/// and stop propagation": hosts should suppress their default action for it.
/// Ignored events (wrong button, no active session, vetoed start) must be
/// left for other handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The event was not for this behavior; no state changed.
    Ignored,
    /// The event drove the gesture and should not propagate further.
    Consumed,
}

impl Handled {
    /// Returns `true` if the event was consumed.
    #[must_use]
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Press-time snapshot of a gesture session.
///
/// All coordinates are page coordinates. `frame` is the target's offset and
/// size at press time; for targets in normal flow it is pre-adjusted by the
/// ancestor offset recorded in `parent`, so [`Origin::page_origin`] yields the
/// plain page offset in either case. Anchored (absolutely or fixed
/// positioned) targets capture `parent == Point::ZERO` and an unadjusted
/// frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    /// Pointer page position at press (client position plus scroll offset).
    pub pointer: Point,
    /// Target offset and size at press, adjusted as described above.
    pub frame: Rect,
    /// Ancestor offset used to convert page coordinates into parent-relative
    /// coordinates; zero for anchored targets.
    pub parent: Point,
}

impl Origin {
    /// Creates an origin snapshot from its parts.
    #[must_use]
    pub const fn new(pointer: Point, frame: Rect, parent: Point) -> Self {
        Self {
            pointer,
            frame,
            parent,
        }
    }

    /// The target's page offset at press time, with the ancestor adjustment
    /// undone.
    #[must_use]
    pub fn page_origin(&self) -> Point {
        self.frame.origin() - self.parent.to_vec2()
    }

    /// Converts a page coordinate into the parent-relative space recorded at
    /// press time.
    #[must_use]
    pub fn to_parent_relative(&self, page: Point) -> Point {
        page - self.parent.to_vec2()
    }
}

/// A move transition while the gesture is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    /// Pointer displacement from the press origin.
    pub delta: Vec2,
    /// Geometry the transform wants applied for this move.
    pub edit: GeometryEdit,
}

/// The closing transition of a gesture session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completion {
    /// The press-time snapshot the session was opened with.
    pub origin: Origin,
    /// Final pointer displacement from the press origin.
    pub delta: Vec2,
}

/// The gesture state machine.
///
/// Idle until a primary-button [`begin`](Self::begin); Active until
/// [`finish`](Self::finish) or [`cancel`](Self::cancel). Move updates while
/// Active self-loop and produce the transform's geometry.
#[derive(Debug, Clone)]
pub struct GestureController<T> {
    transform: T,
    origin: Option<Origin>,
}

impl<T> GestureController<T> {
    /// Creates an idle controller around the given transform.
    #[must_use]
    pub const fn new(transform: T) -> Self {
        Self {
            transform,
            origin: None,
        }
    }

    /// Returns `true` while a gesture session is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// The press-time snapshot of the open session, if any.
    #[must_use]
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    /// Borrows the transform strategy.
    #[must_use]
    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Opens a session from a primary-button press.
    ///
    /// Presses with any other button are ignored: no state change, and the
    /// caller should treat the event as unconsumed. A press while a session
    /// is already open replaces it; with a single pointer source that cannot
    /// happen, because the release transition always runs first.
    pub fn begin(&mut self, button: PointerButton, origin: Origin) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        self.origin = Some(origin);
        true
    }

    /// Unconditionally returns to Idle, discarding any open session.
    ///
    /// Returns `true` if a session was open. Safe to call when Idle.
    pub fn cancel(&mut self) -> bool {
        self.origin.take().is_some()
    }
}

impl<T: GestureTransform> GestureController<T> {
    /// Advances the gesture with a new page-space pointer position.
    ///
    /// Returns `None` when Idle. While Active, computes the delta from the
    /// press origin and the transform's geometry for it; applying the edit is
    /// the caller's job.
    pub fn update(&mut self, pointer: Point) -> Option<Movement> {
        let origin = self.origin.as_ref()?;
        let delta = pointer - origin.pointer;
        let edit = self.transform.compute(origin, delta);
        Some(Movement { delta, edit })
    }

    /// Closes the session at the given page-space pointer position.
    ///
    /// Returns `None` when Idle. The returned [`Completion`] carries the
    /// origin snapshot so finalize policies can recompute their geometry
    /// without a separate copy of the session.
    pub fn finish(&mut self, pointer: Point) -> Option<Completion> {
        let origin = self.origin.take()?;
        let delta = pointer - origin.pointer;
        Some(Completion { origin, delta })
    }
}
