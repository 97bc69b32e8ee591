// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=holdfast_gesture --heading-base-level=0

//! Holdfast Gesture: the press-move-release gesture controller shared by all
//! Holdfast interaction behaviors.
//!
//! This crate provides the structural core of Holdfast: a small state machine
//! that tracks one pointer gesture from press to release, parameterized by a
//! *geometry transform* describing how the pointer delta maps onto element
//! offset and size changes. The behavior crates (`holdfast_grab`,
//! `holdfast_size`, `holdfast_select`) are thin configurations of this
//! controller; they differ only in their transform and their finalize policy.
//!
//! The crate does not assume any particular UI framework or document model.
//! Element geometry, styling classes, and lifecycle event dispatch go through
//! the [`host::Host`] trait; callers wire real pointer events into the
//! behaviors' `on_press` / `on_document_move` / `on_document_release`
//! handlers and apply the resulting state to their own document.
//!
//! ## Modules
//!
//! - [`controller`]: the gesture state machine ([`controller::GestureController`]).
//! - [`transform`]: the geometry-delta strategy seam ([`transform::GestureTransform`]).
//! - [`host`]: the document-like collaborator trait and press-time capture helpers.
//! - [`registry`]: an explicit element → behavior mapping with attach/detach lifecycle.
//! - [`memory`]: an in-memory reference [`host::Host`] used by tests, doctests,
//!   and benches.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use holdfast_gesture::controller::{GestureController, Origin, PointerButton};
//! use holdfast_gesture::transform::{GeometryEdit, GestureTransform};
//!
//! // A transform that translates the pressed element by the raw delta.
//! struct Follow;
//!
//! impl GestureTransform for Follow {
//!     fn compute(&self, origin: &Origin, delta: Vec2) -> GeometryEdit {
//!         GeometryEdit::offset(origin.page_origin() + delta)
//!     }
//! }
//!
//! let mut gesture = GestureController::new(Follow);
//!
//! // Press at (10, 10) on an element whose frame is 40x30 at the page origin.
//! let origin = Origin::new(
//!     Point::new(10.0, 10.0),
//!     Rect::new(0.0, 0.0, 40.0, 30.0),
//!     Point::ZERO,
//! );
//! assert!(gesture.begin(PointerButton::Primary, origin));
//! assert!(gesture.is_active());
//!
//! // Move to (25, 18): delta is (15, 8), and the transform asks for the
//! // element to follow.
//! let movement = gesture.update(Point::new(25.0, 18.0)).unwrap();
//! assert_eq!(movement.delta, Vec2::new(15.0, 8.0));
//! assert_eq!(movement.edit.offset, Some(Point::new(15.0, 8.0)));
//!
//! // Release ends the session and reports the final delta.
//! let completion = gesture.finish(Point::new(25.0, 18.0)).unwrap();
//! assert_eq!(completion.delta, Vec2::new(15.0, 8.0));
//! assert!(!gesture.is_active());
//! ```
//!
//! ## Design notes
//!
//! - The controller is Idle or Active; a session exists exactly while the
//!   controller is Active. Hosts that mirror document-level listener
//!   registration should install move/release forwarding when a press is
//!   consumed and remove it when [`controller::GestureController::is_active`]
//!   turns false. Every exit path from Active restores Idle.
//! - Only the primary pointer button opens a session; presses with any other
//!   button are ignored without side effects.
//! - All positions handed to the controller are *page* coordinates (client
//!   coordinates plus the host scroll offset), so deltas are scroll-invariant.
//! - There is no failure channel: malformed input degrades to a policy no-op,
//!   never an error.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod host;
pub mod memory;
pub mod registry;
pub mod transform;
