// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry transform seam: how a pointer delta becomes an element edit.
//!
//! Each behavior supplies one [`GestureTransform`]: dragging translates the
//! pressed element, resizing applies per-handle multipliers to a different
//! target, and region selection shapes a transient overlay. The controller
//! stays the same across all of them.

use kurbo::{Point, Vec2};

use crate::controller::Origin;

/// A partial geometry update for one move transition.
///
/// `None` fields leave the element untouched. Transforms use this to express
/// policies like "drop a non-positive width for this move" without clamping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryEdit {
    /// New page offset, if the transform moves the target.
    pub offset: Option<Point>,
    /// New width, if the transform resizes the target horizontally.
    pub width: Option<f64>,
    /// New height, if the transform resizes the target vertically.
    pub height: Option<f64>,
}

impl GeometryEdit {
    /// An edit that changes nothing.
    pub const EMPTY: Self = Self {
        offset: None,
        width: None,
        height: None,
    };

    /// An edit that only moves the target.
    #[must_use]
    pub const fn offset(offset: Point) -> Self {
        Self {
            offset: Some(offset),
            width: None,
            height: None,
        }
    }

    /// Returns `true` if applying this edit would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offset.is_none() && self.width.is_none() && self.height.is_none()
    }
}

/// Strategy mapping a pointer delta onto target geometry.
///
/// Implementations must be pure functions of the press-time [`Origin`] and
/// the current delta: the controller may call them any number of times, and
/// replaying the same final delta must produce the same edit.
pub trait GestureTransform {
    /// Computes the geometry for the given displacement from the press origin.
    fn compute(&self, origin: &Origin, delta: Vec2) -> GeometryEdit;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_edit_changes_nothing() {
        assert!(GeometryEdit::EMPTY.is_empty());
        assert!(GeometryEdit::default().is_empty());
        assert!(!GeometryEdit::offset(Point::ZERO).is_empty());
    }
}
