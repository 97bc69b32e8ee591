// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document-like collaborator behaviors act through.
//!
//! Holdfast never touches a real document. Everything a behavior needs from
//! one (element geometry in page coordinates, styling classes, lifecycle
//! event dispatch, overlay attachment, and the scroll offset) goes through
//! [`Host`]. A DOM host maps these onto offsets, class lists, and custom
//! events; [`MemoryHost`](crate::memory::MemoryHost) is the in-memory
//! reference used by tests.

use kurbo::{Point, Rect, Size, Vec2};

use crate::controller::Origin;
use crate::transform::GeometryEdit;

/// How an element participates in layout, as far as gestures care.
///
/// Targets in normal flow report page offsets that include their ancestors'
/// placement, so press-time capture records the ancestor offset as a
/// conversion base. Anchored targets (absolutely or fixed positioned) already
/// live in page/viewport space and skip that compensation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Positioned by normal flow (static or relative).
    #[default]
    Flow,
    /// Absolutely or fixed positioned.
    Anchored,
}

/// Document-like services consumed by behaviors.
///
/// All offsets are page coordinates, both read and written; hosts whose
/// native setter is parent-relative convert internally (the press-time
/// [`Origin`] records the conversion base). Class names and event names are
/// opaque strings. Methods must tolerate elements the host no longer knows
/// about by doing nothing.
pub trait Host {
    /// Opaque element identity.
    type Element: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// The element's page offset.
    fn offset(&self, element: &Self::Element) -> Point;

    /// Moves the element to a new page offset.
    fn set_offset(&mut self, element: &Self::Element, offset: Point);

    /// The element's content size.
    fn size(&self, element: &Self::Element) -> Size;

    /// Resizes the element.
    fn set_size(&mut self, element: &Self::Element, size: Size);

    /// Page offset of the element's parent, or zero for parentless elements.
    fn parent_offset(&self, element: &Self::Element) -> Point;

    /// How the element is positioned.
    fn placement(&self, element: &Self::Element) -> Placement;

    /// Current document scroll offset.
    fn scroll_offset(&self) -> Vec2;

    /// Adds a styling class to the element.
    fn add_class(&mut self, element: &Self::Element, class: &str);

    /// Removes a styling class from the element.
    fn remove_class(&mut self, element: &Self::Element, class: &str);

    /// Dispatches a named lifecycle event on `target`, carrying `subject` as
    /// the affected element (the dragged element, the sized element, or the
    /// selection overlay).
    fn dispatch(&mut self, target: &Self::Element, event: &'static str, subject: &Self::Element);

    /// Appends `child` into `parent` (selection overlays only).
    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element);

    /// Removes the element from the document (discarded overlays only).
    fn remove_element(&mut self, element: &Self::Element);
}

/// Converts a client-space pointer position into page space.
#[must_use]
pub fn page_position<H: Host>(host: &H, client: Point) -> Point {
    client + host.scroll_offset()
}

/// Snapshots a gesture [`Origin`] for `target` at press time.
///
/// For targets in normal flow the frame is adjusted by the ancestor offset
/// and that offset is recorded as the conversion base; anchored targets are
/// captured as-is with a zero base.
#[must_use]
pub fn capture_origin<H: Host>(host: &H, target: &H::Element, pointer: Point) -> Origin {
    let offset = host.offset(target);
    let size = host.size(target);
    match host.placement(target) {
        Placement::Anchored => Origin::new(pointer, Rect::from_origin_size(offset, size), Point::ZERO),
        Placement::Flow => {
            let parent = host.parent_offset(target);
            let frame = Rect::from_origin_size(offset + parent.to_vec2(), size);
            Origin::new(pointer, frame, parent)
        }
    }
}

/// Applies a [`GeometryEdit`] to an element, skipping absent fields.
///
/// Width and height are written together when both are present so hosts see
/// one size change per move.
pub fn apply_edit<H: Host>(host: &mut H, element: &H::Element, edit: &GeometryEdit) {
    if let Some(offset) = edit.offset {
        host.set_offset(element, offset);
    }
    match (edit.width, edit.height) {
        (Some(width), Some(height)) => host.set_size(element, Size::new(width, height)),
        (Some(width), None) => {
            let height = host.size(element).height;
            host.set_size(element, Size::new(width, height));
        }
        (None, Some(height)) => {
            let width = host.size(element).width;
            host.set_size(element, Size::new(width, height));
        }
        (None, None) => {}
    }
}
