// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=holdfast_grab --heading-base-level=0

//! Holdfast Grab: make a host element draggable.
//!
//! [`Grabbable`] wires the Holdfast gesture controller to the [`Translate`]
//! transform: a primary-button press on the element opens a session, every
//! document-level move re-offsets the element by the pointer displacement,
//! and release closes the session. No clamping, no axis inversion; the final
//! offset is exactly the press-time offset plus the total pointer delta,
//! scroll-compensated.
//!
//! Each lifecycle transition dispatches a named event on the element
//! ([`START_EVENT`], [`MOVE_EVENT`], [`END_EVENT`], plus the plain
//! [`DRAGGED_EVENT`] notification on release) and invokes the matching
//! optional callback from [`GrabOptions`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use holdfast_gesture::controller::PointerButton;
//! use holdfast_gesture::host::Host;
//! use holdfast_gesture::memory::MemoryHost;
//! use holdfast_grab::{GrabOptions, Grabbable};
//!
//! let mut host = MemoryHost::new();
//! let card = host.insert(Point::new(100.0, 200.0), Size::new(40.0, 30.0));
//!
//! let mut grab = Grabbable::new(card, GrabOptions::default());
//!
//! // Press at (10, 10), drag to (25, 18), release.
//! grab.on_press(&mut host, PointerButton::Primary, Point::new(10.0, 10.0));
//! grab.on_document_move(&mut host, Point::new(25.0, 18.0));
//! grab.on_document_release(&mut host, Point::new(25.0, 18.0));
//!
//! assert_eq!(host.offset(&card), Point::new(115.0, 208.0));
//! ```
//!
//! ## Wiring
//!
//! Hosts forward their own pointer events: element-scoped presses to
//! [`Grabbable::on_press`], and document-scoped moves/releases to
//! [`Grabbable::on_document_move`] / [`Grabbable::on_document_release`]
//! while [`Grabbable::is_active`]; moves anywhere in the document must keep
//! driving the gesture even after the pointer leaves the element. Keep
//! instances in a [`Registry`](holdfast_gesture::registry::Registry) keyed
//! by element so re-attaching replaces rather than stacks.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::boxed::Box;
use kurbo::{Point, Vec2};

use holdfast_gesture::controller::{GestureController, Handled, Origin, PointerButton};
use holdfast_gesture::host::{Host, apply_edit, capture_origin, page_position};
use holdfast_gesture::registry::Behavior;
use holdfast_gesture::transform::{GeometryEdit, GestureTransform};

/// Dispatched on the element when a drag session opens.
pub const START_EVENT: &str = "grabbable-start";
/// Dispatched on the element for every move while dragging.
pub const MOVE_EVENT: &str = "grabbable-move";
/// Dispatched on the element when a drag session closes.
pub const END_EVENT: &str = "grabbable-end";
/// Plain notification dispatched on the element at release, before
/// [`END_EVENT`].
pub const DRAGGED_EVENT: &str = "object-dragged";

/// Callback invoked with the affected element.
pub type ElementFn<E> = Box<dyn FnMut(&E)>;
/// Callback invoked with the affected element and the pointer delta.
pub type DeltaFn<E> = Box<dyn FnMut(&E, Vec2)>;

/// Identity translation: the element follows the pointer delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translate;

impl GestureTransform for Translate {
    fn compute(&self, origin: &Origin, delta: Vec2) -> GeometryEdit {
        GeometryEdit::offset(origin.page_origin() + delta)
    }
}

/// Configuration for a [`Grabbable`]. Absent callbacks are skipped.
pub struct GrabOptions<E> {
    /// Class applied to the element while a drag session is open; `None`
    /// disables styling.
    pub class_dragging: Option<Cow<'static, str>>,
    /// Invoked after a session opens.
    pub on_start: Option<ElementFn<E>>,
    /// Invoked after each move, with the delta from the press origin.
    pub on_move: Option<DeltaFn<E>>,
    /// Invoked after a session closes.
    pub on_end: Option<ElementFn<E>>,
}

impl<E> Default for GrabOptions<E> {
    fn default() -> Self {
        Self {
            class_dragging: Some(Cow::Borrowed("grabbing")),
            on_start: None,
            on_move: None,
            on_end: None,
        }
    }
}

impl<E> core::fmt::Debug for GrabOptions<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GrabOptions")
            .field("class_dragging", &self.class_dragging)
            .field("on_start", &self.on_start.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

/// Drag behavior attached to one element.
///
/// The element is both the press trigger and the transformed target.
#[derive(Debug)]
pub struct Grabbable<H: Host> {
    element: H::Element,
    options: GrabOptions<H::Element>,
    gesture: GestureController<Translate>,
}

impl<H: Host> Grabbable<H> {
    /// Creates an idle drag behavior for `element`.
    #[must_use]
    pub const fn new(element: H::Element, options: GrabOptions<H::Element>) -> Self {
        Self {
            element,
            options,
            gesture: GestureController::new(Translate),
        }
    }

    /// The element this behavior is attached to.
    #[must_use]
    pub fn element(&self) -> &H::Element {
        &self.element
    }

    /// Returns `true` while a drag session is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.gesture.is_active()
    }

    /// Handles a pointer press on the element.
    ///
    /// Non-primary buttons are ignored without side effects. A primary press
    /// snapshots the element's geometry, applies the dragging class,
    /// dispatches [`START_EVENT`], and invokes `on_start`.
    pub fn on_press(&mut self, host: &mut H, button: PointerButton, client: Point) -> Handled {
        let pointer = page_position(host, client);
        let origin = capture_origin(host, &self.element, pointer);
        if !self.gesture.begin(button, origin) {
            return Handled::Ignored;
        }

        if let Some(class) = &self.options.class_dragging {
            host.add_class(&self.element, class);
        }
        host.dispatch(&self.element, START_EVENT, &self.element);
        if let Some(on_start) = &mut self.options.on_start {
            on_start(&self.element);
        }
        Handled::Consumed
    }

    /// Handles a document-level pointer move.
    ///
    /// Ignored while idle. While active, re-offsets the element, dispatches
    /// [`MOVE_EVENT`], and invokes `on_move` with the delta.
    pub fn on_document_move(&mut self, host: &mut H, client: Point) -> Handled {
        let pointer = page_position(host, client);
        let Some(movement) = self.gesture.update(pointer) else {
            return Handled::Ignored;
        };

        apply_edit(host, &self.element, &movement.edit);
        host.dispatch(&self.element, MOVE_EVENT, &self.element);
        if let Some(on_move) = &mut self.options.on_move {
            on_move(&self.element, movement.delta);
        }
        Handled::Consumed
    }

    /// Handles a document-level pointer release.
    ///
    /// Ignored while idle. While active, closes the session, dispatches
    /// [`DRAGGED_EVENT`] and [`END_EVENT`], removes the dragging class, and
    /// invokes `on_end`.
    pub fn on_document_release(&mut self, host: &mut H, client: Point) -> Handled {
        let pointer = page_position(host, client);
        if self.gesture.finish(pointer).is_none() {
            return Handled::Ignored;
        }

        host.dispatch(&self.element, DRAGGED_EVENT, &self.element);
        if let Some(class) = &self.options.class_dragging {
            host.remove_class(&self.element, class);
        }
        host.dispatch(&self.element, END_EVENT, &self.element);
        if let Some(on_end) = &mut self.options.on_end {
            on_end(&self.element);
        }
        Handled::Consumed
    }
}

impl<H: Host> Behavior<H> for Grabbable<H> {
    fn is_active(&self) -> bool {
        self.gesture.is_active()
    }

    fn deactivate(&mut self, host: &mut H) {
        if self.gesture.cancel()
            && let Some(class) = &self.options.class_dragging
        {
            host.remove_class(&self.element, class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdfast_gesture::memory::MemoryHost;
    use kurbo::Size;

    fn fixture() -> (MemoryHost, holdfast_gesture::memory::ElementId) {
        let mut host = MemoryHost::new();
        let element = host.insert(Point::new(100.0, 200.0), Size::new(40.0, 30.0));
        (host, element)
    }

    #[test]
    fn translate_follows_raw_delta() {
        let origin = Origin::new(
            Point::new(10.0, 10.0),
            kurbo::Rect::new(100.0, 200.0, 140.0, 230.0),
            Point::ZERO,
        );
        let edit = Translate.compute(&origin, Vec2::new(-5.0, 12.0));
        assert_eq!(edit, GeometryEdit::offset(Point::new(95.0, 212.0)));
    }

    #[test]
    fn press_applies_class_and_dispatches_start() {
        let (mut host, element) = fixture();
        let mut grab = Grabbable::new(element, GrabOptions::default());

        let handled = grab.on_press(&mut host, PointerButton::Primary, Point::new(10.0, 10.0));
        assert!(handled.is_consumed());
        assert!(grab.is_active());
        assert!(host.has_class(element, "grabbing"));
        assert_eq!(host.events()[0].event, START_EVENT);
    }

    #[test]
    fn secondary_press_changes_nothing() {
        let (mut host, element) = fixture();
        let mut grab = Grabbable::new(element, GrabOptions::default());

        let handled = grab.on_press(&mut host, PointerButton::Secondary, Point::new(10.0, 10.0));
        assert_eq!(handled, Handled::Ignored);
        assert!(!grab.is_active());
        assert!(host.events().is_empty());
        assert!(!host.has_class(element, "grabbing"));
    }

    #[test]
    fn release_removes_class_and_fires_end_events() {
        let (mut host, element) = fixture();
        let mut grab = Grabbable::new(element, GrabOptions::default());

        grab.on_press(&mut host, PointerButton::Primary, Point::new(10.0, 10.0));
        grab.on_document_release(&mut host, Point::new(10.0, 10.0));

        assert!(!grab.is_active());
        assert!(!host.has_class(element, "grabbing"));
        let names: alloc::vec::Vec<_> = host.events().iter().map(|e| e.event).collect();
        assert_eq!(names, [START_EVENT, DRAGGED_EVENT, END_EVENT]);
    }

    #[test]
    fn deactivate_while_idle_is_a_noop() {
        let (mut host, element) = fixture();
        let mut grab = Grabbable::new(element, GrabOptions::default());
        grab.deactivate(&mut host);
        assert!(!grab.is_active());
        assert!(host.events().is_empty());
    }
}
