// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=holdfast_select --heading-base-level=0

//! Holdfast Select: drag out a rectangular selection overlay.
//!
//! [`Selectable`] attaches to a container element. A primary-button press
//! creates a transient overlay element through the host-supplied factory,
//! every document-level move stretches it into the rubber-band rectangle
//! spanned by the press point and the pointer (sign-normalized, so dragging
//! up or left works the same as down-right), and release runs the finalize
//! policy: rectangles under the configured minimum are replaced by the
//! default selection when one is configured, and otherwise discarded
//! outright (overlay removed, no end event).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use holdfast_gesture::controller::PointerButton;
//! use holdfast_gesture::host::Host;
//! use holdfast_gesture::memory::MemoryHost;
//! use holdfast_select::{SelectOptions, Selectable};
//!
//! let mut host = MemoryHost::new();
//! let canvas = host.insert(Point::ZERO, Size::new(800.0, 600.0));
//!
//! let options = SelectOptions::new(Box::new(|host: &mut MemoryHost| {
//!     host.insert(Point::ZERO, Size::ZERO)
//! }));
//! let mut select = Selectable::new(canvas, options);
//!
//! // Drag up-left from (200, 150) to (140, 250): the rectangle normalizes.
//! select.on_press(&mut host, PointerButton::Primary, Point::new(200.0, 150.0));
//! select.on_document_move(&mut host, Point::new(140.0, 250.0));
//! let overlay = *select.overlay().unwrap();
//! select.on_document_release(&mut host, Point::new(140.0, 250.0));
//!
//! assert_eq!(host.offset(&overlay), Point::new(140.0, 150.0));
//! assert_eq!(host.size(&overlay), Size::new(60.0, 100.0));
//! ```
//!
//! ## Wiring
//!
//! Hosts forward container-scoped presses to [`Selectable::on_press`], and
//! document-scoped moves/releases to [`Selectable::on_document_move`] /
//! [`Selectable::on_document_release`] while [`Selectable::is_active`].
//! Lifecycle events ([`START_EVENT`], [`MOVE_EVENT`], [`END_EVENT`]) are
//! dispatched on the container with the overlay as the subject.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use kurbo::{Point, Rect, Size, Vec2};

use holdfast_gesture::controller::{GestureController, Handled, Origin, PointerButton};
use holdfast_gesture::host::{Host, apply_edit, page_position};
use holdfast_gesture::registry::Behavior;
use holdfast_gesture::transform::{GeometryEdit, GestureTransform};

/// Dispatched on the container when a selection session opens.
pub const START_EVENT: &str = "selectable-start";
/// Dispatched on the container for every move while selecting.
pub const MOVE_EVENT: &str = "selectable-move";
/// Dispatched on the container when a selection commits. Discarded
/// selections fire nothing.
pub const END_EVENT: &str = "selectable-end";

/// Factory creating the overlay element for one selection session.
pub type CreateOverlayFn<H> = Box<dyn FnMut(&mut H) -> <H as Host>::Element>;
/// Veto callback invoked with the container and the press point; returning
/// `false` suppresses the session.
pub type StartFn<E> = Box<dyn FnMut(&E, Point) -> bool>;
/// Callback invoked with the overlay and the normalized selection extent.
pub type ExtentFn<E> = Box<dyn FnMut(&E, Vec2)>;
/// Callback invoked with the overlay and the committed rectangle.
pub type RectFn<E> = Box<dyn FnMut(&E, Rect)>;

/// The rectangle spanned by an anchor point and a pointer delta, normalized
/// so width and height are non-negative.
///
/// A negative delta on an axis flips sign and shifts the rectangle origin
/// backward by the magnitude: the top-left corner is always the
/// component-wise minimum of the two corners.
#[must_use]
pub fn anchored_rect(anchor: Point, delta: Vec2) -> Rect {
    Rect::new(anchor.x, anchor.y, anchor.x + delta.x, anchor.y + delta.y).abs()
}

/// Rubber-band transform: the overlay tracks the normalized rectangle
/// between the press point and the pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubberBand;

impl GestureTransform for RubberBand {
    fn compute(&self, origin: &Origin, delta: Vec2) -> GeometryEdit {
        let rect = anchored_rect(origin.pointer, delta);
        GeometryEdit {
            offset: Some(rect.origin()),
            width: Some(rect.width()),
            height: Some(rect.height()),
        }
    }
}

/// The substitute rectangle for selections released under the minimum size.
///
/// Without an anchor, the substitute is centered on the original press
/// point. The anchor is both-or-neither by construction; there is no way to
/// give only one coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultSelection {
    /// Size of the substitute rectangle.
    pub size: Size,
    /// Fixed top-left corner, or `None` to center on the press point.
    pub anchor: Option<Point>,
}

impl DefaultSelection {
    /// A substitute of the given size, centered on the press point.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self { size, anchor: None }
    }

    /// A substitute of the given size anchored at a fixed top-left corner.
    #[must_use]
    pub const fn anchored(size: Size, anchor: Point) -> Self {
        Self {
            size,
            anchor: Some(anchor),
        }
    }

    fn rect(&self, press: Point) -> Rect {
        let origin = match self.anchor {
            Some(anchor) => anchor,
            None => press - Vec2::new(self.size.width / 2.0, self.size.height / 2.0),
        };
        Rect::from_origin_size(origin, self.size)
    }
}

impl Default for DefaultSelection {
    fn default() -> Self {
        Self::new(Size::new(100.0, 100.0))
    }
}

/// Configuration for a [`Selectable`]. Absent callbacks are skipped.
pub struct SelectOptions<H: Host> {
    /// Creates the overlay element for each session.
    pub create_overlay: CreateOverlayFn<H>,
    /// Append the overlay into the container as soon as it is created.
    pub auto_append: bool,
    /// Minimum committed width; smaller selections trigger the finalize
    /// policy.
    pub min_width: f64,
    /// Minimum committed height.
    pub min_height: f64,
    /// Substitute for too-small selections; `None` means they are always
    /// discarded.
    pub default_size: Option<DefaultSelection>,
    /// Invoked with the press point before the session opens; `false` vetoes
    /// it.
    pub on_start: Option<StartFn<H::Element>>,
    /// Invoked after each move with the normalized extent.
    pub on_move: Option<ExtentFn<H::Element>>,
    /// Invoked when a selection commits.
    pub on_end: Option<RectFn<H::Element>>,
}

impl<H: Host> SelectOptions<H> {
    /// Options with the given overlay factory and the stock policy: append
    /// on create, 20.0 minimum per axis, 100x100 centered default.
    #[must_use]
    pub fn new(create_overlay: CreateOverlayFn<H>) -> Self {
        Self {
            create_overlay,
            auto_append: true,
            min_width: 20.0,
            min_height: 20.0,
            default_size: Some(DefaultSelection::default()),
            on_start: None,
            on_move: None,
            on_end: None,
        }
    }
}

impl<H: Host> core::fmt::Debug for SelectOptions<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectOptions")
            .field("auto_append", &self.auto_append)
            .field("min_width", &self.min_width)
            .field("min_height", &self.min_height)
            .field("default_size", &self.default_size)
            .field("on_start", &self.on_start.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

/// Region-select behavior attached to one container element.
///
/// The container receives the press and the lifecycle events; the overlay is
/// created per session and either committed into the host or removed.
#[derive(Debug)]
pub struct Selectable<H: Host> {
    container: H::Element,
    options: SelectOptions<H>,
    gesture: GestureController<RubberBand>,
    overlay: Option<H::Element>,
}

impl<H: Host> Selectable<H> {
    /// Creates an idle selection behavior for `container`.
    #[must_use]
    pub const fn new(container: H::Element, options: SelectOptions<H>) -> Self {
        Self {
            container,
            options,
            gesture: GestureController::new(RubberBand),
            overlay: None,
        }
    }

    /// The container this behavior is attached to.
    #[must_use]
    pub fn container(&self) -> &H::Element {
        &self.container
    }

    /// The in-progress overlay, if a session is open.
    #[must_use]
    pub fn overlay(&self) -> Option<&H::Element> {
        self.overlay.as_ref()
    }

    /// Returns `true` while a selection session is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.gesture.is_active()
    }

    /// Handles a pointer press on the container.
    ///
    /// Non-primary buttons are ignored. The `on_start` veto runs before
    /// anything else; a `false` result leaves everything untouched, with the
    /// event unconsumed. Otherwise the overlay is created at the press point
    /// with zero size and [`START_EVENT`] fires.
    pub fn on_press(&mut self, host: &mut H, button: PointerButton, client: Point) -> Handled {
        if button != PointerButton::Primary {
            return Handled::Ignored;
        }
        let pointer = page_position(host, client);
        if let Some(on_start) = &mut self.options.on_start
            && !on_start(&self.container, pointer)
        {
            return Handled::Ignored;
        }

        let overlay = (self.options.create_overlay)(host);
        if self.options.auto_append {
            host.append_child(&self.container, &overlay);
        }
        host.set_offset(&overlay, pointer);
        host.set_size(&overlay, Size::ZERO);

        // The overlay is positioned in page coordinates; there is no
        // ancestor adjustment to record.
        let origin = Origin::new(pointer, Rect::from_origin_size(pointer, Size::ZERO), Point::ZERO);
        self.gesture.begin(button, origin);

        host.dispatch(&self.container, START_EVENT, &overlay);
        self.overlay = Some(overlay);
        Handled::Consumed
    }

    /// Handles a document-level pointer move.
    ///
    /// Ignored while idle. While active, stretches the overlay to the
    /// normalized rectangle, dispatches [`MOVE_EVENT`], and invokes `on_move`
    /// with the extent.
    pub fn on_document_move(&mut self, host: &mut H, client: Point) -> Handled {
        let pointer = page_position(host, client);
        let Some(movement) = self.gesture.update(pointer) else {
            return Handled::Ignored;
        };
        let Some(overlay) = &self.overlay else {
            return Handled::Ignored;
        };

        apply_edit(host, overlay, &movement.edit);
        host.dispatch(&self.container, MOVE_EVENT, overlay);
        if let Some(on_move) = &mut self.options.on_move {
            let extent = Vec2::new(
                movement.edit.width.unwrap_or_default(),
                movement.edit.height.unwrap_or_default(),
            );
            on_move(overlay, extent);
        }
        Handled::Consumed
    }

    /// Handles a document-level pointer release, running the finalize
    /// policy.
    ///
    /// Ignored while idle. While active, recomputes the normalized rectangle
    /// and either commits it (final geometry, [`END_EVENT`], `on_end`),
    /// substitutes the configured [`DefaultSelection`] when under the
    /// minimum, or removes the overlay without any end event when the
    /// substitute is still too small. Every path returns the behavior to
    /// idle.
    pub fn on_document_release(&mut self, host: &mut H, client: Point) -> Handled {
        let pointer = page_position(host, client);
        let Some(completion) = self.gesture.finish(pointer) else {
            return Handled::Ignored;
        };
        let Some(overlay) = self.overlay.take() else {
            return Handled::Ignored;
        };

        let press = completion.origin.pointer;
        let mut rect = anchored_rect(press, completion.delta);
        if self.under_minimum(&rect)
            && let Some(default) = &self.options.default_size
        {
            rect = default.rect(press);
        }
        if self.under_minimum(&rect) {
            host.remove_element(&overlay);
            return Handled::Consumed;
        }

        host.set_offset(&overlay, rect.origin());
        host.set_size(&overlay, rect.size());
        host.dispatch(&self.container, END_EVENT, &overlay);
        if let Some(on_end) = &mut self.options.on_end {
            on_end(&overlay, rect);
        }
        Handled::Consumed
    }

    fn under_minimum(&self, rect: &Rect) -> bool {
        rect.width() < self.options.min_width || rect.height() < self.options.min_height
    }
}

impl<H: Host> Behavior<H> for Selectable<H> {
    fn is_active(&self) -> bool {
        self.gesture.is_active()
    }

    fn deactivate(&mut self, host: &mut H) {
        self.gesture.cancel();
        if let Some(overlay) = self.overlay.take() {
            host.remove_element(&overlay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored_rect_normalizes_every_quadrant() {
        let anchor = Point::new(100.0, 100.0);
        let expected = Rect::new(70.0, 60.0, 100.0, 100.0);

        assert_eq!(anchored_rect(anchor, Vec2::new(-30.0, -40.0)), expected);
        assert_eq!(
            anchored_rect(Point::new(70.0, 60.0), Vec2::new(30.0, 40.0)),
            expected
        );
        assert_eq!(
            anchored_rect(Point::new(100.0, 60.0), Vec2::new(-30.0, 40.0)),
            expected
        );
        assert_eq!(
            anchored_rect(Point::new(70.0, 100.0), Vec2::new(30.0, -40.0)),
            expected
        );
    }

    #[test]
    fn rubber_band_reports_the_normalized_geometry() {
        let origin = Origin::new(
            Point::new(200.0, 150.0),
            Rect::from_origin_size(Point::new(200.0, 150.0), Size::ZERO),
            Point::ZERO,
        );
        let edit = RubberBand.compute(&origin, Vec2::new(-60.0, 100.0));
        assert_eq!(edit.offset, Some(Point::new(140.0, 150.0)));
        assert_eq!(edit.width, Some(60.0));
        assert_eq!(edit.height, Some(100.0));
    }

    #[test]
    fn default_selection_centers_without_an_anchor() {
        let default = DefaultSelection::new(Size::new(50.0, 50.0));
        assert_eq!(
            default.rect(Point::new(200.0, 150.0)),
            Rect::new(175.0, 125.0, 225.0, 175.0)
        );

        let anchored = DefaultSelection::anchored(Size::new(50.0, 50.0), Point::new(10.0, 20.0));
        assert_eq!(
            anchored.rect(Point::new(200.0, 150.0)),
            Rect::new(10.0, 20.0, 60.0, 70.0)
        );
    }
}
