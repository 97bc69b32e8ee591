// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=holdfast_size --heading-base-level=0

//! Holdfast Size: make a host element resizable through edge and corner handles.
//!
//! A [`Sizable`] owns one sized element and up to eight [`SizerHandle`]s (4
//! edges + 4 corners). Each handle is an independent gesture controller over
//! the shared target: the handle element receives the press, but the
//! transform moves and resizes the *sized* element, using the handle's fixed
//! multiplier row (see [`Multipliers`]).
//!
//! Width and height updates are applied only while strictly positive; a move
//! that would produce a non-positive dimension keeps the last valid size for
//! that axis and recovers on a later move. Nothing is clamped.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use holdfast_gesture::controller::PointerButton;
//! use holdfast_gesture::host::Host;
//! use holdfast_gesture::memory::MemoryHost;
//! use holdfast_size::{Sizable, SizeOptions, SizerHandle};
//!
//! let mut host = MemoryHost::new();
//! let panel = host.insert(Point::new(100.0, 200.0), Size::new(40.0, 30.0));
//! let grip = host.insert_child(panel, Point::new(138.0, 228.0), Size::new(4.0, 4.0));
//!
//! let mut size = Sizable::new(panel, SizeOptions::default());
//! size.add_sizer(grip, SizerHandle::BottomRight);
//!
//! // Drag the bottom-right grip 10 right and 5 down: width and height grow.
//! size.on_press(&mut host, &grip, PointerButton::Primary, Point::new(140.0, 230.0));
//! size.on_document_move(&mut host, Point::new(150.0, 235.0));
//! size.on_document_release(&mut host, Point::new(150.0, 235.0));
//!
//! assert_eq!(host.size(&panel), Size::new(50.0, 35.0));
//! assert_eq!(host.offset(&panel), Point::new(100.0, 200.0));
//! ```
//!
//! ## Wiring
//!
//! Hosts forward handle-scoped presses to [`Sizable::on_press`] with the
//! handle element, and document-scoped moves/releases to
//! [`Sizable::on_document_move`] / [`Sizable::on_document_release`] while
//! [`Sizable::is_active`]. Handle elements can be supplied up front with
//! [`Sizable::add_sizer`], or created by the host through the
//! `create_sizers` factory when `auto_add_sizers` is set (see
//! [`Sizable::activate`]); [`SizerHandle::ALL`] and
//! [`SizerHandle::class_name`] give factories the canonical set to build.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use holdfast_gesture::controller::{GestureController, Handled, Origin, PointerButton};
use holdfast_gesture::host::{Host, apply_edit, capture_origin, page_position};
use holdfast_gesture::registry::Behavior;
use holdfast_gesture::transform::{GeometryEdit, GestureTransform};

/// Dispatched on the sized element when a resize session opens.
pub const START_EVENT: &str = "sizable-start";
/// Dispatched on the sized element for every move while resizing.
pub const SIZE_EVENT: &str = "sizable-size";
/// Dispatched on the sized element when a resize session closes.
pub const END_EVENT: &str = "sizable-end";

/// Callback invoked with the sized element.
pub type ElementFn<E> = Box<dyn FnMut(&E)>;
/// Callback invoked with the sized element and the pointer delta.
pub type DeltaFn<E> = Box<dyn FnMut(&E, Vec2)>;
/// Factory creating handle elements for a sized element, returning each new
/// element with the handle position it stands for.
pub type CreateSizersFn<H> =
    Box<dyn FnMut(&mut H, &<H as Host>::Element) -> Vec<(<H as Host>::Element, SizerHandle)>>;

/// How a handle maps the pointer delta onto the target's geometry.
///
/// `dx`/`dy` scale the delta into the offset; `dw` scales the horizontal
/// delta into the width; `dh` scales the vertical delta into the height with
/// an inverted sign (`height = origin_height - delta_y * dh`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multipliers {
    /// Horizontal offset factor.
    pub dx: f64,
    /// Vertical offset factor.
    pub dy: f64,
    /// Width factor.
    pub dw: f64,
    /// Height factor (applied with inverted sign).
    pub dh: f64,
}

const fn multipliers(dx: f64, dy: f64, dw: f64, dh: f64) -> Multipliers {
    Multipliers { dx, dy, dw, dh }
}

/// One of the eight canonical resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizerHandle {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl SizerHandle {
    /// The canonical handle set, in the order factories usually create it.
    pub const ALL: [Self; 8] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// The delta multipliers for this handle.
    #[must_use]
    pub const fn multipliers(self) -> Multipliers {
        match self {
            Self::Left => multipliers(1.0, 0.0, -1.0, 0.0),
            Self::Right => multipliers(0.0, 0.0, 1.0, 0.0),
            Self::Top => multipliers(0.0, 1.0, 0.0, 1.0),
            Self::Bottom => multipliers(0.0, 0.0, 0.0, -1.0),
            Self::TopLeft => multipliers(1.0, 1.0, -1.0, 1.0),
            Self::TopRight => multipliers(0.0, 1.0, 1.0, 1.0),
            Self::BottomLeft => multipliers(1.0, 0.0, -1.0, -1.0),
            Self::BottomRight => multipliers(0.0, 0.0, 1.0, -1.0),
        }
    }

    /// Conventional styling class for host-created handle elements.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Left => "sizer-left",
            Self::Right => "sizer-right",
            Self::Top => "sizer-top",
            Self::Bottom => "sizer-bottom",
            Self::TopLeft => "sizer-top-left",
            Self::TopRight => "sizer-top-right",
            Self::BottomLeft => "sizer-bottom-left",
            Self::BottomRight => "sizer-bottom-right",
        }
    }
}

/// Per-handle resize transform over the shared target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeResize {
    handle: SizerHandle,
}

impl EdgeResize {
    /// Creates the transform for one handle.
    #[must_use]
    pub const fn new(handle: SizerHandle) -> Self {
        Self { handle }
    }
}

impl GestureTransform for EdgeResize {
    fn compute(&self, origin: &Origin, delta: Vec2) -> GeometryEdit {
        let m = self.handle.multipliers();
        let base = origin.page_origin();
        let offset = Point::new(base.x + delta.x * m.dx, base.y + delta.y * m.dy);
        let width = origin.frame.width() + delta.x * m.dw;
        let height = origin.frame.height() - delta.y * m.dh;
        GeometryEdit {
            offset: Some(offset),
            // Non-positive dimensions are dropped for this move, not clamped;
            // the element keeps its last valid size on that axis.
            width: (width > 0.0).then_some(width),
            height: (height > 0.0).then_some(height),
        }
    }
}

/// Configuration shared by all of a [`Sizable`]'s handles.
pub struct SizeOptions<H: Host> {
    /// When set, [`Sizable::activate`] runs `create_sizers` to build the
    /// handle elements.
    pub auto_add_sizers: bool,
    /// Host-specific factory creating handle elements under the sized
    /// element.
    pub create_sizers: Option<CreateSizersFn<H>>,
    /// Class applied to the pressed handle while a resize session is open;
    /// `None` disables styling.
    pub class_sizing: Option<Cow<'static, str>>,
    /// Invoked after a session opens.
    pub on_start: Option<ElementFn<H::Element>>,
    /// Invoked after each move, with the delta from the press origin.
    pub on_size: Option<DeltaFn<H::Element>>,
    /// Invoked after a session closes.
    pub on_end: Option<ElementFn<H::Element>>,
}

impl<H: Host> Default for SizeOptions<H> {
    fn default() -> Self {
        Self {
            auto_add_sizers: false,
            create_sizers: None,
            class_sizing: Some(Cow::Borrowed("sizing")),
            on_start: None,
            on_size: None,
            on_end: None,
        }
    }
}

impl<H: Host> core::fmt::Debug for SizeOptions<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SizeOptions")
            .field("auto_add_sizers", &self.auto_add_sizers)
            .field("create_sizers", &self.create_sizers.is_some())
            .field("class_sizing", &self.class_sizing)
            .field("on_start", &self.on_start.is_some())
            .field("on_size", &self.on_size.is_some())
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

/// One handle element wired to the shared target.
#[derive(Debug)]
struct Sizer<H: Host> {
    element: H::Element,
    kind: SizerHandle,
    gesture: GestureController<EdgeResize>,
}

/// Resize behavior attached to one sized element.
///
/// All handles share the target and the configuration; at most one handle
/// has an open session at a time.
#[derive(Debug)]
pub struct Sizable<H: Host> {
    element: H::Element,
    sizers: SmallVec<[Sizer<H>; 8]>,
    options: SizeOptions<H>,
}

impl<H: Host> Sizable<H> {
    /// Creates a resize behavior for `element` with no handles yet.
    #[must_use]
    pub fn new(element: H::Element, options: SizeOptions<H>) -> Self {
        Self {
            element,
            sizers: SmallVec::new(),
            options,
        }
    }

    /// Creates a resize behavior, running the `create_sizers` factory when
    /// `auto_add_sizers` is set.
    #[must_use]
    pub fn activate(host: &mut H, element: H::Element, options: SizeOptions<H>) -> Self {
        let mut sizable = Self::new(element, options);
        if sizable.options.auto_add_sizers
            && let Some(mut factory) = sizable.options.create_sizers.take()
        {
            for (handle_element, kind) in factory(host, &sizable.element) {
                sizable.add_sizer(handle_element, kind);
            }
            sizable.options.create_sizers = Some(factory);
        }
        sizable
    }

    /// Wires a handle element to the target as `kind`.
    pub fn add_sizer(&mut self, handle_element: H::Element, kind: SizerHandle) {
        self.sizers.push(Sizer {
            element: handle_element,
            kind,
            gesture: GestureController::new(EdgeResize::new(kind)),
        });
    }

    /// The sized element.
    #[must_use]
    pub fn element(&self) -> &H::Element {
        &self.element
    }

    /// The wired handles, as (handle element, handle position) pairs.
    pub fn handles(&self) -> impl Iterator<Item = (&H::Element, SizerHandle)> {
        self.sizers.iter().map(|sizer| (&sizer.element, sizer.kind))
    }

    /// Returns `true` while any handle has an open session.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.sizers.iter().any(|sizer| sizer.gesture.is_active())
    }

    /// Handles a pointer press on one of the handle elements.
    ///
    /// Presses on unknown elements and non-primary buttons are ignored
    /// without side effects. The origin snapshot is captured from the sized
    /// element; the sizing class goes on the pressed handle.
    pub fn on_press(
        &mut self,
        host: &mut H,
        handle: &H::Element,
        button: PointerButton,
        client: Point,
    ) -> Handled {
        let Some(sizer) = self.sizers.iter_mut().find(|sizer| &sizer.element == handle) else {
            return Handled::Ignored;
        };

        let pointer = page_position(host, client);
        let origin = capture_origin(host, &self.element, pointer);
        if !sizer.gesture.begin(button, origin) {
            return Handled::Ignored;
        }

        if let Some(class) = &self.options.class_sizing {
            host.add_class(&sizer.element, class);
        }
        host.dispatch(&self.element, START_EVENT, &self.element);
        if let Some(on_start) = &mut self.options.on_start {
            on_start(&self.element);
        }
        Handled::Consumed
    }

    /// Handles a document-level pointer move, routed to the active handle.
    pub fn on_document_move(&mut self, host: &mut H, client: Point) -> Handled {
        let pointer = page_position(host, client);
        for sizer in &mut self.sizers {
            let Some(movement) = sizer.gesture.update(pointer) else {
                continue;
            };
            apply_edit(host, &self.element, &movement.edit);
            host.dispatch(&self.element, SIZE_EVENT, &self.element);
            if let Some(on_size) = &mut self.options.on_size {
                on_size(&self.element, movement.delta);
            }
            return Handled::Consumed;
        }
        Handled::Ignored
    }

    /// Handles a document-level pointer release, closing the active session.
    pub fn on_document_release(&mut self, host: &mut H, client: Point) -> Handled {
        let pointer = page_position(host, client);
        for sizer in &mut self.sizers {
            if sizer.gesture.finish(pointer).is_none() {
                continue;
            }
            if let Some(class) = &self.options.class_sizing {
                host.remove_class(&sizer.element, class);
            }
            host.dispatch(&self.element, END_EVENT, &self.element);
            if let Some(on_end) = &mut self.options.on_end {
                on_end(&self.element);
            }
            return Handled::Consumed;
        }
        Handled::Ignored
    }
}

impl<H: Host> Behavior<H> for Sizable<H> {
    fn is_active(&self) -> bool {
        Self::is_active(self)
    }

    fn deactivate(&mut self, host: &mut H) {
        for sizer in &mut self.sizers {
            if sizer.gesture.cancel()
                && let Some(class) = &self.options.class_sizing
            {
                host.remove_class(&sizer.element, class);
            }
        }
    }
}
