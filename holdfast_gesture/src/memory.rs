// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory reference [`Host`].
//!
//! `MemoryHost` keeps a flat store of elements with page-space offsets,
//! sizes, parent links, class lists, and a recorded event log. It exists so
//! behaviors can be exercised without any UI framework: the behavior crates'
//! tests, doctests, and benches all run against it, and it doubles as a
//! worked example for writing a real host.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use kurbo::{Point, Size, Vec2};

use crate::host::{Host, Placement};

/// Handle into a [`MemoryHost`] element store.
///
/// Plain index; removing an element marks its record detached rather than
/// freeing the slot, so stale handles never alias another element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// A dispatched lifecycle event, as recorded by the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRecord {
    /// Element the event was dispatched on.
    pub target: ElementId,
    /// Event name.
    pub event: &'static str,
    /// Affected element carried as the event payload.
    pub subject: ElementId,
}

#[derive(Debug, Clone)]
struct Record {
    offset: Point,
    size: Size,
    parent: Option<ElementId>,
    placement: Placement,
    classes: Vec<String>,
    attached: bool,
}

/// In-memory reference host with a recorded event log.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    records: Vec<Record>,
    scroll: Vec2,
    events: Vec<EventRecord>,
}

impl MemoryHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached root element with the given page offset and size.
    pub fn insert(&mut self, offset: Point, size: Size) -> ElementId {
        let id = ElementId(self.records.len());
        self.records.push(Record {
            offset,
            size,
            parent: None,
            placement: Placement::Flow,
            classes: Vec::new(),
            attached: false,
        });
        id
    }

    /// Creates an element attached under `parent`.
    pub fn insert_child(&mut self, parent: ElementId, offset: Point, size: Size) -> ElementId {
        let id = self.insert(offset, size);
        self.append_child(&parent, &id);
        id
    }

    /// Sets how the element is positioned.
    pub fn set_placement(&mut self, element: ElementId, placement: Placement) {
        if let Some(record) = self.records.get_mut(element.0) {
            record.placement = placement;
        }
    }

    /// Sets the document scroll offset.
    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }

    /// Returns `true` while the element is part of the document.
    #[must_use]
    pub fn is_attached(&self, element: ElementId) -> bool {
        self.records
            .get(element.0)
            .is_some_and(|record| record.attached)
    }

    /// Returns `true` if the element currently carries `class`.
    #[must_use]
    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.records
            .get(element.0)
            .is_some_and(|record| record.classes.iter().any(|c| c == class))
    }

    /// The recorded lifecycle events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Forgets all recorded events.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn record(&self, element: &ElementId) -> Option<&Record> {
        self.records.get(element.0)
    }

    fn record_mut(&mut self, element: &ElementId) -> Option<&mut Record> {
        self.records.get_mut(element.0)
    }
}

impl Host for MemoryHost {
    type Element = ElementId;

    fn offset(&self, element: &ElementId) -> Point {
        self.record(element).map_or(Point::ZERO, |r| r.offset)
    }

    fn set_offset(&mut self, element: &ElementId, offset: Point) {
        if let Some(record) = self.record_mut(element) {
            record.offset = offset;
        }
    }

    fn size(&self, element: &ElementId) -> Size {
        self.record(element).map_or(Size::ZERO, |r| r.size)
    }

    fn set_size(&mut self, element: &ElementId, size: Size) {
        if let Some(record) = self.record_mut(element) {
            record.size = size;
        }
    }

    fn parent_offset(&self, element: &ElementId) -> Point {
        self.record(element)
            .and_then(|r| r.parent)
            .map_or(Point::ZERO, |parent| self.offset(&parent))
    }

    fn placement(&self, element: &ElementId) -> Placement {
        self.record(element).map_or(Placement::Flow, |r| r.placement)
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn add_class(&mut self, element: &ElementId, class: &str) {
        if let Some(record) = self.record_mut(element)
            && !record.classes.iter().any(|c| c == class)
        {
            record.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, element: &ElementId, class: &str) {
        if let Some(record) = self.record_mut(element) {
            record.classes.retain(|c| c != class);
        }
    }

    fn dispatch(&mut self, target: &ElementId, event: &'static str, subject: &ElementId) {
        self.events.push(EventRecord {
            target: *target,
            event,
            subject: *subject,
        });
    }

    fn append_child(&mut self, parent: &ElementId, child: &ElementId) {
        if let Some(record) = self.record_mut(child) {
            record.parent = Some(*parent);
            record.attached = true;
        }
    }

    fn remove_element(&mut self, element: &ElementId) {
        if let Some(record) = self.record_mut(element) {
            record.attached = false;
            record.parent = None;
        }
    }
}
