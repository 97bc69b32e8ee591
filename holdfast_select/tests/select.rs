// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `holdfast_select` crate.
//!
//! These exercise the selection behavior end to end against the in-memory
//! reference host: rubber-band normalization in every drag direction, the
//! finalize policy with and without a default selection, the start veto,
//! and the deactivation path.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size, Vec2};

use holdfast_gesture::controller::PointerButton;
use holdfast_gesture::host::Host;
use holdfast_gesture::memory::{ElementId, MemoryHost};
use holdfast_gesture::registry::Behavior;
use holdfast_select::{
    DefaultSelection, END_EVENT, MOVE_EVENT, START_EVENT, SelectOptions, Selectable,
};

fn fixture() -> (MemoryHost, ElementId) {
    let mut host = MemoryHost::new();
    let canvas = host.insert(Point::ZERO, Size::new(800.0, 600.0));
    (host, canvas)
}

fn options() -> SelectOptions<MemoryHost> {
    SelectOptions::new(Box::new(|host: &mut MemoryHost| {
        host.insert(Point::ZERO, Size::ZERO)
    }))
}

/// Runs one full press-drag-release and returns the overlay element.
fn drag(
    select: &mut Selectable<MemoryHost>,
    host: &mut MemoryHost,
    from: Point,
    to: Point,
) -> ElementId {
    select.on_press(host, PointerButton::Primary, from);
    select.on_document_move(host, to);
    let overlay = *select.overlay().unwrap();
    select.on_document_release(host, to);
    overlay
}

#[test]
fn committed_rectangle_is_normalized_in_every_direction() {
    // The same 60x100 rectangle, dragged from each of its four corners.
    let corners = [
        (Point::new(140.0, 150.0), Point::new(200.0, 250.0)),
        (Point::new(200.0, 250.0), Point::new(140.0, 150.0)),
        (Point::new(200.0, 150.0), Point::new(140.0, 250.0)),
        (Point::new(140.0, 250.0), Point::new(200.0, 150.0)),
    ];
    for (from, to) in corners {
        let (mut host, canvas) = fixture();
        let mut select = Selectable::new(canvas, options());
        let overlay = drag(&mut select, &mut host, from, to);

        assert_eq!(host.offset(&overlay), Point::new(140.0, 150.0), "{from:?}->{to:?}");
        assert_eq!(host.size(&overlay), Size::new(60.0, 100.0), "{from:?}->{to:?}");
    }
}

#[test]
fn overlay_is_appended_and_tracks_the_pointer() {
    let (mut host, canvas) = fixture();
    let mut select = Selectable::new(canvas, options());

    select.on_press(&mut host, PointerButton::Primary, Point::new(100.0, 100.0));
    let overlay = *select.overlay().unwrap();
    assert!(host.is_attached(overlay));
    assert_eq!(host.offset(&overlay), Point::new(100.0, 100.0));
    assert_eq!(host.size(&overlay), Size::ZERO);

    select.on_document_move(&mut host, Point::new(130.0, 180.0));
    assert_eq!(host.size(&overlay), Size::new(30.0, 80.0));

    select.on_document_move(&mut host, Point::new(90.0, 120.0));
    assert_eq!(host.offset(&overlay), Point::new(90.0, 100.0));
    assert_eq!(host.size(&overlay), Size::new(10.0, 20.0));
}

#[test]
fn events_fire_on_the_container_with_the_overlay_as_subject() {
    let (mut host, canvas) = fixture();
    let mut select = Selectable::new(canvas, options());
    let overlay = drag(
        &mut select,
        &mut host,
        Point::new(10.0, 10.0),
        Point::new(60.0, 70.0),
    );

    let names: Vec<_> = host.events().iter().map(|e| e.event).collect();
    assert_eq!(names, [START_EVENT, MOVE_EVENT, END_EVENT]);
    assert!(host.events().iter().all(|e| e.target == canvas && e.subject == overlay));
}

#[test]
fn too_small_release_without_a_default_discards_the_overlay() {
    let (mut host, canvas) = fixture();
    let ended = Rc::new(Cell::new(false));
    let ended_in = Rc::clone(&ended);

    let mut opts = options();
    opts.default_size = None;
    opts.on_end = Some(Box::new(move |_overlay: &ElementId, _rect| {
        ended_in.set(true);
    }));
    let mut select = Selectable::new(canvas, opts);

    // 15x40: width is under the 20.0 minimum.
    let overlay = drag(
        &mut select,
        &mut host,
        Point::new(100.0, 100.0),
        Point::new(115.0, 140.0),
    );

    assert!(!host.is_attached(overlay));
    assert!(!ended.get());
    assert!(!select.is_active());
    assert!(host.events().iter().all(|e| e.event != END_EVENT));
}

#[test]
fn too_small_release_commits_the_default_centered_on_the_press() {
    let (mut host, canvas) = fixture();
    let seen = Rc::new(Cell::new(Rect::ZERO));
    let seen_in = Rc::clone(&seen);

    let mut opts = options();
    opts.default_size = Some(DefaultSelection::new(Size::new(50.0, 50.0)));
    opts.on_end = Some(Box::new(move |_overlay: &ElementId, rect| {
        seen_in.set(rect);
    }));
    let mut select = Selectable::new(canvas, opts);

    let overlay = drag(
        &mut select,
        &mut host,
        Point::new(200.0, 150.0),
        Point::new(205.0, 155.0),
    );

    // 50x50 centered on the press point (200, 150).
    assert_eq!(host.offset(&overlay), Point::new(175.0, 125.0));
    assert_eq!(host.size(&overlay), Size::new(50.0, 50.0));
    assert_eq!(seen.get(), Rect::new(175.0, 125.0, 225.0, 175.0));
    assert!(host.is_attached(overlay));
}

#[test]
fn anchored_default_ignores_the_press_point() {
    let (mut host, canvas) = fixture();
    let mut opts = options();
    opts.default_size = Some(DefaultSelection::anchored(
        Size::new(40.0, 30.0),
        Point::new(5.0, 6.0),
    ));
    let mut select = Selectable::new(canvas, opts);

    let overlay = drag(
        &mut select,
        &mut host,
        Point::new(300.0, 300.0),
        Point::new(301.0, 301.0),
    );

    assert_eq!(host.offset(&overlay), Point::new(5.0, 6.0));
    assert_eq!(host.size(&overlay), Size::new(40.0, 30.0));
}

#[test]
fn default_still_under_minimum_is_discarded() {
    let (mut host, canvas) = fixture();
    let mut opts = options();
    opts.default_size = Some(DefaultSelection::new(Size::new(10.0, 10.0)));
    let mut select = Selectable::new(canvas, opts);

    let overlay = drag(
        &mut select,
        &mut host,
        Point::new(100.0, 100.0),
        Point::new(101.0, 101.0),
    );

    assert!(!host.is_attached(overlay));
    assert!(host.events().iter().all(|e| e.event != END_EVENT));
}

#[test]
fn vetoed_start_is_a_complete_noop() {
    let (mut host, canvas) = fixture();
    let mut opts = options();
    opts.on_start = Some(Box::new(|_canvas: &ElementId, _press| false));
    let mut select = Selectable::new(canvas, opts);

    let handled = select.on_press(&mut host, PointerButton::Primary, Point::new(50.0, 50.0));
    assert!(!handled.is_consumed());
    assert!(!select.is_active());
    assert!(select.overlay().is_none());
    assert!(host.events().is_empty());
}

#[test]
fn start_veto_receives_the_scroll_compensated_press_point() {
    let (mut host, canvas) = fixture();
    host.set_scroll(Vec2::new(0.0, 300.0));
    let seen = Rc::new(Cell::new(Point::ZERO));
    let seen_in = Rc::clone(&seen);

    let mut opts = options();
    opts.on_start = Some(Box::new(move |_canvas: &ElementId, press| {
        seen_in.set(press);
        true
    }));
    let mut select = Selectable::new(canvas, opts);

    select.on_press(&mut host, PointerButton::Primary, Point::new(50.0, 50.0));
    assert_eq!(seen.get(), Point::new(50.0, 350.0));
}

#[test]
fn secondary_press_creates_no_overlay() {
    let (mut host, canvas) = fixture();
    let mut select = Selectable::new(canvas, options());

    let handled = select.on_press(&mut host, PointerButton::Secondary, Point::new(50.0, 50.0));
    assert!(!handled.is_consumed());
    assert!(select.overlay().is_none());
    assert!(host.events().is_empty());
}

#[test]
fn move_callback_receives_the_normalized_extent() {
    let (mut host, canvas) = fixture();
    let seen = Rc::new(Cell::new(Vec2::ZERO));
    let seen_in = Rc::clone(&seen);

    let mut opts = options();
    opts.on_move = Some(Box::new(move |_overlay: &ElementId, extent| {
        seen_in.set(extent);
    }));
    let mut select = Selectable::new(canvas, opts);

    select.on_press(&mut host, PointerButton::Primary, Point::new(100.0, 100.0));
    select.on_document_move(&mut host, Point::new(70.0, 140.0));
    assert_eq!(seen.get(), Vec2::new(30.0, 40.0));
}

#[test]
fn deactivate_mid_gesture_removes_the_in_progress_overlay() {
    let (mut host, canvas) = fixture();
    let mut select = Selectable::new(canvas, options());

    select.on_press(&mut host, PointerButton::Primary, Point::new(100.0, 100.0));
    let overlay = *select.overlay().unwrap();

    select.deactivate(&mut host);
    assert!(!select.is_active());
    assert!(select.overlay().is_none());
    assert!(!host.is_attached(overlay));
    assert!(!select.on_document_move(&mut host, Point::new(150.0, 150.0)).is_consumed());
}

#[test]
fn committed_overlay_survives_deactivation() {
    let (mut host, canvas) = fixture();
    let mut select = Selectable::new(canvas, options());
    let overlay = drag(
        &mut select,
        &mut host,
        Point::new(10.0, 10.0),
        Point::new(60.0, 70.0),
    );

    select.deactivate(&mut host);
    assert!(host.is_attached(overlay));
    assert_eq!(host.size(&overlay), Size::new(50.0, 60.0));
}
