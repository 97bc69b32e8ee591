// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Size, Vec2};

use holdfast_gesture::controller::{GestureController, Origin, PointerButton};
use holdfast_gesture::memory::MemoryHost;
use holdfast_grab::{GrabOptions, Grabbable, Translate};
use holdfast_select::{RubberBand, anchored_rect};
use holdfast_size::{EdgeResize, SizerHandle};

fn press_origin() -> Origin {
    Origin::new(
        Point::new(10.0, 10.0),
        Rect::new(100.0, 200.0, 140.0, 230.0),
        Point::ZERO,
    )
}

fn pointer_track(len: usize) -> Vec<Point> {
    // Deterministic zig-zag; the controller recomputes from the origin on
    // every move, so the shape barely matters beyond defeating constant
    // folding.
    (0..len)
        .map(|i| {
            let i = i as f64;
            Point::new(10.0 + i * 3.0, 10.0 + (i % 7.0) * 11.0)
        })
        .collect()
}

fn bench_controller_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/update");

    // One update per simulated pointer move, transform included. This is the
    // per-event cost a host pays while a gesture is in flight.
    for len in [64usize, 1_024, 16_384] {
        let track = pointer_track(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("translate", len), &track, |b, track| {
            b.iter_batched(
                || {
                    let mut gesture = GestureController::new(Translate);
                    gesture.begin(PointerButton::Primary, press_origin());
                    gesture
                },
                |mut gesture| {
                    for &pointer in track {
                        black_box(gesture.update(pointer));
                    }
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("edge_resize", len), &track, |b, track| {
            b.iter_batched(
                || {
                    let mut gesture =
                        GestureController::new(EdgeResize::new(SizerHandle::BottomRight));
                    gesture.begin(PointerButton::Primary, press_origin());
                    gesture
                },
                |mut gesture| {
                    for &pointer in track {
                        black_box(gesture.update(pointer));
                    }
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("rubber_band", len), &track, |b, track| {
            b.iter_batched(
                || {
                    let mut gesture = GestureController::new(RubberBand);
                    gesture.begin(PointerButton::Primary, press_origin());
                    gesture
                },
                |mut gesture| {
                    for &pointer in track {
                        black_box(gesture.update(pointer));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("grab/session");

    // A full press-move-release against the reference host, geometry writes
    // and event dispatch included.
    for moves in [16usize, 256, 4_096] {
        let track = pointer_track(moves);
        group.throughput(Throughput::Elements(moves as u64));

        group.bench_with_input(BenchmarkId::from_parameter(moves), &track, |b, track| {
            b.iter_batched(
                || {
                    let mut host = MemoryHost::new();
                    let element = host.insert(Point::new(100.0, 200.0), Size::new(40.0, 30.0));
                    let grab = Grabbable::new(element, GrabOptions::default());
                    (host, grab)
                },
                |(mut host, mut grab)| {
                    grab.on_press(&mut host, PointerButton::Primary, Point::new(10.0, 10.0));
                    for &pointer in track {
                        grab.on_document_move(&mut host, pointer);
                    }
                    grab.on_document_release(&mut host, Point::new(500.0, 500.0));
                    black_box(host);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_anchored_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("select/anchored_rect");

    let deltas: Vec<Vec2> = (0..4_096)
        .map(|i| {
            let i = f64::from(i);
            Vec2::new(100.0 - (i % 200.0), 100.0 - ((i * 13.0) % 200.0))
        })
        .collect();
    group.throughput(Throughput::Elements(deltas.len() as u64));

    group.bench_function("mixed_quadrants", |b| {
        b.iter(|| {
            let anchor = Point::new(250.0, 250.0);
            for &delta in &deltas {
                black_box(anchored_rect(anchor, delta));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_controller_update,
    bench_drag_session,
    bench_anchored_rect
);
criterion_main!(benches);
