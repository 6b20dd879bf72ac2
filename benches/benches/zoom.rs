// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_touch::{PinchUpdate, TouchEvent, TouchPhase};
use understory_zoom::{
    GeometryListener, PanMode, ScaleGestureListener, TouchListener, ZoomConfig, ZoomController,
};

const VIEWPORT: Size = Size::new(1080.0, 1920.0);

fn fitted(config: ZoomConfig, image: Size) -> ZoomController {
    let mut zoom = ZoomController::new(config);
    zoom.on_geometry_ready(VIEWPORT, image);
    zoom
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/pinch");

    // Alternate in and out so every tick is applied rather than dropped at a bound.
    let ticks: Vec<PinchUpdate> = (0..256)
        .map(|i| {
            let factor = if i % 2 == 0 { 1.05 } else { 0.97 };
            let focus = Point::new(f64::from(i % 27) * 40.0, f64::from(i % 48) * 40.0);
            PinchUpdate::new(factor, focus)
        })
        .collect();

    for (name, image) in [
        ("exact_fit", VIEWPORT),
        ("large", Size::new(6000.0, 4000.0)),
        ("small", Size::new(120.0, 90.0)),
    ] {
        group.bench_with_input(BenchmarkId::new("ticks_256", name), &image, |b, &image| {
            b.iter_batched(
                || fitted(ZoomConfig::default(), image),
                |mut zoom| {
                    for tick in &ticks {
                        zoom.on_scale(*tick);
                    }
                    black_box(zoom.transform());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_touch_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/touch");

    let path: Vec<[Point; 1]> = (0..256)
        .map(|i| {
            let dx = f64::from(i % 64) * 3.0;
            let dy = f64::from(i % 32) * 5.0;
            [Point::new(540.0 + dx, 960.0 - dy)]
        })
        .collect();

    for mode in [PanMode::TrackOnly, PanMode::Translate] {
        let config = ZoomConfig::new().with_pan_mode(mode);
        group.bench_with_input(
            BenchmarkId::new("moves_256", format!("{mode:?}")),
            &config,
            |b, &config| {
                b.iter_batched(
                    || {
                        let mut zoom = fitted(config, Size::new(2160.0, 3840.0));
                        zoom.on_scale(PinchUpdate::new(3.0, (540.0, 960.0)));
                        zoom
                    },
                    |mut zoom| {
                        zoom.on_touch(&TouchEvent::new(TouchPhase::Down, &path[0]));
                        for p in &path {
                            zoom.on_touch(&TouchEvent::new(TouchPhase::Move, p));
                        }
                        zoom.on_touch(&TouchEvent::new(TouchPhase::Up, &path[path.len() - 1]));
                        black_box(zoom.transform());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pinch, bench_touch_pan);
criterion_main!(benches);
