// Copyright 2025 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for grid state calculation and drawing.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use graticule_axis::{AxisModel, Orientation, compute_grid};
use graticule_render::{RecordingSurface, draw_grid};
use graticule_units::UnitSystem;
use graticule_view::CanvasView;
use kurbo::{Point, Size};

const SHAPE: Size = Size::new(1920.0, 1080.0);

fn axes(units: UnitSystem, zoom: f64) -> (AxisModel, AxisModel) {
    let mut x = AxisModel::new(Orientation::Horizontal);
    let mut y = AxisModel::new(Orientation::Vertical);
    for axis in [&mut x, &mut y] {
        axis.style_mut().units = units;
        axis.set_view(0.0, 1.0 / zoom);
    }
    (x, y)
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/compute");
    for units in [UnitSystem::Point, UnitSystem::Imperial, UnitSystem::Metric] {
        for zoom in [0.05, 1.0, 20.0] {
            let (x, y) = axes(units, zoom);
            group.bench_with_input(
                BenchmarkId::new(units.name(), zoom),
                &(x, y),
                |b, (x, y)| b.iter(|| black_box(compute_grid(x, y, SHAPE))),
            );
        }
    }
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/draw");
    for zoom in [0.05, 1.0, 20.0] {
        let (x, y) = axes(UnitSystem::Metric, zoom);
        let state = compute_grid(&x, &y, SHAPE);
        group.bench_with_input(BenchmarkId::from_parameter(zoom), &state, |b, state| {
            b.iter_batched(
                RecordingSurface::new,
                |mut surface| {
                    draw_grid(state, &mut surface);
                    black_box(surface);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_wheel_frame(c: &mut Criterion) {
    // One wheel step as the host sees it: zoom the view, derive the center,
    // recompute both axes.
    c.bench_function("grid/wheel_frame", |b| {
        let mut view = CanvasView::new(SHAPE);
        let (mut x, mut y) = axes(UnitSystem::Point, 1.0);
        let mut factor = 1.05;
        b.iter(|| {
            view.zoom_about_view_point(Point::new(700.0, 400.0), factor);
            if view.zoom() >= 10.0 || view.zoom() <= 0.1 {
                factor = 1.0 / factor;
            }
            let center = view.grid_center();
            x.set_view(center.x, 1.0 / center.zoom);
            y.set_view(center.y, 1.0 / center.zoom);
            black_box(compute_grid(&x, &y, SHAPE))
        });
    });
}

criterion_group!(benches, bench_compute, bench_draw, bench_wheel_frame);
criterion_main!(benches);
