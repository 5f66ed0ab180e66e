// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Size, Vec2};
use understory_drag::clamp::{Limits, clamp_offset};
use understory_drag::{DragEngine, DragHost, DragOptions, InputEvent};

/// Host with a fixed layout and no-op listener registration.
struct StaticPage;

impl DragHost for StaticPage {
    type Element = u32;

    fn listen_start(&mut self, _: u32) {}

    fn unlisten_start(&mut self, _: u32) {}

    fn listen_document(&mut self) {}

    fn unlisten_document(&mut self) {}

    fn bounding_rect(&self, _: u32) -> Rect {
        Rect::new(100.0, 100.0, 200.0, 150.0)
    }

    fn viewport_size(&self) -> Size {
        Size::new(1920.0, 1080.0)
    }
}

fn mounted(options: DragOptions) -> DragEngine<StaticPage> {
    let mut engine = DragEngine::headless(StaticPage, options);
    engine.bind_target(0);
    let _ = engine.attach();
    engine
}

/// Zig-zag pointer path that overshoots the viewport on both axes.
fn path(len: usize) -> Vec<InputEvent> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            let x = (t * 7.0) % 2500.0 - 300.0;
            let y = (t * 3.0) % 1400.0 - 200.0;
            InputEvent::mouse_move(Point::new(x, y))
        })
        .collect()
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/session");

    for len in [64usize, 1_024, 16_384] {
        let moves = path(len);
        group.throughput(Throughput::Elements(len as u64));

        for (name, options) in [
            ("free", DragOptions::default()),
            ("viewport", DragOptions::default().with_viewport(true)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, len), &moves, |b, moves| {
                b.iter_batched(
                    || mounted(options),
                    |mut engine| {
                        engine.on_element_event(0, &InputEvent::mouse_down(Point::ZERO));
                        for ev in moves {
                            black_box(engine.on_document_event(ev));
                        }
                        engine.on_document_event(&InputEvent::mouse_up(Point::ZERO));
                        black_box(engine.state());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_clamp(c: &mut Criterion) {
    let limits = Limits::new(-100.0, 1820.0, -100.0, 1030.0);
    let candidates: Vec<Vec2> = (0..4_096)
        .map(|i| Vec2::new(f64::from(i) - 2_048.0, f64::from(i % 97) * 20.0))
        .collect();

    let mut group = c.benchmark_group("drag/clamp");
    group.throughput(Throughput::Elements(candidates.len() as u64));
    group.bench_function("limits", |b| {
        b.iter(|| {
            for v in &candidates {
                black_box(clamp_offset(black_box(*v), Some(&limits)));
            }
        });
    });
    group.bench_function("none", |b| {
        b.iter(|| {
            for v in &candidates {
                black_box(clamp_offset(black_box(*v), None));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_moves, bench_clamp);
criterion_main!(benches);
