// Copyright 2025 the Depiction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use depiction_view::Viewport;
use kurbo::{Point, Size, Vec2};

const CANVAS: Size = Size::new(1920.0, 1080.0);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_unit(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        f64::from((self.0 >> 32) as u32) / f64::from(u32::MAX)
    }

    fn point_on_canvas(&mut self) -> Point {
        Point::new(
            self.next_unit() * CANVAS.width,
            self.next_unit() * CANVAS.height,
        )
    }
}

fn viewport(source: Size) -> Viewport {
    Viewport::new(CANVAS, source).expect("bench sources are valid")
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("depiction_view");

    for &(w, h) in &[(640.0, 480.0), (6000.0, 4000.0)] {
        let source = Size::new(w, h);

        group.bench_function(format!("drag_1000_moves({w}x{h})"), |b| {
            b.iter_batched(
                || (viewport(source), Lcg::new(0xDE91_C710_0000_0001)),
                |(mut vp, mut rng)| {
                    let mut previous = rng.point_on_canvas();
                    for _ in 0..1000 {
                        let current = rng.point_on_canvas();
                        vp.move_between(previous, current);
                        previous = current;
                    }
                    black_box(vp.render_location());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("wheel_zoom_1000_steps({w}x{h})"), |b| {
            b.iter_batched(
                || (viewport(source), Lcg::new(0xDE91_C710_0000_0002)),
                |(mut vp, mut rng)| {
                    for i in 0..1000 {
                        let factor = if i % 3 == 0 { 0.9 } else { 1.1 };
                        let anchor = rng.point_on_canvas();
                        vp.zoom_about(anchor, vp.zoom_percentage() * factor);
                    }
                    black_box(vp.render_rect());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("fit_fill_toggle({w}x{h})"), |b| {
            let mut vp = viewport(source);
            let mut fill = false;
            b.iter(|| {
                fill = !fill;
                vp.fit_or_fill(black_box(fill), false);
                black_box(vp.render_rect())
            });
        });

        group.bench_function(format!("map_1000_points({w}x{h})"), |b| {
            let mut vp = viewport(source);
            vp.fit_or_fill(false, false);
            vp.move_by(Vec2::new(-13.0, 7.0));
            let mut rng = Lcg::new(0xDE91_C710_0000_0003);
            let points: Vec<Point> = (0..1000).map(|_| rng.point_on_canvas()).collect();
            b.iter(|| {
                let sum = points
                    .iter()
                    .map(|&p| vp.point_to_source_image_space(p))
                    .fold(0.0, |acc, p| acc + p.x + p.y);
                black_box(sum)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);
