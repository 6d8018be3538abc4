// Copyright 2025 the Depiction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use depiction_control::{DepictionControl, SizeMode};
use kurbo::{Point, Size};

const CANVAS: Size = Size::new(1280.0, 720.0);

fn loaded_control(redraws: &mut u64) -> DepictionControl<impl FnMut() + '_> {
    let mut control = DepictionControl::new(CANVAS, move || *redraws += 1);
    control
        .load_image(Size::new(4000.0, 3000.0))
        .expect("bench image is valid");
    control
}

fn bench_control(c: &mut Criterion) {
    let mut group = c.benchmark_group("depiction_control");

    group.bench_function("pan_gesture_500_moves", |b| {
        b.iter_batched(
            || (),
            |()| {
                let mut redraws = 0;
                let mut control = loaded_control(&mut redraws);
                control.pointer_down(Point::new(640.0, 360.0));
                for i in 0..500 {
                    let t = f64::from(i);
                    control.pointer_move(Point::new(640.0 - t, 360.0 + t * 0.5));
                }
                control.pointer_up(Point::new(140.0, 610.0));
                black_box(control.render_rect().ok());
                drop(control);
                black_box(redraws)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("wheel_and_double_tap_mix", |b| {
        b.iter_batched(
            || (),
            |()| {
                let mut redraws = 0;
                let mut control = loaded_control(&mut redraws);
                control.set_size_mode(SizeMode::Fit);
                for i in 0..200 {
                    let p = Point::new(f64::from(i % 64) * 20.0, f64::from(i % 36) * 20.0);
                    if i % 50 == 0 {
                        control.double_tap(p);
                    } else {
                        control.wheel(if i % 4 == 0 { -120.0 } else { 120.0 }, p);
                    }
                }
                black_box(control.zoom_percentage().ok());
                drop(control);
                black_box(redraws)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_control);
criterion_main!(benches);
