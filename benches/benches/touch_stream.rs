// Copyright 2026 the Pinwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use pinwheel_gesture::touch::TouchEvent;
use pinwheel_view::{SimultaneousView, SlotPolicy, ViewConfig};
use std::hint::black_box;

/// Two fingers twisting and spreading while the first also drags.
fn twist_and_drag(samples: u32) -> Vec<TouchEvent> {
    let anchor = Point::new(175.0, 325.0);
    let mut events = vec![
        TouchEvent::began(1, anchor),
        TouchEvent::began(2, anchor + Vec2::new(80.0, 0.0)),
    ];
    let (mut first, mut second) = (anchor, anchor);
    for i in 1..=samples {
        let t = f64::from(i) / f64::from(samples);
        let (sin, cos) = (t * std::f64::consts::PI).sin_cos();
        first = anchor + Vec2::new(0.0, 40.0 * t);
        second = first + Vec2::new(cos, sin) * (80.0 + 80.0 * t);
        events.push(TouchEvent::moved(1, first));
        events.push(TouchEvent::moved(2, second));
    }
    events.push(TouchEvent::ended(2, second));
    events.push(TouchEvent::ended(1, first));
    events
}

fn bench_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/handle");

    for samples in [16_u32, 256, 4_096] {
        let events = twist_and_drag(samples);
        group.throughput(Throughput::Elements(events.len() as u64));

        for (name, policy) in [("shared", SlotPolicy::Shared), ("separate", SlotPolicy::Separate)] {
            let config = ViewConfig::default().with_slot_policy(policy);
            group.bench_with_input(BenchmarkId::new(name, samples), &events, |b, events| {
                b.iter_batched(
                    || SimultaneousView::new(config),
                    |mut view| {
                        for event in events {
                            view.handle(event);
                            black_box(view.display_transform());
                        }
                        black_box(view);
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_handle);
criterion_main!(benches);
