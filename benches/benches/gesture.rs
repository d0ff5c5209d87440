// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for replaying pointer streams through `RatingWidget`.
//!
//! By default this replays a deterministic synthetic stream of taps and drags.
//! To replay a recorded session, set `RATING_TRACE_JSON` to the path of a JSON
//! array of `{ "phase": "down" | "move" | "up" | "cancel", "pointer": u64, "x": f64, "y": f64 }`.

use std::fs;
use std::path::Path;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use serde::Deserialize;
use understory_rating::{PointerId, RatingConfig, RatingWidget};

const ENV_JSON_PATH: &str = "RATING_TRACE_JSON";
const CONTAINER: Size = Size::new(375.0, 80.0);
const ICONS: u32 = 5;

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Phase {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, Deserialize)]
struct Sample {
    phase: Phase,
    pointer: u64,
    x: f64,
    y: f64,
}

fn synthetic_stream() -> Vec<Sample> {
    let sample = |phase, x: f64| Sample {
        phase,
        pointer: 0,
        x,
        y: CONTAINER.height / 2.0,
    };
    let mut samples = Vec::new();
    for round in 0..200_u32 {
        let start = f64::from(round % 7) * CONTAINER.width / 7.0;
        samples.push(sample(Phase::Down, start));
        // Every other gesture drags across the whole row.
        if round % 2 == 0 {
            for step in 0..32_u32 {
                samples.push(sample(Phase::Move, f64::from(step) * CONTAINER.width / 31.0));
            }
        }
        samples.push(sample(Phase::Up, start));
    }
    samples
}

fn load_stream() -> Vec<Sample> {
    let Ok(path) = std::env::var(ENV_JSON_PATH) else {
        return synthetic_stream();
    };
    let bytes =
        fs::read(Path::new(&path)).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("invalid JSON {path:?}: {e}"))
}

fn widget() -> RatingWidget<u32> {
    let icons = (0..ICONS).collect();
    let mut widget = RatingWidget::new(CONTAINER, RatingConfig::default(), icons, |i| i + 100)
        .expect("non-empty icon set");
    widget.set_on_commit(|rating| {
        black_box(rating);
    });
    widget
}

fn replay(widget: &mut RatingWidget<u32>, samples: &[Sample]) {
    for sample in samples {
        let pointer = PointerId(sample.pointer);
        let position = Point::new(sample.x, sample.y);
        match sample.phase {
            Phase::Down => black_box(widget.pointer_down(pointer, position)),
            Phase::Move => black_box(widget.pointer_move(pointer, position)),
            Phase::Up => black_box(widget.pointer_up(pointer, position)),
            Phase::Cancel => {
                black_box(widget.pointer_cancel(pointer));
                None
            }
        };
    }
}

fn bench_replay(c: &mut Criterion) {
    let samples = load_stream();
    let mut group = c.benchmark_group("rating_widget/replay");
    group.throughput(Throughput::Elements(samples.len() as u64));
    group.bench_function("pointer_stream", |b| {
        b.iter_batched(
            widget,
            |mut widget| {
                replay(&mut widget, &samples);
                black_box(widget.rating())
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_replay);
criterion_main!(benches);
