// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the hot paths of page interaction.
//!
//! Measures the performance of:
//! - Drag tracking on every cursor move
//! - A full press/drag/release cycle through the gallery component
//! - Resolving a fetched document into page values

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Point;
use naomi_portfolio::content::client::parse_response;
use naomi_portfolio::content::resolve;
use naomi_portfolio::ui::gallery;
use naomi_portfolio::ui::state::DragState;
use std::hint::black_box;

/// Query response with a gallery of `count` remote images.
fn response_body(count: usize) -> String {
    let images: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"asset": {{"url": "https://cdn.sanity.io/images/p/production/{i}.jpg"}}}}"#))
        .collect();
    format!(
        r#"{{"result": {{"portfolio": {{"description": "bench", "images": [{}]}}, "socials": {{"instagram": "https://instagram.com/x"}}}}}}"#,
        images.join(",")
    )
}

fn bench_drag_tracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_interaction");

    group.bench_function("drag_move_to", |b| {
        let mut drag = DragState::new(1.5);
        drag.press(500.0, 200.0, Some(1));
        let mut x = 500.0_f32;
        b.iter(|| {
            x = if x < 0.0 { 500.0 } else { x - 1.0 };
            black_box(drag.move_to(black_box(x), 4_000.0));
        });
    });

    group.bench_function("press_drag_release", |b| {
        let mut state = gallery::State::new(1.5);
        state.handle(gallery::Message::Scrolled {
            offset: 0.0,
            max_offset: 4_000.0,
        });
        b.iter(|| {
            state.handle(gallery::Message::CursorMoved(Point::new(600.0, 40.0)));
            state.handle(gallery::Message::ItemPressed(3));
            for step in 0..32 {
                state.handle(gallery::Message::CursorMoved(Point::new(
                    600.0 - step as f32 * 10.0,
                    40.0,
                )));
            }
            black_box(state.handle(gallery::Message::Released));
        });
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("content");
    let body = response_body(48);

    group.bench_function("parse_and_resolve_48_images", |b| {
        b.iter(|| {
            let doc = parse_response(black_box(&body)).unwrap();
            black_box(resolve(&doc));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_drag_tracking, bench_resolve);
criterion_main!(benches);
