use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;
use vexpath_editor::{CurveSet, CurveSetConfig, FieldMapping};

/// Menge mit `path_count` Pfaden à `segments` Segmenten.
fn build_curve_set(path_count: usize, segments: usize) -> CurveSet {
    let mut set = CurveSet::new(CurveSetConfig::default());
    for _ in 1..path_count {
        set.add_curve();
    }
    for index in 0..path_count {
        set.set_active_curve(index);
        for _ in 1..segments {
            set.add_segment();
        }
    }
    set.set_active_curve(0);
    set
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 800) as f32 + 0.37;
            let y = ((i * 7) % 800) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover");

    for &path_count in &[1usize, 8, 32] {
        let set = build_curve_set(path_count, 4);
        let query_points = build_query_points(1024);

        group.bench_with_input(
            BenchmarkId::new("hover_batch", path_count),
            &set,
            |b, set| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if set.hover(black_box(*point)) != vexpath_editor::HoverTarget::Empty {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_drag_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_move");

    for &path_count in &[2usize, 16] {
        group.bench_function(BenchmarkId::new("anchor_drag", path_count), |b| {
            let mut set = build_curve_set(path_count, 3);
            let anchor = set.curves()[0].points()[3];
            assert!(set.handle_drag_start(anchor));
            let mut step = 0u32;
            b.iter(|| {
                step = step.wrapping_add(1);
                let wobble = Vec2::new((step % 20) as f32, (step % 13) as f32);
                black_box(set.handle_drag_move(black_box(anchor + wobble)))
            })
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let set = build_curve_set(1, 16);
    let mapping = FieldMapping::default();

    c.bench_function("export_active_16_segments", |b| {
        b.iter(|| black_box(set.export_active(black_box(&mapping))))
    });
}

criterion_group!(core_benches, bench_hover, bench_drag_move, bench_export);
criterion_main!(core_benches);
