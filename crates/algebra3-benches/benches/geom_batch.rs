// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Batch throughput: transforming and classifying point clouds.
use algebra3_core::math::{Quat, Vec3};
use algebra3_geom::{Plane, Transform};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::{hint::black_box, time::Duration};

#[allow(clippy::cast_precision_loss)]
fn make_points(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let f = i as f32;
            Vec3::new(f * 0.5, (f * 0.25).sin(), -f)
        })
        .collect()
}

fn bench_transform_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_points");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(4));
    let xf = Transform::new(
        Vec3::new(5.0, 0.0, -3.0),
        Quat::euler(0.0, 45.0, 10.0),
        Vec3::new(1.0, 2.0, 1.0),
    );
    for &n in &[16usize, 256, 4_096] {
        let points = make_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("quat_path", n), &points, |b, pts| {
            b.iter(|| {
                for p in pts {
                    black_box(xf.transform_point(p));
                }
            });
        });
        let m = xf.to_mat4();
        group.bench_with_input(BenchmarkId::new("mat4_path", n), &points, |b, pts| {
            b.iter(|| {
                for p in pts {
                    black_box(m.multiply_point3x4(p));
                }
            });
        });
    }
    group.finish();
}

fn bench_plane_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("plane_classify");
    group.sample_size(50);
    let plane = Plane::from_normal_and_point(Vec3::new(0.2, 1.0, -0.1), Vec3::new(0.0, 1.5, 0.0));
    for &n in &[256usize, 4_096] {
        let points = make_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, pts| {
            b.iter(|| pts.iter().filter(|p| plane.get_side(p)).count());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transform_points, bench_plane_classify);
criterion_main!(benches);
