use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use planar_kernel::{
    core::math::vec2,
    index::SpatialSet,
    shape::Box2,
    topology::ray_shoot,
};
use std::hint::black_box;
use test_polygons::*;

fn grid_set(n: u32) -> SpatialSet<u32> {
    let mut set = SpatialSet::new();
    for i in 0..n {
        for j in 0..n {
            let (x, y) = (i as f64, j as f64);
            set.add(i * n + j, Box2::new(x, y, x + 0.75, y + 0.75));
        }
    }
    set
}

fn spatial_search_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial_search");
    for &n in &[10u32, 100, 300] {
        let set = grid_set(n);
        let mid = n as f64 / 2.0;
        let query = Box2::new(mid - 2.0, mid - 2.0, mid + 2.0, mid + 2.0);
        group.bench_with_input(BenchmarkId::new("grid_window", n * n), &set, |b, set| {
            b.iter(|| set.search(black_box(&query)).count())
        });
    }
    group.finish();
}

fn spatial_insert_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial_insert");
    for &n in &[10u32, 100] {
        group.bench_with_input(BenchmarkId::new("grid", n * n), &n, |b, &n| {
            b.iter(|| grid_set(n))
        });
    }
    group.finish();
}

fn ray_shoot_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("ray_shoot");
    for &i in &[24, 240, 2400, 24000] {
        let polygon = star::<f64>(i);
        group.bench_with_input(BenchmarkId::new("star_center", i), &polygon, |b, polygon| {
            b.iter(|| ray_shoot(polygon, black_box(vec2(0.5, 0.5))))
        });
    }
    group.finish();
}

fn cut_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("cut_face");
    for &i in &[24, 240, 2400] {
        let polygon = star::<f64>(i);
        group.bench_with_input(BenchmarkId::new("star_diameter", i), &polygon, |b, polygon| {
            b.iter(|| {
                let mut p = polygon.clone();
                p.cut_face(vec2(-40.0, 0.0), vec2(40.0, 0.0)).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    spatial_search_group,
    spatial_insert_group,
    ray_shoot_group,
    cut_group,
);
criterion_main!(benches);
