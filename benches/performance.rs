// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polyshape::io::{write_document, StepOptions};
use polyshape::{circle, cone, cuboid, cylinder, extrude, sphere, Scene3D};

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    group.bench_function("box", |b| {
        b.iter(|| cuboid(black_box(10.0), black_box(10.0), black_box(10.0)).to_mesh());
    });

    for segments in [16u32, 32, 64] {
        group.bench_with_input(BenchmarkId::new("sphere", segments), &segments, |b, &n| {
            b.iter(|| sphere(black_box(10.0)).to_mesh_with(n));
        });
    }

    group.bench_function("cylinder", |b| {
        b.iter(|| cylinder(black_box(5.0), black_box(20.0)).to_mesh_with(32));
    });

    group.bench_function("cone", |b| {
        b.iter(|| cone(black_box(5.0), black_box(20.0)).to_mesh_with(32));
    });

    group.bench_function("extrude_circle", |b| {
        b.iter(|| extrude(circle(black_box(5.0)), black_box(10.0)).to_mesh_with(64));
    });

    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");

    let shape = sphere(10.0)
        .translate(5.0, 0.0, 0.0)
        .rotate_y(0.785)
        .scale(1.0, 2.0, 1.0)
        .rotate_z(0.3);

    group.bench_function("sphere_four_transforms", |b| {
        b.iter(|| black_box(&shape).to_mesh_with(32));
    });

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    let options = StepOptions::default();

    let cube = vec![cuboid(10.0, 10.0, 10.0).to_mesh()];
    group.bench_function("cube", |b| {
        b.iter(|| write_document(black_box(&cube), &options));
    });

    let spheres: Vec<_> = (0..8)
        .map(|i| sphere(5.0).translate(i as f64 * 12.0, 0.0, 0.0).to_mesh_with(32))
        .collect();
    group.bench_function("eight_spheres", |b| {
        b.iter(|| write_document(black_box(&spheres), &options));
    });

    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");

    let mut scene = Scene3D::new();
    for i in 0..64 {
        scene.add(sphere(2.0).translate(i as f64 * 5.0, 0.0, 0.0));
    }

    group.bench_function("sequential", |b| {
        b.iter(|| scene.to_meshes_with(48).unwrap());
    });

    group.bench_function("parallel", |b| {
        b.iter(|| scene.to_meshes_parallel_with(48).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_primitives,
    bench_transforms,
    bench_step,
    bench_scene
);
criterion_main!(benches);
