use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};
use shader_cube::anim::{Animator, Axis, Easing, Spin, Timeline};
use shader_cube::camera::Camera;
use shader_cube::material::Material;
use shader_cube::math::Color;
use shader_cube::pick::PickDispatcher;
use shader_cube::scene::{CubeGeometry, SceneNode};
use shader_cube::shading::ShadingModel;

fn cube_node() -> SceneNode {
    let material = Material::new(
        ShadingModel::Blend,
        Color::new(1.0, 1.0, 0.0),
        Color::new(1.0, 0.412, 0.706),
        true,
    )
    .unwrap();
    SceneNode::new(CubeGeometry::new(1.0).unwrap(), material)
}

fn square_timeline() -> Timeline {
    Timeline::looping_path(
        Vec3::ZERO,
        &[[5.0, 0.0], [5.0, 5.0], [0.0, 5.0], [0.0, 0.0]],
        4.0,
        Easing::Linear,
    )
}

/// Benchmark: one frame of path advancement
fn bench_timeline_advance(c: &mut Criterion) {
    let mut timeline = square_timeline();

    c.bench_function("timeline_advance_frame", |b| {
        b.iter(|| black_box(timeline.advance(black_box(0.016))))
    });
}

/// Benchmark: full animator tick with a varying number of live spins
fn bench_animator_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("animator_tick");

    for spins in [0usize, 1, 3].iter() {
        group.bench_with_input(BenchmarkId::new("spins", spins), spins, |b, &count| {
            // A near-endless spin duration keeps every spin live across
            // the whole measurement
            let mut animator = Animator::new(square_timeline(), 1.0e9);
            let mut node = cube_node();
            let axes = [Axis::X, Axis::Y, Axis::Z];
            for axis in axes.into_iter().take(count) {
                animator.start_spin(Spin { axis, angle: 1.0 }, node.rotation);
            }

            b.iter(|| {
                animator.advance(black_box(0.016), &mut node);
                black_box(node.position)
            })
        });
    }

    group.finish();
}

/// Benchmark: click raycast against the oriented cube (hit case)
fn bench_pick_hit(c: &mut Criterion) {
    let camera = Camera::new(
        Vec3::new(10.0, 10.0, 10.0),
        Vec3::ZERO,
        75.0,
        16.0 / 9.0,
        0.1,
        1000.0,
    );
    let mut node = cube_node();
    node.rotation = Vec3::new(0.3, 0.7, 0.1);
    let mut dispatcher = PickDispatcher::with_seed(7);

    c.bench_function("pick_center_hit", |b| {
        b.iter(|| black_box(dispatcher.click(black_box(Vec2::ZERO), &camera, &node)))
    });
}

/// Benchmark: click raycast against the oriented cube (miss case)
fn bench_pick_miss(c: &mut Criterion) {
    let camera = Camera::new(
        Vec3::new(10.0, 10.0, 10.0),
        Vec3::ZERO,
        75.0,
        16.0 / 9.0,
        0.1,
        1000.0,
    );
    let mut node = cube_node();
    node.rotation = Vec3::new(0.3, 0.7, 0.1);
    let mut dispatcher = PickDispatcher::with_seed(7);

    c.bench_function("pick_corner_miss", |b| {
        b.iter(|| {
            black_box(dispatcher.click(black_box(Vec2::new(0.95, 0.95)), &camera, &node))
        })
    });
}

/// Benchmark: WGSL assembly plus uniform validation per material build
fn bench_material_assembly(c: &mut Criterion) {
    c.bench_function("material_shader_assembly", |b| {
        b.iter(|| {
            black_box(Material::new(
                black_box(ShadingModel::TimeBlend),
                Color::new(1.0, 1.0, 0.0),
                Color::new(1.0, 0.412, 0.706),
                true,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_timeline_advance,
    bench_animator_tick,
    bench_pick_hit,
    bench_pick_miss,
    bench_material_assembly,
);

criterion_main!(benches);
