use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rigid3d::{BodyDef, Shape, Vec3, World};

fn build_world(body_count: usize) -> World {
    let mut world = World::new();
    world.create_body(
        BodyDef::builder()
            .shape(Shape::cuboid(Vec3::new(25.0, 0.5, 25.0)))
            .position(Vec3::new(0.0, -0.5, 0.0))
            .build(),
    );

    for i in 0..body_count {
        let x = (i % 20) as f32 - 10.0;
        let z = (i / 20) as f32 - 10.0;
        let y = 2.0 + (i as f32 * 0.05);
        if i % 3 == 0 {
            world.create_body(
                BodyDef::builder()
                    .shape(Shape::cuboid(Vec3::splat(0.5)))
                    .position(Vec3::new(x, y, z))
                    .mass(1.0)
                    .build(),
            );
        } else {
            world.create_body(
                BodyDef::builder()
                    .shape(Shape::sphere(0.5))
                    .position(Vec3::new(x, y, z))
                    .mass(1.0)
                    .build(),
            );
        }
    }
    world
}

fn bench_step_mixed_bodies(c: &mut Criterion) {
    c.bench_function("step_100_mixed_bodies_4_substeps", |b| {
        let mut world = build_world(100);
        b.iter(|| {
            world.step(black_box(1.0 / 60.0), black_box(4)).unwrap();
        })
    });
}

criterion_group!(benches, bench_step_mixed_bodies);
criterion_main!(benches);
