use approx::assert_relative_eq;
use glam::Quat;
use rigid3d::collision::{collide_box_box, collide_sphere_box, generate_contacts};
use rigid3d::{BodyDef, Shape, Vec3, World};

/// S4: unit cubes whose centers are half a unit apart report intersection
/// with the expected axis-aligned normal and penetration.
#[test]
fn unit_cubes_half_overlap_reports_expected_normal_and_depth() {
    let contact = collide_box_box(
        rigid3d::BodyId(0),
        Vec3::ZERO,
        Quat::IDENTITY,
        Vec3::ONE,
        0.5,
        0.5,
        rigid3d::BodyId(1),
        Vec3::new(0.5, 0.0, 0.0),
        Quat::IDENTITY,
        Vec3::ONE,
        0.5,
        0.5,
    )
    .expect("cubes overlap");

    assert_relative_eq!(contact.penetration, 0.5, epsilon = 1e-4);
    assert!(contact.normal.dot(Vec3::X) > 0.99);
}

/// S5: identical cubes two units apart are disjoint.
#[test]
fn identical_cubes_two_units_apart_are_disjoint() {
    let contact = collide_box_box(
        rigid3d::BodyId(0),
        Vec3::ZERO,
        Quat::IDENTITY,
        Vec3::ONE,
        0.5,
        0.5,
        rigid3d::BodyId(1),
        Vec3::new(2.0, 0.0, 0.0),
        Quat::IDENTITY,
        Vec3::ONE,
        0.5,
        0.5,
    );
    assert!(contact.is_none());
}

/// S6: a sphere overlapping a unit box along +X produces a normal pointing
/// from sphere to box, with the penetration and contact point the spec
/// names.
#[test]
fn sphere_against_box_face_reports_expected_geometry() {
    let (normal, point, penetration) = collide_sphere_box(
        Vec3::ZERO,
        0.5,
        Vec3::new(1.2, 0.0, 0.0),
        Quat::IDENTITY,
        Vec3::ONE,
    )
    .expect("sphere overlaps box");

    assert!(normal.dot(Vec3::X) > 0.99);
    assert_relative_eq!(penetration, 0.3, epsilon = 1e-4);
    assert_relative_eq!(point.x, 0.2, epsilon = 1e-4);
}

#[test]
fn generator_emits_no_contact_for_disjoint_world() {
    let mut world = World::new();
    world.create_body(
        BodyDef::builder().shape(Shape::sphere(0.5)).position(Vec3::ZERO).mass(1.0).build(),
    );
    world.create_body(
        BodyDef::builder()
            .shape(Shape::sphere(0.5))
            .position(Vec3::new(10.0, 0.0, 0.0))
            .mass(1.0)
            .build(),
    );

    let mut contacts = Vec::new();
    generate_contacts(world.bodies(), &mut contacts);
    assert!(contacts.is_empty());
}

#[test]
fn generator_skips_pairs_involving_a_line() {
    let mut world = World::new();
    world.create_body(
        BodyDef::builder().shape(Shape::sphere(1.0)).position(Vec3::ZERO).mass(1.0).build(),
    );
    world.create_body(
        BodyDef::builder()
            .shape(Shape::line(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0)))
            .position(Vec3::ZERO)
            .mass(1.0)
            .build(),
    );

    let mut contacts = Vec::new();
    generate_contacts(world.bodies(), &mut contacts);
    assert!(contacts.is_empty());
}
