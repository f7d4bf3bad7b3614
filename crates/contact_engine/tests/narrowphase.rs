//! End-to-end narrow-phase scenarios through `CollisionDetector`

use approx::assert_relative_eq;
use contact_engine::prelude::*;

const EPSILON: f32 = 1e-5;

fn unit_box_at(position: Vec3) -> RigidBody {
    RigidBody::new(Collider::cuboid(position, Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)).unwrap())
}

fn sphere_at(radius: f32, center: Vec3) -> RigidBody {
    RigidBody::new(Collider::sphere(radius, center).unwrap())
}

#[test]
fn test_box_sphere_scenario() {
    let mut bodies = BodySet::new();
    let cube = bodies.insert(unit_box_at(Vec3::zeros()));
    let ball = bodies.insert(sphere_at(0.6, Vec3::new(1.0, 0.0, 0.0)));

    let mut detector = CollisionDetector::new();
    let contacts = detector
        .generate_contacts(&bodies, &[PotentialContact::new(cube, ball)])
        .unwrap();

    assert_eq!(contacts.len(), 1);
    let contact = contacts[0];
    assert_eq!((contact.body1, contact.body2), (cube, ball));
    assert_relative_eq!(contact.point, Vec3::new(0.5, 0.0, 0.0), epsilon = EPSILON);
    // From the sphere (body2) toward the box (body1)
    assert_relative_eq!(contact.normal, Vec3::new(-1.0, 0.0, 0.0), epsilon = EPSILON);
    assert_relative_eq!(contact.penetration, 0.1, epsilon = EPSILON);
}

#[test]
fn test_box_sphere_symmetry_across_orientations() {
    let mut detector = CollisionDetector::new();

    for step in 0..12 {
        let angle = step as f32 * 30.0;
        let mut bodies = BodySet::new();
        let cube = bodies.insert(RigidBody::new(
            Collider::cuboid(
                Vec3::new(0.1, 0.0, -0.2),
                Vec3::new(angle, angle * 0.5, 10.0),
                Vec3::new(1.0, 1.4, 0.8),
            )
            .unwrap(),
        ));
        let ball = bodies.insert(sphere_at(0.5, Vec3::new(0.7, 0.3, 0.1)));

        let forward = detector
            .generate_contacts(&bodies, &[PotentialContact::new(cube, ball)])
            .unwrap()
            .to_vec();
        let backward = detector
            .generate_contacts(&bodies, &[PotentialContact::new(ball, cube)])
            .unwrap()
            .to_vec();

        assert_eq!(forward.len(), backward.len(), "angle {angle}");
        for (f, b) in forward.iter().zip(&backward) {
            assert_eq!((f.body1, f.body2), (b.body2, b.body1));
            assert_relative_eq!(f.penetration, b.penetration, epsilon = EPSILON);
            assert_relative_eq!(f.normal, -b.normal, epsilon = EPSILON);
        }
    }
}

#[test]
fn test_sphere_pairs_follow_distance_rule() {
    let mut detector = CollisionDetector::new();

    for i in 0..30 {
        let distance = i as f32 * 0.2;
        let (ra, rb) = (1.0 + (i % 3) as f32 * 0.5, 0.75);
        let direction = Vec3::new(1.0, (i % 5) as f32 - 2.0, 0.5).normalize();

        let mut bodies = BodySet::new();
        let a = bodies.insert(sphere_at(ra, Vec3::new(3.0, -1.0, 2.0) + direction * distance));
        let b = bodies.insert(sphere_at(rb, Vec3::new(3.0, -1.0, 2.0)));
        let contacts = detector
            .generate_contacts(&bodies, &[PotentialContact::new(a, b)])
            .unwrap();

        let radius_sum = ra + rb;
        if distance < radius_sum - 1e-3 {
            assert_eq!(contacts.len(), 1, "distance {distance}");
            assert_relative_eq!(contacts[0].penetration, radius_sum - distance, epsilon = 1e-4);
            assert_relative_eq!(contacts[0].normal.magnitude(), 1.0, epsilon = EPSILON);
        } else if distance > radius_sum + 1e-3 {
            assert!(contacts.is_empty(), "distance {distance}");
        }
    }
}

#[test]
fn test_far_apart_spheres_produce_nothing() {
    let mut bodies = BodySet::new();
    let a = bodies.insert(sphere_at(1.0, Vec3::zeros()));
    let b = bodies.insert(sphere_at(1.0, Vec3::new(10.0, 0.0, 0.0)));

    let mut detector = CollisionDetector::new();
    assert!(detector
        .generate_contacts(&bodies, &[PotentialContact::new(a, b)])
        .unwrap()
        .is_empty());
}

#[test]
fn test_touching_spheres_have_zero_penetration() {
    let mut bodies = BodySet::new();
    let a = bodies.insert(sphere_at(1.0, Vec3::zeros()));
    let b = bodies.insert(sphere_at(0.5, Vec3::new(0.0, 0.0, 1.5)));

    let mut detector = CollisionDetector::new();
    let contacts = detector
        .generate_contacts(&bodies, &[PotentialContact::new(a, b)])
        .unwrap();
    assert_eq!(contacts.len(), 1);
    assert_relative_eq!(contacts[0].penetration, 0.0, epsilon = EPSILON);
    assert_relative_eq!(contacts[0].normal, Vec3::new(0.0, 0.0, -1.0), epsilon = EPSILON);
}

#[test]
fn test_coincident_spheres_do_not_blow_up() {
    let mut bodies = BodySet::new();
    let a = bodies.insert(sphere_at(0.8, Vec3::new(2.0, 2.0, 2.0)));
    let b = bodies.insert(sphere_at(0.8, Vec3::new(2.0, 2.0, 2.0)));
    let pairs = [PotentialContact::new(a, b)];

    let mut detector = CollisionDetector::new();
    let first = detector.generate_contacts(&bodies, &pairs).unwrap()[0];
    let second = detector.generate_contacts(&bodies, &pairs).unwrap()[0];

    assert_relative_eq!(first.penetration, 1.6, epsilon = EPSILON);
    assert_relative_eq!(first.normal.magnitude(), 1.0, epsilon = EPSILON);
    assert_eq!(first.normal, second.normal);
}

#[test]
fn test_generate_contacts_is_idempotent() {
    let mut bodies = BodySet::new();
    let handles = [
        bodies.insert(unit_box_at(Vec3::zeros())),
        bodies.insert(unit_box_at(Vec3::new(0.9, 0.2, 0.0))),
        bodies.insert(sphere_at(0.4, Vec3::new(0.0, 0.8, 0.0))),
        bodies.insert(sphere_at(0.3, Vec3::new(1.2, 0.6, 0.0))),
        bodies.insert(sphere_at(0.3, Vec3::new(8.0, 0.0, 0.0))),
    ];
    let pairs: Vec<_> = handles
        .iter()
        .enumerate()
        .flat_map(|(i, a)| handles[i + 1..].iter().map(move |b| PotentialContact::new(*a, *b)))
        .collect();

    let mut detector = CollisionDetector::new();
    let first = detector.generate_contacts(&bodies, &pairs).unwrap().to_vec();
    let second = detector.generate_contacts(&bodies, &pairs).unwrap().to_vec();

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(detector.contacts(), second.as_slice());
}

#[test]
fn test_removed_bodies_are_tolerated() {
    let mut bodies = BodySet::new();
    let a = bodies.insert(unit_box_at(Vec3::zeros()));
    let b = bodies.insert(unit_box_at(Vec3::new(0.5, 0.0, 0.0)));
    let c = bodies.insert(sphere_at(0.5, Vec3::new(0.0, 0.7, 0.0)));
    let pairs = [
        PotentialContact::new(a, b),
        PotentialContact::new(b, c),
        PotentialContact::new(a, c),
    ];

    // Destroyed between broad-phase and narrow-phase
    bodies.remove(b);

    let mut detector = CollisionDetector::new();
    let contacts = detector.generate_contacts(&bodies, &pairs).unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!((contacts[0].body1, contacts[0].body2), (a, c));
    assert_eq!(detector.last_pass().stale, 2);
}

#[test]
fn test_box_box_contact_through_detector() {
    let mut bodies = BodySet::new();
    let lower = bodies.insert(unit_box_at(Vec3::zeros()));
    let upper = bodies.insert(RigidBody::new(
        Collider::cuboid(Vec3::new(0.0, 0.9, 0.0), Vec3::new(0.0, 30.0, 0.0), Vec3::new(1.0, 1.0, 1.0))
            .unwrap(),
    ));

    let mut detector = CollisionDetector::new();
    let contacts = detector
        .generate_contacts(&bodies, &[PotentialContact::new(upper, lower)])
        .unwrap();

    assert_eq!(contacts.len(), 1);
    assert_relative_eq!(contacts[0].normal, Vec3::y(), epsilon = EPSILON);
    assert_relative_eq!(contacts[0].penetration, 0.1, epsilon = EPSILON);
}

#[test]
fn test_moved_shape_is_seen_without_explicit_update() {
    let mut bodies = BodySet::new();
    let a = bodies.insert(sphere_at(0.5, Vec3::zeros()));
    let b = bodies.insert(unit_box_at(Vec3::new(5.0, 0.0, 0.0)));
    let pairs = [PotentialContact::new(a, b)];

    let mut detector = CollisionDetector::new();
    assert!(detector.generate_contacts(&bodies, &pairs).unwrap().is_empty());

    bodies
        .get_mut(b)
        .unwrap()
        .collider_mut()
        .set_position(Vec3::new(0.8, 0.0, 0.0))
        .unwrap();
    let contacts = detector.generate_contacts(&bodies, &pairs).unwrap();
    assert_eq!(contacts.len(), 1);
    assert_relative_eq!(contacts[0].penetration, 0.2, epsilon = EPSILON);
}

#[test]
fn test_config_tolerances_are_honoured() {
    let mut bodies = BodySet::new();
    let a = bodies.insert(sphere_at(1.0, Vec3::zeros()));
    let b = bodies.insert(sphere_at(1.0, Vec3::new(2.05, 0.0, 0.0)));
    let pairs = [PotentialContact::new(a, b)];

    let mut strict = CollisionDetector::new();
    assert!(strict.generate_contacts(&bodies, &pairs).unwrap().is_empty());

    let mut loose = CollisionDetector::with_config(CollisionConfig {
        contact_epsilon: 0.1,
        ..Default::default()
    })
    .unwrap();
    let contacts = loose.generate_contacts(&bodies, &pairs).unwrap();
    assert_eq!(contacts.len(), 1);
    // Penetration is never reported negative
    assert_eq!(contacts[0].penetration, 0.0);
}

#[test]
fn test_boundary_tolerance_is_shared_across_shape_pairs() {
    let config = CollisionConfig {
        contact_epsilon: 0.01,
        ..Default::default()
    };
    let mut detector = CollisionDetector::with_config(config).unwrap();

    // Every shape pair sits 0.005 past its boundary, inside the tolerance
    let mut bodies = BodySet::new();
    let cube = bodies.insert(unit_box_at(Vec3::zeros()));
    let gap_sphere = bodies.insert(sphere_at(0.5, Vec3::new(0.0, 1.005, 0.0)));
    let gap_box = bodies.insert(unit_box_at(Vec3::new(0.995, 0.0, 0.0)));
    let left = bodies.insert(sphere_at(1.0, Vec3::new(-10.0, 0.0, 0.0)));
    let right = bodies.insert(sphere_at(1.0, Vec3::new(-7.995, 0.0, 0.0)));

    let contacts = detector
        .generate_contacts(
            &bodies,
            &[
                PotentialContact::new(cube, gap_sphere),
                PotentialContact::new(gap_sphere, cube),
                PotentialContact::new(left, right),
                PotentialContact::new(cube, gap_box),
            ],
        )
        .unwrap();

    // Near-zero sphere gaps count as touching; near-zero box overlap as apart
    assert_eq!(contacts.len(), 3);
    assert!(contacts.iter().all(|c| c.penetration == 0.0));
    assert!(contacts
        .iter()
        .all(|c| c.body1 != gap_box && c.body2 != gap_box));

    // Beyond the tolerance both kinds of test agree on a contact
    bodies
        .get_mut(gap_box)
        .unwrap()
        .collider_mut()
        .set_position(Vec3::new(0.98, 0.0, 0.0))
        .unwrap();
    bodies
        .get_mut(gap_sphere)
        .unwrap()
        .collider_mut()
        .set_position(Vec3::new(0.0, 0.98, 0.0))
        .unwrap();
    let contacts = detector
        .generate_contacts(
            &bodies,
            &[
                PotentialContact::new(cube, gap_sphere),
                PotentialContact::new(cube, gap_box),
            ],
        )
        .unwrap();
    assert_eq!(contacts.len(), 2);
    for contact in contacts {
        assert_relative_eq!(contact.penetration, 0.02, epsilon = 1e-4);
    }
}
