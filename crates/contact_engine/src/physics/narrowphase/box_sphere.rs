//! Box-sphere and sphere-box tests

use crate::config::CollisionConfig;
use crate::foundation::math::Vec3;
use crate::physics::collision::{BoxCollider, SphereCollider};
use super::ContactGeometry;

/// Half edge of the unit cube in box-local space
const HALF: f32 = 0.5;

/// Overlap test between a box (first) and a sphere (second)
///
/// The sphere center is clamped to the box in local space to find the
/// closest point on the box. The normal points from the sphere toward the
/// box. When the center lies inside or on the box the clamped point
/// coincides with it; that case falls back to the nearest face (see
/// [`enclosed_center_contact`]).
pub fn box_sphere(
    cube: &BoxCollider,
    sphere: &SphereCollider,
    config: &CollisionConfig,
) -> Option<ContactGeometry> {
    let center = sphere.center();
    let radius = sphere.world_radius();

    let local = cube.to_local_coordinates(center);
    let clamped = local.map(|c| c.clamp(-HALF, HALF));
    let closest = cube.to_world_coordinates(clamped);

    let offset = closest - center;
    let distance = offset.magnitude();
    if distance > radius + config.contact_epsilon {
        return None;
    }

    if distance > config.contact_epsilon {
        return Some(ContactGeometry {
            point: closest,
            normal: offset / distance,
            penetration: (radius - distance).max(0.0),
        });
    }

    Some(enclosed_center_contact(cube, local, center, radius))
}

/// Overlap test between a sphere (first) and a box (second)
///
/// Runs [`box_sphere`] with the arguments swapped and negates the normal so
/// it still points from the second shape toward the first.
pub fn sphere_box(
    sphere: &SphereCollider,
    cube: &BoxCollider,
    config: &CollisionConfig,
) -> Option<ContactGeometry> {
    box_sphere(cube, sphere, config).map(|contact| ContactGeometry {
        normal: -contact.normal,
        ..contact
    })
}

/// Contact for a sphere whose center is inside the box
///
/// Picks the face closest to the center in world units. The normal is the
/// inverted outward normal of that face, so pushing the box along it moves
/// the face past the sphere center; penetration is the radius plus the
/// distance from the center to that face.
fn enclosed_center_contact(
    cube: &BoxCollider,
    local: Vec3,
    center: Vec3,
    radius: f32,
) -> ContactGeometry {
    let mut best_depth = f32::INFINITY;
    let mut best_point = center;
    let mut best_outward = Vec3::x();

    for axis in 0..3 {
        for sign in [1.0_f32, -1.0] {
            let mut on_face = local;
            on_face[axis] = sign * HALF;
            let face_point = cube.to_world_coordinates(on_face);
            let depth = (face_point - center).magnitude();

            if depth < best_depth {
                let mut direction = Vec3::zeros();
                direction[axis] = sign;
                best_depth = depth;
                best_point = face_point;
                best_outward = cube.axis_direction(direction).normalize();
            }
        }
    }

    ContactGeometry {
        point: best_point,
        normal: -best_outward,
        penetration: radius + best_depth,
    }
}
