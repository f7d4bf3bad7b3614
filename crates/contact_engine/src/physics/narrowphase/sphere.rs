//! Sphere-sphere test

use crate::config::CollisionConfig;
use crate::physics::collision::SphereCollider;
use super::{fallback_normal, ContactGeometry};

/// Overlap test between two spheres
///
/// Colliding iff the center distance is at most the radius sum (within
/// `contact_epsilon`), so touching spheres report a zero-depth contact. The
/// contact point is the midpoint of the centers. Coincident centers use
/// [`fallback_normal`].
pub fn sphere_sphere(
    a: &SphereCollider,
    b: &SphereCollider,
    config: &CollisionConfig,
) -> Option<ContactGeometry> {
    let offset = a.center() - b.center();
    let distance = offset.magnitude();
    let radius_sum = a.world_radius() + b.world_radius();

    if distance > radius_sum + config.contact_epsilon {
        return None;
    }

    let normal = if distance > config.contact_epsilon {
        offset / distance
    } else {
        fallback_normal()
    };

    Some(ContactGeometry {
        point: (a.center() + b.center()) * 0.5,
        normal,
        penetration: (radius_sum - distance).max(0.0),
    })
}
