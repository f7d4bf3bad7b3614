//! Box-box test using the Separating Axis Theorem
//!
//! Fifteen candidate axes are examined: three face normals of each box and
//! the nine cross products of their edge directions. The boxes overlap only
//! if every non-degenerate axis shows overlapping projections; the axis with
//! the smallest overlap becomes the contact normal.

use crate::config::CollisionConfig;
use crate::foundation::math::Vec3;
use crate::physics::collision::BoxCollider;
use super::ContactGeometry;

/// Number of SAT candidate axes for two boxes
pub const CANDIDATE_AXIS_COUNT: usize = 15;

/// Signed overlap of the two boxes' projections onto a unit `axis`
///
/// `half_projection(a) + half_projection(b) - |axis . (centroid_a - centroid_b)|`.
/// Positive values are the overlap depth along the axis; zero or negative
/// means the axis separates the boxes.
pub fn penetration_along_axis(a: &BoxCollider, b: &BoxCollider, axis: &Vec3) -> f32 {
    let centre_distance = axis.dot(&(a.centroid() - b.centroid())).abs();
    a.half_projection(axis) + b.half_projection(axis) - centre_distance
}

/// The fifteen unnormalized SAT candidates
///
/// Face normals of `a` (0..3), face normals of `b` (3..6), then
/// `a[i] x b[j]` at `6 + 3 * i + j`. Cross products of near-parallel edges
/// come out near zero and are skipped by [`box_box_along`].
pub fn candidate_axes(a: &BoxCollider, b: &BoxCollider) -> [Vec3; CANDIDATE_AXIS_COUNT] {
    let faces_a = a.face_axes();
    let faces_b = b.face_axes();

    let mut axes = [Vec3::zeros(); CANDIDATE_AXIS_COUNT];
    axes[..3].copy_from_slice(&faces_a);
    axes[3..6].copy_from_slice(&faces_b);
    for (i, edge_a) in faces_a.iter().enumerate() {
        for (j, edge_b) in faces_b.iter().enumerate() {
            axes[6 + 3 * i + j] = edge_a.cross(edge_b);
        }
    }
    axes
}

/// Overlap test between two boxes
pub fn box_box(a: &BoxCollider, b: &BoxCollider, config: &CollisionConfig) -> Option<ContactGeometry> {
    box_box_along(a, b, &candidate_axes(a, b), config)
}

/// SAT over an explicit candidate list
///
/// Any separating axis rules out contact, so the verdict does not depend on
/// the order of `axes`. An overlap within `contact_epsilon` of zero counts
/// as separating, the same tolerance the sphere tests apply to their
/// distance checks; face-touching boxes are therefore never in contact,
/// whatever round-off their rotations carry. The reported axis is the
/// strict minimum overlap; only exact ties are resolved by order.
pub fn box_box_along(
    a: &BoxCollider,
    b: &BoxCollider,
    axes: &[Vec3],
    config: &CollisionConfig,
) -> Option<ContactGeometry> {
    let mut best: Option<(f32, Vec3)> = None;

    for candidate in axes {
        let length = candidate.magnitude();
        if length < config.sat_axis_epsilon {
            continue;
        }
        let axis = candidate / length;

        let overlap = penetration_along_axis(a, b, &axis);
        if overlap <= config.contact_epsilon {
            return None;
        }
        if best.map_or(true, |(least, _)| overlap < least) {
            best = Some((overlap, axis));
        }
    }

    let (penetration, axis) = best?;

    // Orient from b toward a
    let between = a.centroid() - b.centroid();
    let normal = if axis.dot(&between) < 0.0 { -axis } else { axis };

    Some(ContactGeometry {
        point: approximate_contact_point(a, b, &normal),
        normal,
        penetration,
    })
}

/// Midpoint between the facing support planes of the two boxes along
/// `normal`, placed laterally at the midpoint of the centroids.
///
/// This is a single representative point, not a clipped contact manifold.
fn approximate_contact_point(a: &BoxCollider, b: &BoxCollider, normal: &Vec3) -> Vec3 {
    let face_a = a.centroid().dot(normal) - a.half_projection(normal);
    let face_b = b.centroid().dot(normal) + b.half_projection(normal);
    let plane = (face_a + face_b) * 0.5;

    let midpoint = (a.centroid() + b.centroid()) * 0.5;
    midpoint + normal * (plane - midpoint.dot(normal))
}
