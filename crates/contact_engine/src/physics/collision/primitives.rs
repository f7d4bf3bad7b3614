//! Primitive collision shapes
//!
//! Boxes and spheres share a [`Placement`] (position, Euler rotation, scale)
//! whose world matrix is rebuilt eagerly by every setter, so a shape can
//! never be queried through a stale transform.

use crate::foundation::math::{utils, Mat4, Mat4Ext, Point3, Vec3};
use crate::physics::CollisionError;

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest AABB enclosing every point, `None` for an empty input
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |aabb, p| {
            Self::new(aabb.min.inf(&p), aabb.max.sup(&p))
        }))
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if this AABB contains a point
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Check if this AABB intersects another AABB (touching counts)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

/// Position, rotation and scale of a shape plus the derived world matrix
///
/// The world matrix is `T * Rz * Ry * Rx * S`: a local point is scaled,
/// rotated about X, then Y, then Z (angles in degrees), then translated.
/// The inverse is built analytically from the same factors.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
    transform: Mat4,
    inverse: Mat4,
}

impl Default for Placement {
    fn default() -> Self {
        Self::compose(Vec3::zeros(), Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0))
    }
}

impl Placement {
    /// Create a validated placement
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Result<Self, CollisionError> {
        check_finite("position", position)?;
        check_finite("rotation", rotation)?;
        check_scale(scale)?;
        Ok(Self::compose(position, rotation, scale))
    }

    fn compose(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        let rotation_mat = Mat4::from_euler_degrees(rotation);
        let transform = Mat4::new_translation(&position)
            * rotation_mat
            * Mat4::new_nonuniform_scaling(&scale);

        let inv_scale = Vec3::new(1.0 / scale.x, 1.0 / scale.y, 1.0 / scale.z);
        let inverse = Mat4::new_nonuniform_scaling(&inv_scale)
            * rotation_mat.transpose()
            * Mat4::new_translation(&-position);

        Self {
            position,
            rotation,
            scale,
            transform,
            inverse,
        }
    }

    /// Position of the shape's center
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Rotation about the X, Y and Z axes in degrees
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Scale along each local axis
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Local-to-world matrix
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// World-to-local matrix
    pub fn inverse_transform(&self) -> &Mat4 {
        &self.inverse
    }

    /// Replace the position and rebuild the world matrix
    pub fn set_position(&mut self, position: Vec3) -> Result<(), CollisionError> {
        check_finite("position", position)?;
        *self = Self::compose(position, self.rotation, self.scale);
        Ok(())
    }

    /// Replace the rotation (degrees) and rebuild the world matrix
    pub fn set_rotation(&mut self, rotation: Vec3) -> Result<(), CollisionError> {
        check_finite("rotation", rotation)?;
        *self = Self::compose(self.position, rotation, self.scale);
        Ok(())
    }

    /// Replace the scale and rebuild the world matrix
    pub fn set_scale(&mut self, scale: Vec3) -> Result<(), CollisionError> {
        check_scale(scale)?;
        *self = Self::compose(self.position, self.rotation, scale);
        Ok(())
    }
}

fn check_finite(field: &'static str, value: Vec3) -> Result<(), CollisionError> {
    if utils::is_finite(&value) {
        Ok(())
    } else {
        Err(CollisionError::NonFinite { field, value })
    }
}

fn check_scale(scale: Vec3) -> Result<(), CollisionError> {
    if utils::is_finite(&scale) && scale.iter().all(|c| *c != 0.0) {
        Ok(())
    } else {
        Err(CollisionError::DegenerateScale(scale))
    }
}

/// Corners of the unit cube centered at the origin.
///
/// The first four form the +Z face; together with their negations they
/// cover all eight corners, so they double as the box's half-diagonals.
pub const UNIT_VERTICES: [[f32; 3]; 8] = [
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [0.5, -0.5, 0.5],
    [-0.5, -0.5, 0.5],
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [0.5, 0.5, -0.5],
];

/// A box: the unit cube mapped through its placement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxCollider {
    placement: Placement,
}

impl BoxCollider {
    /// Creates a box from its center, Euler rotation (degrees) and edge lengths
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Result<Self, CollisionError> {
        Ok(Self {
            placement: Placement::new(position, rotation, scale)?,
        })
    }

    /// Canonical unit-cube corners shared by every box
    pub fn unit_vertices() -> impl Iterator<Item = Vec3> {
        UNIT_VERTICES.iter().map(|v| Vec3::new(v[0], v[1], v[2]))
    }

    /// Shape placement
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Mutable shape placement; its setters keep the transform current
    pub fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    /// World-space center
    pub fn centroid(&self) -> Vec3 {
        self.placement.position()
    }

    /// Apply the inverse world transform to a world-space point
    pub fn to_local_coordinates(&self, point: Vec3) -> Vec3 {
        self.placement
            .inverse_transform()
            .transform_point(&Point3::from(point))
            .coords
    }

    /// Apply the world transform to a local-space point
    pub fn to_world_coordinates(&self, point: Vec3) -> Vec3 {
        self.placement
            .transform()
            .transform_point(&Point3::from(point))
            .coords
    }

    /// Map a canonical direction through rotation and scale only
    pub fn axis_direction(&self, canonical: Vec3) -> Vec3 {
        self.placement.transform().transform_vector(&canonical)
    }

    /// Corners of the box in world space
    pub fn world_vertices(&self) -> [Vec3; 8] {
        let mut vertices = [Vec3::zeros(); 8];
        for (out, local) in vertices.iter_mut().zip(Self::unit_vertices()) {
            *out = self.to_world_coordinates(local);
        }
        vertices
    }

    /// World-space AABB of the eight transformed corners
    pub fn aabb(&self) -> Aabb {
        let center = self.centroid();
        Aabb::from_points(self.world_vertices()).unwrap_or(Aabb::new(center, center))
    }

    /// Unit face normals in world space, one per local axis
    pub fn face_axes(&self) -> [Vec3; 3] {
        [Vec3::x(), Vec3::y(), Vec3::z()].map(|e| self.axis_direction(e).normalize())
    }

    /// World-space half-edge vectors, one per local axis
    pub fn half_extent_axes(&self) -> [Vec3; 3] {
        [Vec3::x(), Vec3::y(), Vec3::z()].map(|e| self.axis_direction(e * 0.5))
    }

    /// Half-length of the box's projection onto a unit axis
    ///
    /// Largest |axis . d| over the half-diagonals d.
    pub fn half_projection(&self, axis: &Vec3) -> f32 {
        Self::unit_vertices()
            .take(4)
            .map(|corner| axis.dot(&self.axis_direction(corner)).abs())
            .fold(0.0, f32::max)
    }
}

/// A sphere: radius plus placement
///
/// Rotation has no geometric effect. Scale multiplies the radius by its
/// largest absolute component, which is exact only for uniform scale.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereCollider {
    radius: f32,
    placement: Placement,
}

impl SphereCollider {
    /// Creates a sphere with the given radius and placement
    pub fn new(
        radius: f32,
        position: Vec3,
        rotation: Vec3,
        scale: Vec3,
    ) -> Result<Self, CollisionError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(CollisionError::InvalidRadius(radius));
        }
        Ok(Self {
            radius,
            placement: Placement::new(position, rotation, scale)?,
        })
    }

    /// Unrotated, unscaled sphere at `center`
    pub fn at(radius: f32, center: Vec3) -> Result<Self, CollisionError> {
        Self::new(radius, center, Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0))
    }

    /// Radius before scaling
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Radius after applying the placement's scale
    pub fn world_radius(&self) -> f32 {
        self.radius * self.placement.scale().abs().max()
    }

    /// World-space center
    pub fn center(&self) -> Vec3 {
        self.placement.position()
    }

    /// Shape placement
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Mutable shape placement; its setters keep the transform current
    pub fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    /// `[center - r, center + r]` component-wise
    pub fn aabb(&self) -> Aabb {
        let r = Vec3::repeat(self.world_radius());
        Aabb::new(self.center() - r, self.center() + r)
    }
}
