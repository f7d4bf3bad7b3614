//! Closed set of collision shapes
//!
//! [`Collider`] is the tagged union the narrow-phase dispatches on. Adding a
//! shape means a new variant here, a new [`ShapeKind`], and a full row and
//! column in the dispatch table.

use crate::foundation::math::Vec3;
use crate::physics::CollisionError;
use super::primitives::{Aabb, BoxCollider, Placement, SphereCollider};

/// Runtime tag of a collider, used to index the dispatch table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Oriented box
    Box = 0,
    /// Sphere
    Sphere = 1,
}

impl ShapeKind {
    /// Number of shape kinds
    pub const COUNT: usize = 2;

    /// Every kind, in index order
    pub const ALL: [ShapeKind; Self::COUNT] = [ShapeKind::Box, ShapeKind::Sphere];

    /// Row/column of this kind in the dispatch table
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A collision shape owned by a rigid body
#[derive(Debug, Clone, PartialEq)]
pub enum Collider {
    /// Box shaped collider
    Box(BoxCollider),
    /// Sphere shaped collider
    Sphere(SphereCollider),
}

impl From<BoxCollider> for Collider {
    fn from(shape: BoxCollider) -> Self {
        Self::Box(shape)
    }
}

impl From<SphereCollider> for Collider {
    fn from(shape: SphereCollider) -> Self {
        Self::Sphere(shape)
    }
}

impl Collider {
    /// Creates a box collider
    pub fn cuboid(position: Vec3, rotation: Vec3, scale: Vec3) -> Result<Self, CollisionError> {
        BoxCollider::new(position, rotation, scale).map(Self::Box)
    }

    /// Creates an unrotated, unscaled sphere collider
    pub fn sphere(radius: f32, center: Vec3) -> Result<Self, CollisionError> {
        SphereCollider::at(radius, center).map(Self::Sphere)
    }

    /// Shape kind tag
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Box(_) => ShapeKind::Box,
            Self::Sphere(_) => ShapeKind::Sphere,
        }
    }

    /// World-space axis-aligned bounding box
    pub fn aabb(&self) -> Aabb {
        match self {
            Self::Box(shape) => shape.aabb(),
            Self::Sphere(shape) => shape.aabb(),
        }
    }

    /// World-space center
    pub fn centroid(&self) -> Vec3 {
        self.placement().position()
    }

    /// Position, rotation, scale and world transform
    pub fn placement(&self) -> &Placement {
        match self {
            Self::Box(shape) => shape.placement(),
            Self::Sphere(shape) => shape.placement(),
        }
    }

    fn placement_mut(&mut self) -> &mut Placement {
        match self {
            Self::Box(shape) => shape.placement_mut(),
            Self::Sphere(shape) => shape.placement_mut(),
        }
    }

    /// Move the shape's center; the world transform is rebuilt immediately
    pub fn set_position(&mut self, position: Vec3) -> Result<(), CollisionError> {
        self.placement_mut().set_position(position)
    }

    /// Set Euler rotation in degrees; the world transform is rebuilt immediately
    pub fn set_rotation(&mut self, rotation: Vec3) -> Result<(), CollisionError> {
        self.placement_mut().set_rotation(rotation)
    }

    /// Set per-axis scale; the world transform is rebuilt immediately
    pub fn set_scale(&mut self, scale: Vec3) -> Result<(), CollisionError> {
        self.placement_mut().set_scale(scale)
    }

    /// The box, if this is one
    pub fn as_box(&self) -> Option<&BoxCollider> {
        match self {
            Self::Box(shape) => Some(shape),
            Self::Sphere(_) => None,
        }
    }

    /// The sphere, if this is one
    pub fn as_sphere(&self) -> Option<&SphereCollider> {
        match self {
            Self::Sphere(shape) => Some(shape),
            Self::Box(_) => None,
        }
    }
}
