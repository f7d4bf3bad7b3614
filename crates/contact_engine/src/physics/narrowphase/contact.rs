//! Contact records handed to the resolver

use crate::foundation::collections::BodyHandle;
use crate::foundation::math::Vec3;

/// Shape-only result of a geometric test
///
/// `normal` is a unit vector pointing from the second shape toward the
/// first; `penetration` is never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactGeometry {
    /// Representative world-space contact point
    pub point: Vec3,
    /// Unit normal from the second shape toward the first
    pub normal: Vec3,
    /// Overlap depth along the normal
    pub penetration: f32,
}

impl ContactGeometry {
    /// Attach body identities in test-call order
    pub fn into_contact(self, body1: BodyHandle, body2: BodyHandle) -> Contact {
        Contact {
            body1,
            body2,
            point: self.point,
            normal: self.normal,
            penetration: self.penetration,
        }
    }
}

/// A confirmed overlap between two bodies
///
/// Only ever built for overlapping pairs. Contacts are rebuilt every pass and
/// are not meant to outlive the frame that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// First body; the normal points toward it
    pub body1: BodyHandle,
    /// Second body; the normal points away from it
    pub body2: BodyHandle,
    /// World-space contact point (single representative point)
    pub point: Vec3,
    /// Unit normal from `body2` toward `body1`
    pub normal: Vec3,
    /// Overlap depth, >= 0
    pub penetration: f32,
}

impl Contact {
    /// Same contact seen from the other body: bodies swapped, normal negated
    pub fn flipped(self) -> Self {
        Self {
            body1: self.body2,
            body2: self.body1,
            normal: -self.normal,
            ..self
        }
    }
}
