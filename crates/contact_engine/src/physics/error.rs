//! Collision error types

use crate::foundation::math::Vec3;
use crate::physics::collision::ShapeKind;

/// Errors raised by the shape model and the narrow-phase
///
/// Ordinary "no contact" outcomes and stale body handles are not errors and
/// never show up here.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// Sphere radius must be finite and strictly positive
    #[error("invalid sphere radius {0}: must be finite and > 0")]
    InvalidRadius(f32),

    /// Every scale component must be finite and non-zero, otherwise the
    /// world transform cannot be inverted
    #[error("degenerate scale {0:?}: every component must be finite and non-zero")]
    DegenerateScale(Vec3),

    /// Position or rotation contained NaN or infinity
    #[error("non-finite {field}: {value:?}")]
    NonFinite {
        /// Which attribute was rejected
        field: &'static str,
        /// The offending value
        value: Vec3,
    },

    /// A dispatch handler was handed shapes it was not registered for
    #[error("no narrow-phase handler for shape pair ({first:?}, {second:?})")]
    UnsupportedPair {
        /// Kind of the first shape
        first: ShapeKind,
        /// Kind of the second shape
        second: ShapeKind,
    },
}
