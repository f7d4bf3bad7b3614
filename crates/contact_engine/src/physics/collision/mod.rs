//! Collision shape model
//!
//! Shapes keep their geometry in local space and carry a placement whose
//! world matrix is rebuilt on every mutation.
//!
//! # Module Organization
//!
//! - [`primitives`] - Box and sphere geometry, placements and AABBs
//! - [`shape`] - The [`Collider`] tagged union and its [`ShapeKind`]

pub mod primitives;
pub mod shape;

// Re-export commonly used types
pub use primitives::{Aabb, BoxCollider, Placement, SphereCollider, UNIT_VERTICES};
pub use shape::{Collider, ShapeKind};
