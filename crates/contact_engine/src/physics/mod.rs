//! Physics module for narrow-phase collision detection
//!
//! Takes candidate pairs from an external broad-phase, runs the exact shape
//! test for each pair's kinds, and produces contacts for an external
//! resolver. Dynamics and contact resolution live outside this module.

pub mod body;
pub mod collision;
pub mod error;
pub mod narrowphase;

pub use body::{BodySet, PotentialContact, RigidBody};
pub use collision::{
    Aabb,
    BoxCollider,
    Collider,
    Placement,
    ShapeKind,
    SphereCollider,
};
pub use error::CollisionError;
pub use narrowphase::{
    CollisionDetector,
    Contact,
    ContactGeometry,
    DispatchTable,
    PassStats,
};
