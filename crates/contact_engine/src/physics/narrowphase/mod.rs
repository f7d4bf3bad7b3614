//! Narrow-phase collision detection
//!
//! Confirms or rejects the broad-phase's candidate pairs with exact shape
//! tests and produces single-point contacts for the resolver.
//!
//! # Module Organization
//!
//! - [`contact`] - Contact records
//! - [`sphere`], [`box_sphere`], [`box_box`] - One geometric test per shape pair
//! - [`dispatch`] - The shape-kind dispatch table
//! - [`detector`] - The per-frame orchestrator
//!
//! # Conventions
//!
//! Every test takes its shapes in call order `(a, b)` and reports a normal
//! pointing from `b` toward `a`, with penetration >= 0. Non-overlapping
//! shapes produce `None`, never a default contact.

pub mod contact;
pub mod sphere;
pub mod box_sphere;
pub mod box_box;
pub mod dispatch;
pub mod detector;

use crate::foundation::math::Vec3;

pub use contact::{Contact, ContactGeometry};
pub use sphere::sphere_sphere;
pub use box_sphere::{box_sphere, sphere_box};
pub use box_box::{box_box, candidate_axes, penetration_along_axis};
pub use dispatch::{BodyRef, DispatchTable, PairHandler};
pub use detector::{CollisionDetector, PassStats};

/// Normal reported when the direction between two shapes is undefined
/// (coincident centers)
pub fn fallback_normal() -> Vec3 {
    Vec3::y()
}
