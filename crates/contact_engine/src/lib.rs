//! # Contact Engine
//!
//! Narrow-phase collision detection for rigid bodies made of boxes and
//! spheres.
//!
//! ## Features
//!
//! - **Shape Model**: Boxes and spheres with eagerly maintained world transforms
//! - **Dispatch Table**: O(1) lookup of the test for any pair of shape kinds
//! - **Geometric Tests**: Sphere-sphere, box-sphere and SAT box-box
//! - **Collision Detector**: Turns broad-phase pairs into contacts, optionally in parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use contact_engine::prelude::*;
//!
//! let mut bodies = BodySet::new();
//! let cube = bodies.insert(RigidBody::new(
//!     Collider::cuboid(Vec3::zeros(), Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0))?,
//! ));
//! let ball = bodies.insert(RigidBody::new(Collider::sphere(0.6, Vec3::new(1.0, 0.0, 0.0))?));
//!
//! let pairs = [PotentialContact::new(cube, ball)];
//! let mut detector = CollisionDetector::new();
//! let contacts = detector.generate_contacts(&bodies, &pairs)?;
//!
//! assert_eq!(contacts.len(), 1);
//! assert!((contacts[0].penetration - 0.1).abs() < 1e-5);
//! # Ok::<(), contact_engine::physics::CollisionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{CollisionConfig, Config, ConfigError},
        foundation::{
            collections::BodyHandle,
            math::Vec3,
        },
        physics::{
            Aabb, BodySet, BoxCollider, Collider, CollisionDetector, CollisionError, Contact,
            PotentialContact, RigidBody, ShapeKind, SphereCollider,
        },
    };
}
