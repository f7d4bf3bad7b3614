//! Rigid bodies as seen by the narrow-phase
//!
//! Dynamics state (velocity, mass, inertia) lives elsewhere; the
//! narrow-phase only needs each body's shape and a stable identity.

use crate::foundation::collections::{BodyHandle, HandleMap};
use crate::physics::collision::{Collider, ShapeKind};

/// A body that exclusively owns one collider
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    collider: Collider,
}

impl RigidBody {
    /// Creates a body around its shape
    pub fn new(collider: impl Into<Collider>) -> Self {
        Self {
            collider: collider.into(),
        }
    }

    /// The body's shape
    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    /// Mutable access for the owning simulation; never used by the narrow-phase
    pub fn collider_mut(&mut self) -> &mut Collider {
        &mut self.collider
    }

    /// Shape kind tag
    pub fn kind(&self) -> ShapeKind {
        self.collider.kind()
    }
}

/// Storage that issues weak [`BodyHandle`]s
#[derive(Debug, Default)]
pub struct BodySet {
    bodies: HandleMap<RigidBody>,
}

impl BodySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a body and return its handle
    pub fn insert(&mut self, body: RigidBody) -> BodyHandle {
        self.bodies.insert(body)
    }

    /// Remove a body; every outstanding handle to it becomes stale
    pub fn remove(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        self.bodies.remove(handle)
    }

    /// Resolve a handle, `None` once the body is gone
    pub fn get(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    /// Resolve a handle mutably
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    /// Check whether a handle still refers to a live body
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains_key(handle)
    }

    /// Number of live bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True when no bodies are stored
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate live bodies with their handles
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> {
        self.bodies.iter()
    }
}

/// Candidate pair produced by the broad-phase
///
/// Holds two non-owning handles. Either body may be removed before the
/// narrow-phase runs; [`PotentialContact::resolve`] reports that as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PotentialContact {
    /// First body of the pair
    pub body1: BodyHandle,
    /// Second body of the pair
    pub body2: BodyHandle,
}

impl PotentialContact {
    /// Create a candidate pair; order is preserved in the resulting contact
    pub fn new(body1: BodyHandle, body2: BodyHandle) -> Self {
        Self { body1, body2 }
    }

    /// Look up both bodies, `None` if either has expired
    pub fn resolve<'a>(&self, bodies: &'a BodySet) -> Option<(&'a RigidBody, &'a RigidBody)> {
        Some((bodies.get(self.body1)?, bodies.get(self.body2)?))
    }
}
