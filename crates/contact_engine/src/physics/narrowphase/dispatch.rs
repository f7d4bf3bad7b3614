//! Shape-pair dispatch table
//!
//! An N x N table of handlers indexed by [`ShapeKind::index`]; cell
//! `(i, j)` handles "first body is kind i, second body is kind j". The table
//! is written out as an array literal, so a missing cell is a compile error.
//! Mixed-kind cells come in pairs: the direct handler, and its mirror that
//! swaps the inputs and flips the resulting contact.

use crate::config::CollisionConfig;
use crate::foundation::collections::BodyHandle;
use crate::physics::collision::{Collider, ShapeKind};
use crate::physics::CollisionError;
use super::{box_box, box_sphere, sphere_sphere, Contact};

/// A body's identity together with its shape, as seen by a handler
#[derive(Debug, Clone, Copy)]
pub struct BodyRef<'a> {
    /// Handle recorded in the resulting contact
    pub handle: BodyHandle,
    /// The body's shape
    pub collider: &'a Collider,
}

impl<'a> BodyRef<'a> {
    /// Pair a handle with its collider
    pub fn new(handle: BodyHandle, collider: &'a Collider) -> Self {
        Self { handle, collider }
    }
}

/// Narrow-phase handler for one ordered pair of shape kinds
///
/// `Ok(None)` means the shapes do not overlap. `Err` only signals that the
/// handler received kinds it was not registered for.
pub type PairHandler =
    fn(BodyRef<'_>, BodyRef<'_>, &CollisionConfig) -> Result<Option<Contact>, CollisionError>;

const HANDLERS: [[PairHandler; ShapeKind::COUNT]; ShapeKind::COUNT] = [
    // first = Box
    [box_box_handler, box_sphere_handler],
    // first = Sphere
    [sphere_box_handler, sphere_sphere_handler],
];

/// Type-indexed lookup from a pair of shape kinds to its handler
pub struct DispatchTable {
    handlers: [[PairHandler; ShapeKind::COUNT]; ShapeKind::COUNT],
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchTable")
            .field("kinds", &ShapeKind::ALL)
            .finish()
    }
}

impl DispatchTable {
    /// Build the table over every supported shape kind
    pub const fn new() -> Self {
        Self { handlers: HANDLERS }
    }

    /// Handler for `(first, second)`; total over the supported kinds
    pub fn lookup(&self, first: ShapeKind, second: ShapeKind) -> PairHandler {
        self.handlers[first.index()][second.index()]
    }

    /// Look up and run the handler for two bodies
    pub fn dispatch(
        &self,
        first: BodyRef<'_>,
        second: BodyRef<'_>,
        config: &CollisionConfig,
    ) -> Result<Option<Contact>, CollisionError> {
        let handler = self.lookup(first.collider.kind(), second.collider.kind());
        handler(first, second, config)
    }
}

fn mismatch(first: BodyRef<'_>, second: BodyRef<'_>) -> CollisionError {
    CollisionError::UnsupportedPair {
        first: first.collider.kind(),
        second: second.collider.kind(),
    }
}

fn sphere_sphere_handler(
    a: BodyRef<'_>,
    b: BodyRef<'_>,
    config: &CollisionConfig,
) -> Result<Option<Contact>, CollisionError> {
    let (Some(first), Some(second)) = (a.collider.as_sphere(), b.collider.as_sphere()) else {
        return Err(mismatch(a, b));
    };
    Ok(sphere_sphere(first, second, config).map(|g| g.into_contact(a.handle, b.handle)))
}

fn box_sphere_handler(
    a: BodyRef<'_>,
    b: BodyRef<'_>,
    config: &CollisionConfig,
) -> Result<Option<Contact>, CollisionError> {
    let (Some(cube), Some(sphere)) = (a.collider.as_box(), b.collider.as_sphere()) else {
        return Err(mismatch(a, b));
    };
    Ok(box_sphere(cube, sphere, config).map(|g| g.into_contact(a.handle, b.handle)))
}

/// Mirror of [`box_sphere_handler`]: swapped inputs, flipped contact
fn sphere_box_handler(
    a: BodyRef<'_>,
    b: BodyRef<'_>,
    config: &CollisionConfig,
) -> Result<Option<Contact>, CollisionError> {
    box_sphere_handler(b, a, config)
        .map(|contact| contact.map(Contact::flipped))
        .map_err(|_| mismatch(a, b))
}

fn box_box_handler(
    a: BodyRef<'_>,
    b: BodyRef<'_>,
    config: &CollisionConfig,
) -> Result<Option<Contact>, CollisionError> {
    let (Some(first), Some(second)) = (a.collider.as_box(), b.collider.as_box()) else {
        return Err(mismatch(a, b));
    };
    Ok(box_box(first, second, config).map(|g| g.into_contact(a.handle, b.handle)))
}
