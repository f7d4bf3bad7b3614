//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Generational handle to a rigid body.
    ///
    /// A handle never owns the body. It stays valid only while the body is
    /// still present in the [`SlotMap`] that issued it; lookups through a
    /// removed handle return `None` even if the slot has been reused.
    pub struct BodyHandle;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<BodyHandle, T>;
