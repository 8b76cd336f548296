//! Pin holders.
//!
//! A [`Holder`] is a record owned by whoever needs a function to stay alive,
//! typically embedded in that owner's own state. Pinning a function with a
//! holder stamps the holder's [`HolderKind`] and joins it to the ring of other
//! holders pinning the same function.

use funccache_core::{HolderId, HolderKind};

/// Caller-owned pin record.
///
/// Not `Clone`: the tracker links records by identity. Keep it alive for as
/// long as it pins something. A holder dropped while still pinning leaves its
/// function pinned; release such a pin with
/// [`FuncCache::unpin_by_id`](crate::FuncCache::unpin_by_id) using the id
/// saved from [`Holder::id`].
///
/// The kind is set by pinning only:
///
/// ```compile_fail
/// use funccache_registry::{Holder, HolderKind};
///
/// let mut holder = Holder::new();
/// holder.set_kind(HolderKind::Constraint);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Holder {
    id: HolderId,
    kind: HolderKind,
}

impl Holder {
    /// Create a holder with a fresh identity.
    ///
    /// The kind starts as [`HolderKind::Constraint`] and is overwritten by
    /// every pin.
    pub fn new() -> Self {
        Self {
            id: HolderId::next(),
            kind: HolderKind::Constraint,
        }
    }

    #[inline]
    pub fn id(&self) -> HolderId {
        self.id
    }

    /// Kind recorded by the most recent pin.
    #[inline]
    pub fn kind(&self) -> HolderKind {
        self.kind
    }

    /// Only pinning records a kind, so it always matches the ring's copy.
    pub(crate) fn set_kind(&mut self, kind: HolderKind) {
        self.kind = kind;
    }
}

impl Default for Holder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holders_have_distinct_identity() {
        let a = Holder::new();
        let b = Holder::new();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn new_holder_kind() {
        let holder = Holder::default();
        assert_eq!(holder.kind(), HolderKind::Constraint);
    }
}
