//! PinTracker - which functions are pinned, and by whom.
//!
//! For every pinned function the tracker remembers a single representative
//! holder. The other holders pinning the same function are reachable through
//! the representative's ring in [`HolderRing`]. An id with no entry is
//! unpinned; the entry appears with the first holder and disappears with
//! the last one.
//!
//! Removing the representative from a ring of two or more first moves the
//! entry on to the next member, so the entry always names a linked holder.

use rustc_hash::FxHashMap;

use funccache_core::{FuncCacheError, FuncCacheResult, FuncId, HolderId, HolderKind};

use crate::holder::Holder;
use crate::ring::{HolderRing, RingIter};

/// Pin state for all functions.
#[derive(Debug, Default)]
pub struct PinTracker {
    /// Function id -> representative holder of its ring.
    pinned: FxHashMap<FuncId, HolderId>,
    ring: HolderRing,
}

impl PinTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker sized for `capacity` pinned functions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pinned: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            ring: HolderRing::with_capacity(capacity),
        }
    }

    /// Add `holder` to the holders of `fid`.
    ///
    /// The holder's kind is set to `kind`. Returns an error if the holder is
    /// already linked into a ring, in which case nothing changes.
    pub fn pin(
        &mut self,
        fid: FuncId,
        holder: &mut Holder,
        kind: HolderKind,
    ) -> FuncCacheResult<()> {
        let id = holder.id();
        if let Some(link) = self.ring.link(id) {
            return Err(FuncCacheError::HolderAlreadyPinned {
                holder: id,
                fid: link.fid,
            });
        }

        holder.set_kind(kind);
        match self.pinned.get(&fid) {
            None => {
                self.ring.create(id, fid, kind);
                self.pinned.insert(fid, id);
            }
            Some(&head) => self.ring.add_tail(head, id, kind),
        }
        Ok(())
    }

    /// Remove `holder` from the holders of `fid`.
    ///
    /// Removing the last holder unpins the function.
    pub fn unpin(&mut self, fid: FuncId, holder: &Holder) -> FuncCacheResult<()> {
        self.unpin_id(fid, holder.id())
    }

    /// Remove the holder identified by `id` from the holders of `fid`.
    ///
    /// For releasing a pin whose holder record no longer exists.
    pub fn unpin_id(&mut self, fid: FuncId, id: HolderId) -> FuncCacheResult<()> {
        let Some(&representative) = self.pinned.get(&fid) else {
            return Err(FuncCacheError::NotPinned(fid));
        };
        if !self.ring.link(id).is_some_and(|link| link.fid == fid) {
            return Err(FuncCacheError::HolderNotInRing { fid, holder: id });
        }

        if self.ring.is_singleton(id) {
            debug_assert_eq!(representative, id);
            self.pinned.remove(&fid);
        } else if representative == id
            && let Some(next) = self.ring.next(id)
        {
            self.pinned.insert(fid, next);
        }
        self.ring.unlink(id);
        Ok(())
    }

    /// Drop every holder of `fid`, returning how many there were.
    pub fn unpin_all(&mut self, fid: FuncId) -> usize {
        let Some(representative) = self.pinned.remove(&fid) else {
            return 0;
        };
        let members: Vec<HolderId> = self.ring.iter(representative).map(|(id, _)| id).collect();
        for &id in &members {
            self.ring.unlink(id);
        }
        members.len()
    }

    /// Kind of the representative holder, if `fid` is pinned.
    ///
    /// When holders of several kinds pin the same function only one of them
    /// is reported.
    pub fn is_pinned(&self, fid: FuncId) -> Option<HolderKind> {
        self.pinned
            .get(&fid)
            .and_then(|&representative| self.ring.kind(representative))
    }

    /// Representative holder of `fid`.
    pub fn representative(&self, fid: FuncId) -> Option<HolderId> {
        self.pinned.get(&fid).copied()
    }

    /// All holders of `fid`, starting with the representative.
    pub fn holders(&self, fid: FuncId) -> Holders<'_> {
        Holders {
            inner: self
                .pinned
                .get(&fid)
                .map(|&representative| self.ring.iter(representative)),
        }
    }

    pub fn holder_count(&self, fid: FuncId) -> usize {
        self.holders(fid).count()
    }

    /// Number of pinned functions.
    pub fn pinned_count(&self) -> usize {
        self.pinned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty()
    }
}

/// Iterator over the holders of one function.
pub struct Holders<'a> {
    inner: Option<RingIter<'a>>,
}

impl Iterator for Holders<'_> {
    type Item = (HolderId, HolderKind);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}
