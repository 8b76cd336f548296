//! Circular doubly linked rings of pin holders.
//!
//! Holder records live in caller memory, so the links between them are kept
//! here in a side table keyed by [`HolderId`] rather than inside the records.
//! Each holder belongs to at most one ring. Every operation is O(1) and none
//! of them needs to know how many members a ring has.
//!
//! A singleton ring is a link whose `prev` and `next` both point back at the
//! holder itself.

use rustc_hash::FxHashMap;

use funccache_core::{FuncId, HolderId, HolderKind};

/// Link of one holder within its ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingLink {
    pub prev: HolderId,
    pub next: HolderId,
    /// Function the whole ring pins.
    pub fid: FuncId,
    /// Kind the holder pinned with.
    pub kind: HolderKind,
}

/// Link storage for every ring.
#[derive(Debug, Default)]
pub struct HolderRing {
    links: FxHashMap<HolderId, RingLink>,
}

impl HolderRing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Start a new ring containing only `holder`.
    pub fn create(&mut self, holder: HolderId, fid: FuncId, kind: HolderKind) {
        debug_assert!(!self.contains(holder), "{holder} is already linked");
        self.links.insert(
            holder,
            RingLink {
                prev: holder,
                next: holder,
                fid,
                kind,
            },
        );
    }

    /// Insert `holder` just before `head`, at the tail of `head`'s ring.
    pub fn add_tail(&mut self, head: HolderId, holder: HolderId, kind: HolderKind) {
        debug_assert!(!self.contains(holder), "{holder} is already linked");
        debug_assert!(self.contains(head), "{head} is not linked");
        let Some(&RingLink { prev: tail, fid, .. }) = self.links.get(&head) else {
            return;
        };

        self.links.insert(
            holder,
            RingLink {
                prev: tail,
                next: head,
                fid,
                kind,
            },
        );
        // For a singleton ring tail == head and both updates land on it.
        if let Some(link) = self.links.get_mut(&tail) {
            link.next = holder;
        }
        if let Some(link) = self.links.get_mut(&head) {
            link.prev = holder;
        }
    }

    /// Unlink `holder` from its ring, returning its former link.
    ///
    /// Neighbours are joined to each other. Returns `None` if the holder was
    /// not linked.
    pub fn unlink(&mut self, holder: HolderId) -> Option<RingLink> {
        let link = self.links.remove(&holder)?;
        if link.next != holder {
            if let Some(prev) = self.links.get_mut(&link.prev) {
                prev.next = link.next;
            }
            if let Some(next) = self.links.get_mut(&link.next) {
                next.prev = link.prev;
            }
        }
        Some(link)
    }

    #[inline]
    pub fn link(&self, holder: HolderId) -> Option<&RingLink> {
        self.links.get(&holder)
    }

    #[inline]
    pub fn contains(&self, holder: HolderId) -> bool {
        self.links.contains_key(&holder)
    }

    #[inline]
    pub fn next(&self, holder: HolderId) -> Option<HolderId> {
        self.links.get(&holder).map(|link| link.next)
    }

    #[inline]
    pub fn kind(&self, holder: HolderId) -> Option<HolderKind> {
        self.links.get(&holder).map(|link| link.kind)
    }

    /// Whether `holder` is the only member of its ring.
    #[inline]
    pub fn is_singleton(&self, holder: HolderId) -> bool {
        self.links
            .get(&holder)
            .is_some_and(|link| link.next == holder)
    }

    /// Walk the ring containing `start`, beginning with `start` itself.
    pub fn iter(&self, start: HolderId) -> RingIter<'_> {
        RingIter {
            ring: self,
            start,
            current: self.contains(start).then_some(start),
        }
    }

    /// Total number of linked holders across all rings.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Iterator over the members of one ring, in ring order.
pub struct RingIter<'a> {
    ring: &'a HolderRing,
    start: HolderId,
    current: Option<HolderId>,
}

impl Iterator for RingIter<'_> {
    type Item = (HolderId, HolderKind);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let link = self.ring.link(id)?;
        self.current = (link.next != self.start).then_some(link.next);
        Some((id, link.kind))
    }
}
