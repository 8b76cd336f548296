//! FuncCache - id and name index over stored functions.
//!
//! This module provides [`FuncCache`], the registry the rest of the engine
//! consults to find an already-instantiated [`Func`] by its numeric id or by
//! its name, and the place where holders pin functions so they cannot be
//! dropped while in use.
//!
//! # Storage Model
//!
//! - **By id**: `FuncId -> Rc<Func>`.
//! - **By name**: exact name bytes `-> Rc<Func>`. No normalization.
//! - **Pins**: a [`PinTracker`] mapping each pinned id to a ring of holders.
//!
//! Both indices hold clones of the same `Rc`, so an id is present exactly when
//! its function's name is, and both resolve to the same object. The cache never
//! creates or destroys functions: [`delete`](FuncCache::delete) and
//! [`teardown`](FuncCache::teardown) hand them back to the caller.
//!
//! # Thread Safety
//!
//! `FuncCache` is **not thread-safe** and does no locking. All calls must be
//! made from one thread or under a lock held by the caller for the duration
//! of each call.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use funccache_core::{Func, FuncDef, FuncId, HolderKind};
//! use funccache_registry::{FuncCache, Holder};
//!
//! let mut cache = FuncCache::new();
//! let func = Rc::new(Func::new(FuncDef::new(7, "f")));
//! cache.insert(func.clone()).unwrap();
//!
//! let mut holder = Holder::new();
//! cache.pin(&func, &mut holder, HolderKind::Constraint).unwrap();
//! assert!(cache.delete(FuncId::new(7)).is_err());
//!
//! cache.unpin(&func, &holder).unwrap();
//! assert!(cache.delete(FuncId::new(7)).unwrap().is_some());
//! assert!(cache.lookup_by_name(b"f").is_none());
//! ```

use std::rc::Rc;

use rustc_hash::FxHashMap;

use funccache_core::{Func, FuncCacheError, FuncCacheResult, FuncId, HolderId, HolderKind};

use crate::config::FuncCacheConfig;
use crate::holder::Holder;
use crate::pin_tracker::{Holders, PinTracker};

/// Dual-index function cache with pin tracking.
#[derive(Default)]
pub struct FuncCache {
    /// Functions by id.
    funcs: FxHashMap<FuncId, Rc<Func>>,

    /// Functions by exact name bytes.
    funcs_by_name: FxHashMap<Box<[u8]>, Rc<Func>>,

    /// Holders pinning cached functions.
    pins: PinTracker,
}

impl FuncCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache with pre-sized tables.
    pub fn with_config(config: FuncCacheConfig) -> Self {
        Self {
            funcs: FxHashMap::with_capacity_and_hasher(config.capacity, Default::default()),
            funcs_by_name: FxHashMap::with_capacity_and_hasher(config.capacity, Default::default()),
            pins: PinTracker::with_capacity(config.pinned_capacity),
        }
    }

    // ==========================================================================
    // Index maintenance
    // ==========================================================================

    /// Add a function to both indices.
    ///
    /// Returns an error if its id or its name is already cached; the cache is
    /// left unchanged.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn insert(&mut self, func: Rc<Func>) -> FuncCacheResult<()> {
        let fid = func.fid();
        if let Some(existing) = self.funcs.get(&fid) {
            return Err(FuncCacheError::DuplicateId {
                fid,
                name: existing.name().to_string(),
            });
        }
        if let Some(existing) = self.funcs_by_name.get(func.name_bytes()) {
            return Err(FuncCacheError::DuplicateName {
                name: func.name().to_string(),
                fid: existing.fid(),
            });
        }

        tracing::debug!(%fid, name = func.name(), "function cached");
        self.funcs_by_name
            .insert(func.name_bytes().into(), Rc::clone(&func));
        self.funcs.insert(fid, func);
        debug_assert_eq!(self.funcs.len(), self.funcs_by_name.len());
        Ok(())
    }

    /// Remove a function from both indices.
    ///
    /// Returns the removed function, or `None` if `fid` was not cached.
    /// Fails while any holder pins `fid`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn delete(&mut self, fid: FuncId) -> FuncCacheResult<Option<Rc<Func>>> {
        if let Some(kind) = self.pins.is_pinned(fid) {
            return Err(FuncCacheError::FuncPinned { fid, kind });
        }
        let Some(func) = self.funcs.remove(&fid) else {
            return Ok(None);
        };

        let by_name = self.funcs_by_name.remove(func.name_bytes());
        debug_assert!(by_name.is_some_and(|other| Rc::ptr_eq(&other, &func)));
        debug_assert_eq!(self.funcs.len(), self.funcs_by_name.len());
        tracing::debug!(%fid, name = func.name(), "function dropped from cache");
        Ok(Some(func))
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Get a function by id.
    #[inline]
    pub fn lookup_by_id(&self, fid: FuncId) -> Option<&Rc<Func>> {
        self.funcs.get(&fid)
    }

    /// Get a function by name, compared byte for byte.
    #[inline]
    pub fn lookup_by_name(&self, name: &[u8]) -> Option<&Rc<Func>> {
        self.funcs_by_name.get(name)
    }

    /// Get a function by name string.
    #[inline]
    pub fn lookup_by_str(&self, name: &str) -> Option<&Rc<Func>> {
        self.lookup_by_name(name.as_bytes())
    }

    pub fn contains_id(&self, fid: FuncId) -> bool {
        self.funcs.contains_key(&fid)
    }

    /// Id of `func` if it is the function cached under that id.
    fn cached_fid(&self, func: &Func) -> FuncCacheResult<FuncId> {
        let fid = func.fid();
        let Some(cached) = self.funcs.get(&fid) else {
            return Err(FuncCacheError::FuncNotFound(fid));
        };
        if !std::ptr::eq(cached.as_ref(), func) && cached.as_ref() != func {
            return Err(FuncCacheError::FuncMismatch {
                fid,
                name: func.name().to_string(),
                cached: cached.name().to_string(),
            });
        }
        Ok(fid)
    }

    // ==========================================================================
    // Pinning
    // ==========================================================================

    /// Pin `func` on behalf of `holder`.
    ///
    /// Sets the holder's kind to `kind`. `func` must be the function cached
    /// under its id and the holder must not already pin anything.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn pin(
        &mut self,
        func: &Func,
        holder: &mut Holder,
        kind: HolderKind,
    ) -> FuncCacheResult<()> {
        let fid = self.cached_fid(func)?;
        self.pins.pin(fid, holder, kind)?;
        tracing::debug!(%fid, holder = %holder.id(), %kind, "function pinned");
        Ok(())
    }

    /// Release the pin `holder` holds on `func`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn unpin(&mut self, func: &Func, holder: &Holder) -> FuncCacheResult<()> {
        let fid = self.cached_fid(func)?;
        self.pins.unpin(fid, holder)?;
        tracing::debug!(%fid, holder = %holder.id(), "function unpinned");
        Ok(())
    }

    /// Release a pin by ids, for a holder record that no longer exists.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn unpin_by_id(&mut self, fid: FuncId, holder: HolderId) -> FuncCacheResult<()> {
        if !self.funcs.contains_key(&fid) {
            return Err(FuncCacheError::FuncNotFound(fid));
        }
        self.pins.unpin_id(fid, holder)?;
        tracing::debug!(%fid, %holder, "function unpinned by id");
        Ok(())
    }

    /// Whether `func` is pinned, and by what kind of holder.
    ///
    /// Reports the kind of one holder only, even if holders of several kinds
    /// pin the function. `func` must be the function cached under its id.
    pub fn is_pinned(&self, func: &Func) -> FuncCacheResult<Option<HolderKind>> {
        let fid = self.cached_fid(func)?;
        Ok(self.pins.is_pinned(fid))
    }

    /// Holders currently pinning `func`. Empty if it is not cached.
    pub fn holders(&self, func: &Func) -> Holders<'_> {
        self.pins.holders(func.fid())
    }

    pub fn holder_count(&self, func: &Func) -> usize {
        self.pins.holder_count(func.fid())
    }

    /// Number of pinned functions.
    pub fn pinned_count(&self) -> usize {
        self.pins.pinned_count()
    }

    // ==========================================================================
    // Iteration & lifecycle
    // ==========================================================================

    /// Iterate over all cached functions, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Func>> {
        self.funcs.values()
    }

    /// Number of cached functions.
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Shut the cache down, handing back every function ordered by id.
    ///
    /// Pins still held are released first, so teardown always succeeds.
    pub fn teardown(mut self) -> Vec<Rc<Func>> {
        let mut fids: Vec<FuncId> = self.funcs.keys().copied().collect();
        fids.sort_unstable();

        let mut drained = Vec::with_capacity(fids.len());
        for fid in fids {
            let unwound = self.pins.unpin_all(fid);
            if unwound > 0 {
                tracing::warn!(%fid, holders = unwound, "releasing pins at teardown");
            }
            if let Ok(Some(func)) = self.delete(fid) {
                drained.push(func);
            }
        }

        debug_assert!(self.funcs.is_empty() && self.funcs_by_name.is_empty());
        debug_assert!(self.pins.is_empty());
        tracing::debug!(funcs = drained.len(), "function cache torn down");
        drained
    }
}

impl std::fmt::Debug for FuncCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuncCache")
            .field("funcs", &self.funcs.len())
            .field("pinned", &self.pins.pinned_count())
            .finish()
    }
}
