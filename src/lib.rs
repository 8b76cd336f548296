//! In-process cache of stored function objects.
//!
//! Functions are looked up by numeric id or by name through [`FuncCache`].
//! Holders pin functions to keep them from being dropped while something
//! depends on them.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use funccache::prelude::*;
//!
//! let mut cache = FuncCache::new();
//! let func = Rc::new(Func::new(FuncDef::new(1, "max")));
//! cache.insert(func.clone()).unwrap();
//!
//! let mut holder = Holder::new();
//! cache.pin(&func, &mut holder, HolderKind::Constraint).unwrap();
//! assert_eq!(cache.is_pinned(&func), Ok(Some(HolderKind::Constraint)));
//!
//! let drained = cache.teardown();
//! assert_eq!(drained.len(), 1);
//! ```

pub use funccache_core::{
    Func, FuncCacheError, FuncCacheResult, FuncDef, FuncId, FuncLanguage, HolderId, HolderKind,
};
pub use funccache_registry::{
    FuncCache, FuncCacheConfig, Holder, HolderRing, Holders, PinTracker, RingIter, RingLink,
};

pub mod prelude {
    pub use funccache_core::{Func, FuncCacheError, FuncCacheResult, FuncDef, FuncId, HolderKind};
    pub use funccache_registry::{FuncCache, FuncCacheConfig, Holder};
}
