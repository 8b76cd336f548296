//! Function cache registry crate.
//!
//! Provides [`FuncCache`], the id/name index over stored functions, and the
//! [`PinTracker`] that keeps pinned functions from being dropped.

mod config;
mod func_cache;
mod holder;
mod pin_tracker;
mod ring;

pub use config::FuncCacheConfig;
pub use func_cache::FuncCache;
pub use holder::Holder;
pub use pin_tracker::{Holders, PinTracker};
pub use ring::{HolderRing, RingIter, RingLink};

// Re-export core types so most users only need this crate
pub use funccache_core::{
    Func, FuncCacheError, FuncCacheResult, FuncDef, FuncId, FuncLanguage, HolderId, HolderKind,
};
