//! Identifier types for cached functions and pin holders.
//!
//! [`FuncId`] is the numeric key every stored function is registered under.
//! [`HolderId`] is the identity token of a caller-owned [`Holder`](crate::Holder)
//! record; the pin tracker links holders together by this token instead of
//! holding references into caller memory.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Numeric identifier of a stored function.
///
/// # Example
///
/// ```
/// use funccache_core::FuncId;
///
/// let fid = FuncId::new(7);
/// assert_eq!(fid.get(), 7);
/// assert_eq!(fid.to_string(), "func_7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FuncId(u32);

impl FuncId {
    /// Create a function ID from its raw value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FuncId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "func_{}", self.0)
    }
}

impl From<u32> for FuncId {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

impl From<FuncId> for u32 {
    fn from(id: FuncId) -> Self {
        id.0
    }
}

/// Identity token of a pin holder.
///
/// Tokens are issued from a process-wide counter and are never reused, so two
/// live holders never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HolderId(u64);

static NEXT_HOLDER_ID: AtomicU64 = AtomicU64::new(1);

impl HolderId {
    /// Issue a fresh, never before seen token.
    pub fn next() -> Self {
        Self(NEXT_HOLDER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "holder_{}", self.0)
    }
}
