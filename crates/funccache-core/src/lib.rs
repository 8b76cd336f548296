//! Core types for the function cache.
//!
//! Shared by the registry crate and its users: identifiers, the stored
//! function object, holder kinds, and the error type.

mod error;
mod func;
mod holder;
mod ids;

pub use error::{FuncCacheError, FuncCacheResult};
pub use func::{Func, FuncDef, FuncLanguage};
pub use holder::HolderKind;
pub use ids::{FuncId, HolderId};
