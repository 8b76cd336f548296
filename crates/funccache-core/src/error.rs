//! Error types for the function cache.
//!
//! Every variant is a violated precondition of a cache operation: the caller
//! asked for something the current state does not allow. A failed operation
//! leaves the cache exactly as it was. Lookup misses are not errors and are
//! reported as `None`.

use thiserror::Error;

use crate::{FuncId, HolderId, HolderKind};

/// Errors returned by function cache operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuncCacheError {
    /// A function with this id is already cached.
    #[error("duplicate function id {fid}: already cached as '{name}'")]
    DuplicateId {
        /// The duplicated id.
        fid: FuncId,
        /// Name of the function already cached under `fid`.
        name: String,
    },

    /// A function with this name is already cached.
    #[error("duplicate function name '{name}': already cached as {fid}")]
    DuplicateName {
        /// The duplicated name.
        name: String,
        /// Id of the function already cached under `name`.
        fid: FuncId,
    },

    /// The function is pinned and cannot be dropped.
    #[error("can't drop function {fid}: function is referenced by {kind}")]
    FuncPinned { fid: FuncId, kind: HolderKind },

    /// No function with this id is cached.
    #[error("function {0} not found")]
    FuncNotFound(FuncId),

    /// A different function is cached under this id.
    #[error("function {fid} '{name}' is not the cached '{cached}'")]
    FuncMismatch {
        fid: FuncId,
        /// Name of the function passed in.
        name: String,
        /// Name of the function cached under `fid`.
        cached: String,
    },

    /// The function has no holders.
    #[error("function {0} is not pinned")]
    NotPinned(FuncId),

    /// The holder is not a member of the function's ring.
    #[error("{holder} does not pin function {fid}")]
    HolderNotInRing { fid: FuncId, holder: HolderId },

    /// The holder already pins a function.
    #[error("{holder} already pins function {fid}")]
    HolderAlreadyPinned { holder: HolderId, fid: FuncId },
}

/// Result alias for function cache operations.
pub type FuncCacheResult<T> = Result<T, FuncCacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_message_names_holder_kind() {
        let err = FuncCacheError::FuncPinned {
            fid: FuncId::new(7),
            kind: HolderKind::Constraint,
        };
        assert_eq!(
            err.to_string(),
            "can't drop function func_7: function is referenced by constraint"
        );
    }

    #[test]
    fn duplicate_messages() {
        let err = FuncCacheError::DuplicateId {
            fid: FuncId::new(1),
            name: "f".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate function id func_1: already cached as 'f'"
        );

        let err = FuncCacheError::DuplicateName {
            name: "f".to_string(),
            fid: FuncId::new(1),
        };
        assert_eq!(
            err.to_string(),
            "duplicate function name 'f': already cached as func_1"
        );
    }

    #[test]
    fn not_found_message() {
        let err = FuncCacheError::FuncNotFound(FuncId::new(3));
        assert_eq!(err.to_string(), "function func_3 not found");
    }
}
