//! Holder kinds.
//!
//! Every pin on a function is tagged with the [`HolderKind`] saying why the
//! function must stay alive.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Why a holder pins a function.
///
/// Closed set; new reasons are added as new variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum HolderKind {
    /// The function is referenced by a constraint.
    Constraint = 0,
}

impl HolderKind {
    /// All holder kinds, in tag order.
    pub const ALL: [HolderKind; 1] = [HolderKind::Constraint];

    /// Lower-case name used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            HolderKind::Constraint => "constraint",
        }
    }
}

impl fmt::Display for HolderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
