//! Stored function objects.
//!
//! This module provides [`Func`], the already-instantiated function object the
//! cache indexes, and [`FuncDef`], its definition. The cache only looks at the
//! id and the name; everything else is carried along untouched.

use std::fmt;

use crate::FuncId;

/// Language a function body is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FuncLanguage {
    #[default]
    Lua,
    C,
    SqlBuiltin,
    SqlExpr,
}

impl FuncLanguage {
    /// Upper-case name as stored in function definitions.
    pub const fn as_str(self) -> &'static str {
        match self {
            FuncLanguage::Lua => "LUA",
            FuncLanguage::C => "C",
            FuncLanguage::SqlBuiltin => "SQL_BUILTIN",
            FuncLanguage::SqlExpr => "SQL_EXPR",
        }
    }
}

impl fmt::Display for FuncLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDef {
    /// Unique function id.
    pub fid: FuncId,
    /// Id of the user that created the function.
    pub owner: u32,
    /// Function name. Indexed by its exact bytes.
    pub name: String,
    /// Language of `body`.
    pub language: FuncLanguage,
    /// Source text, if the function has one.
    pub body: Option<String>,
    /// Whether the function always returns the same result for the same input.
    pub is_deterministic: bool,
    /// Whether the function runs with the privileges of its owner.
    pub setuid: bool,
}

impl FuncDef {
    /// Create a definition with default attributes.
    pub fn new(fid: u32, name: impl Into<String>) -> Self {
        Self {
            fid: FuncId::new(fid),
            owner: 0,
            name: name.into(),
            language: FuncLanguage::default(),
            body: None,
            is_deterministic: false,
            setuid: false,
        }
    }

    /// Set the owner uid.
    pub fn with_owner(mut self, owner: u32) -> Self {
        self.owner = owner;
        self
    }

    /// Set the language and source body.
    pub fn with_body(mut self, language: FuncLanguage, body: impl Into<String>) -> Self {
        self.language = language;
        self.body = Some(body.into());
        self
    }

    /// Mark the function as deterministic.
    pub fn deterministic(mut self) -> Self {
        self.is_deterministic = true;
        self
    }

    /// Mark the function as setuid.
    pub fn setuid(mut self) -> Self {
        self.setuid = true;
        self
    }
}

/// An instantiated function object.
///
/// Built by the host and handed to the cache fully formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Func {
    pub def: FuncDef,
}

impl Func {
    pub fn new(def: FuncDef) -> Self {
        Self { def }
    }

    #[inline]
    pub fn fid(&self) -> FuncId {
        self.def.fid
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Name bytes, the key of the name index.
    #[inline]
    pub fn name_bytes(&self) -> &[u8] {
        self.def.name.as_bytes()
    }
}

impl From<FuncDef> for Func {
    fn from(def: FuncDef) -> Self {
        Self::new(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn def_defaults() {
        let def = FuncDef::new(1, "f");
        assert_eq!(def.fid, FuncId::new(1));
        assert_eq!(def.owner, 0);
        assert_eq!(def.language, FuncLanguage::Lua);
        assert!(def.body.is_none());
        assert!(!def.is_deterministic);
        assert!(!def.setuid);
    }

    #[test]
    fn def_builder() {
        let def = FuncDef::new(2, "sum")
            .with_owner(1)
            .with_body(FuncLanguage::SqlExpr, "a + b")
            .deterministic()
            .setuid();
        assert_eq!(def.owner, 1);
        assert_eq!(def.language, FuncLanguage::SqlExpr);
        assert_eq!(def.body.as_deref(), Some("a + b"));
        assert!(def.is_deterministic);
        assert!(def.setuid);
    }

    #[test]
    fn func_accessors() {
        let func = Func::new(FuncDef::new(3, "len"));
        assert_eq!(func.fid().get(), 3);
        assert_eq!(func.name(), "len");
        assert_eq!(func.name_bytes(), b"len");
    }

    #[test]
    fn language_names() {
        assert_eq!(FuncLanguage::Lua.to_string(), "LUA");
        assert_eq!(FuncLanguage::SqlBuiltin.as_str(), "SQL_BUILTIN");
    }
}
