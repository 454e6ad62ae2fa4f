use alloc::string::String;
use alloc::vec::Vec;

use crate::info::{ConstructorFlags, TypeKind};

/// A list of type declarations, loaded with
/// [`TypeRegistry::load_manifest`](crate::registry::TypeRegistry::load_manifest).
///
/// With the `serde` feature, manifests can be read from any serde format.
/// Type references are written as [`TypeExpr`](crate::manifest::TypeExpr)s.
///
/// ```json
/// {
///   "types": [
///     {
///       "path": "demo.Bag",
///       "kind": "class",
///       "parameters": ["T"],
///       "base": "xs.Object",
///       "interfaces": ["Collection<T>"],
///       "constructors": [
///         { "parameters": [] },
///         { "parameters": [{ "name": "items", "type": "Sequence<T>" }] }
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeManifest {
    #[cfg_attr(feature = "serde", serde(default))]
    pub types: Vec<TypeDecl>,
}

/// One type of a [`TypeManifest`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDecl {
    pub path: String,
    pub kind: TypeKind,
    /// Names of the generic parameters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base: Option<String>,
    /// Directly implemented interfaces; they must be defined earlier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interfaces: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub constructors: Vec<ConstructorDecl>,
}

impl TypeDecl {
    /// Creates a declaration without parameters or members.
    pub fn new(path: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            path: path.into(),
            kind,
            parameters: Vec::new(),
            base: None,
            interfaces: Vec::new(),
            constructors: Vec::new(),
        }
    }
}

/// A constructor of a [`TypeDecl`]. Public and non-static unless stated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructorDecl {
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: Vec<ParameterDecl>,
    #[cfg_attr(feature = "serde", serde(default = "default_public"))]
    pub public: bool,
    #[cfg_attr(feature = "serde", serde(default, rename = "static"))]
    pub is_static: bool,
}

#[cfg(feature = "serde")]
#[inline]
const fn default_public() -> bool {
    true
}

impl Default for ConstructorDecl {
    fn default() -> Self {
        Self {
            parameters: Vec::new(),
            public: true,
            is_static: false,
        }
    }
}

impl ConstructorDecl {
    /// Returns the flags of the described constructor.
    pub fn flags(&self) -> ConstructorFlags {
        let mut flags = ConstructorFlags::empty();
        flags.set(ConstructorFlags::PUBLIC, self.public);
        flags.set(ConstructorFlags::STATIC, self.is_static);
        flags
    }
}

/// A named constructor parameter; `ty` is a type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterDecl {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: String,
}
