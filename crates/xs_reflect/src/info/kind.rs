use alloc::vec::Vec;
use core::fmt;

use crate::info::TypeHandle;

// -----------------------------------------------------------------------------
// TypeKind

/// An enumeration of the "kinds" of a reflected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TypeKind {
    /// A reference type that may have a base class.
    Class,
    /// A value type. Never null unless wrapped in `Nullable<T>`.
    Struct,
    /// An interface shape, implemented by classes and structs.
    Interface,
    /// A generic parameter of a definition.
    Parameter,
}

impl TypeKind {
    /// Returns `true` for kinds whose values can never be null on their own.
    #[inline]
    pub const fn is_value_type(self) -> bool {
        matches!(self, Self::Struct)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => f.pad("Class"),
            Self::Struct => f.pad("Struct"),
            Self::Interface => f.pad("Interface"),
            Self::Parameter => f.pad("Parameter"),
        }
    }
}

// -----------------------------------------------------------------------------
// GenericForm

/// How a type participates in generics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenericForm {
    #[default]
    NonGeneric,
    /// An unparameterized shape, e.g. `Sequence<T>` itself.
    Definition { parameters: Vec<TypeHandle> },
    /// A definition whose parameters are fixed, e.g. `Sequence<i32>`.
    ///
    /// Arguments may themselves be parameters of another definition,
    /// e.g. the `Sequence<T>` mentioned inside `List<T>`.
    Instance {
        definition: TypeHandle,
        arguments: Vec<TypeHandle>,
    },
    /// The `position`-th parameter of `owner`.
    Parameter { owner: TypeHandle, position: usize },
}
