use alloc::string::String;

use thiserror::Error;

use crate::info::TypeHandle;

/// Errors reported by the registry and the metadata queries.
///
/// Every variant describes unusable input from the caller: an unknown
/// handle, a malformed generic interface definition, or metadata that
/// contradicts what is already registered. None of them is transient.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReflectError {
    #[error("type handle {0} is not registered")]
    UnknownType(TypeHandle),

    #[error("'{0}' is not a generic interface definition")]
    NotGenericInterfaceDefinition(String),

    #[error("'{0}' is not a generic type definition")]
    NotGenericDefinition(String),

    #[error("'{path}' expects {expected} type arguments, found {found}")]
    ArityMismatch {
        path: String,
        expected: usize,
        found: usize,
    },

    #[error("a type with path '{0}' is already registered")]
    DuplicatePath(String),

    #[error("type '{0}' cannot be declared directly")]
    InvalidDeclaration(String),

    #[error("type '{0}' is already defined")]
    AlreadyDefined(String),

    #[error("type '{0}' has been declared but not defined yet")]
    Undefined(String),

    #[error("'{0}' is not an interface")]
    NotAnInterface(String),

    #[error("'{0}' cannot be used as a base class")]
    InvalidBase(String),

    #[error("type '{0}' was not found")]
    TypeNotFound(String),

    #[error("type name '{0}' matches more than one registered type")]
    AmbiguousName(String),

    #[error("malformed type expression '{0}'")]
    MalformedTypeExpr(String),

    #[error("'{0}' nests generic arguments more than {max} levels deep", max = crate::registry::MAX_GENERIC_DEPTH)]
    GenericDepthExceeded(String),
}
