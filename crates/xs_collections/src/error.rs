use alloc::string::String;

use thiserror::Error;

/// Errors reported by wrapped collections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CollectionError {
    /// No backing collection was supplied.
    #[error("a backing collection is required")]
    InvalidArgument,

    /// A positional operation was requested on a typed backing.
    #[error("`{0}` is not supported by a typed backing collection")]
    Unsupported(&'static str),

    /// A value of the wrong type was offered to the collection.
    #[error("the value `{value}` is not of type `{expected}` and cannot be used in this collection")]
    TypeMismatch {
        value: String,
        expected: &'static str,
    },

    #[error("index {index} is out of range for a collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("the collection is read-only")]
    ReadOnly,

    #[error("the collection has a fixed size")]
    FixedSize,
}

impl CollectionError {
    #[inline]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }

    #[inline]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}
