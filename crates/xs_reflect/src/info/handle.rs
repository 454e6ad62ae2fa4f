use core::fmt;

/// Names one type inside a [`TypeRegistry`](crate::registry::TypeRegistry).
///
/// Handles are only meaningful for the registry that produced them.
/// Passing a foreign handle to a query is reported as
/// [`ReflectError::UnknownType`](crate::ReflectError::UnknownType).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeHandle(u32);

impl TypeHandle {
    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the position of the type in registration order.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
