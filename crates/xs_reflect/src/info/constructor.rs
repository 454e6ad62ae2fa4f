use alloc::string::String;
use alloc::vec::Vec;

use crate::info::TypeHandle;

bitflags::bitflags! {
    /// Attributes of a constructor.
    ///
    /// Only public instance constructors take part in constructor resolution.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConstructorFlags: u8 {
        const PUBLIC = 1 << 0;
        const STATIC = 1 << 1;
    }
}

/// A named, typed constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    name: String,
    ty: TypeHandle,
}

impl ParameterInfo {
    /// Creates a new [`ParameterInfo`].
    #[inline]
    pub fn new(name: impl Into<String>, ty: TypeHandle) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn ty(&self) -> TypeHandle {
        self.ty
    }
}

/// A constructor's parameter list paired with its declaring type.
///
/// Constructors keep the order in which they were declared; resolution
/// depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInfo {
    declaring: TypeHandle,
    parameters: Vec<ParameterInfo>,
    flags: ConstructorFlags,
}

impl ConstructorInfo {
    #[inline]
    pub(crate) fn new(
        declaring: TypeHandle,
        parameters: Vec<ParameterInfo>,
        flags: ConstructorFlags,
    ) -> Self {
        Self {
            declaring,
            parameters,
            flags,
        }
    }

    /// Returns the type declaring this constructor.
    #[inline]
    pub const fn declaring(&self) -> TypeHandle {
        self.declaring
    }

    #[inline]
    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    #[inline]
    pub const fn flags(&self) -> ConstructorFlags {
        self.flags
    }

    /// Returns `true` if the constructor is public and not static.
    #[inline]
    pub const fn is_public_instance(&self) -> bool {
        self.flags.contains(ConstructorFlags::PUBLIC) && !self.flags.contains(ConstructorFlags::STATIC)
    }
}
