use alloc::string::String;
use alloc::vec::Vec;

use crate::info::{ConstructorFlags, ParameterInfo, TypeHandle};

/// A freshly declared type.
///
/// Returned by [`TypeRegistry::declare`](crate::registry::TypeRegistry::declare).
/// The `parameters` are the handles of the generic parameters, in order,
/// and can be used to describe the members of a generic definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declared {
    pub handle: TypeHandle,
    pub parameters: Vec<TypeHandle>,
}

/// The members of a type, consumed by
/// [`TypeRegistry::define`](crate::registry::TypeRegistry::define).
///
/// Interfaces only need to list the directly implemented ones; inherited
/// interfaces are collected by the registry.
///
/// # Examples
///
/// ```
/// use xs_reflect::info::TypeKind;
/// use xs_reflect::registry::{Members, TypeRegistry};
///
/// let mut registry = TypeRegistry::new();
/// let known = *registry.known();
///
/// let bag = registry.declare("demo.Bag", TypeKind::Class, &["T"]).unwrap();
/// let t = bag.parameters[0];
/// let items = registry.instantiate(known.sequence, &[t]).unwrap();
/// let collection = registry.instantiate(known.collection, &[t]).unwrap();
///
/// registry.define(
///     bag.handle,
///     Members::new()
///         .implements(collection)
///         .default_constructor()
///         .constructor([("items", items)]),
/// ).unwrap();
///
/// let info = registry.descriptor(bag.handle).unwrap();
/// assert_eq!(info.constructors().len(), 2);
/// assert!(info.interfaces().contains(&items));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Members {
    pub(crate) base: Option<TypeHandle>,
    pub(crate) interfaces: Vec<TypeHandle>,
    pub(crate) constructors: Vec<(ConstructorFlags, Vec<ParameterInfo>)>,
}

impl Members {
    /// Creates an empty member list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            base: None,
            interfaces: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Sets the base class.
    #[inline]
    pub fn base(mut self, base: TypeHandle) -> Self {
        self.base = Some(base);
        self
    }

    /// Adds a directly implemented interface.
    #[inline]
    pub fn implements(mut self, interface: TypeHandle) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Adds a public instance constructor.
    pub fn constructor<I, S>(self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (S, TypeHandle)>,
        S: Into<String>,
    {
        self.constructor_with(ConstructorFlags::PUBLIC, parameters)
    }

    /// Adds a public parameterless constructor.
    #[inline]
    pub fn default_constructor(self) -> Self {
        self.constructor_with(ConstructorFlags::PUBLIC, core::iter::empty::<(String, TypeHandle)>())
    }

    /// Adds a constructor with explicit flags.
    pub fn constructor_with<I, S>(mut self, flags: ConstructorFlags, parameters: I) -> Self
    where
        I: IntoIterator<Item = (S, TypeHandle)>,
        S: Into<String>,
    {
        let parameters = parameters
            .into_iter()
            .map(|(name, ty)| ParameterInfo::new(name, ty))
            .collect();
        self.constructors.push((flags, parameters));
        self
    }
}
