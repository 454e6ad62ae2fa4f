use alloc::string::String;
use alloc::vec::Vec;

use crate::info::{ConstructorInfo, GenericForm, TypeHandle, TypeKind};

/// Reflected metadata of one type.
///
/// # Content
///
/// - **path**: unique identifier, e.g. `xs.collections.List<xs.i32>`.
/// - **name**: short name without namespace, may be duplicated, e.g. `List<i32>`.
/// - **kind**: see [`TypeKind`].
/// - **generic**: see [`GenericForm`].
/// - **base**: optional base class.
/// - **interfaces**: every interface the type implements, declared ones
///   first, then inherited ones, without duplicates.
/// - **constructors**: in declaration order.
///
/// Descriptors of generic instances are derived from their definition by
/// substituting the arguments for the parameters.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub(crate) handle: TypeHandle,
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) kind: TypeKind,
    pub(crate) generic: GenericForm,
    pub(crate) base: Option<TypeHandle>,
    pub(crate) interfaces: Vec<TypeHandle>,
    pub(crate) constructors: Vec<ConstructorInfo>,
    pub(crate) defined: bool,
    pub(crate) depth: usize,
}

impl TypeDescriptor {
    pub(crate) fn new(
        handle: TypeHandle,
        path: String,
        name: String,
        kind: TypeKind,
        generic: GenericForm,
    ) -> Self {
        Self {
            handle,
            path,
            name,
            kind,
            generic,
            base: None,
            interfaces: Vec::new(),
            constructors: Vec::new(),
            defined: false,
            depth: 0,
        }
    }

    #[inline]
    pub const fn handle(&self) -> TypeHandle {
        self.handle
    }

    /// Returns the full path, a unique identifier of the type.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the name without namespace.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    #[inline]
    pub const fn generic(&self) -> &GenericForm {
        &self.generic
    }

    #[inline]
    pub const fn is_interface(&self) -> bool {
        matches!(self.kind, TypeKind::Interface)
    }

    #[inline]
    pub const fn is_value_type(&self) -> bool {
        self.kind.is_value_type()
    }

    /// Returns `true` for an unparameterized generic shape.
    #[inline]
    pub const fn is_generic_definition(&self) -> bool {
        matches!(self.generic, GenericForm::Definition { .. })
    }

    /// Returns `true` for definitions and their instances.
    #[inline]
    pub const fn is_generic(&self) -> bool {
        matches!(
            self.generic,
            GenericForm::Definition { .. } | GenericForm::Instance { .. }
        )
    }

    /// Returns the unparameterized shape of a generic type.
    ///
    /// A definition is its own shape. Non-generic types and parameters return `None`.
    pub const fn generic_definition(&self) -> Option<TypeHandle> {
        match &self.generic {
            GenericForm::Definition { .. } => Some(self.handle),
            GenericForm::Instance { definition, .. } => Some(*definition),
            _ => None,
        }
    }

    /// Returns the generic arguments of an instance, or the parameters of a definition.
    pub fn generic_arguments(&self) -> &[TypeHandle] {
        match &self.generic {
            GenericForm::Definition { parameters } => parameters,
            GenericForm::Instance { arguments, .. } => arguments,
            _ => &[],
        }
    }

    #[inline]
    pub const fn base(&self) -> Option<TypeHandle> {
        self.base
    }

    #[inline]
    pub fn interfaces(&self) -> &[TypeHandle] {
        &self.interfaces
    }

    #[inline]
    pub fn constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }

    /// Returns `false` while the type is declared but its members are not known.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        self.defined
    }

    /// Returns how deeply generic instances are nested in this type.
    ///
    /// `0` for anything but an instance, `1` for `List<i32>`, `2` for
    /// `List<List<i32>>`.
    #[inline]
    pub const fn generic_depth(&self) -> usize {
        self.depth
    }
}
