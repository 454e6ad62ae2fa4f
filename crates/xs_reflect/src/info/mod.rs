//! Reflected type metadata.
//!
//! ## Menu
//!
//! - [`TypeHandle`]: A 4 bytes handle naming one type inside a [`TypeRegistry`].
//!
//! - [`TypeKind`]: representing the shape of a type, one of `Class`, `Struct`, `Interface`
//!   and `Parameter` (a generic parameter placeholder).
//!
//! - [`GenericForm`]: A enum describing how a type relates to generics:
//!     - `NonGeneric`: An ordinary type.
//!     - `Definition`: An unparameterized generic shape (e.g. `Sequence<T>` itself).
//!     - `Instance`: A definition with its arguments fixed (e.g. `Sequence<i32>`).
//!     - `Parameter`: The `T` of a definition.
//!
//! - [`TypeDescriptor`]: The metadata of a single type, including base class,
//!   flattened interfaces and constructors.
//!
//! - [`ConstructorInfo`]: A constructor's parameter list with its declaring type and [`ConstructorFlags`].
//!     - [`ParameterInfo`]: A named, typed constructor parameter.
//!
//! Descriptors are only created and mutated by the [`TypeRegistry`];
//! everything else reads them.
//!
//! [`TypeRegistry`]: crate::registry::TypeRegistry

// -----------------------------------------------------------------------------
// Modules

mod constructor;
mod descriptor;
mod handle;
mod kind;

// -----------------------------------------------------------------------------
// Exports

pub use constructor::{ConstructorFlags, ConstructorInfo, ParameterInfo};
pub use descriptor::TypeDescriptor;
pub use handle::TypeHandle;
pub use kind::{GenericForm, TypeKind};
