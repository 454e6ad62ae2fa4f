//! Registry of reflected types.
//!
//! ## Menu
//!
//! - [`TypeRegistry`]: The central store of [`TypeDescriptor`]s, indexed by
//!   [`TypeHandle`], full path and short name. It also interns generic instances.
//!
//! - [`Members`]: A builder describing base class, interfaces and constructors of a type.
//!
//! - [`Declared`]: The handle of a freshly declared type with its generic parameters.
//!
//! - [`KnownTypes`]: Handles of the prelude types every registry starts with.
//!
//! - [`SharedTypeRegistry`]: `Arc<RwLock<TypeRegistry>>`, requires `std` feature.
//!
//! [`TypeDescriptor`]: crate::info::TypeDescriptor
//! [`TypeHandle`]: crate::info::TypeHandle

// -----------------------------------------------------------------------------
// Modules

mod members;
mod prelude;
mod type_registry;

#[cfg(feature = "std")]
mod shared;

// -----------------------------------------------------------------------------
// Exports

pub use members::{Declared, Members};
pub use prelude::KnownTypes;
pub use type_registry::{MAX_GENERIC_DEPTH, TypeRegistry};

#[cfg(feature = "std")]
pub use shared::SharedTypeRegistry;
