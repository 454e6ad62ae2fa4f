//! Textual type declarations.
//!
//! The serialization engine is configured with the types it may rehydrate.
//! Instead of calling [`TypeRegistry::declare`] and [`TypeRegistry::define`]
//! by hand, a [`TypeManifest`] lists them, referring to other types through
//! [`TypeExpr`]s such as `Map<String, List<T>>`.
//!
//! A name in an expression is resolved, in order, as a generic parameter of
//! the declaration, as a full path, then as an unambiguous short name.
//!
//! [`TypeRegistry::declare`]: crate::registry::TypeRegistry::declare
//! [`TypeRegistry::define`]: crate::registry::TypeRegistry::define

// -----------------------------------------------------------------------------
// Modules

mod decl;
mod load;
mod type_expr;

// -----------------------------------------------------------------------------
// Exports

pub use decl::{ConstructorDecl, ParameterDecl, TypeDecl, TypeManifest};
pub use type_expr::TypeExpr;
