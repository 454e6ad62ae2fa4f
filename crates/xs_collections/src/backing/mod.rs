//! The collections a [`CollectionWrapper`](crate::CollectionWrapper) can sit on.
//!
//! ## Menu
//!
//! - [`TypedCollection<T>`]: A strongly typed collection. Implemented for
//!   `Vec`, `VecDeque`, `LinkedList`, `BTreeSet`, `std` and `hashbrown`
//!   hash sets, and (read-only) arrays.
//!
//! - [`UntypedList`]: A legacy list of [`Value`](crate::Value)s with
//!   positional access. Implemented for `Vec<Value>` and [`ObjectList`].
//!
//! - [`Backing`]: Either of the above, borrowed mutably.

// -----------------------------------------------------------------------------
// Modules

mod object_list;
mod typed;
mod untyped;

// -----------------------------------------------------------------------------
// Exports

pub use object_list::ObjectList;
pub use typed::TypedCollection;
pub use untyped::UntypedList;

// -----------------------------------------------------------------------------
// Backing

use core::fmt;

/// The collection behind a wrapper.
///
/// A wrapper is built over exactly one backing and keeps it for its whole
/// lifetime.
pub enum Backing<'a, T> {
    Typed(&'a mut dyn TypedCollection<T>),
    Untyped(&'a mut dyn UntypedList),
}

/// Which kind of [`Backing`] a wrapper holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackingKind {
    Typed,
    Untyped,
}

impl<T> Backing<'_, T> {
    #[inline]
    pub const fn kind(&self) -> BackingKind {
        match self {
            Self::Typed(_) => BackingKind::Typed,
            Self::Untyped(_) => BackingKind::Untyped,
        }
    }
}

impl<T> fmt::Debug for Backing<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Typed(collection) => f
                .debug_struct("Typed")
                .field("len", &collection.len())
                .finish(),
            Self::Untyped(list) => f
                .debug_struct("Untyped")
                .field("len", &list.len())
                .finish(),
        }
    }
}

impl fmt::Display for BackingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Typed => f.pad("Typed"),
            Self::Untyped => f.pad("Untyped"),
        }
    }
}
