use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::any::type_name;
use core::fmt;
#[cfg(feature = "std")]
use std::sync::OnceLock;

use crate::{AnyElement, Backing, BackingKind, CollectionError, Element};
use crate::{TypedCollection, UntypedList, Value};

#[cfg(feature = "std")]
use crate::SyncRoot;

// -----------------------------------------------------------------------------
// CollectionWrapper

/// A uniform view of a typed or untyped collection of `T`.
///
/// The wrapper borrows its [`Backing`] for its whole lifetime and never
/// switches to another one.
///
/// - Element-wise operations work on both backings.
/// - Values offered untyped (`Option<Value>`, `None` being null) are checked
///   against `T` first: a mutation with an incompatible value fails with
///   [`CollectionError::TypeMismatch`], a query treats it as absent.
/// - Positional operations are only available on an untyped backing, and
///   fail with [`CollectionError::Unsupported`] on a typed one.
///
/// A value is compatible when it is exactly a `T`, or when it is null and
/// `T` admits null (see [`Element::NULLABLE`]).
///
/// # Examples
///
/// ```
/// use xs_collections::{CollectionWrapper, ObjectList, Value};
///
/// let mut list = ObjectList::new();
/// let mut wrapper = CollectionWrapper::<i32>::untyped(&mut list);
///
/// assert_eq!(wrapper.add_value(Some(Box::new(7_i32))).unwrap(), 0);
/// assert!(wrapper.add_value(Some(Box::new("seven"))).is_err());
/// assert!(wrapper.add_value(None).is_err());
///
/// assert_eq!(wrapper.index_of(Some(&7_i32)).unwrap(), Some(0));
/// assert_eq!(wrapper.len(), 1);
/// ```
pub struct CollectionWrapper<'a, T: Element> {
    backing: Backing<'a, T>,
    #[cfg(feature = "std")]
    sync_root: OnceLock<SyncRoot>,
}

/// Wraps an optional backing collection.
///
/// A missing backing is reported as [`CollectionError::InvalidArgument`].
#[inline]
pub fn wrap<T: Element>(backing: Option<Backing<'_, T>>) -> Result<CollectionWrapper<'_, T>, CollectionError> {
    match backing {
        Some(backing) => Ok(CollectionWrapper::new(backing)),
        None => Err(CollectionError::InvalidArgument),
    }
}

impl<'a, T: Element> CollectionWrapper<'a, T> {
    #[inline]
    pub const fn new(backing: Backing<'a, T>) -> Self {
        Self {
            backing,
            #[cfg(feature = "std")]
            sync_root: OnceLock::new(),
        }
    }

    /// Wraps a strongly typed collection.
    #[inline]
    pub fn typed<C: TypedCollection<T> + 'a>(collection: &'a mut C) -> Self {
        Self::new(Backing::Typed(collection))
    }

    /// Wraps a legacy list.
    #[inline]
    pub fn untyped<L: UntypedList + 'a>(list: &'a mut L) -> Self {
        Self::new(Backing::Untyped(list))
    }

    #[inline]
    pub const fn kind(&self) -> BackingKind {
        self.backing.kind()
    }

    /// Returns the underlying collection.
    #[inline]
    pub const fn backing(&self) -> &Backing<'a, T> {
        &self.backing
    }

    #[inline]
    pub fn into_backing(self) -> Backing<'a, T> {
        self.backing
    }

    // -------------------------------------------------------------------------
    // Compatibility

    /// Returns `true` if `value` can be stored in a collection of `T`.
    pub fn is_compatible(value: Option<&dyn AnyElement>) -> bool {
        match value {
            Some(value) => value.is::<T>(),
            None => T::NULLABLE,
        }
    }

    fn verify_value(value: Option<Value>) -> Result<T, CollectionError> {
        match value {
            Some(value) => match value.downcast::<T>() {
                Ok(value) => Ok(*value),
                Err(value) => Err(CollectionError::TypeMismatch {
                    value: format!("{value:?}"),
                    expected: type_name::<T>(),
                }),
            },
            None => T::null_value().ok_or_else(|| CollectionError::TypeMismatch {
                value: String::from("null"),
                expected: type_name::<T>(),
            }),
        }
    }

    /// Runs `f` with the `T` equal to a compatible `value`.
    fn with_compatible<R>(value: Option<&dyn AnyElement>, f: impl FnOnce(&T) -> R) -> Option<R> {
        match value {
            Some(value) => value.downcast_ref::<T>().map(f),
            None => T::null_value().map(|null| f(&null)),
        }
    }

    // -------------------------------------------------------------------------
    // Element-wise

    pub fn add(&mut self, value: T) -> Result<(), CollectionError> {
        match &mut self.backing {
            Backing::Typed(collection) => collection.add(value),
            Backing::Untyped(list) => list.push(Box::new(value)),
        }
    }

    /// Adds an untyped value, returning the length minus one.
    ///
    /// For a set that already held the value, that is not the value's position.
    pub fn add_value(&mut self, value: Option<Value>) -> Result<usize, CollectionError> {
        let value = Self::verify_value(value)?;
        self.add(value)?;
        Ok(self.len().saturating_sub(1))
    }

    pub fn len(&self) -> usize {
        match &self.backing {
            Backing::Typed(collection) => collection.len(),
            Backing::Untyped(list) => list.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, value: &T) -> bool {
        match &self.backing {
            Backing::Typed(collection) => collection.contains(value),
            Backing::Untyped(list) => list.contains(value),
        }
    }

    /// Returns `false` for an incompatible value.
    pub fn contains_value(&self, value: Option<&dyn AnyElement>) -> bool {
        Self::with_compatible(value, |value| self.contains(value)).unwrap_or(false)
    }

    pub fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        match &mut self.backing {
            Backing::Typed(collection) => collection.remove(value),
            Backing::Untyped(list) => list.remove(value),
        }
    }

    /// Returns `Ok(false)` for an incompatible value.
    pub fn remove_value(&mut self, value: Option<&dyn AnyElement>) -> Result<bool, CollectionError> {
        Self::with_compatible(value, |value| self.remove(value)).unwrap_or(Ok(false))
    }

    pub fn clear(&mut self) -> Result<(), CollectionError> {
        match &mut self.backing {
            Backing::Typed(collection) => collection.clear(),
            Backing::Untyped(list) => list.clear(),
        }
    }

    /// Iterates over the items of type `T`.
    ///
    /// Items of an untyped backing that are not `T`s are skipped.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match &self.backing {
            Backing::Typed(collection) => collection.iter(),
            Backing::Untyped(list) => Box::new(list.iter().filter_map(|item| item.downcast_ref::<T>())),
        }
    }

    // -------------------------------------------------------------------------
    // Positional

    pub fn get(&self, index: usize) -> Result<&dyn AnyElement, CollectionError> {
        match &self.backing {
            Backing::Typed(_) => Err(CollectionError::Unsupported("get")),
            Backing::Untyped(list) => list.get(index).ok_or(CollectionError::IndexOutOfRange {
                index,
                len: list.len(),
            }),
        }
    }

    pub fn set(&mut self, index: usize, value: Option<Value>) -> Result<(), CollectionError> {
        let Backing::Untyped(list) = &mut self.backing else {
            return Err(CollectionError::Unsupported("set"));
        };
        let value = Self::verify_value(value)?;
        list.set(index, Box::new(value)).map(drop)
    }

    /// Returns the position of a compatible `value`, or `None`.
    pub fn index_of(&self, value: Option<&dyn AnyElement>) -> Result<Option<usize>, CollectionError> {
        match &self.backing {
            Backing::Typed(_) => Err(CollectionError::Unsupported("index_of")),
            Backing::Untyped(list) => {
                Ok(Self::with_compatible(value, |value| list.index_of(value)).flatten())
            }
        }
    }

    pub fn insert(&mut self, index: usize, value: Option<Value>) -> Result<(), CollectionError> {
        let Backing::Untyped(list) = &mut self.backing else {
            return Err(CollectionError::Unsupported("insert"));
        };
        let value = Self::verify_value(value)?;
        list.insert(index, Box::new(value))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<(), CollectionError> {
        match &mut self.backing {
            Backing::Typed(_) => Err(CollectionError::Unsupported("remove_at")),
            Backing::Untyped(list) => list.remove_at(index).map(drop),
        }
    }

    // -------------------------------------------------------------------------
    // Flags

    pub fn is_read_only(&self) -> bool {
        match &self.backing {
            Backing::Typed(collection) => collection.is_read_only(),
            Backing::Untyped(list) => list.is_read_only(),
        }
    }

    /// A typed backing has a fixed size exactly when it is read-only.
    pub fn is_fixed_size(&self) -> bool {
        match &self.backing {
            Backing::Typed(collection) => collection.is_read_only(),
            Backing::Untyped(list) => list.is_fixed_size(),
        }
    }

    /// Always `false`: the wrapper does no locking of its own.
    #[inline]
    pub const fn is_synchronized(&self) -> bool {
        false
    }

    /// Returns the lock object of this wrapper, creating it on first use.
    ///
    /// Concurrent first calls create exactly one root; every caller sees
    /// the same one.
    #[cfg(feature = "std")]
    #[inline]
    pub fn sync_root(&self) -> &SyncRoot {
        self.sync_root.get_or_init(SyncRoot::new)
    }

    /// Returns the root if [`sync_root`](Self::sync_root) has been called.
    #[cfg(feature = "std")]
    #[inline]
    pub fn try_sync_root(&self) -> Option<&SyncRoot> {
        self.sync_root.get()
    }
}

impl<T: Element> fmt::Debug for CollectionWrapper<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionWrapper")
            .field("backing", &self.backing)
            .field("element", &type_name::<T>())
            .finish()
    }
}

impl<'a, T: Element> From<Backing<'a, T>> for CollectionWrapper<'a, T> {
    #[inline]
    fn from(backing: Backing<'a, T>) -> Self {
        Self::new(backing)
    }
}

// -----------------------------------------------------------------------------
// Tests
