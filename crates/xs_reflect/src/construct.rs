use crate::ReflectError;
use crate::info::{ConstructorInfo, TypeHandle};
use crate::registry::TypeRegistry;

// -----------------------------------------------------------------------------
// ConstructorRef

/// Names one constructor of a type by its declaration position.
///
/// Look it up with [`TypeRegistry::constructor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstructorRef {
    declaring: TypeHandle,
    index: usize,
}

impl ConstructorRef {
    #[inline]
    pub const fn declaring(self) -> TypeHandle {
        self.declaring
    }

    /// Position among the constructors of the declaring type.
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }
}

// -----------------------------------------------------------------------------
// Resolution

impl TypeRegistry {
    /// Picks the constructor used to build a `collection` of `element`s
    /// from a list of already deserialized items.
    ///
    /// The items are handed over as an `IndexedList<element>`. See
    /// [`resolve_collection_constructor_with`](Self::resolve_collection_constructor_with)
    /// for the selection rules.
    ///
    /// This takes `&mut self` because `IndexedList<element>` may have to be
    /// instantiated first. With a
    /// [`SharedTypeRegistry`](crate::registry::SharedTypeRegistry), look the
    /// argument up with [`get_instance`](Self::get_instance) and call
    /// [`resolve_collection_constructor_with`](Self::resolve_collection_constructor_with)
    /// under the read lock, falling back to the write lock when it is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use xs_reflect::registry::TypeRegistry;
    ///
    /// let mut registry = TypeRegistry::new();
    /// let known = *registry.known();
    ///
    /// // `List<T>` declares (), (capacity: i32), (items: Sequence<T>).
    /// let list = registry.instantiate(known.list, &[known.string]).unwrap();
    /// let found = registry.resolve_collection_constructor(list, known.string).unwrap().unwrap();
    /// assert_eq!(found.index(), 2);
    ///
    /// // `FrozenList<T>` only accepts an `IndexedList<T>`.
    /// let frozen = registry.instantiate(known.frozen_list, &[known.string]).unwrap();
    /// let found = registry.resolve_collection_constructor(frozen, known.string).unwrap().unwrap();
    /// assert_eq!(found.index(), 0);
    /// ```
    pub fn resolve_collection_constructor(
        &mut self,
        collection: TypeHandle,
        element: TypeHandle,
    ) -> Result<Option<ConstructorRef>, ReflectError> {
        self.descriptor(collection)?;
        let indexed_list = self.known().indexed_list;
        let argument = self.instantiate(indexed_list, &[element])?;
        self.resolve_collection_constructor_with(collection, element, argument)
    }

    /// Picks the single-argument constructor of `collection` that accepts
    /// a sequence of `element`s.
    ///
    /// Public instance constructors with exactly one parameter are scanned
    /// in declaration order:
    ///
    /// - a parameter of exactly `Sequence<element>` is selected at once;
    /// - otherwise the first parameter assignable from `argument` is kept
    ///   as a fallback, and later ones are ignored.
    ///
    /// Returns `None` if neither exists; the caller then has to build the
    /// collection some other way.
    pub fn resolve_collection_constructor_with(
        &self,
        collection: TypeHandle,
        element: TypeHandle,
        argument: TypeHandle,
    ) -> Result<Option<ConstructorRef>, ReflectError> {
        let info = self.descriptor(collection)?;
        self.descriptor(element)?;
        self.descriptor(argument)?;
        let sequence = self.known().sequence;

        let mut exact: Option<ConstructorRef> = None;
        let mut fallback: Option<ConstructorRef> = None;

        for (index, ctor) in info.constructors().iter().enumerate() {
            if !ctor.is_public_instance() || ctor.arity() != 1 {
                continue;
            }
            let candidate = ConstructorRef {
                declaring: collection,
                index,
            };

            let parameter = ctor.parameters()[0].ty();
            let parameter_info = self.descriptor(parameter)?;
            if parameter_info.generic_definition() == Some(sequence)
                && parameter_info.generic_arguments() == [element].as_slice()
            {
                exact = Some(candidate);
                break;
            }

            if !self.is_assignable_from(parameter, argument)? {
                continue;
            }
            match fallback {
                None => fallback = Some(candidate),
                Some(kept) => log::debug!(
                    "constructor #{} of '{}' also accepts '{}', keeping #{}",
                    index,
                    info.path(),
                    parameter_info.path(),
                    kept.index,
                ),
            }
        }

        let resolved = exact.or(fallback);
        log::trace!(
            "collection constructor of '{}': {:?}",
            info.path(),
            resolved.map(ConstructorRef::index),
        );
        Ok(resolved)
    }

    /// Returns the constructor named by `ctor`.
    pub fn constructor(&self, ctor: ConstructorRef) -> Option<&ConstructorInfo> {
        self.get(ctor.declaring)?.constructors().get(ctor.index)
    }
}

// -----------------------------------------------------------------------------
// Tests
