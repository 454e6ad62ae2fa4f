use alloc::vec::Vec;

use crate::ReflectError;
use crate::info::{GenericForm, TypeDescriptor, TypeHandle, TypeKind};
use crate::registry::TypeRegistry;

// -----------------------------------------------------------------------------
// CollectionCapabilities

/// What the serialization engine may do with values of a collection type.
///
/// Returned by [`TypeRegistry::classify_collection`].
///
/// `matched_interfaces` lists the instantiated generic collection
/// interfaces the type implements, among `Map<K, V>`, `ReadOnlyMap<K, V>`,
/// `Sequence<T>`, `IndexedList<T>`, `ReadOnlyList<T>` and `Set<T>`, in that
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectionCapabilities {
    /// Key/value pairs, see [`TypeRegistry::is_keyed_collection_type`].
    pub is_keyed: bool,
    /// Implements `Sequence<T>` or the legacy `UntypedSequence`.
    pub is_sequence: bool,
    /// Supports positional access, typed or legacy.
    pub is_indexed: bool,
    pub matched_interfaces: Vec<TypeHandle>,
    /// The `T` of the matched `Sequence<T>`.
    pub element_type: Option<TypeHandle>,
}

impl CollectionCapabilities {
    /// Returns `true` if the type can be read as a collection at all.
    #[inline]
    pub const fn is_collection(&self) -> bool {
        self.is_keyed || self.is_sequence
    }
}

// -----------------------------------------------------------------------------
// Queries

impl TypeRegistry {
    /// Returns `true` if a value of `source` can be stored in a slot of `target`.
    ///
    /// - every type is assignable to itself and to `Object`;
    /// - `Nullable<S>` accepts `S`;
    /// - an interface accepts the types implementing it;
    /// - a class accepts its subclasses.
    pub fn is_assignable_from(
        &self,
        target: TypeHandle,
        source: TypeHandle,
    ) -> Result<bool, ReflectError> {
        let target_info = self.descriptor(target)?;
        let source_info = self.descriptor(source)?;

        if target == source || target == self.known().object {
            return Ok(true);
        }
        if self.is_nullable_type(target)? {
            return Ok(target_info.generic_arguments() == [source].as_slice());
        }
        if target_info.is_interface() {
            return Ok(source_info.interfaces().contains(&target));
        }
        if target_info.kind() == TypeKind::Class {
            let mut current = source_info.base();
            while let Some(base) = current {
                if base == target {
                    return Ok(true);
                }
                current = self.descriptor(base)?.base();
            }
        }
        Ok(false)
    }

    /// Returns `true` for instances of `Nullable<T>`.
    pub fn is_nullable_type(&self, ty: TypeHandle) -> Result<bool, ReflectError> {
        let nullable = self.known().nullable;
        Ok(matches!(
            self.descriptor(ty)?.generic(),
            GenericForm::Instance { definition, .. } if *definition == nullable
        ))
    }

    /// Returns `true` if a slot of type `ty` can hold null.
    pub fn permits_null(&self, ty: TypeHandle) -> Result<bool, ReflectError> {
        Ok(!self.descriptor(ty)?.is_value_type() || self.is_nullable_type(ty)?)
    }

    /// Returns `true` if `ty` is a key/value collection.
    ///
    /// That is, if it is assignable to the legacy `UntypedMap`, or
    /// implements some `Map<K, V>` or `ReadOnlyMap<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xs_reflect::registry::TypeRegistry;
    ///
    /// let mut registry = TypeRegistry::new();
    /// let known = *registry.known();
    ///
    /// let dictionary = registry.instantiate(known.dictionary, &[known.string, known.int32]).unwrap();
    /// let list = registry.instantiate(known.list, &[known.string]).unwrap();
    ///
    /// assert!(registry.is_keyed_collection_type(dictionary).unwrap());
    /// assert!(!registry.is_keyed_collection_type(list).unwrap());
    /// ```
    pub fn is_keyed_collection_type(&self, ty: TypeHandle) -> Result<bool, ReflectError> {
        let known = self.known();
        Ok(self.is_assignable_from(known.untyped_map, ty)?
            || self.implements_generic_interface(ty, known.map)?
            || self.implements_generic_interface(ty, known.read_only_map)?)
    }

    /// Returns `true` if `ty` implements some instance of the generic
    /// interface `definition`.
    ///
    /// See [`find_generic_interface`](Self::find_generic_interface).
    #[inline]
    pub fn implements_generic_interface(
        &self,
        ty: TypeHandle,
        definition: TypeHandle,
    ) -> Result<bool, ReflectError> {
        Ok(self.find_generic_interface(ty, definition)?.is_some())
    }

    /// Returns the instance of the generic interface `definition` that `ty`
    /// implements.
    ///
    /// An interface type matches itself. Otherwise the interfaces of `ty`
    /// are scanned in metadata order and the first match is returned; a
    /// type implementing several instances of `definition` gets whichever
    /// comes first.
    ///
    /// `definition` must be an unparameterized generic interface, such as
    /// `Sequence<T>` itself. Anything else is reported as
    /// [`ReflectError::NotGenericInterfaceDefinition`].
    ///
    /// # Examples
    ///
    /// ```
    /// use xs_reflect::registry::TypeRegistry;
    ///
    /// let mut registry = TypeRegistry::new();
    /// let known = *registry.known();
    ///
    /// let list = registry.instantiate(known.list, &[known.int32]).unwrap();
    /// let expected = registry.instantiate(known.sequence, &[known.int32]).unwrap();
    ///
    /// assert_eq!(registry.find_generic_interface(list, known.sequence).unwrap(), Some(expected));
    /// assert_eq!(registry.find_generic_interface(list, known.map).unwrap(), None);
    ///
    /// // `List<i32>` is not an interface definition.
    /// assert!(registry.find_generic_interface(list, list).is_err());
    /// ```
    pub fn find_generic_interface(
        &self,
        ty: TypeHandle,
        definition: TypeHandle,
    ) -> Result<Option<TypeHandle>, ReflectError> {
        let info = self.descriptor(ty)?;
        let definition_info = self.descriptor(definition)?;
        if !definition_info.is_interface() || !definition_info.is_generic_definition() {
            return Err(ReflectError::NotGenericInterfaceDefinition(
                definition_info.path().into(),
            ));
        }

        if info.is_interface() && info.generic_definition() == Some(definition) {
            return Ok(Some(ty));
        }

        Ok(info.interfaces().iter().copied().find(|interface| {
            self.get(*interface)
                .and_then(TypeDescriptor::generic_definition)
                == Some(definition)
        }))
    }

    /// Classifies `ty` as a collection.
    ///
    /// Classification is recomputed on every call.
    pub fn classify_collection(&self, ty: TypeHandle) -> Result<CollectionCapabilities, ReflectError> {
        let known = *self.known();

        let map = self.find_generic_interface(ty, known.map)?;
        let read_only_map = self.find_generic_interface(ty, known.read_only_map)?;
        let sequence = self.find_generic_interface(ty, known.sequence)?;
        let indexed_list = self.find_generic_interface(ty, known.indexed_list)?;
        let read_only_list = self.find_generic_interface(ty, known.read_only_list)?;
        let set = self.find_generic_interface(ty, known.set)?;

        let is_keyed = map.is_some()
            || read_only_map.is_some()
            || self.is_assignable_from(known.untyped_map, ty)?;
        let is_sequence =
            sequence.is_some() || self.is_assignable_from(known.untyped_sequence, ty)?;
        let is_indexed = indexed_list.is_some()
            || read_only_list.is_some()
            || self.is_assignable_from(known.untyped_list, ty)?;

        let element_type = sequence
            .and_then(|s| self.get(s))
            .and_then(|info| info.generic_arguments().first().copied());

        let matched_interfaces = [map, read_only_map, sequence, indexed_list, read_only_list, set]
            .into_iter()
            .flatten()
            .collect();

        Ok(CollectionCapabilities {
            is_keyed,
            is_sequence,
            is_indexed,
            matched_interfaces,
            element_type,
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::ReflectError;
    use crate::info::{TypeHandle, TypeKind};
    use crate::registry::{Members, TypeRegistry};

    #[test]
    fn assignability() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        let animal = registry
            .register("demo.Animal", TypeKind::Class, Members::new().base(known.object))
            .unwrap();
        let cat = registry
            .register("demo.Cat", TypeKind::Class, Members::new().base(animal))
            .unwrap();
        let nullable_i32 = registry.instantiate(known.nullable, &[known.int32]).unwrap();
        let list = registry.instantiate(known.list, &[known.int32]).unwrap();
        let sequence = registry.instantiate(known.sequence, &[known.int32]).unwrap();

        assert!(registry.is_assignable_from(animal, cat).unwrap());
        assert!(!registry.is_assignable_from(cat, animal).unwrap());
        assert!(registry.is_assignable_from(known.object, known.int32).unwrap());
        assert!(registry.is_assignable_from(nullable_i32, known.int32).unwrap());
        assert!(!registry.is_assignable_from(nullable_i32, known.int64).unwrap());
        assert!(registry.is_assignable_from(sequence, list).unwrap());
        assert!(!registry.is_assignable_from(list, sequence).unwrap());
        assert!(registry.is_assignable_from(known.untyped_sequence, list).unwrap());
    }

    #[test]
    fn nullability() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();
        let nullable_f64 = registry.instantiate(known.nullable, &[known.float64]).unwrap();

        assert!(registry.is_nullable_type(nullable_f64).unwrap());
        assert!(!registry.is_nullable_type(known.float64).unwrap());
        assert!(!registry.is_nullable_type(known.nullable).unwrap());

        assert!(registry.permits_null(nullable_f64).unwrap());
        assert!(registry.permits_null(known.string).unwrap());
        assert!(!registry.permits_null(known.boolean).unwrap());
    }

    #[test]
    fn keyed_collections() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        let dictionary = registry
            .instantiate(known.dictionary, &[known.string, known.int32])
            .unwrap();
        let read_only = registry
            .instantiate(known.read_only_map, &[known.string, known.int32])
            .unwrap();
        let lookup = registry
            .register("demo.Lookup", TypeKind::Class, Members::new().implements(read_only))
            .unwrap();
        let legacy = registry
            .register("demo.Legacy", TypeKind::Class, Members::new().implements(known.untyped_map))
            .unwrap();
        let list = registry.instantiate(known.list, &[known.string]).unwrap();
        let set = registry.instantiate(known.hash_set, &[known.string]).unwrap();

        assert!(registry.is_keyed_collection_type(dictionary).unwrap());
        assert!(registry.is_keyed_collection_type(lookup).unwrap());
        assert!(registry.is_keyed_collection_type(legacy).unwrap());
        assert!(registry.is_keyed_collection_type(read_only).unwrap());
        assert!(registry.is_keyed_collection_type(known.map).unwrap());

        assert!(!registry.is_keyed_collection_type(list).unwrap());
        assert!(!registry.is_keyed_collection_type(set).unwrap());
        assert!(!registry.is_keyed_collection_type(known.object_list).unwrap());
        assert!(!registry.is_keyed_collection_type(known.string).unwrap());
    }

    #[test]
    fn generic_interface_contract() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();
        let sequence = registry.instantiate(known.sequence, &[known.int32]).unwrap();

        for definition in [known.list, sequence, known.untyped_list] {
            assert!(matches!(
                registry.implements_generic_interface(known.object_list, definition),
                Err(ReflectError::NotGenericInterfaceDefinition(_))
            ));
        }

        let foreign = TypeHandle::from_index(100_000);
        assert_eq!(
            registry.implements_generic_interface(foreign, known.sequence),
            Err(ReflectError::UnknownType(foreign))
        );

        // An interface instance matches itself.
        assert_eq!(
            registry.find_generic_interface(sequence, known.sequence).unwrap(),
            Some(sequence)
        );
        // So does the definition.
        assert_eq!(
            registry.find_generic_interface(known.sequence, known.sequence).unwrap(),
            Some(known.sequence)
        );
    }

    #[test]
    fn first_match_in_metadata_order() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        let numbers = registry.instantiate(known.sequence, &[known.int32]).unwrap();
        let words = registry.instantiate(known.sequence, &[known.string]).unwrap();
        let both = registry
            .register(
                "demo.Both",
                TypeKind::Class,
                Members::new().implements(numbers).implements(words),
            )
            .unwrap();

        assert_eq!(
            registry.find_generic_interface(both, known.sequence).unwrap(),
            Some(numbers)
        );
        // Idempotent.
        assert_eq!(
            registry.find_generic_interface(both, known.sequence).unwrap(),
            Some(numbers)
        );
    }

    #[test]
    fn classification() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        let list = registry.instantiate(known.list, &[known.int32]).unwrap();
        let caps = registry.classify_collection(list).unwrap();
        let expected = [
            registry.instantiate(known.sequence, &[known.int32]).unwrap(),
            registry.instantiate(known.indexed_list, &[known.int32]).unwrap(),
            registry.instantiate(known.read_only_list, &[known.int32]).unwrap(),
        ];
        assert!(!caps.is_keyed);
        assert!(caps.is_sequence);
        assert!(caps.is_indexed);
        assert_eq!(caps.matched_interfaces, expected);
        assert_eq!(caps.element_type, Some(known.int32));

        let dictionary = registry
            .instantiate(known.dictionary, &[known.string, known.boolean])
            .unwrap();
        let entry = registry
            .instantiate(known.entry, &[known.string, known.boolean])
            .unwrap();
        let caps = registry.classify_collection(dictionary).unwrap();
        assert!(caps.is_keyed);
        assert!(caps.is_sequence);
        assert!(!caps.is_indexed);
        assert_eq!(caps.matched_interfaces.len(), 3);
        assert_eq!(caps.element_type, Some(entry));

        let caps = registry.classify_collection(known.object_list).unwrap();
        assert!(caps.is_sequence && caps.is_indexed && !caps.is_keyed);
        assert!(caps.matched_interfaces.is_empty());
        assert_eq!(caps.element_type, None);

        let caps = registry.classify_collection(known.string).unwrap();
        assert!(!caps.is_collection());
    }
}
