use crate::info::{TypeHandle, TypeKind};
use crate::registry::{Members, TypeRegistry};

/// Handles of the types every [`TypeRegistry`] starts with.
///
/// The handles are stable for a given registry and can be copied out
/// (`let known = *registry.known();`) before mutating it.
///
/// Core types live under `xs.`, collection types under `xs.collections.`.
///
/// | field | path | shape |
/// |-------|------|-------|
/// | `object` | `xs.Object` | root class |
/// | `boolean`, `int32`, `int64`, `float64` | `xs.bool`, `xs.i32`, ... | structs |
/// | `string` | `xs.String` | class |
/// | `nullable` | `xs.Nullable<T>` | struct wrapping a value type |
/// | `untyped_sequence` .. `untyped_map` | `xs.collections.Untyped*` | legacy interfaces |
/// | `sequence` .. `read_only_map` | `xs.collections.*<T>` | generic interfaces |
/// | `entry` | `xs.collections.Entry<K, V>` | struct |
/// | `list` .. `frozen_list` | `xs.collections.*` | concrete classes |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownTypes {
    pub object: TypeHandle,
    pub boolean: TypeHandle,
    pub int32: TypeHandle,
    pub int64: TypeHandle,
    pub float64: TypeHandle,
    pub string: TypeHandle,
    pub nullable: TypeHandle,

    pub untyped_sequence: TypeHandle,
    pub untyped_collection: TypeHandle,
    pub untyped_list: TypeHandle,
    pub untyped_map: TypeHandle,

    pub sequence: TypeHandle,
    pub collection: TypeHandle,
    pub indexed_list: TypeHandle,
    pub read_only_collection: TypeHandle,
    pub read_only_list: TypeHandle,
    pub set: TypeHandle,
    pub entry: TypeHandle,
    pub map: TypeHandle,
    pub read_only_map: TypeHandle,

    /// `List<T>`: `()`, `(capacity: i32)`, `(items: Sequence<T>)`.
    pub list: TypeHandle,
    /// `HashSet<T>`: `()`, `(items: Sequence<T>)`.
    pub hash_set: TypeHandle,
    /// `Dictionary<K, V>`: `()`, `(capacity: i32)`, `(entries: Map<K, V>)`.
    pub dictionary: TypeHandle,
    /// `ObjectList`: `()`, `(capacity: i32)`, `(items: UntypedCollection)`.
    pub object_list: TypeHandle,
    /// `FrozenList<T>`: `(items: IndexedList<T>)`.
    pub frozen_list: TypeHandle,
}

const UNSET_HANDLE: TypeHandle = TypeHandle::from_index(u32::MAX as usize);

impl KnownTypes {
    pub(crate) const UNSET: Self = Self {
        object: UNSET_HANDLE,
        boolean: UNSET_HANDLE,
        int32: UNSET_HANDLE,
        int64: UNSET_HANDLE,
        float64: UNSET_HANDLE,
        string: UNSET_HANDLE,
        nullable: UNSET_HANDLE,
        untyped_sequence: UNSET_HANDLE,
        untyped_collection: UNSET_HANDLE,
        untyped_list: UNSET_HANDLE,
        untyped_map: UNSET_HANDLE,
        sequence: UNSET_HANDLE,
        collection: UNSET_HANDLE,
        indexed_list: UNSET_HANDLE,
        read_only_collection: UNSET_HANDLE,
        read_only_list: UNSET_HANDLE,
        set: UNSET_HANDLE,
        entry: UNSET_HANDLE,
        map: UNSET_HANDLE,
        read_only_map: UNSET_HANDLE,
        list: UNSET_HANDLE,
        hash_set: UNSET_HANDLE,
        dictionary: UNSET_HANDLE,
        object_list: UNSET_HANDLE,
        frozen_list: UNSET_HANDLE,
    };

    pub(crate) fn register(registry: &mut TypeRegistry) -> Self {
        use TypeKind::{Class, Interface, Struct};

        let object = leaf(registry, "xs.Object", Class, Members::new().default_constructor());
        let boolean = leaf(registry, "xs.bool", Struct, Members::new());
        let int32 = leaf(registry, "xs.i32", Struct, Members::new());
        let int64 = leaf(registry, "xs.i64", Struct, Members::new());
        let float64 = leaf(registry, "xs.f64", Struct, Members::new());
        let string = leaf(registry, "xs.String", Class, Members::new().base(object));
        let nullable = generic(registry, "xs.Nullable", Struct, &["T"], |_, p| {
            Members::new().constructor([("value", p[0])])
        });

        let untyped_sequence = leaf(registry, "xs.collections.UntypedSequence", Interface, Members::new());
        let untyped_collection = leaf(
            registry,
            "xs.collections.UntypedCollection",
            Interface,
            Members::new().implements(untyped_sequence),
        );
        let untyped_list = leaf(
            registry,
            "xs.collections.UntypedList",
            Interface,
            Members::new().implements(untyped_collection),
        );
        let untyped_map = leaf(
            registry,
            "xs.collections.UntypedMap",
            Interface,
            Members::new().implements(untyped_collection),
        );

        let sequence = generic(registry, "xs.collections.Sequence", Interface, &["T"], |_, _| {
            Members::new().implements(untyped_sequence)
        });
        let collection = generic(registry, "xs.collections.Collection", Interface, &["T"], |r, p| {
            Members::new().implements(r.instantiate_unchecked(sequence, p))
        });
        let indexed_list = generic(registry, "xs.collections.IndexedList", Interface, &["T"], |r, p| {
            Members::new().implements(r.instantiate_unchecked(collection, p))
        });
        let read_only_collection =
            generic(registry, "xs.collections.ReadOnlyCollection", Interface, &["T"], |r, p| {
                Members::new().implements(r.instantiate_unchecked(sequence, p))
            });
        let read_only_list = generic(registry, "xs.collections.ReadOnlyList", Interface, &["T"], |r, p| {
            Members::new().implements(r.instantiate_unchecked(read_only_collection, p))
        });
        let set = generic(registry, "xs.collections.Set", Interface, &["T"], |r, p| {
            Members::new().implements(r.instantiate_unchecked(collection, p))
        });
        let entry = generic(registry, "xs.collections.Entry", Struct, &["K", "V"], |_, p| {
            Members::new().constructor([("key", p[0]), ("value", p[1])])
        });
        let map = generic(registry, "xs.collections.Map", Interface, &["K", "V"], |r, p| {
            let entry = r.instantiate_unchecked(entry, p);
            Members::new().implements(r.instantiate_unchecked(collection, &[entry]))
        });
        let read_only_map = generic(registry, "xs.collections.ReadOnlyMap", Interface, &["K", "V"], |r, p| {
            let entry = r.instantiate_unchecked(entry, p);
            Members::new().implements(r.instantiate_unchecked(read_only_collection, &[entry]))
        });

        let list = generic(registry, "xs.collections.List", Class, &["T"], |r, p| {
            let items = r.instantiate_unchecked(sequence, p);
            Members::new()
                .base(object)
                .implements(r.instantiate_unchecked(indexed_list, p))
                .implements(r.instantiate_unchecked(read_only_list, p))
                .implements(untyped_list)
                .default_constructor()
                .constructor([("capacity", int32)])
                .constructor([("items", items)])
        });
        let hash_set = generic(registry, "xs.collections.HashSet", Class, &["T"], |r, p| {
            let items = r.instantiate_unchecked(sequence, p);
            Members::new()
                .base(object)
                .implements(r.instantiate_unchecked(set, p))
                .implements(r.instantiate_unchecked(read_only_collection, p))
                .default_constructor()
                .constructor([("items", items)])
        });
        let dictionary = generic(registry, "xs.collections.Dictionary", Class, &["K", "V"], |r, p| {
            let entries = r.instantiate_unchecked(map, p);
            Members::new()
                .base(object)
                .implements(entries)
                .implements(r.instantiate_unchecked(read_only_map, p))
                .implements(untyped_map)
                .default_constructor()
                .constructor([("capacity", int32)])
                .constructor([("entries", entries)])
        });
        let object_list = leaf(
            registry,
            "xs.collections.ObjectList",
            Class,
            Members::new()
                .base(object)
                .implements(untyped_list)
                .default_constructor()
                .constructor([("capacity", int32)])
                .constructor([("items", untyped_collection)]),
        );
        let frozen_list = generic(registry, "xs.collections.FrozenList", Class, &["T"], |r, p| {
            let items = r.instantiate_unchecked(indexed_list, p);
            Members::new()
                .base(object)
                .implements(r.instantiate_unchecked(read_only_list, p))
                .implements(items)
                .constructor([("items", items)])
        });

        log::debug!("registered {} prelude types", registry.len());

        Self {
            object,
            boolean,
            int32,
            int64,
            float64,
            string,
            nullable,
            untyped_sequence,
            untyped_collection,
            untyped_list,
            untyped_map,
            sequence,
            collection,
            indexed_list,
            read_only_collection,
            read_only_list,
            set,
            entry,
            map,
            read_only_map,
            list,
            hash_set,
            dictionary,
            object_list,
            frozen_list,
        }
    }
}

fn leaf(registry: &mut TypeRegistry, path: &str, kind: TypeKind, members: Members) -> TypeHandle {
    let handle = registry.declare_unchecked(path, kind, &[]).handle;
    registry.define_unchecked(handle, members);
    handle
}

fn generic(
    registry: &mut TypeRegistry,
    path: &str,
    kind: TypeKind,
    parameters: &[&str],
    members: impl FnOnce(&mut TypeRegistry, &[TypeHandle]) -> Members,
) -> TypeHandle {
    let declared = registry.declare_unchecked(path, kind, parameters);
    let members = members(registry, &declared.parameters);
    registry.define_unchecked(declared.handle, members);
    declared.handle
}
