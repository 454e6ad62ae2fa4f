#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use xs_collections as collections;
pub use xs_reflect as reflect;
pub use xs_utils as utils;

#[cfg(test)]
extern crate alloc;

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::collections::{CollectionWrapper, DefaultEquality, MergeMode, ObjectList, populate};
    use crate::reflect::registry::TypeRegistry;

    #[test]
    fn fill_an_existing_list() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        let list = registry.resolve_type_name("List<String>").unwrap();
        let caps = registry.classify_collection(list).unwrap();
        assert!(caps.is_sequence && caps.is_indexed && !caps.is_keyed);
        assert_eq!(caps.element_type, Some(known.string));

        let ctor = registry
            .resolve_collection_constructor(list, known.string)
            .unwrap()
            .unwrap();
        assert_eq!(registry.constructor(ctor).unwrap().arity(), 1);

        let mut names: Vec<String> = Vec::from([String::from("ann")]);
        let mut wrapper = CollectionWrapper::typed(&mut names);
        let values = ["ann", "bob", "bob"].map(String::from);
        let added = populate(&mut wrapper, values, MergeMode::Union, &DefaultEquality).unwrap();
        assert_eq!(added, 1);

        drop(wrapper);
        assert_eq!(names, ["ann", "bob"]);
    }

    #[test]
    fn legacy_list_has_no_sequence_constructor() {
        let mut registry = TypeRegistry::new();
        let known = *registry.known();

        let caps = registry.classify_collection(known.object_list).unwrap();
        assert!(caps.is_sequence && caps.is_indexed);
        assert_eq!(caps.element_type, None);
        assert_eq!(
            registry
                .resolve_collection_constructor(known.object_list, known.object)
                .unwrap(),
            None
        );

        // Such lists are filled in place through their untyped interface.
        let mut list = ObjectList::new();
        let mut wrapper = CollectionWrapper::<i32>::untyped(&mut list);
        let added = populate(&mut wrapper, [1, 2, 2], MergeMode::Union, &DefaultEquality).unwrap();
        assert_eq!(added, 2);
        assert_eq!(wrapper.index_of(Some(&2_i32)).unwrap(), Some(1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn engine_settings_from_json() {
        use alloc::collections::BTreeSet;

        use crate::reflect::manifest::TypeManifest;

        let manifest = r#"{
            "types": [{
                "path": "demo.Tags",
                "kind": "class",
                "base": "xs.Object",
                "interfaces": ["Set<String>"],
                "constructors": [
                    { "parameters": [] },
                    { "parameters": [{ "name": "source", "type": "Collection<String>" }] },
                    { "parameters": [{ "name": "items", "type": "Sequence<String>" }] }
                ]
            }]
        }"#;
        let settings: serde_json::Value = serde_json::from_str(r#"{ "array_merge": "union" }"#).unwrap();

        let manifest: TypeManifest = serde_json::from_str(manifest).unwrap();
        let mode: MergeMode = serde_json::from_value(settings["array_merge"].clone()).unwrap();
        assert_eq!(mode, MergeMode::Union);

        let mut registry = TypeRegistry::new();
        let known = *registry.known();
        let tags = registry.load_manifest(&manifest).unwrap()[0];

        let caps = registry.classify_collection(tags).unwrap();
        assert!(caps.is_sequence && !caps.is_indexed && !caps.is_keyed);
        assert_eq!(caps.element_type, Some(known.string));

        // The exact `Sequence<String>` beats the earlier `Collection<String>`.
        let ctor = registry
            .resolve_collection_constructor(tags, known.string)
            .unwrap()
            .unwrap();
        assert_eq!(ctor.index(), 2);

        let mut set = BTreeSet::from([String::from("a")]);
        let mut wrapper = CollectionWrapper::typed(&mut set);
        let values = ["b", "a", "b"].map(String::from);
        assert_eq!(populate(&mut wrapper, values, mode, &DefaultEquality).unwrap(), 1);
        assert_eq!(wrapper.len(), 2);
    }
}
