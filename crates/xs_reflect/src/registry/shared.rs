use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::registry::TypeRegistry;

/// A [`TypeRegistry`] shared between threads.
///
/// The serialization engine keeps one of these per configuration; queries
/// take the read lock, manifests and late registrations take the write lock.
/// A poisoned lock is recovered, since the registry is append-only.
#[derive(Clone, Default)]
pub struct SharedTypeRegistry {
    /// The wrapped [`TypeRegistry`].
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl SharedTypeRegistry {
    /// Wraps an existing registry.
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }

    /// Takes a read lock on the underlying [`TypeRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`TypeRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for SharedTypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.read().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::SharedTypeRegistry;
    use crate::info::TypeKind;
    use crate::registry::Members;

    #[test]
    fn shared_between_threads() {
        let shared = SharedTypeRegistry::default();
        let known = *shared.read().known();

        std::thread::scope(|s| {
            for i in 0..4 {
                let shared = shared.clone();
                s.spawn(move || {
                    let path = std::format!("demo.Worker{i}");
                    shared
                        .write()
                        .register(&path, TypeKind::Class, Members::new().base(known.object))
                        .unwrap();
                    let mut registry = shared.write();
                    registry.instantiate(known.list, &[known.int32]).unwrap();
                });
            }
        });

        let registry = shared.read();
        for i in 0..4 {
            assert!(registry.get_with_path(&std::format!("demo.Worker{i}")).is_some());
        }
        assert!(registry.get_with_path("xs.collections.List<xs.i32>").is_some());
    }

    #[test]
    fn resolve_under_read_lock() {
        let shared = SharedTypeRegistry::default();
        let known = *shared.read().known();
        let list = shared.write().instantiate(known.list, &[known.string]).unwrap();

        // `List<String>` already brought `IndexedList<String>` along.
        let registry = shared.read();
        let argument = registry
            .get_instance(known.indexed_list, &[known.string])
            .unwrap();
        let found = registry
            .resolve_collection_constructor_with(list, known.string, argument)
            .unwrap();
        assert_eq!(found.map(|c| c.index()), Some(2));

        assert_eq!(registry.get_instance(known.indexed_list, &[known.float64]), None);
        assert_eq!(registry.get_instance(known.list, &[known.float64]), None);
    }
}
