use alloc::boxed::Box;
use alloc::collections::{BTreeSet, LinkedList, VecDeque};
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};

use crate::CollectionError;

/// A strongly typed collection.
///
/// Mutations return a `Result` so that read-only collections can refuse
/// them. Adding a value a set already holds is not an error; the set simply
/// keeps its length.
pub trait TypedCollection<T>: Send + Sync {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the collection refuses every mutation.
    #[inline]
    fn is_read_only(&self) -> bool {
        false
    }

    fn add(&mut self, value: T) -> Result<(), CollectionError>;

    fn contains(&self, value: &T) -> bool;

    /// Removes one occurrence of `value`, returning whether it was present.
    fn remove(&mut self, value: &T) -> Result<bool, CollectionError>;

    fn clear(&mut self) -> Result<(), CollectionError>;

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;
}

// -----------------------------------------------------------------------------
// Sequences

impl<T: PartialEq + Send + Sync> TypedCollection<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn add(&mut self, value: T) -> Result<(), CollectionError> {
        self.push(value);
        Ok(())
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        match self.as_slice().iter().position(|item| item == value) {
            Some(index) => {
                Vec::remove(self, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[inline]
    fn clear(&mut self) -> Result<(), CollectionError> {
        Vec::clear(self);
        Ok(())
    }

    #[inline]
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.as_slice().iter())
    }
}

impl<T: PartialEq + Send + Sync> TypedCollection<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn add(&mut self, value: T) -> Result<(), CollectionError> {
        self.push_back(value);
        Ok(())
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        VecDeque::contains(self, value)
    }

    fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        match VecDeque::iter(self).position(|item| item == value) {
            Some(index) => Ok(VecDeque::remove(self, index).is_some()),
            None => Ok(false),
        }
    }

    #[inline]
    fn clear(&mut self) -> Result<(), CollectionError> {
        VecDeque::clear(self);
        Ok(())
    }

    #[inline]
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(VecDeque::iter(self))
    }
}

impl<T: PartialEq + Send + Sync> TypedCollection<T> for LinkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn add(&mut self, value: T) -> Result<(), CollectionError> {
        self.push_back(value);
        Ok(())
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        LinkedList::contains(self, value)
    }

    fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        let Some(index) = LinkedList::iter(self).position(|item| item == value) else {
            return Ok(false);
        };
        let mut rest = self.split_off(index);
        rest.pop_front();
        self.append(&mut rest);
        Ok(true)
    }

    #[inline]
    fn clear(&mut self) -> Result<(), CollectionError> {
        LinkedList::clear(self);
        Ok(())
    }

    #[inline]
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(LinkedList::iter(self))
    }
}

// -----------------------------------------------------------------------------
// Sets

impl<T: Ord + Send + Sync> TypedCollection<T> for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn add(&mut self, value: T) -> Result<(), CollectionError> {
        self.insert(value);
        Ok(())
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    #[inline]
    fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        Ok(BTreeSet::remove(self, value))
    }

    #[inline]
    fn clear(&mut self) -> Result<(), CollectionError> {
        BTreeSet::clear(self);
        Ok(())
    }

    #[inline]
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(BTreeSet::iter(self))
    }
}

#[cfg(feature = "std")]
impl<T, S> TypedCollection<T> for std::collections::HashSet<T, S>
where
    T: Eq + Hash + Send + Sync,
    S: BuildHasher + Send + Sync,
{
    #[inline]
    fn len(&self) -> usize {
        std::collections::HashSet::len(self)
    }

    #[inline]
    fn add(&mut self, value: T) -> Result<(), CollectionError> {
        self.insert(value);
        Ok(())
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        std::collections::HashSet::contains(self, value)
    }

    #[inline]
    fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        Ok(std::collections::HashSet::remove(self, value))
    }

    #[inline]
    fn clear(&mut self) -> Result<(), CollectionError> {
        std::collections::HashSet::clear(self);
        Ok(())
    }

    #[inline]
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(std::collections::HashSet::iter(self))
    }
}

impl<T, S> TypedCollection<T> for xs_utils::hash::hashbrown::HashSet<T, S>
where
    T: Eq + Hash + Send + Sync,
    S: BuildHasher + Send + Sync,
{
    #[inline]
    fn len(&self) -> usize {
        xs_utils::hash::hashbrown::HashSet::len(self)
    }

    #[inline]
    fn add(&mut self, value: T) -> Result<(), CollectionError> {
        self.insert(value);
        Ok(())
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        xs_utils::hash::hashbrown::HashSet::contains(self, value)
    }

    #[inline]
    fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        Ok(xs_utils::hash::hashbrown::HashSet::remove(self, value))
    }

    #[inline]
    fn clear(&mut self) -> Result<(), CollectionError> {
        xs_utils::hash::hashbrown::HashSet::clear(self);
        Ok(())
    }

    #[inline]
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(xs_utils::hash::hashbrown::HashSet::iter(self))
    }
}

// -----------------------------------------------------------------------------
// Arrays

impl<T: PartialEq + Send + Sync, const N: usize> TypedCollection<T> for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn is_read_only(&self) -> bool {
        true
    }

    #[inline]
    fn add(&mut self, _value: T) -> Result<(), CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    #[inline]
    fn remove(&mut self, _value: &T) -> Result<bool, CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    #[inline]
    fn clear(&mut self) -> Result<(), CollectionError> {
        Err(CollectionError::ReadOnly)
    }

    #[inline]
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.as_slice().iter())
    }
}
