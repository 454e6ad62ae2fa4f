use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{AnyElement, CollectionError, Value};

/// A legacy, loosely typed list.
///
/// Items are [`Value`]s of any element type; equality between items of
/// different types is always `false`. Null is not stored as such: a null
/// offered through a wrapper arrives as the element's own null value.
pub trait UntypedList: Send + Sync {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&dyn AnyElement>;

    /// Replaces the item at `index`, returning the previous one.
    fn set(&mut self, index: usize, value: Value) -> Result<Value, CollectionError>;

    fn push(&mut self, value: Value) -> Result<(), CollectionError>;

    fn insert(&mut self, index: usize, value: Value) -> Result<(), CollectionError>;

    fn remove_at(&mut self, index: usize) -> Result<Value, CollectionError>;

    fn clear(&mut self) -> Result<(), CollectionError>;

    /// Returns `true` if the list refuses every mutation.
    #[inline]
    fn is_read_only(&self) -> bool {
        false
    }

    /// Returns `true` if the list refuses changes to its length.
    #[inline]
    fn is_fixed_size(&self) -> bool {
        false
    }

    fn index_of(&self, value: &dyn AnyElement) -> Option<usize> {
        (0..self.len()).find(|&index| self.get(index).is_some_and(|item| item.element_eq(value)))
    }

    #[inline]
    fn contains(&self, value: &dyn AnyElement) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first item equal to `value`, returning whether one was found.
    fn remove(&mut self, value: &dyn AnyElement) -> Result<bool, CollectionError> {
        match self.index_of(value) {
            Some(index) => {
                self.remove_at(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn AnyElement> + '_> {
        Box::new((0..self.len()).filter_map(move |index| self.get(index)))
    }
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), CollectionError> {
    if index < len {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfRange { index, len })
    }
}

impl UntypedList for Vec<Value> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn AnyElement> {
        self.as_slice().get(index).map(|value| &**value)
    }

    fn set(&mut self, index: usize, value: Value) -> Result<Value, CollectionError> {
        check_index(index, Vec::len(self))?;
        Ok(core::mem::replace(&mut self[index], value))
    }

    #[inline]
    fn push(&mut self, value: Value) -> Result<(), CollectionError> {
        Vec::push(self, value);
        Ok(())
    }

    fn insert(&mut self, index: usize, value: Value) -> Result<(), CollectionError> {
        let len = Vec::len(self);
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Vec::insert(self, index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<Value, CollectionError> {
        check_index(index, Vec::len(self))?;
        Ok(Vec::remove(self, index))
    }

    #[inline]
    fn clear(&mut self) -> Result<(), CollectionError> {
        Vec::clear(self);
        Ok(())
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn AnyElement> + '_> {
        Box::new(self.as_slice().iter().map(|value| &**value))
    }
}
