use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use super::untyped::check_index;
use crate::{AnyElement, CollectionError, UntypedList, Value};

/// A legacy list of [`Value`]s.
///
/// Besides the regular growable mode, an `ObjectList` can be frozen to a
/// fixed size (items may still be replaced) or made read-only.
///
/// # Examples
///
/// ```
/// use xs_collections::{CollectionError, ObjectList, UntypedList};
///
/// let mut list = ObjectList::new();
/// list.push(Box::new(1_i32)).unwrap();
/// list.push(Box::new("two")).unwrap();
///
/// let mut list = list.into_fixed_size();
/// assert_eq!(list.push(Box::new(3_i32)), Err(CollectionError::FixedSize));
/// assert!(list.set(0, Box::new(10_i32)).is_ok());
/// ```
#[derive(Default)]
pub struct ObjectList {
    values: Vec<Value>,
    fixed_size: bool,
    read_only: bool,
}

impl ObjectList {
    /// Creates an empty, growable `ObjectList`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            values: Vec::new(),
            fixed_size: false,
            read_only: false,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            fixed_size: false,
            read_only: false,
        }
    }

    /// Forbids changes to the length.
    #[inline]
    pub fn into_fixed_size(mut self) -> Self {
        self.fixed_size = true;
        self
    }

    /// Forbids every mutation.
    #[inline]
    pub fn into_read_only(mut self) -> Self {
        self.fixed_size = true;
        self.read_only = true;
        self
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    #[inline]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    fn check_writable(&self) -> Result<(), CollectionError> {
        if self.read_only {
            Err(CollectionError::ReadOnly)
        } else {
            Ok(())
        }
    }

    fn check_resizable(&self) -> Result<(), CollectionError> {
        self.check_writable()?;
        if self.fixed_size {
            Err(CollectionError::FixedSize)
        } else {
            Ok(())
        }
    }
}

impl From<Vec<Value>> for ObjectList {
    #[inline]
    fn from(values: Vec<Value>) -> Self {
        Self {
            values,
            fixed_size: false,
            read_only: false,
        }
    }
}

impl FromIterator<Value> for ObjectList {
    fn from_iter<I: IntoIterator<Item = Value>>(values: I) -> Self {
        Self::from(values.into_iter().collect::<Vec<_>>())
    }
}

impl fmt::Debug for ObjectList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.as_slice().iter()).finish()
    }
}

impl UntypedList for ObjectList {
    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn AnyElement> {
        self.values.as_slice().get(index).map(|value| &**value)
    }

    fn set(&mut self, index: usize, value: Value) -> Result<Value, CollectionError> {
        self.check_writable()?;
        check_index(index, self.values.len())?;
        Ok(core::mem::replace(&mut self.values[index], value))
    }

    fn push(&mut self, value: Value) -> Result<(), CollectionError> {
        self.check_resizable()?;
        self.values.push(value);
        Ok(())
    }

    fn insert(&mut self, index: usize, value: Value) -> Result<(), CollectionError> {
        self.check_resizable()?;
        let len = self.values.len();
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        self.values.insert(index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<Value, CollectionError> {
        self.check_resizable()?;
        check_index(index, self.values.len())?;
        Ok(self.values.remove(index))
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        self.check_resizable()?;
        self.values.clear();
        Ok(())
    }

    #[inline]
    fn is_read_only(&self) -> bool {
        self.read_only
    }

    #[inline]
    fn is_fixed_size(&self) -> bool {
        self.fixed_size
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn AnyElement> + '_> {
        Box::new(self.values.as_slice().iter().map(|value| &**value))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::ObjectList;
    use crate::{CollectionError, UntypedList, Value};

    fn sample() -> ObjectList {
        let values: [Value; 2] = [Box::new(1_u8), Box::new('x')];
        values.into_iter().collect()
    }

    #[test]
    fn read_only_refuses_everything() {
        let mut list = sample().into_read_only();
        assert!(list.is_read_only());
        assert!(list.is_fixed_size());
        assert!(matches!(list.set(0, Box::new(2_u8)), Err(CollectionError::ReadOnly)));
        assert_eq!(list.push(Box::new(2_u8)), Err(CollectionError::ReadOnly));
        assert_eq!(list.clear(), Err(CollectionError::ReadOnly));
        assert_eq!(list.remove(&'x'), Err(CollectionError::ReadOnly));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn fixed_size_allows_replacement() {
        let mut list = sample().into_fixed_size();
        assert!(!list.is_read_only());
        assert!(list.set(1, Box::new('y')).is_ok());
        assert!(list.contains(&'y'));
        assert_eq!(list.insert(0, Box::new(0_u8)), Err(CollectionError::FixedSize));
        assert!(matches!(list.remove_at(0), Err(CollectionError::FixedSize)));
        // Nothing to remove, so nothing to refuse.
        assert_eq!(list.remove(&'x'), Ok(false));
    }

    #[test]
    fn items_are_visible_through_the_list() {
        let list = sample();
        assert!(list.get(0).unwrap().element_eq(&1_u8));
        assert!(list.get(1).unwrap().element_eq(&'x'));
        assert!(list.get(2).is_none());

        let items: alloc::vec::Vec<_> = UntypedList::iter(&list).collect();
        assert_eq!(items.len(), 2);
        assert!(items[1].is::<char>());
        assert_eq!(alloc::format!("{list:?}"), "[1, 'x']");
    }

    #[test]
    fn growable_by_default() {
        let mut list = ObjectList::with_capacity(4);
        list.push(Box::new(1_i32)).unwrap();
        list.insert(0, Box::new(0_i32)).unwrap();
        assert_eq!(list.index_of(&1_i32), Some(1));
        assert!(list.remove_at(0).unwrap().element_eq(&0_i32));
        assert_eq!(list.as_slice().len(), 1);
    }
}
