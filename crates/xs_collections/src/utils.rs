//! Small helpers over wrapped collections and slices.

use crate::{CollectionWrapper, Element};

/// Returns `true` for a missing or empty collection.
#[inline]
pub fn is_null_or_empty<T: Element>(collection: Option<&CollectionWrapper<'_, T>>) -> bool {
    collection.is_none_or(|collection| collection.is_empty())
}

/// Returns the index of the first item matching `predicate`.
#[inline]
pub fn position<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    items.iter().position(predicate)
}

/// Returns the index of `item` by identity, ignoring equal items stored
/// elsewhere.
pub fn position_of_ref<T>(items: &[T], item: &T) -> Option<usize> {
    items.iter().position(|candidate| core::ptr::eq(candidate, item))
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{is_null_or_empty, position, position_of_ref};
    use crate::CollectionWrapper;

    #[test]
    fn null_or_empty() {
        assert!(is_null_or_empty::<i32>(None));

        let mut items: Vec<i32> = Vec::new();
        let mut wrapper = CollectionWrapper::typed(&mut items);
        assert!(is_null_or_empty(Some(&wrapper)));

        wrapper.add(1).unwrap();
        assert!(!is_null_or_empty(Some(&wrapper)));
    }

    #[test]
    fn positions() {
        let items = vec![3, 5, 5];
        assert_eq!(position(&items, |&n| n > 3), Some(1));
        assert_eq!(position(&items, |&n| n > 9), None);

        let twin = 5;
        assert_eq!(position_of_ref(&items, &items[2]), Some(2));
        assert_eq!(position_of_ref(&items, &twin), None);
    }
}
