use core::fmt;

use crate::{CollectionError, CollectionWrapper, Element};

// -----------------------------------------------------------------------------
// EqualityContract

/// Decides whether two elements are the same value for merging purposes.
///
/// Implemented by [`DefaultEquality`] and by every `Fn(&T, &T) -> bool`.
pub trait EqualityContract<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Equality through [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquality;

impl<T: PartialEq + ?Sized> EqualityContract<T> for DefaultEquality {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> EqualityContract<T> for F {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

// -----------------------------------------------------------------------------
// MergeMode

/// How values read for an existing collection are combined with its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MergeMode {
    /// Clear the collection first.
    Replace,
    /// Append every value.
    #[default]
    Concat,
    /// Append the values the collection does not hold yet.
    Union,
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => f.pad("replace"),
            Self::Concat => f.pad("concat"),
            Self::Union => f.pad("union"),
        }
    }
}

// -----------------------------------------------------------------------------
// Operations

/// Returns `true` if some item of `collection` equals `value`.
pub fn contains_value<T, E>(collection: &CollectionWrapper<'_, T>, value: &T, equality: &E) -> bool
where
    T: Element,
    E: EqualityContract<T> + ?Sized,
{
    collection.iter().any(|item| equality.equals(item, value))
}

/// Adds `value` unless an equal item is already present.
///
/// Returns whether it was added. The scan is linear in the length of the
/// collection.
pub fn add_distinct<T, E>(
    collection: &mut CollectionWrapper<'_, T>,
    value: T,
    equality: &E,
) -> Result<bool, CollectionError>
where
    T: Element,
    E: EqualityContract<T> + ?Sized,
{
    if contains_value(collection, &value, equality) {
        return Ok(false);
    }
    collection.add(value)?;
    Ok(true)
}

/// Adds each of `values` in order, skipping those already present.
///
/// Returns `true` only if every value was added; a value equal to an earlier
/// one of the same batch counts as present. Values added before an error
/// stay in the collection.
///
/// # Examples
///
/// ```
/// use xs_collections::{CollectionWrapper, DefaultEquality, add_range_distinct};
///
/// let mut items: Vec<char> = Vec::new();
/// let mut wrapper = CollectionWrapper::typed(&mut items);
///
/// assert!(!add_range_distinct(&mut wrapper, ['a', 'a', 'b'], &DefaultEquality).unwrap());
/// assert_eq!(items, ['a', 'b']);
/// ```
pub fn add_range_distinct<T, E, I>(
    collection: &mut CollectionWrapper<'_, T>,
    values: I,
    equality: &E,
) -> Result<bool, CollectionError>
where
    T: Element,
    E: EqualityContract<T> + ?Sized,
    I: IntoIterator<Item = T>,
{
    let mut all_added = true;
    for value in values {
        if !add_distinct(collection, value, equality)? {
            all_added = false;
        }
    }
    Ok(all_added)
}

/// Merges `values` into `collection` without duplicates.
///
/// This is the entry point used by the engine when it reuses an existing
/// collection; see [`add_range_distinct`].
#[inline]
pub fn merge_distinct<T, E, I>(
    collection: &mut CollectionWrapper<'_, T>,
    values: I,
    equality: &E,
) -> Result<bool, CollectionError>
where
    T: Element,
    E: EqualityContract<T> + ?Sized,
    I: IntoIterator<Item = T>,
{
    add_range_distinct(collection, values, equality)
}

/// Adds every value, returning how many were added.
pub fn add_range<T, I>(collection: &mut CollectionWrapper<'_, T>, values: I) -> Result<usize, CollectionError>
where
    T: Element,
    I: IntoIterator<Item = T>,
{
    let mut count = 0;
    for value in values {
        collection.add(value)?;
        count += 1;
    }
    Ok(count)
}

/// Fills `collection` with `values` according to `mode`.
///
/// Returns how many values were added.
pub fn populate<T, E, I>(
    collection: &mut CollectionWrapper<'_, T>,
    values: I,
    mode: MergeMode,
    equality: &E,
) -> Result<usize, CollectionError>
where
    T: Element,
    E: EqualityContract<T> + ?Sized,
    I: IntoIterator<Item = T>,
{
    let added = match mode {
        MergeMode::Replace => {
            collection.clear()?;
            add_range(collection, values)?
        }
        MergeMode::Concat => add_range(collection, values)?,
        MergeMode::Union => {
            let mut count = 0;
            for value in values {
                if add_distinct(collection, value, equality)? {
                    count += 1;
                }
            }
            count
        }
    };
    log::trace!(
        "populated {} collection of `{}` ({mode}): {added} added, {} total",
        collection.kind(),
        core::any::type_name::<T>(),
        collection.len(),
    );
    Ok(added)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::{ObjectList, UntypedList, Value};

    #[test]
    fn add_distinct_is_idempotent() {
        let mut items: Vec<i32> = vec![1];
        let mut wrapper = CollectionWrapper::typed(&mut items);

        assert!(add_distinct(&mut wrapper, 2, &DefaultEquality).unwrap());
        assert!(!add_distinct(&mut wrapper, 2, &DefaultEquality).unwrap());
        assert!(!add_distinct(&mut wrapper, 1, &DefaultEquality).unwrap());
        assert_eq!(wrapper.len(), 2);
    }

    #[test]
    fn range_reports_partial_success() {
        let mut items: Vec<String> = Vec::new();
        let mut wrapper = CollectionWrapper::typed(&mut items);

        let values = ["a", "a", "b"].map(String::from);
        assert!(!add_range_distinct(&mut wrapper, values, &DefaultEquality).unwrap());
        assert!(add_range_distinct(&mut wrapper, [String::from("c")], &DefaultEquality).unwrap());
        assert!(add_range_distinct(&mut wrapper, [], &DefaultEquality).unwrap());

        drop(wrapper);
        assert_eq!(items, ["a", "b", "c"]);
    }

    #[test]
    fn custom_equality() {
        let mut items: Vec<String> = vec![String::from("Alpha")];
        let mut wrapper = CollectionWrapper::typed(&mut items);
        let ignore_case = |a: &String, b: &String| a.eq_ignore_ascii_case(b);

        let values = ["ALPHA", "beta", "Beta"].map(String::from);
        assert!(!merge_distinct(&mut wrapper, values, &ignore_case).unwrap());

        drop(wrapper);
        assert_eq!(items, ["Alpha", "beta"]);
    }

    #[test]
    fn merge_into_untyped_list() {
        let values: [Value; 2] = [Box::new(1_i32), Box::new("noise")];
        let mut list = ObjectList::from(Vec::from(values));
        let mut wrapper = CollectionWrapper::<i32>::untyped(&mut list);

        assert!(!merge_distinct(&mut wrapper, [1, 2, 3], &DefaultEquality).unwrap());

        drop(wrapper);
        assert_eq!(list.len(), 4);
        assert!(list.contains(&3_i32));
    }

    #[test]
    fn errors_stop_the_merge() {
        let values: [Value; 2] = [Box::new(1_i32), Box::new(2_i32)];
        let mut list = ObjectList::from(Vec::from(values)).into_fixed_size();
        let mut wrapper = CollectionWrapper::<i32>::untyped(&mut list);

        // Already present values are skipped before the list refuses to grow.
        assert_eq!(
            merge_distinct(&mut wrapper, [1, 2, 3], &DefaultEquality),
            Err(CollectionError::FixedSize)
        );
        assert_eq!(wrapper.len(), 2);
    }

    #[test]
    fn populate_modes() {
        let mut items: Vec<u8> = vec![1, 2];
        let mut wrapper = CollectionWrapper::typed(&mut items);

        assert_eq!(populate(&mut wrapper, [2, 3], MergeMode::Union, &DefaultEquality).unwrap(), 1);
        assert_eq!(populate(&mut wrapper, [3], MergeMode::Concat, &DefaultEquality).unwrap(), 1);
        drop(wrapper);
        assert_eq!(items, [1, 2, 3, 3]);

        let mut wrapper = CollectionWrapper::typed(&mut items);
        assert_eq!(populate(&mut wrapper, [9], MergeMode::Replace, &DefaultEquality).unwrap(), 1);
        drop(wrapper);
        assert_eq!(items, [9]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn merge_mode_settings() {
        let mode: MergeMode = serde_json::from_str("\"union\"").unwrap();
        assert_eq!(mode, MergeMode::Union);
        assert_eq!(serde_json::to_string(&MergeMode::Replace).unwrap(), "\"replace\"");
        assert_eq!(MergeMode::default(), MergeMode::Concat);
    }
}
