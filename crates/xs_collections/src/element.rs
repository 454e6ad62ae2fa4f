use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::{Any, type_name};
use core::fmt::Debug;

// -----------------------------------------------------------------------------
// Element

/// A value that can be stored in a wrapped collection.
///
/// `NULLABLE` tells whether the element shape admits null. Plain values do
/// not; `Option<T>` does, with `None` as its null value.
///
/// # Examples
///
/// ```
/// use xs_collections::Element;
///
/// assert!(!i32::NULLABLE);
/// assert_eq!(i32::null_value(), None);
///
/// assert!(<Option<i32>>::NULLABLE);
/// assert_eq!(<Option<i32>>::null_value(), Some(None));
/// ```
pub trait Element: Any + Send + Sync + PartialEq + Debug {
    /// Whether null is a valid value of this shape.
    const NULLABLE: bool = false;

    /// Returns the value standing for null, if the shape admits one.
    #[inline]
    fn null_value() -> Option<Self>
    where
        Self: Sized,
    {
        None
    }
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(impl Element for $ty {})*
    };
}

impl_element!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String, &'static str,
);

impl<T: Element> Element for Vec<T> {}

impl<T: Element> Element for Box<T> {}

impl<T: Element> Element for Option<T> {
    const NULLABLE: bool = true;

    #[inline]
    fn null_value() -> Option<Self> {
        Some(None)
    }
}

// -----------------------------------------------------------------------------
// AnyElement

/// The object-safe form of [`Element`].
///
/// Loosely typed collections store `Box<dyn AnyElement>` ([`Value`]) and
/// compare items through [`element_eq`](AnyElement::element_eq), which is
/// `false` for values of different types.
pub trait AnyElement: Any + Send + Sync + Debug {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Returns `true` if `other` has the same type and compares equal.
    fn element_eq(&self, other: &dyn AnyElement) -> bool;

    /// Returns the type name of the underlying value, for diagnostics.
    fn element_type_name(&self) -> &'static str;
}

impl<T: Element> AnyElement for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn element_eq(&self, other: &dyn AnyElement) -> bool {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => self == other,
            None => false,
        }
    }

    #[inline]
    fn element_type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// An untyped, non-null value. Null is `Option::<Value>::None`.
pub type Value = Box<dyn AnyElement>;

impl dyn AnyElement {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use xs_collections::Value;
    /// let x: Value = Box::new(10_i32);
    ///
    /// assert!(x.is::<i32>());
    /// assert!(!x.is::<i64>());
    /// ```
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Unboxes the value as `T`, or hands it back unchanged.
    pub fn downcast<T: Any>(self: Box<Self>) -> Result<Box<T>, Box<Self>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.into_any().downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type checked above"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnyElement, Value};
    use alloc::boxed::Box;
    use alloc::string::String;

    #[test]
    fn dynamic_equality() {
        let a: Value = Box::new(3_i32);
        let b: Value = Box::new(3_i32);
        let c: Value = Box::new(3_i64);

        assert!(a.element_eq(&*b));
        assert!(!a.element_eq(&*c));
        assert_eq!(c.element_type_name(), "i64");
    }

    #[test]
    fn downcast_returns_value_on_mismatch() {
        let value: Value = Box::new(String::from("text"));
        let value = value.downcast::<i32>().unwrap_err();
        let text = value.downcast::<String>().unwrap();
        assert_eq!(*text, "text");
    }

    #[test]
    fn nullable_shapes_compare() {
        let a: &dyn AnyElement = &None::<u8>;
        let b: &dyn AnyElement = &Some(1_u8);
        assert!(!a.element_eq(b));
        assert!(a.element_eq(&None::<u8>));
    }
}
