//! Provide `FixedHasher`, a `foldhash` hasher with a fixed seed.
//!
//! Registry tables are rebuilt for every process, and a fixed seed keeps
//! their layout reproducible, which makes debugging dumps comparable.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// The seed shared by every [`FixedHashState`].
const FIXED_SEED: FixedState = FixedState::with_seed(0x5851_F42D_4C95_7F2D);

/// Hasher produced by [`FixedHashState`].
///
/// A type alias for [`foldhash::fast::FoldHasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state whose output only depends on the hashed input.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use xs_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("xs.collections.List");
/// let b = FixedHashState.hash_one("xs.collections.List");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_SEED.build_hasher()
    }
}

#[cfg(test)]
mod tests {
    use core::hash::BuildHasher;

    use super::FixedHashState;
    use crate::hash::HashMap;

    #[test]
    fn fixed_state_is_stable() {
        assert_eq!(FixedHashState.hash_one(42_u32), FixedHashState.hash_one(42_u32));
        assert_ne!(FixedHashState.hash_one(1_u32), FixedHashState.hash_one(2_u32));
    }

    #[test]
    fn map_uses_fixed_state() {
        let mut map: HashMap<&str, u32> = HashMap::default();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.len(), 2);
    }
}
