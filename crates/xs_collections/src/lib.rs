#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod element;
mod error;
mod merge;
mod wrapper;

#[cfg(feature = "std")]
mod sync_root;

pub mod backing;
pub mod utils;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use backing::{Backing, BackingKind, ObjectList, TypedCollection, UntypedList};
pub use element::{AnyElement, Element, Value};
pub use error::CollectionError;
pub use merge::{DefaultEquality, EqualityContract, MergeMode};
pub use merge::{add_distinct, add_range, add_range_distinct, contains_value, merge_distinct, populate};
pub use wrapper::{CollectionWrapper, wrap};

#[cfg(feature = "std")]
pub use sync_root::SyncRoot;
