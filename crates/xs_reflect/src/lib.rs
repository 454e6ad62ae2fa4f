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

mod capability;
mod construct;
mod error;

pub mod info;
pub mod manifest;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use capability::CollectionCapabilities;
pub use construct::ConstructorRef;
pub use error::ReflectError;
