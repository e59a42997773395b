#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Stateless operations over ordered sequences.
//!
//! Every operation takes a slice, never mutates it, and returns freshly
//! allocated output. Operations that need at least one element return
//! [`EmptyInputError`] instead of panicking.

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so downstream crates can name the same types.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod collect;
pub mod error;
pub mod ext;
pub mod fold;
pub mod predicate;
pub mod select;
pub mod transform;

pub use collect::{
    Partition, group_by, group_by_ordered, partition_by, to_map, try_group_by,
    try_group_by_ordered, try_partition_by, try_to_map,
};
pub use error::EmptyInputError;
pub use ext::SeqExt;
pub use fold::{reduce, reduce_with_seed, try_reduce, try_reduce_with_seed};
pub use predicate::{
    all_match, any_match, filter, none_match, not_all_match, try_all_match, try_any_match,
    try_filter, try_none_match, try_not_all_match,
};
pub use select::{max, min, try_max, try_min};
pub use transform::{distinct, distinct_by_eq, for_each, map, try_for_each, try_map};

/// Hash map type returned by the keyed aggregations.
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;

/// Unpacks the result of a `try_` operation driven by infallible callbacks.
#[inline(always)]
pub(crate) fn into_ok<T>(result: Result<T, core::convert::Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
