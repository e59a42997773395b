//! seqkit - Declarative operations over ordered sequences
//!
//! # Overview
//!
//! seqkit is a set of small, stateless functions for the sequence
//! transformations that otherwise end up as hand-written loops:
//!
//! - Filtering and quantifiers (`filter`, `any_match`, `all_match`, `none_match`)
//! - Element-wise transforms (`map`, `for_each`, `distinct`)
//! - Selection and folds (`max`, `min`, `reduce`, `reduce_with_seed`)
//! - Keyed aggregation (`partition_by`, `group_by`, `to_map`)
//!
//! Inputs are borrowed slices and are never modified. Outputs are freshly
//! allocated.
//!
//! # Quick Start
//!
//! ```
//! use seqkit::{filter, group_by, map, reduce};
//!
//! let scores = [12, 7, 30, 7, 18];
//!
//! let passing = filter(&scores, |s| *s >= 10);
//! assert_eq!(passing, [12, 30, 18]);
//!
//! let doubled = map(&scores, |s| s * 2);
//! assert_eq!(doubled, [24, 14, 60, 14, 36]);
//!
//! let total = reduce(&scores, |a, b| a + b).unwrap();
//! assert_eq!(total, 74);
//!
//! let by_parity = group_by(&scores, |s| s % 2 == 0);
//! assert_eq!(by_parity[&false], [7, 7]);
//! ```
//!
//! # Empty Input
//!
//! `max`, `min` and `reduce` need at least one element and report
//! [`EmptyInputError`] otherwise. `reduce_with_seed` starts from its seed, so
//! it accepts empty input:
//!
//! ```
//! use seqkit::{EmptyInputError, max, reduce, reduce_with_seed};
//!
//! let empty: [u32; 0] = [];
//! assert_eq!(max(&empty, u32::cmp), Err(EmptyInputError));
//! assert_eq!(reduce(&empty, |a, b| a + b), Err(EmptyInputError));
//! assert_eq!(reduce_with_seed(100, &[1, 2, 3], |a, b| a + b), 106);
//! assert_eq!(reduce_with_seed(100, &empty, |a, b| a + b), 100);
//! ```
//!
//! # Fallible Callbacks
//!
//! Every callback-taking operation has a `try_` form. The first error a
//! callback returns is handed back unchanged:
//!
//! ```
//! use seqkit::try_map;
//!
//! let parsed: Result<Vec<u8>, _> = try_map(&["1", "2", "300"], |s| s.parse::<u8>());
//! assert!(parsed.is_err());
//! ```
//!
//! # Method Syntax
//!
//! [`SeqExt`] exposes the same operations as methods on slices, `Vec`s and
//! arrays:
//!
//! ```
//! use seqkit::SeqExt;
//!
//! let split = [1, 2, 3, 4].partition_by(|x| x % 2 == 0);
//! assert_eq!(split[true], [2, 4]);
//! assert_eq!(split[false], [1, 3]);
//! ```

// Re-export public API from seqkit_core
pub use seqkit_core::{
    EmptyInputError, HashMap, Partition, SeqExt, all_match, any_match, distinct, distinct_by_eq,
    filter, for_each, group_by, group_by_ordered, map, max, min, none_match, not_all_match,
    partition_by, reduce, reduce_with_seed, to_map, try_all_match, try_any_match, try_filter,
    try_for_each, try_group_by, try_group_by_ordered, try_map, try_max, try_min, try_none_match,
    try_not_all_match, try_partition_by, try_reduce, try_reduce_with_seed, try_to_map,
};

// Re-export modules for callers that prefer qualified paths
pub use seqkit_core::{collect, error, ext, fold, predicate, select, transform};
