//! Method-call syntax for the sequence operations.
//!
//! ```
//! use seqkit_core::SeqExt;
//!
//! let words = ["a", "bb", "cc", "d"];
//! let groups = words.group_by(|s| s.len());
//! assert_eq!(groups[&1], ["a", "d"]);
//! assert_eq!(words.reduce_with_seed(String::new(), |acc, w| acc + *w), "abbccd");
//! ```
//!
//! Names that would collide with inherent slice methods or [`Iterator`]
//! adapters carry a `_seq` suffix.

use crate::{EmptyInputError, HashMap, Partition, Vec};
use core::{cmp::Ordering, hash::Hash};

/// Sequence operations as methods on slices (and so on `Vec` and arrays).
pub trait SeqExt<E> {
    /// See [`filter`](crate::filter).
    fn filter_seq<P>(&self, predicate: P) -> Vec<E>
    where
        E: Clone,
        P: FnMut(&E) -> bool;

    /// See [`any_match`](crate::any_match).
    fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&E) -> bool;

    /// See [`all_match`](crate::all_match).
    fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&E) -> bool;

    /// See [`none_match`](crate::none_match).
    fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&E) -> bool;

    /// See [`not_all_match`](crate::not_all_match).
    fn not_all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&E) -> bool;

    /// See [`map`](crate::map).
    fn map_seq<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&E) -> R;

    /// See [`max`](crate::max).
    fn max_by_cmp<C>(&self, comparator: C) -> Result<&E, EmptyInputError>
    where
        C: FnMut(&E, &E) -> Ordering;

    /// See [`min`](crate::min).
    fn min_by_cmp<C>(&self, comparator: C) -> Result<&E, EmptyInputError>
    where
        C: FnMut(&E, &E) -> Ordering;

    /// See [`distinct`](crate::distinct).
    fn distinct(&self) -> Vec<E>
    where
        E: Eq + Hash + Clone;

    /// See [`for_each`](crate::for_each).
    fn for_each_seq<A>(&self, action: A)
    where
        A: FnMut(&E);

    /// See [`reduce`](crate::reduce).
    fn reduce_seq<F>(&self, combiner: F) -> Result<E, EmptyInputError>
    where
        E: Clone,
        F: FnMut(E, &E) -> E;

    /// See [`reduce_with_seed`](crate::reduce_with_seed).
    fn reduce_with_seed<S, F>(&self, seed: S, combiner: F) -> S
    where
        F: FnMut(S, &E) -> S;

    /// See [`partition_by`](crate::partition_by).
    fn partition_by<P>(&self, predicate: P) -> Partition<E>
    where
        E: Clone,
        P: FnMut(&E) -> bool;

    /// See [`group_by`](crate::group_by).
    fn group_by<K, F>(&self, classifier: F) -> HashMap<K, Vec<E>>
    where
        E: Clone,
        K: Eq + Hash,
        F: FnMut(&E) -> K;

    /// See [`group_by_ordered`](crate::group_by_ordered).
    fn group_by_ordered<K, F>(&self, classifier: F) -> Vec<(K, Vec<E>)>
    where
        E: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&E) -> K;

    /// See [`to_map`](crate::to_map).
    fn to_map<K, U, KF, VF, MF>(&self, key_fn: KF, value_fn: VF, merge: MF) -> HashMap<K, U>
    where
        K: Eq + Hash,
        KF: FnMut(&E) -> K,
        VF: FnMut(&E) -> U,
        MF: FnMut(U, U) -> U;
}

impl<E> SeqExt<E> for [E] {
    fn filter_seq<P>(&self, predicate: P) -> Vec<E>
    where
        E: Clone,
        P: FnMut(&E) -> bool,
    {
        crate::filter(self, predicate)
    }

    fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&E) -> bool,
    {
        crate::any_match(self, predicate)
    }

    fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&E) -> bool,
    {
        crate::all_match(self, predicate)
    }

    fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&E) -> bool,
    {
        crate::none_match(self, predicate)
    }

    fn not_all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&E) -> bool,
    {
        crate::not_all_match(self, predicate)
    }

    fn map_seq<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&E) -> R,
    {
        crate::map(self, f)
    }

    fn max_by_cmp<C>(&self, comparator: C) -> Result<&E, EmptyInputError>
    where
        C: FnMut(&E, &E) -> Ordering,
    {
        crate::max(self, comparator)
    }

    fn min_by_cmp<C>(&self, comparator: C) -> Result<&E, EmptyInputError>
    where
        C: FnMut(&E, &E) -> Ordering,
    {
        crate::min(self, comparator)
    }

    fn distinct(&self) -> Vec<E>
    where
        E: Eq + Hash + Clone,
    {
        crate::distinct(self)
    }

    fn for_each_seq<A>(&self, action: A)
    where
        A: FnMut(&E),
    {
        crate::for_each(self, action)
    }

    fn reduce_seq<F>(&self, combiner: F) -> Result<E, EmptyInputError>
    where
        E: Clone,
        F: FnMut(E, &E) -> E,
    {
        crate::reduce(self, combiner)
    }

    fn reduce_with_seed<S, F>(&self, seed: S, combiner: F) -> S
    where
        F: FnMut(S, &E) -> S,
    {
        crate::reduce_with_seed(seed, self, combiner)
    }

    fn partition_by<P>(&self, predicate: P) -> Partition<E>
    where
        E: Clone,
        P: FnMut(&E) -> bool,
    {
        crate::partition_by(self, predicate)
    }

    fn group_by<K, F>(&self, classifier: F) -> HashMap<K, Vec<E>>
    where
        E: Clone,
        K: Eq + Hash,
        F: FnMut(&E) -> K,
    {
        crate::group_by(self, classifier)
    }

    fn group_by_ordered<K, F>(&self, classifier: F) -> Vec<(K, Vec<E>)>
    where
        E: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&E) -> K,
    {
        crate::group_by_ordered(self, classifier)
    }

    fn to_map<K, U, KF, VF, MF>(&self, key_fn: KF, value_fn: VF, merge: MF) -> HashMap<K, U>
    where
        K: Eq + Hash,
        KF: FnMut(&E) -> K,
        VF: FnMut(&E) -> U,
        MF: FnMut(U, U) -> U,
    {
        crate::to_map(self, key_fn, value_fn, merge)
    }
}

#[cfg(test)]
mod tests {
    use super::SeqExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_methods_on_vec() {
        let numbers = vec![4, 1, 4, 9, 2];
        assert_eq!(numbers.filter_seq(|x| *x > 2), vec![4, 4, 9]);
        assert_eq!(numbers.map_seq(|x| x * 10), vec![40, 10, 40, 90, 20]);
        assert_eq!(numbers.distinct(), vec![4, 1, 9, 2]);
        assert_eq!(numbers.max_by_cmp(i32::cmp), Ok(&9));
        assert_eq!(numbers.min_by_cmp(i32::cmp), Ok(&1));
        assert_eq!(numbers.reduce_seq(|a, b| a + b), Ok(20));
        assert!(numbers.any_match(|x| *x == 9));
        assert!(!numbers.all_match(|x| *x > 1));
        assert!(numbers.none_match(|x| *x > 9));
        assert!(numbers.not_all_match(|x| *x > 1));
    }

    #[test]
    fn test_methods_on_array() {
        let pairs = [("x", 1), ("y", 2), ("x", 5)];
        let map = pairs.to_map(|p| p.0, |p| p.1, |a, b| a.max(b));
        assert_eq!(map["x"], 5);

        let split = pairs.partition_by(|p| p.0 == "x");
        assert_eq!(split.matched.len(), 2);

        let ordered = pairs.group_by_ordered(|p| p.0);
        assert_eq!(ordered[0].0, "x");
        assert_eq!(ordered[1].1, vec![("y", 2)]);
    }

    #[test]
    fn test_reduce_with_seed_method_changes_type() {
        let total_len = ["ab", "c", "def"].reduce_with_seed(0usize, |acc, s| acc + s.len());
        assert_eq!(total_len, 6);
    }

    #[test]
    fn test_for_each_seq() {
        let mut out = Vec::new();
        [3, 2, 1].for_each_seq(|x| out.push(x * 2));
        assert_eq!(out, vec![6, 4, 2]);
    }
}
