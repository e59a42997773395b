//! Keyed aggregation: partitioning, grouping and building maps.
//!
//! [`group_by`] and [`to_map`] return hash maps whose enumeration order is
//! unspecified. When a caller needs groups in a stable order,
//! [`group_by_ordered`] lists them in the order their keys were first seen.

use crate::{HashMap, Vec, into_ok};
use core::{convert::Infallible, hash::Hash, ops::Index};
use hashbrown::hash_map::Entry;

// ============================================================================
// Partition
// ============================================================================

/// The two halves produced by [`partition_by`].
///
/// Both halves are always present, even when empty. Indexing with `true`
/// yields the elements that satisfied the predicate, `false` the rest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition<E> {
    /// Elements for which the predicate returned `true`, in input order.
    pub matched: Vec<E>,
    /// Elements for which the predicate returned `false`, in input order.
    pub unmatched: Vec<E>,
}

static_assertions::assert_impl_all!(Partition<u8>: Send, Sync);

impl<E> Partition<E> {
    /// The half stored under `key`.
    pub fn get(&self, key: bool) -> &[E] {
        if key { &self.matched } else { &self.unmatched }
    }

    /// Split into `(matched, unmatched)`.
    pub fn into_parts(self) -> (Vec<E>, Vec<E>) {
        (self.matched, self.unmatched)
    }

    /// Convert into a map keyed by predicate result. Both keys are present.
    pub fn into_map(self) -> HashMap<bool, Vec<E>> {
        let mut map = HashMap::with_capacity(2);
        map.insert(true, self.matched);
        map.insert(false, self.unmatched);
        map
    }
}

impl<E> Index<bool> for Partition<E> {
    type Output = [E];

    fn index(&self, key: bool) -> &[E] {
        self.get(key)
    }
}

impl<E> From<Partition<E>> for HashMap<bool, Vec<E>> {
    fn from(partition: Partition<E>) -> Self {
        partition.into_map()
    }
}

/// Split elements by predicate result, preserving input order in each half.
///
/// # Examples
/// - `partition_by(&[1, 2, 3, 4], |x| x % 2 == 0)` → `true: [2, 4]`, `false: [1, 3]`
pub fn partition_by<E, P>(elements: &[E], mut predicate: P) -> Partition<E>
where
    E: Clone,
    P: FnMut(&E) -> bool,
{
    into_ok(try_partition_by(elements, |e| Ok::<_, Infallible>(predicate(e))))
}

/// Fallible form of [`partition_by`].
pub fn try_partition_by<E, P, X>(elements: &[E], mut predicate: P) -> Result<Partition<E>, X>
where
    E: Clone,
    P: FnMut(&E) -> Result<bool, X>,
{
    let mut partition = Partition {
        matched: Vec::new(),
        unmatched: Vec::new(),
    };
    for element in elements {
        if predicate(element)? {
            partition.matched.push(element.clone());
        } else {
            partition.unmatched.push(element.clone());
        }
    }
    Ok(partition)
}

// ============================================================================
// Grouping
// ============================================================================

/// Group elements by the key `classifier` assigns them.
///
/// Each group keeps its elements in input order.
///
/// # Examples
/// - `group_by(&["a", "bb", "cc", "d"], |s| s.len())` → `{1: ["a", "d"], 2: ["bb", "cc"]}`
pub fn group_by<T, K, F>(elements: &[T], mut classifier: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    into_ok(try_group_by(elements, |e| Ok::<_, Infallible>(classifier(e))))
}

/// Fallible form of [`group_by`].
pub fn try_group_by<T, K, F, X>(
    elements: &[T],
    mut classifier: F,
) -> Result<HashMap<K, Vec<T>>, X>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> Result<K, X>,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for element in elements {
        let key = classifier(element)?;
        groups.entry(key).or_default().push(element.clone());
    }
    tracing::trace!(groups = groups.len(), "grouped sequence");
    Ok(groups)
}

/// Like [`group_by`], but returns the groups in the order their keys first appear.
pub fn group_by_ordered<T, K, F>(elements: &[T], mut classifier: F) -> Vec<(K, Vec<T>)>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    into_ok(try_group_by_ordered(elements, |e| {
        Ok::<_, Infallible>(classifier(e))
    }))
}

/// Fallible form of [`group_by_ordered`].
pub fn try_group_by_ordered<T, K, F, X>(
    elements: &[T],
    mut classifier: F,
) -> Result<Vec<(K, Vec<T>)>, X>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> Result<K, X>,
{
    // Key -> position of its group in `groups`.
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for element in elements {
        let key = classifier(element)?;
        let slot = match slots.entry(key) {
            Entry::Occupied(occupied) => *occupied.get(),
            Entry::Vacant(vacant) => {
                groups.push((vacant.key().clone(), Vec::new()));
                *vacant.insert(groups.len() - 1)
            }
        };
        groups[slot].1.push(element.clone());
    }
    tracing::trace!(groups = groups.len(), "grouped sequence in key order");
    Ok(groups)
}

// ============================================================================
// Map Building
// ============================================================================

/// Build a map from a key and a value computed for every element.
///
/// For each element `key_fn` runs first, then `value_fn`. When a key repeats,
/// the stored value becomes `merge(existing, new)`.
///
/// # Examples
/// - `to_map(&[("a", 1), ("a", 2), ("b", 3)], |p| p.0, |p| p.1, |x, y| x + y)`
///   → `{"a": 3, "b": 3}`
pub fn to_map<T, K, U, KF, VF, MF>(
    elements: &[T],
    mut key_fn: KF,
    mut value_fn: VF,
    mut merge: MF,
) -> HashMap<K, U>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> U,
    MF: FnMut(U, U) -> U,
{
    into_ok(try_to_map(
        elements,
        |e| Ok::<_, Infallible>(key_fn(e)),
        |e| Ok(value_fn(e)),
        |a, b| Ok(merge(a, b)),
    ))
}

/// Fallible form of [`to_map`]. All three callbacks share one error type.
pub fn try_to_map<T, K, U, KF, VF, MF, X>(
    elements: &[T],
    mut key_fn: KF,
    mut value_fn: VF,
    mut merge: MF,
) -> Result<HashMap<K, U>, X>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> Result<K, X>,
    VF: FnMut(&T) -> Result<U, X>,
    MF: FnMut(U, U) -> Result<U, X>,
{
    let mut map: HashMap<K, U> = HashMap::new();
    for element in elements {
        let key = key_fn(element)?;
        let value = value_fn(element)?;
        match map.entry(key) {
            Entry::Occupied(occupied) => {
                let mut failure = None;
                occupied.replace_entry_with(|_, existing| match merge(existing, value) {
                    Ok(merged) => Some(merged),
                    Err(err) => {
                        failure = Some(err);
                        None
                    }
                });
                if let Some(err) = failure {
                    return Err(err);
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(value);
            }
        }
    }
    tracing::trace!(keys = map.len(), "built map from sequence");
    Ok(map)
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod collect_test;
