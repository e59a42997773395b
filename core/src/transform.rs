//! Element-wise transforms, side-effecting traversal and deduplication.

use crate::{Vec, into_ok};
use core::{convert::Infallible, hash::Hash};
use hashbrown::HashSet;

/// Apply `f` to every element, producing a sequence of the same length and order.
///
/// # Examples
/// - `map(&[1, 2, 3], |x| x * 2)` → `[2, 4, 6]`
/// - `map(&["a", "bb"], |s| s.len())` → `[1, 2]`
/// - `map(&[], f)` → `[]`
pub fn map<T, R, F>(elements: &[T], mut f: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    into_ok(try_map(elements, |e| Ok::<_, Infallible>(f(e))))
}

/// Fallible form of [`map`]. Stops at the first error from `f`.
pub fn try_map<T, R, F, X>(elements: &[T], mut f: F) -> Result<Vec<R>, X>
where
    F: FnMut(&T) -> Result<R, X>,
{
    let mut result = Vec::with_capacity(elements.len());
    for element in elements {
        result.push(f(element)?);
    }
    Ok(result)
}

/// Invoke `action` once per element, in order.
pub fn for_each<E, A>(elements: &[E], mut action: A)
where
    A: FnMut(&E),
{
    into_ok(try_for_each(elements, |e| {
        action(e);
        Ok::<_, Infallible>(())
    }))
}

/// Fallible form of [`for_each`].
///
/// Actions already performed before the failing one are not undone.
pub fn try_for_each<E, A, X>(elements: &[E], mut action: A) -> Result<(), X>
where
    A: FnMut(&E) -> Result<(), X>,
{
    for element in elements {
        action(element)?;
    }
    Ok(())
}

/// Keep the first occurrence of every distinct element, in first-seen order.
///
/// Uses a seen-set, so runs in linear time. For element types that are
/// only `PartialEq`, see [`distinct_by_eq`].
///
/// # Examples
/// - `distinct(&[1, 2, 2, 3, 1])` → `[1, 2, 3]`
pub fn distinct<E>(elements: &[E]) -> Vec<E>
where
    E: Eq + Hash + Clone,
{
    let mut seen: HashSet<&E> = HashSet::with_capacity(elements.len());
    let mut result = Vec::new();
    for element in elements {
        if seen.insert(element) {
            result.push(element.clone());
        }
    }
    result
}

/// Same result as [`distinct`], using only `PartialEq`.
///
/// Each element is compared against the accumulated output, so this is
/// quadratic in the number of distinct elements.
pub fn distinct_by_eq<E>(elements: &[E]) -> Vec<E>
where
    E: PartialEq + Clone,
{
    let mut result: Vec<E> = Vec::new();
    for element in elements {
        if !result.contains(element) {
            result.push(element.clone());
        }
    }
    result
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
