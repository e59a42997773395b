//! Left folds over a sequence.

use crate::error::{EmptyInputError, empty_input};
use crate::into_ok;
use core::convert::Infallible;

/// Fold left-to-right, seeding the accumulator with the first element.
///
/// Computes `combiner(...combiner(combiner(e0, &e1), &e2)..., &en)`. A
/// single-element input returns a clone of that element without calling
/// `combiner`.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `elements` is empty.
///
/// # Examples
/// - `reduce(&[1, 2, 3, 4], |a, b| a + b)` → `Ok(10)`
pub fn reduce<E, F>(elements: &[E], mut combiner: F) -> Result<E, EmptyInputError>
where
    E: Clone,
    F: FnMut(E, &E) -> E,
{
    try_reduce(elements, |acc, e| Ok::<_, EmptyInputError>(combiner(acc, e)))
}

/// Fallible form of [`reduce`].
///
/// The combiner's error type must absorb [`EmptyInputError`].
pub fn try_reduce<E, F, X>(elements: &[E], combiner: F) -> Result<E, X>
where
    E: Clone,
    F: FnMut(E, &E) -> Result<E, X>,
    X: From<EmptyInputError>,
{
    let (first, rest) = elements
        .split_first()
        .ok_or_else(|| empty_input("reduce"))?;
    try_fold(first.clone(), rest, combiner)
}

/// Fold left-to-right starting from `seed`.
///
/// Every element is combined into the accumulator, the first one included.
/// Empty input returns `seed` unchanged. The accumulator may have a different
/// type than the elements.
///
/// # Examples
/// - `reduce_with_seed(100, &[1, 2, 3], |a, b| a + b)` → `106`
/// - `reduce_with_seed(7, &[] as &[i32], |a, b| a + b)` → `7`
/// - `reduce_with_seed(0, &["ab", "c"], |n, s| n + s.len())` → `3`
pub fn reduce_with_seed<S, E, F>(seed: S, elements: &[E], mut combiner: F) -> S
where
    F: FnMut(S, &E) -> S,
{
    into_ok(try_reduce_with_seed(seed, elements, |acc, e| {
        Ok::<_, Infallible>(combiner(acc, e))
    }))
}

/// Fallible form of [`reduce_with_seed`].
pub fn try_reduce_with_seed<S, E, F, X>(seed: S, elements: &[E], combiner: F) -> Result<S, X>
where
    F: FnMut(S, &E) -> Result<S, X>,
{
    try_fold(seed, elements, combiner)
}

#[inline]
fn try_fold<S, E, F, X>(seed: S, elements: &[E], mut combiner: F) -> Result<S, X>
where
    F: FnMut(S, &E) -> Result<S, X>,
{
    let mut acc = seed;
    for element in elements {
        acc = combiner(acc, element)?;
    }
    Ok(acc)
}

#[cfg(test)]
#[path = "fold_test.rs"]
mod fold_test;
