//! Predicate-driven operations: filtering and quantifiers.

use crate::{Vec, into_ok};
use core::convert::Infallible;

// ============================================================================
// Filtering
// ============================================================================

/// Collect every element satisfying `predicate`, in input order.
///
/// # Examples
/// - `filter(&[1, 2, 3, 4], |x| x % 2 == 0)` → `[2, 4]`
/// - `filter(&[], p)` → `[]`
pub fn filter<E, P>(elements: &[E], mut predicate: P) -> Vec<E>
where
    E: Clone,
    P: FnMut(&E) -> bool,
{
    into_ok(try_filter(elements, |e| Ok::<_, Infallible>(predicate(e))))
}

/// Fallible form of [`filter`]. Stops at the first predicate error.
pub fn try_filter<E, P, X>(elements: &[E], mut predicate: P) -> Result<Vec<E>, X>
where
    E: Clone,
    P: FnMut(&E) -> Result<bool, X>,
{
    let mut result = Vec::new();
    for element in elements {
        if predicate(element)? {
            result.push(element.clone());
        }
    }
    Ok(result)
}

// ============================================================================
// Quantifiers
// ============================================================================

/// True iff at least one element satisfies `predicate`.
///
/// Stops invoking the predicate at the first match. Empty input yields `false`.
pub fn any_match<E, P>(elements: &[E], mut predicate: P) -> bool
where
    P: FnMut(&E) -> bool,
{
    into_ok(try_any_match(elements, |e| Ok::<_, Infallible>(predicate(e))))
}

/// Fallible form of [`any_match`].
pub fn try_any_match<E, P, X>(elements: &[E], mut predicate: P) -> Result<bool, X>
where
    P: FnMut(&E) -> Result<bool, X>,
{
    for element in elements {
        if predicate(element)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// True iff every element satisfies `predicate`.
///
/// Stops invoking the predicate at the first failure. Empty input yields `true`.
pub fn all_match<E, P>(elements: &[E], mut predicate: P) -> bool
where
    P: FnMut(&E) -> bool,
{
    into_ok(try_all_match(elements, |e| Ok::<_, Infallible>(predicate(e))))
}

/// Fallible form of [`all_match`].
pub fn try_all_match<E, P, X>(elements: &[E], mut predicate: P) -> Result<bool, X>
where
    P: FnMut(&E) -> Result<bool, X>,
{
    for element in elements {
        if !predicate(element)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// True iff no element satisfies `predicate`.
///
/// Equivalent to `!any_match(elements, predicate)`. Empty input yields `true`.
///
/// Callers that relied on "some element fails the predicate" want
/// [`not_all_match`] instead.
pub fn none_match<E, P>(elements: &[E], mut predicate: P) -> bool
where
    P: FnMut(&E) -> bool,
{
    into_ok(try_none_match(elements, |e| Ok::<_, Infallible>(predicate(e))))
}

/// Fallible form of [`none_match`].
pub fn try_none_match<E, P, X>(elements: &[E], predicate: P) -> Result<bool, X>
where
    P: FnMut(&E) -> Result<bool, X>,
{
    try_any_match(elements, predicate).map(|found| !found)
}

/// True iff at least one element fails `predicate`.
///
/// Equivalent to `!all_match(elements, predicate)`: stops at the first
/// failing element, and empty input yields `false`.
pub fn not_all_match<E, P>(elements: &[E], mut predicate: P) -> bool
where
    P: FnMut(&E) -> bool,
{
    into_ok(try_not_all_match(elements, |e| Ok::<_, Infallible>(predicate(e))))
}

/// Fallible form of [`not_all_match`].
pub fn try_not_all_match<E, P, X>(elements: &[E], predicate: P) -> Result<bool, X>
where
    P: FnMut(&E) -> Result<bool, X>,
{
    try_all_match(elements, predicate).map(|all| !all)
}

#[cfg(test)]
#[path = "predicate_test.rs"]
mod predicate_test;
