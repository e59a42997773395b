//! Comparator-driven selection of a single element.
//!
//! Both scans keep the current best element and only replace it when the
//! comparator reports a strict improvement, so among equal candidates the
//! earliest one wins.

use crate::error::{EmptyInputError, empty_input};
use core::cmp::Ordering;

/// The greatest element according to `comparator`.
///
/// `comparator(candidate, current)` must return [`Ordering::Greater`] for the
/// candidate to replace the current maximum. Ties keep the earlier element.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `elements` is empty.
///
/// # Examples
/// - `max(&[3, 7, 2], i32::cmp)` → `Ok(&7)`
/// - `max(&[], cmp)` → `Err(EmptyInputError)`
pub fn max<E, C>(elements: &[E], mut comparator: C) -> Result<&E, EmptyInputError>
where
    C: FnMut(&E, &E) -> Ordering,
{
    try_max(elements, |a, b| Ok::<_, EmptyInputError>(comparator(a, b)))
}

/// Fallible form of [`max`].
///
/// The comparator's error type must absorb [`EmptyInputError`], so callers get
/// a single error type back.
pub fn try_max<E, C, X>(elements: &[E], comparator: C) -> Result<&E, X>
where
    C: FnMut(&E, &E) -> Result<Ordering, X>,
    X: From<EmptyInputError>,
{
    select_by(elements, comparator, Ordering::Greater, "max")
}

/// The least element according to `comparator`.
///
/// `comparator(candidate, current)` must return [`Ordering::Less`] for the
/// candidate to replace the current minimum. Ties keep the earlier element.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `elements` is empty.
pub fn min<E, C>(elements: &[E], mut comparator: C) -> Result<&E, EmptyInputError>
where
    C: FnMut(&E, &E) -> Ordering,
{
    try_min(elements, |a, b| Ok::<_, EmptyInputError>(comparator(a, b)))
}

/// Fallible form of [`min`].
pub fn try_min<E, C, X>(elements: &[E], comparator: C) -> Result<&E, X>
where
    C: FnMut(&E, &E) -> Result<Ordering, X>,
    X: From<EmptyInputError>,
{
    select_by(elements, comparator, Ordering::Less, "min")
}

fn select_by<'a, E, C, X>(
    elements: &'a [E],
    mut comparator: C,
    replace_on: Ordering,
    op: &'static str,
) -> Result<&'a E, X>
where
    C: FnMut(&E, &E) -> Result<Ordering, X>,
    X: From<EmptyInputError>,
{
    let (first, rest) = elements.split_first().ok_or_else(|| empty_input(op))?;
    let mut best = first;
    for candidate in rest {
        if comparator(candidate, best)? == replace_on {
            best = candidate;
        }
    }
    Ok(best)
}

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;
