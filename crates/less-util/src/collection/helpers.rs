//! Slice helpers.
//!
//! Equality-based helpers (`unique`, `difference`, `intersection`) only need
//! `PartialEq` and keep the order of their inputs.

use std::ops::ControlFlow;

use rand::seq::SliceRandom;

use crate::error::{Result, UtilError};

// ============================================================================
// Iteration
// ============================================================================

/// Visit `items` in order; the first `Break` stops iteration and is returned.
pub fn each<T, B>(items: &[T], mut f: impl FnMut(&T, usize) -> ControlFlow<B>) -> Option<B> {
    for (i, item) in items.iter().enumerate() {
        if let ControlFlow::Break(value) = f(item, i) {
            return Some(value);
        }
    }
    None
}

pub fn map<T, U>(items: &[T], mut f: impl FnMut(&T, usize) -> U) -> Vec<U> {
    items.iter().enumerate().map(|(i, item)| f(item, i)).collect()
}

/// Call `f(0..n)` until it returns `Some`.
pub fn times<R>(n: usize, f: impl FnMut(usize) -> Option<R>) -> Option<R> {
    (0..n).find_map(f)
}

/// Ramp from `from` towards `to` in `steps` equal steps (excluding `to`),
/// stopping at the first `Some`.
pub fn step<R>(from: f64, to: f64, steps: usize, mut f: impl FnMut(f64) -> Option<R>) -> Option<R> {
    times(steps, |i| f(from + (to - from) * i as f64 / steps as f64))
}

/// Pairs of items at the same position; stops at the shorter slice.
pub fn zip<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(A, B)> {
    left.iter().cloned().zip(right.iter().cloned()).collect()
}

// ============================================================================
// Filtering
// ============================================================================

/// Items matching `predicate`.
///
/// With `limit`, only the first `limit` items are examined (not the first
/// `limit` matches). A limit of zero means no limit.
pub fn select<T: Clone>(
    items: &[T],
    mut predicate: impl FnMut(&T) -> bool,
    limit: Option<usize>,
) -> Vec<T> {
    let examined = limit.filter(|n| *n > 0).unwrap_or(items.len());
    items
        .iter()
        .take(examined)
        .filter(|item| predicate(*item))
        .cloned()
        .collect()
}

/// Split into `(matching, rest)`, preserving order in both.
pub fn partition<T: Clone>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> (Vec<T>, Vec<T>) {
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for item in items {
        if predicate(item) {
            matching.push(item.clone());
        } else {
            rest.push(item.clone());
        }
    }
    (matching, rest)
}

pub fn find<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
    items.iter().find(|item| predicate(*item))
}

pub fn count<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> usize {
    items.iter().filter(|item| predicate(*item)).count()
}

/// True for an empty slice.
pub fn all<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    count(items, predicate) == items.len()
}

pub fn any<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    find(items, predicate).is_some()
}

/// Item with the smallest key; ties keep the earliest item.
pub fn min_by<T, K: PartialOrd>(items: &[T], mut key: impl FnMut(&T) -> K) -> Option<&T> {
    let mut best: Option<(&T, K)> = None;
    for item in items {
        let k = key(item);
        if best.as_ref().map_or(true, |(_, b)| k < *b) {
            best = Some((item, k));
        }
    }
    best.map(|(item, _)| item)
}

/// Item with the largest key; ties keep the earliest item.
pub fn max_by<T, K: PartialOrd>(items: &[T], mut key: impl FnMut(&T) -> K) -> Option<&T> {
    let mut best: Option<(&T, K)> = None;
    for item in items {
        let k = key(item);
        if best.as_ref().map_or(true, |(_, b)| k > *b) {
            best = Some((item, k));
        }
    }
    best.map(|(item, _)| item)
}

// ============================================================================
// Set-like operations
// ============================================================================

/// Distinct items in first-seen order.
pub fn unique<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// All items of `left` followed by all items of `right`.
pub fn union<T: Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    out.extend_from_slice(left);
    out.extend_from_slice(right);
    out
}

/// Items found in exactly one of the slices: those only in `left`, then
/// those only in `right`.
pub fn difference<T: PartialEq + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    union(
        &select(left, |item| !right.contains(item), None),
        &select(right, |item| !left.contains(item), None),
    )
}

/// Items of `left` that also occur in `right`.
pub fn intersection<T: PartialEq + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    select(left, |item| right.contains(item), None)
}

/// Remove the first occurrence of `item`.
pub fn remove<T: PartialEq>(items: &mut Vec<T>, item: &T) -> Option<T> {
    let index = items.iter().position(|candidate| candidate == item)?;
    Some(items.remove(index))
}

// ============================================================================
// Numbers and sampling
// ============================================================================

/// Arithmetic mean; `None` for an empty slice.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// One random item.
pub fn pick<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}

/// `n` items from distinct positions, in random order.
pub fn pick_many<T: Clone>(items: &[T], n: usize) -> Result<Vec<T>> {
    if n > items.len() {
        return Err(UtilError::NotEnoughItems {
            requested: n,
            available: items.len(),
        });
    }
    Ok(items
        .choose_multiple(&mut rand::thread_rng(), n)
        .cloned()
        .collect())
}
