//! Pairwise compare/swap primitives shared by the inversion counter and the
//! sliding window.

use std::{iter::Zip, slice::Iter};

/// Puts a two-element slice in order. Returns `true` if it had to swap, which
/// is exactly one inversion. Equal elements are left alone.
pub fn order_pair<T: Ord>(pair: &mut [T]) -> bool {
    debug_assert_eq!(pair.len(), 2);
    if pair[0] > pair[1] {
        pair.swap(0, 1);
        true
    } else {
        false
    }
}

/// Swaps `items[..mid]` with `items[mid..]` as whole blocks.
pub fn exchange_blocks<T>(items: &mut [T], mid: usize) {
    debug_assert_eq!(items.len(), 2 * mid);
    let (lo, hi) = items.split_at_mut(mid);
    lo.swap_with_slice(hi);
}

/// `(leaving, entering)` pairs for every one-step advance of a width `k`
/// window over `items`.
pub fn edges<T>(items: &[T], k: usize) -> Zip<Iter<'_, T>, Iter<'_, T>> {
    let k = k.min(items.len());
    items.iter().zip(items[k..].iter())
}
