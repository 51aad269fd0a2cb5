use crate::pair::{exchange_blocks, order_pair};
use log::{debug, trace};
use std::ops::AddAssign;

/// Sub-ranges at least this long are split across the rayon pool by
/// `DivideAndConquer<true>`.
pub const PAR_THRESHOLD: usize = 4096;

pub trait Elem: Ord + Copy + Send + Sync {}

impl<T: Ord + Copy + Send + Sync> Elem for T {}

// Internal invariants. On in debug builds, or in release with `checks`.
macro_rules! check {
    ($($arg:tt)*) => {
        if cfg!(any(debug_assertions, feature = "checks")) {
            assert!($($arg)*);
        }
    };
}

pub fn is_sorted(items: &[impl Ord]) -> bool {
    !items.windows(2).any(|window| window[0] > window[1])
}

/// Number of pairs `i < j` with `items[i] > items[j]`, by comparing every pair.
pub fn count_pairs<T: Ord>(items: &[T]) -> u64 {
    items
        .iter()
        .enumerate()
        .map(|(i, a)| items[i + 1..].iter().filter(|&b| a > b).count() as u64)
        .sum()
}

/// Counts the inversions in `items` and leaves them sorted ascending.
pub fn count_and_sort<T: Elem>(items: &mut [T]) -> u64 {
    DivideAndConquer::<false>.count_and_sort(items)
}

pub trait Inversions {
    fn count_and_sort<T: Elem>(&self, items: &mut [T]) -> u64;
}

pub struct BruteForce;

impl Inversions for BruteForce {
    fn count_and_sort<T: Elem>(&self, items: &mut [T]) -> u64 {
        let count = count_pairs(items);
        for j in 1..items.len() {
            for i in (1..=j).rev() {
                if !order_pair(&mut items[i - 1..=i]) {
                    break;
                }
            }
        }
        count
    }
}

/// What the merge steps of one top-level count did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub base_pairs: u64,
    pub already_ordered: u64,
    pub block_exchanges: u64,
    pub merges: u64,
    pub bubble_swaps: u64,
}

impl AddAssign for MergeStats {
    fn add_assign(&mut self, rhs: Self) {
        self.base_pairs += rhs.base_pairs;
        self.already_ordered += rhs.already_ordered;
        self.block_exchanges += rhs.block_exchanges;
        self.merges += rhs.merges;
        self.bubble_swaps += rhs.bubble_swaps;
    }
}

/// Merge-sort style counter. Halves of odd-length ranges give the surplus
/// element to the upper half. With `PAR`, large halves are counted on the
/// rayon pool; the result and final order are the same either way.
pub struct DivideAndConquer<const PAR: bool>;

impl<const PAR: bool> DivideAndConquer<PAR> {
    pub fn count_with_stats<T: Elem>(&self, items: &mut [T]) -> (u64, MergeStats) {
        let mut stats = MergeStats::default();
        let count = match items.len() {
            0 | 1 => 0,
            n => {
                // The lower half of any merge is at most n / 2 long.
                let mut scratch = items[..n / 2].to_vec();
                sort_count::<T, PAR>(items, &mut scratch, &mut stats)
            }
        };
        debug!(
            "counted {count} inversions over {} items: {stats:?}",
            items.len()
        );
        (count, stats)
    }
}

impl<const PAR: bool> Inversions for DivideAndConquer<PAR> {
    fn count_and_sort<T: Elem>(&self, items: &mut [T]) -> u64 {
        self.count_with_stats(items).0
    }
}

fn sort_count<T: Elem, const PAR: bool>(
    items: &mut [T],
    scratch: &mut [T],
    stats: &mut MergeStats,
) -> u64 {
    let n = items.len();
    match n {
        0 | 1 => 0,
        2 => {
            stats.base_pairs += 1;
            order_pair(items) as u64
        }
        _ => {
            check!(scratch.len() >= n / 2, "scratch too short for {n} items");
            let mid = n / 2;
            let halves = {
                let (lo, hi) = items.split_at_mut(mid);
                // Each half needs at most half of its own length, and the two
                // requirements together never exceed `mid`.
                let (lo_scratch, hi_scratch) = scratch.split_at_mut(mid / 2);
                if PAR && n >= PAR_THRESHOLD {
                    let mut hi_stats = MergeStats::default();
                    let halves = rayon::join(
                        || sort_count::<T, PAR>(lo, lo_scratch, stats),
                        || sort_count::<T, PAR>(hi, hi_scratch, &mut hi_stats),
                    );
                    *stats += hi_stats;
                    halves
                } else {
                    (
                        sort_count::<T, PAR>(lo, lo_scratch, stats),
                        sort_count::<T, PAR>(hi, hi_scratch, stats),
                    )
                }
            };
            halves.0 + halves.1 + merge(items, mid, scratch, stats)
        }
    }
}

/// Merges the sorted runs `items[..mid]` and `items[mid..]` in place and
/// returns the number of cross-run inversions.
fn merge<T: Elem>(
    items: &mut [T],
    mid: usize,
    scratch: &mut [T],
    stats: &mut MergeStats,
) -> u64 {
    let n = items.len();
    let (n_lo, n_hi) = (mid, n - mid);
    check!(
        n_lo > 0 && (n_hi == n_lo || n_hi == n_lo + 1),
        "malformed split: {n_lo} + {n_hi}"
    );
    check!(scratch.len() >= n_lo, "scratch too short for {n_lo} items");
    check!(
        is_sorted(&items[..mid]) && is_sorted(&items[mid..]),
        "merging unsorted runs"
    );

    if items[mid - 1] <= items[mid] {
        stats.already_ordered += 1;
        return 0;
    }

    // Strict so that ties across the halves are never counted.
    if n_lo == n_hi && items[n - 1] < items[0] {
        trace!("block exchange of two {n_lo} item runs");
        exchange_blocks(items, mid);
        stats.block_exchanges += 1;
        return (n_lo * n_hi) as u64;
    }

    stats.merges += 1;
    // Merge the lower run with the first n_lo items of the upper run. Any
    // surplus upper item is placed afterwards.
    let end = mid + n_lo;
    let lower = &mut scratch[..n_lo];
    lower.copy_from_slice(&items[..mid]);

    let (mut i, mut j, mut k, mut count) = (0, mid, 0, 0);
    while i < n_lo && j < end {
        if lower[i] <= items[j] {
            items[k] = lower[i];
            i += 1;
        } else {
            // Every lower item not yet placed is greater than items[j].
            items[k] = items[j];
            j += 1;
            count += (n_lo - i) as u64;
        }
        k += 1;
    }
    items[k..k + n_lo - i].copy_from_slice(&lower[i..]);

    if n_hi > n_lo {
        let mut p = n - 1;
        while p > 0 && order_pair(&mut items[p - 1..=p]) {
            p -= 1;
            count += 1;
            stats.bubble_swaps += 1;
        }
    }
    count
}

#[cfg(all(test, feature = "inversions"))]
mod tests {
    use super::*;
    use crate::rand::*;
    use quickcheck::quickcheck;
    use std::time::Instant;

    fn test<T: Elem>(counter: impl Inversions, mut items: Vec<T>) {
        let expect = count_pairs(&items);
        let before = Instant::now();
        let count = counter.count_and_sort(&mut items);
        println!("N: {}, elapsed: {:?}", items.len(), before.elapsed());
        assert_eq!(expect, count);
        assert!(is_sorted(&items));
    }

    #[test]
    fn fully_descending() {
        let mut items = [5, 4, 3, 2, 1];
        assert_eq!(count_and_sort(&mut items), 10);
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn already_sorted() {
        let mut items = [1, 2, 3, 4, 5];
        assert_eq!(count_and_sort(&mut items), 0);
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_and_singleton() {
        let mut empty: [i32; 0] = [];
        let (count, stats) = DivideAndConquer::<false>.count_with_stats(&mut empty);
        assert_eq!((count, stats), (0, MergeStats::default()));

        let mut single = [42];
        let (count, stats) = DivideAndConquer::<false>.count_with_stats(&mut single);
        assert_eq!((count, stats), (0, MergeStats::default()));
        assert_eq!(single, [42]);
    }

    #[test]
    fn pair_base_case() {
        let mut items = [2, 1];
        let (count, stats) = DivideAndConquer::<false>.count_with_stats(&mut items);
        assert_eq!(count, 1);
        assert_eq!(stats.base_pairs, 1);
        assert_eq!(items, [1, 2]);
    }

    #[test]
    fn no_double_count_for_lower_remainder() {
        let mut items = [1, 4, 5, 2, 3, 6];
        assert_eq!(count_and_sort(&mut items), 4);
        assert_eq!(items, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn block_exchange() {
        let mut items = [5, 6, 7, 8, 1, 2, 3, 4];
        let (count, stats) = DivideAndConquer::<false>.count_with_stats(&mut items);
        assert_eq!(count, 4 * 4);
        assert_eq!(items, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            stats,
            MergeStats {
                base_pairs: 4,
                already_ordered: 2,
                block_exchanges: 1,
                merges: 0,
                bubble_swaps: 0,
            }
        );
    }

    #[test]
    fn block_exchange_skipped_on_ties() {
        let mut items = [1, 2, 0, 1];
        let (count, stats) = DivideAndConquer::<false>.count_with_stats(&mut items);
        assert_eq!(count, 3);
        assert_eq!(stats.block_exchanges, 0);
        assert_eq!(items, [0, 1, 1, 2]);
    }

    #[test]
    fn block_exchange_only_for_equal_halves() {
        let mut items = [4, 5, 1, 2, 3];
        let (count, stats) = DivideAndConquer::<false>.count_with_stats(&mut items);
        assert_eq!(count, 6);
        assert_eq!(stats.block_exchanges, 0);
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn surplus_bubbles_left() {
        let mut items = [5, 1, 2, 3, 4];
        let (count, stats) = DivideAndConquer::<false>.count_with_stats(&mut items);
        assert_eq!(count, 4);
        assert_eq!(stats.bubble_swaps, 1);
        assert_eq!(items, [1, 2, 3, 4, 5]);

        let mut items = [2, 3, 1];
        assert_eq!(count_and_sort(&mut items), 2);
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn reversed_permutation_is_all_inversions() {
        let n = 10_000u64;
        let mut items: Vec<_> = (0..n).rev().collect();
        assert_eq!(count_and_sort(&mut items), n * (n - 1) / 2);
        assert!(is_sorted(&items));
    }

    #[test]
    fn second_pass_counts_nothing() {
        let mut items = thousand_of(int);
        count_and_sort(&mut items);
        let sorted = items;
        assert_eq!(count_and_sort(&mut items), 0);
        assert_eq!(items, sorted);
    }

    #[test]
    fn brute_force() {
        test(BruteForce, hundred_of(int).to_vec());
        test(BruteForce, thousand_of(int).to_vec());
        test(BruteForce, ten_of(|| range(0..5)).to_vec());
    }

    #[test]
    fn divide_and_conquer() {
        test(DivideAndConquer::<false>, hundred_of(int).to_vec());
        test(DivideAndConquer::<false>, thousand_of(int).to_vec());
        test(DivideAndConquer::<false>, permutation(4321));
        test(DivideAndConquer::<false>, ints(1000, -10..10));
    }

    #[test]
    fn parallel_matches_sequential() {
        let items = permutation(100_000);
        let (mut seq, mut par) = (items.clone(), items);

        let before = Instant::now();
        let (seq_count, seq_stats) = DivideAndConquer::<false>.count_with_stats(&mut seq);
        println!("sequential: {:?}", before.elapsed());

        let before = Instant::now();
        let (par_count, par_stats) = DivideAndConquer::<true>.count_with_stats(&mut par);
        println!("parallel: {:?}", before.elapsed());

        assert_eq!(seq_count, par_count);
        assert_eq!(seq_stats, par_stats);
        assert_eq!(seq, par);
        assert!(is_sorted(&par));
    }

    quickcheck! {
        fn matches_pairwise_count(items: Vec<i8>) -> bool {
            let mut items: Vec<_> = items.into_iter().take(12).collect();
            let expect = count_pairs(&items);
            count_and_sort(&mut items) == expect && is_sorted(&items)
        }

        fn sorts_and_is_idempotent(items: Vec<i32>) -> bool {
            let mut items = items;
            let mut expect = items.clone();
            expect.sort();
            count_and_sort(&mut items);
            items == expect && count_and_sort(&mut items) == 0 && items == expect
        }

        fn strategies_agree(items: Vec<i16>) -> bool {
            let (mut a, mut b) = (items.clone(), items);
            BruteForce.count_and_sort(&mut a) == DivideAndConquer::<true>.count_and_sort(&mut b)
                && a == b
        }
    }
}
