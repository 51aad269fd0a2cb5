use rand::{distributions::uniform::SampleUniform, prelude::*};
use std::{array, cell::RefCell, ops::Range};

fn array_of<T, const N: usize>(mut randomizer: impl FnMut() -> T) -> [T; N] {
    array::from_fn(|_| randomizer())
}

pub fn ten_of<T>(randomizer: impl FnMut() -> T) -> [T; 10] {
    array_of(randomizer)
}

pub fn hundred_of<T>(randomizer: impl FnMut() -> T) -> [T; 100] {
    array_of(randomizer)
}

pub fn thousand_of<T>(randomizer: impl FnMut() -> T) -> [T; 1000] {
    array_of(randomizer)
}

thread_local! {
    static RNG: RefCell<ThreadRng> = RefCell::new(thread_rng());
}

pub fn int() -> i32 {
    RNG.with_borrow_mut(|rng| rng.gen())
}

pub fn range<T: SampleUniform + PartialOrd>(range: Range<T>) -> T {
    RNG.with_borrow_mut(|rng| rng.gen_range(range))
}

/// `n` integers drawn from `range`, repeats allowed.
pub fn ints(n: usize, range: Range<i64>) -> Vec<i64> {
    RNG.with_borrow_mut(|rng| (0..n).map(|_| rng.gen_range(range.clone())).collect())
}

/// `1..=n` in random order.
pub fn permutation(n: usize) -> Vec<i64> {
    let mut ints: Vec<i64> = (1..=n as i64).collect();
    RNG.with_borrow_mut(|rng| ints.shuffle(rng));
    ints
}
