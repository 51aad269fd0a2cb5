use crate::pair::edges;
use log::debug;
use num_traits::ToPrimitive;
use std::{
    iter::Sum,
    ops::{AddAssign, SubAssign},
};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    #[error("cannot place a window over an empty sequence")]
    Empty,
    #[error("window width must be at least 1")]
    ZeroWidth,
    #[error("window sum has no f64 representation")]
    NotRepresentable,
}

/// Sum of the best window and the index it starts at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window<S> {
    pub sum: S,
    pub start: usize,
}

fn validate<T>(items: &[T], k: usize) -> Result<(), WindowError> {
    if items.is_empty() {
        Err(WindowError::Empty)
    } else if k == 0 {
        Err(WindowError::ZeroWidth)
    } else {
        Ok(())
    }
}

pub trait MaxWindowSum<T> {
    /// Largest sum over all width `k` windows, with the first window that
    /// reaches it. A `k` at or past the length covers the whole sequence.
    fn max_window_sum(&self, items: &[T], k: usize) -> Result<Window<T>, WindowError>;
}

pub trait WindowAverages<T> {
    /// Mean of every width `k` window in start order.
    fn window_averages(&self, items: &[T], k: usize) -> Result<Vec<f64>, WindowError>;
}

pub struct BruteForce;

impl<T> MaxWindowSum<T> for BruteForce
where
    T: PartialOrd + for<'a> Sum<&'a T>,
{
    fn max_window_sum(&self, items: &[T], k: usize) -> Result<Window<T>, WindowError> {
        validate(items, k)?;
        let windows = items.windows(k.min(items.len())).zip(0..);
        windows
            .map(|(window, start)| Window {
                sum: window.iter().sum(),
                start,
            })
            .reduce(|best, window| if window.sum > best.sum { window } else { best })
            .ok_or(WindowError::Empty)
    }
}

impl<T> WindowAverages<T> for BruteForce
where
    T: ToPrimitive + for<'a> Sum<&'a T>,
{
    fn window_averages(&self, items: &[T], k: usize) -> Result<Vec<f64>, WindowError> {
        validate(items, k)?;
        let k = k.min(items.len());
        items
            .windows(k)
            .map(|window| mean(&window.iter().sum::<T>(), k))
            .collect()
    }
}

/// Keeps one running sum and moves it along by dropping the left edge and
/// adding the new right edge.
pub struct Sliding;

impl<T> MaxWindowSum<T> for Sliding
where
    T: Clone
        + PartialOrd
        + for<'a> Sum<&'a T>
        + for<'a> AddAssign<&'a T>
        + for<'a> SubAssign<&'a T>,
{
    fn max_window_sum(&self, items: &[T], k: usize) -> Result<Window<T>, WindowError> {
        validate(items, k)?;
        if k >= items.len() {
            return Ok(Window {
                sum: items.iter().sum(),
                start: 0,
            });
        }

        let mut sum: T = items[..k].iter().sum();
        let mut best = Window {
            sum: sum.clone(),
            start: 0,
        };
        for ((leaving, entering), start) in edges(items, k).zip(1..) {
            sum -= leaving;
            sum += entering;
            if sum > best.sum {
                best = Window {
                    sum: sum.clone(),
                    start,
                };
            }
        }
        Ok(best)
    }
}

impl<T> WindowAverages<T> for Sliding
where
    T: ToPrimitive + for<'a> Sum<&'a T> + for<'a> AddAssign<&'a T> + for<'a> SubAssign<&'a T>,
{
    fn window_averages(&self, items: &[T], k: usize) -> Result<Vec<f64>, WindowError> {
        validate(items, k)?;
        let k = k.min(items.len());
        let mut sum: T = items[..k].iter().sum();
        let mut averages = Vec::with_capacity(items.len() - k + 1);
        averages.push(mean(&sum, k)?);
        for (leaving, entering) in edges(items, k) {
            sum -= leaving;
            sum += entering;
            averages.push(mean(&sum, k)?);
        }
        Ok(averages)
    }
}

fn mean<T: ToPrimitive>(sum: &T, k: usize) -> Result<f64, WindowError> {
    sum.to_f64()
        .map(|sum| sum / k as f64)
        .ok_or(WindowError::NotRepresentable)
}

pub fn max_window_sum<T>(items: &[T], k: usize) -> Result<Window<T>, WindowError>
where
    T: Clone
        + PartialOrd
        + for<'a> Sum<&'a T>
        + for<'a> AddAssign<&'a T>
        + for<'a> SubAssign<&'a T>,
{
    let best = Sliding.max_window_sum(items, k);
    if let Ok(window) = &best {
        debug!(
            "best width {k} window over {} items starts at {}",
            items.len(),
            window.start
        );
    }
    best
}

pub fn max_window_sum_bruteforce<T>(items: &[T], k: usize) -> Result<Window<T>, WindowError>
where
    T: PartialOrd + for<'a> Sum<&'a T>,
{
    BruteForce.max_window_sum(items, k)
}
