pub mod inversions;
pub mod load;
pub mod pair;
pub mod rand;
pub mod window;

pub use inversions::count_and_sort;
pub use window::{max_window_sum, max_window_sum_bruteforce};
