use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use inversion_count::{
    inversions::{self, DivideAndConquer, Inversions},
    load,
    window::{self, MaxWindowSum, WindowAverages},
};

#[derive(Parser)]
#[clap(version, about = "Count inversions and windowed sums of integer files")]
enum Cli {
    /// Count the inversions in a file of integers
    Count {
        file: PathBuf,
        /// Split large halves across threads
        #[clap(long, conflicts_with = "brute_force")]
        parallel: bool,
        /// Compare every pair instead of merging
        #[clap(long)]
        brute_force: bool,
        /// Print the sorted array afterwards
        #[clap(long)]
        dump: bool,
    },
    /// Find the width K window with the largest sum
    Window {
        file: PathBuf,
        #[clap(short)]
        k: usize,
        /// Sum every window from scratch
        #[clap(long)]
        brute_force: bool,
        /// Also print the mean of every window
        #[clap(long)]
        averages: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse() {
        Cli::Count {
            file,
            parallel,
            brute_force,
            dump,
        } => {
            let mut ints = load::load(&file)?;
            let count = if brute_force {
                inversions::BruteForce.count_and_sort(&mut ints)
            } else if parallel {
                DivideAndConquer::<true>.count_and_sort(&mut ints)
            } else {
                DivideAndConquer::<false>.count_and_sort(&mut ints)
            };
            println!("# of inversions: {count}");
            if dump {
                for (i, int) in ints.iter().enumerate() {
                    println!("[{i}]: {int}");
                }
            }
        }
        Cli::Window {
            file,
            k,
            brute_force,
            averages,
        } => {
            let ints = load::load(&file)?;
            let best = if brute_force {
                window::BruteForce.max_window_sum(&ints, k)
            } else {
                window::Sliding.max_window_sum(&ints, k)
            }
            .with_context(|| format!("no width {k} window in {}", file.display()))?;
            println!("max sum {} at {}", best.sum, best.start);
            if averages {
                let averages = if brute_force {
                    window::BruteForce.window_averages(&ints, k)
                } else {
                    window::Sliding.window_averages(&ints, k)
                }?;
                for (i, avg) in averages.iter().enumerate() {
                    println!("{i}: avg={avg}");
                }
            }
        }
    }

    Ok(())
}
