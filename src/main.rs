//! Demonstration driver
//!
//! Fills a heap with random integers, dumps its array layout and reports the
//! k-th smallest element.
//!
//! ```bash
//! cargo run --bin heap-demo -- --count 20 --k 5 --seed 7 --pretty
//! RUST_LOG=debug cargo run --bin heap-demo
//! ```

use array_min_heap::display::{print_array, print_pretty};
use array_min_heap::BinaryHeap;
use clap::Parser;
use env_logger::Env;
use log::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(about = "Push random integers into a min-heap and report the k-th smallest element")]
struct Cli {
    /// How many random integers to push
    #[arg(short = 'n', long, default_value_t = 1000)]
    count: usize,
    /// Which smallest element to report (1-based)
    #[arg(short, long, default_value_t = 5)]
    k: usize,
    /// Inclusive upper bound for the random values (lower bound is 1)
    #[arg(short, long, default_value_t = 1_000_000)]
    max_value: u32,
    /// Seed for the random source; picked at random when absent
    #[arg(short, long)]
    seed: Option<u64>,
    /// Print the tree level by level instead of one element per line
    #[arg(short, long)]
    pretty: bool,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if cli.max_value == 0 {
        return Err("max-value must be at least 1".into());
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("seeding random source with {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut heap = BinaryHeap::new();
    for _ in 0..cli.count {
        heap.push(rng.gen_range(1..=cli.max_value));
    }
    debug!("pushed {} values, minimum {:?}", heap.len(), heap.peek().ok());

    if cli.pretty {
        print_pretty(&heap)?;
    } else {
        print_array(&heap)?;
    }

    let kth = heap.kth_smallest(cli.k)?;
    info!("{}", rank_summary(cli.k, heap.len()));
    println!("{}", kth);
    Ok(())
}

fn rank_summary(k: usize, len: usize) -> String {
    format!("smallest element #{} of {} values", k, len)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    debug!("{:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
