//! Wall-clock timing of each sort on random data.
//!
//! Fills a list with random values in `[1, 99999]` and times every algorithm
//! on its own copy of the same data.
//!
//! Run with:
//!   cargo run --release --features harness --bin perf_intlist_sort
//!   RUST_LOG=debug cargo run --release --features harness --bin perf_intlist_sort

use std::time::Instant;

use nexus_intlist::{IntList, SortAlgorithm};
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

const COUNT: usize = 100_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = rand::rng();
    let mut source = IntList::new(COUNT as isize).expect("non-negative capacity");
    for _ in 0..COUNT {
        source.add(rng.random_range(1..=99_999));
    }
    info!(count = COUNT, "generated input");

    for algorithm in SortAlgorithm::ALL {
        let mut list = source.clone();

        let start = Instant::now();
        let sorted = list.sort(algorithm);
        let elapsed = start.elapsed();

        info!(
            algorithm = algorithm.name(),
            elapsed_ms = elapsed.as_millis() as u64,
            min = sorted.first(),
            max = sorted.last(),
            "sorted"
        );
    }
}
