//! Per-operation `add` latency, showing growth spikes.
//!
//! Compares the two growth policies starting from a small capacity, so most
//! adds are plain stores and a few pay for reallocation-and-copy.
//!
//! Run with:
//!   cargo build --release --bench perf_add_latency
//!   taskset -c 0 ./target/release/deps/perf_add_latency-*

use hdrhistogram::Histogram;
use nexus_intlist::{GrowthPolicy, IntList, ListConfig};
use std::hint::black_box;

const WARMUP: usize = 10_000;
const ITERATIONS: usize = 1_000_000;
const INITIAL_CAPACITY: isize = 16;

#[inline(always)]
fn rdtscp() -> u64 {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        let mut aux: u32 = 0;
        std::arch::x86_64::__rdtscp(&mut aux)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        use std::time::Instant;
        static START: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();
        START.get_or_init(Instant::now).elapsed().as_nanos() as u64
    }
}

fn print_stats(name: &str, hist: &Histogram<u64>, list: &IntList) {
    println!("{} (final capacity {})", name, list.capacity());
    println!("  min:  {:>8} cycles", hist.min());
    println!("  p50:  {:>8} cycles", hist.value_at_quantile(0.50));
    println!("  p99:  {:>8} cycles", hist.value_at_quantile(0.99));
    println!("  p999: {:>8} cycles", hist.value_at_quantile(0.999));
    println!("  max:  {:>8} cycles", hist.max());
    println!("  avg:  {:>8.0} cycles", hist.mean());
}

fn bench_add(growth: GrowthPolicy) -> (Histogram<u64>, IntList) {
    let config = ListConfig::default()
        .with_initial_capacity(INITIAL_CAPACITY)
        .with_growth(growth);

    // Warmup on a throwaway list
    let mut warm = IntList::with_config(config).unwrap();
    for i in 0..WARMUP as i32 {
        black_box(warm.add(i));
    }
    drop(warm);

    let mut list = IntList::with_config(config).unwrap();
    let mut hist = Histogram::<u64>::new(3).unwrap();

    for i in 0..ITERATIONS as i32 {
        let start = rdtscp();
        black_box(list.add(i));
        let end = rdtscp();
        let _ = hist.record(end.wrapping_sub(start));
    }

    (hist, list)
}

fn main() {
    println!("ADD latency by growth policy ({} ops)", ITERATIONS);
    println!("========================================");
    println!();

    let (double_hist, double_list) = bench_add(GrowthPolicy::Double);
    let (half_hist, half_list) = bench_add(GrowthPolicy::OneAndHalf);

    print_stats("double:", &double_hist, &double_list);
    println!();
    print_stats("one-and-half:", &half_hist, &half_list);
}
