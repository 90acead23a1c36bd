//! Per-position selection counts: Algorithm D vs Algorithm S.
//!
//! Samples `n` of `total` many times with each sampler, then prints how often
//! each position was picked alongside the wall time per sampler. Every count
//! should hover around `trials * n / total`.
//!
//! Usage: `cargo run --example position_counts -- [total] [n] [trials]`
//! (set `RUST_LOG=seqsample=trace` to watch strategy switches).

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seqsample::{SelectionSampler, SequentialSampler};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let total: usize = args.next().map(|a| a.parse()).transpose()?.unwrap_or(20);
    let n: usize = args.next().map(|a| a.parse()).transpose()?.unwrap_or(5);
    let trials: usize = args.next().map(|a| a.parse()).transpose()?.unwrap_or(100_000);

    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    let mut counts_d = vec![0usize; total];
    let start = Instant::now();
    for _ in 0..trials {
        for i in SequentialSampler::with_rng(0..total, n, total, &mut rng)? {
            counts_d[i] += 1;
        }
    }
    let elapsed_d = start.elapsed();

    let mut counts_s = vec![0usize; total];
    let start = Instant::now();
    for _ in 0..trials {
        for i in SelectionSampler::with_rng(0..total, n, total, &mut rng)? {
            counts_s[i] += 1;
        }
    }
    let elapsed_s = start.elapsed();

    let expected = trials as f64 * n as f64 / total as f64;
    println!("sampling {n} of {total}, {trials} trials (expected count {expected:.1})");
    println!("algorithm D: {elapsed_d:?}");
    println!("algorithm S: {elapsed_s:?}");
    println!();
    println!("{:>8}  {:>10}  {:>10}", "position", "D", "S");
    for (i, (d, s)) in counts_d.iter().zip(&counts_s).enumerate() {
        println!("{i:>8}  {d:>10}  {s:>10}");
    }

    Ok(())
}
