//! Generate a batch of tickets and print it to stdout.
//!
//! Usage: cargo run --release --example generate -- [count] [seed]
//!
//! Example:
//!   cargo run --release --example generate -- 40 42

use loto_tickets::{BatchParams, generate_batch, render_batch_boxed};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(40);
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let params = BatchParams {
        count,
        ..Default::default()
    };
    let batch = generate_batch(&mut rng, &params);

    println!("{}", render_batch_boxed(&batch));
    if batch.len() < count {
        eprintln!(
            "warning: attempt budget exhausted, got {} of {} tickets",
            batch.len(),
            count
        );
    }
}
