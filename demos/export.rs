//! Write a batch of tickets to a plain-text document.
//!
//! Usage: cargo run --release --example export -- <path> [count] [seed]
//!
//! Example:
//!   cargo run --release --example export -- tickets.txt 40 42

use loto_tickets::{BatchParams, generate_batch, render_batch_plain};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let path = args.get(1).cloned().unwrap_or_else(|| {
        eprintln!("Usage: {} <path> [count] [seed]", args[0]);
        process::exit(1);
    });
    let count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(40);
    let seed: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0);

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let params = BatchParams {
        count,
        ..Default::default()
    };
    let batch = generate_batch(&mut rng, &params);

    let document = format!(
        "Generated lotto tickets\n\n{}\n",
        render_batch_plain(&batch)
    );
    if let Err(e) = fs::write(&path, document) {
        eprintln!("Failed to write {}: {}", path, e);
        process::exit(1);
    }

    println!("Wrote {} tickets to {}", batch.len(), path);
}
