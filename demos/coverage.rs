//! Statistics over many generated tickets: duplicate rate and how often
//! the degenerate fully-blank column shows up.
//!
//! Three independent blank-column draws over 5 columns leave a column
//! blank in all rows with probability 5 * (1/5)^3 = 1/25 per ticket.
//!
//! Usage: cargo run --release --example coverage -- [samples] [seed]

use loto_tickets::{Generator, Ticket};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let samples: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    println!("=== Ticket Generation Statistics ===");
    println!("samples = {}, seed = {}", samples, seed);
    println!();

    let rng = ChaCha20Rng::seed_from_u64(seed);
    let generator = Generator::new(rng);

    let mut unique: HashSet<Ticket> = HashSet::new();
    let mut duplicates = 0usize;
    let mut with_blank_column = 0usize;
    let mut blank_rows_per_column = [0usize; Ticket::COLS];

    let start = Instant::now();
    for ticket in generator.take(samples) {
        if !unique.insert(ticket) {
            duplicates += 1;
        }

        let mut has_blank_column = false;
        for c in 0..Ticket::COLS {
            let blanks = (0..Ticket::ROWS)
                .filter(|&r| ticket.get(r, c).is_none())
                .count();
            blank_rows_per_column[c] += blanks;
            if blanks == Ticket::ROWS {
                has_blank_column = true;
            }
        }
        if has_blank_column {
            with_blank_column += 1;
        }
    }
    let elapsed = start.elapsed().as_secs_f64();

    println!("=== Results ===");
    println!("Unique tickets: {}", unique.len());
    println!(
        "Duplicates: {} ({:.4}%)",
        duplicates,
        100.0 * duplicates as f64 / samples as f64
    );
    println!(
        "Tickets with a fully blank column: {} ({:.2}%, expected ~4%)",
        with_blank_column,
        100.0 * with_blank_column as f64 / samples as f64
    );
    println!();
    println!("Blank cells per column (expected ~{} each):", 3 * samples / 5);
    for (c, &blanks) in blank_rows_per_column.iter().enumerate() {
        println!("  column {}: {}", c, blanks);
    }
    println!();
    println!("Elapsed time: {:.2}s", elapsed);
}
