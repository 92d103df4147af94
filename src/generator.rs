use crate::Ticket;
use rand::Rng;
use rand::seq::index;

/// Generates one random lotto ticket.
///
/// Every row gets a blank column chosen uniformly and independently, so
/// the same column may be blanked in several rows (up to all three). Each
/// column then draws as many distinct values as it has non-blank rows,
/// without replacement from its decade, and hands them out in random
/// order. With at most 3 values needed out of 9 or 10 available, a draw
/// can never run dry, so this function is total.
///
/// The output is deterministic given the same RNG state.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Ticket {
    let mut blank_cols = [0usize; Ticket::ROWS];
    for slot in &mut blank_cols {
        *slot = rng.random_range(0..Ticket::COLS);
    }

    let mut cells = [None; Ticket::ROWS * Ticket::COLS];
    for col in 0..Ticket::COLS {
        let mut rows = [0usize; Ticket::ROWS];
        let mut row_count = 0;
        for (row, &blank) in blank_cols.iter().enumerate() {
            if blank != col {
                rows[row_count] = row;
                row_count += 1;
            }
        }
        if row_count == 0 {
            continue;
        }

        // index::sample returns distinct indices in random order, which
        // covers both the without-replacement draw and the shuffled
        // assignment of values to rows.
        let range = Ticket::column_range(col);
        let low = *range.start();
        let span = (range.end() - low + 1) as usize;
        let picks = index::sample(rng, span, row_count);
        for (&row, pick) in rows[..row_count].iter().zip(picks.iter()) {
            cells[row * Ticket::COLS + col] = Some(low + pick as u8);
        }
    }

    Ticket::from_cells(cells)
}

/// An infinite iterator of random lotto tickets over an owned RNG.
///
/// # Example
///
/// ```
/// use loto_tickets::Generator;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let rng = ChaCha20Rng::seed_from_u64(0);
/// for ticket in Generator::new(rng).take(10) {
///     println!("{:?}", ticket.row(0));
/// }
/// ```
pub struct Generator<R> {
    rng: R,
}

impl<R: Rng> Generator<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Iterator for Generator<R> {
    type Item = Ticket;

    fn next(&mut self) -> Option<Self::Item> {
        Some(generate(&mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn generated_tickets_are_well_formed() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for i in 0..500 {
            let t = generate(&mut rng);
            assert!(t.is_well_formed(), "ticket {} violates an invariant", i);
        }
    }

    #[test]
    fn every_row_has_four_values_and_one_blank() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for _ in 0..100 {
            let t = generate(&mut rng);
            for r in 0..Ticket::ROWS {
                let filled = t.row(r).iter().filter(|cell| cell.is_some()).count();
                assert_eq!(filled, 4, "row {} of {:?}", r, t);
            }
        }
    }

    #[test]
    fn column_values_stay_in_range_and_distinct() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        for _ in 0..100 {
            let t = generate(&mut rng);
            for c in 0..Ticket::COLS {
                let range = Ticket::column_range(c);
                let values: Vec<u8> = (0..Ticket::ROWS).filter_map(|r| t.get(r, c)).collect();
                for &v in &values {
                    assert!(range.contains(&v), "value {} outside column {}", v, c);
                }
                for i in 0..values.len() {
                    for j in i + 1..values.len() {
                        assert_ne!(values[i], values[j], "duplicate in column {}", c);
                    }
                }
            }
        }
    }

    #[test]
    fn every_column_reaches_both_ends_of_its_decade() {
        // Each filled cell is uniform over its column's 9 or 10 values, and
        // 2000 tickets give a column ~4800 draws, so both endpoints show up
        // with near certainty. Guards against a draw span narrower than the
        // column range, which would make values like 19 or 46-49 unreachable.
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let mut min_seen = [u8::MAX; Ticket::COLS];
        let mut max_seen = [0u8; Ticket::COLS];
        for _ in 0..2_000 {
            let t = generate(&mut rng);
            for c in 0..Ticket::COLS {
                for r in 0..Ticket::ROWS {
                    if let Some(v) = t.get(r, c) {
                        min_seen[c] = min_seen[c].min(v);
                        max_seen[c] = max_seen[c].max(v);
                    }
                }
            }
        }
        for c in 0..Ticket::COLS {
            let range = Ticket::column_range(c);
            assert_eq!(min_seen[c], *range.start(), "column {} floor never drawn", c);
            assert_eq!(max_seen[c], *range.end(), "column {} ceiling never drawn", c);
        }
    }

    #[test]
    fn reproducibility_same_seed_same_output() {
        let mut rng1 = ChaCha20Rng::seed_from_u64(0);
        let t1 = generate(&mut rng1);

        let mut rng2 = ChaCha20Rng::seed_from_u64(0);
        let t2 = generate(&mut rng2);

        assert_eq!(t1, t2, "Same seed should produce identical tickets");
    }

    #[test]
    fn different_seed_different_output_smoke() {
        for offset in 0u64..5 {
            let mut rng1 = ChaCha20Rng::seed_from_u64(offset);
            let t1 = generate(&mut rng1);

            let mut rng2 = ChaCha20Rng::seed_from_u64(offset + 100);
            let t2 = generate(&mut rng2);

            if t1 != t2 {
                return; // Success: found different outputs
            }
        }
        panic!("All tested seed pairs produced identical tickets (extremely unlikely)");
    }

    #[test]
    fn iterator_reproducibility() {
        let gen1 = Generator::new(ChaCha20Rng::seed_from_u64(0));
        let gen2 = Generator::new(ChaCha20Rng::seed_from_u64(0));

        let tickets1: Vec<_> = gen1.take(10).collect();
        let tickets2: Vec<_> = gen2.take(10).collect();

        assert_eq!(
            tickets1, tickets2,
            "Same seed should produce identical sequence"
        );
    }

    #[test]
    fn iterator_matches_repeated_one_shot_calls() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let direct: Vec<_> = (0..5).map(|_| generate(&mut rng)).collect();

        let iterated: Vec<_> = Generator::new(ChaCha20Rng::seed_from_u64(3)).take(5).collect();
        assert_eq!(direct, iterated);
    }

    #[test]
    fn fully_blank_column_is_reachable() {
        // Three independent draws over 5 columns agree with probability
        // 1/25 per ticket, so a few thousand samples find one reliably.
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        for _ in 0..10_000 {
            let t = generate(&mut rng);
            for c in 0..Ticket::COLS {
                if (0..Ticket::ROWS).all(|r| t.get(r, c).is_none()) {
                    return;
                }
            }
        }
        panic!("no fully blank column in 10k tickets (probability ~1/25 each)");
    }
}
