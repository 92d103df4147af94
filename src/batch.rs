use crate::Ticket;
use crate::generator::generate;
use rand::Rng;
use std::collections::HashSet;

/// Parameters for batch assembly.
#[derive(Debug, Clone)]
pub struct BatchParams {
    /// Number of distinct tickets requested.
    pub count: usize,
    /// Generation attempts allowed per requested ticket.
    ///
    /// The total attempt budget is `count * attempts_per_ticket`. Once it
    /// is spent, the batch is returned as-is, possibly short.
    pub attempts_per_ticket: usize,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            count: 40,
            attempts_per_ticket: 100,
        }
    }
}

/// Assembles a batch of pairwise-distinct tickets.
///
/// Tickets are generated one at a time and deduplicated structurally; a
/// duplicate costs an attempt but adds nothing. The loop stops when
/// `params.count` distinct tickets have been collected or the attempt
/// budget is exhausted, whichever comes first, so the result may hold
/// fewer than `count` tickets. Callers that need a stable display order
/// should number tickets at render time, not rely on batch order.
///
/// Never fails: a short batch is the only degraded outcome.
pub fn generate_batch<R: Rng + ?Sized>(rng: &mut R, params: &BatchParams) -> Vec<Ticket> {
    let budget = params.count.saturating_mul(params.attempts_per_ticket);
    let mut seen: HashSet<Ticket> = HashSet::with_capacity(params.count);
    let mut batch = Vec::with_capacity(params.count);

    let mut attempts = 0;
    while batch.len() < params.count && attempts < budget {
        let ticket = generate(rng);
        if seen.insert(ticket) {
            batch.push(ticket);
        }
        attempts += 1;
    }

    batch
}
