//! Line-oriented text renderings of tickets and batches.
//!
//! Two framings share the same grid body: a boxed one with rule lines for
//! on-screen preview, and a plain one for embedding in a document. Blank
//! cells render as `--` so column alignment survives in both.

use crate::Ticket;

/// Width of one rendered cell. The largest value is 49, so two digits.
const CELL_WIDTH: usize = 2;
/// Full width of a rendered row: 5 cells plus 4 separating spaces.
const BODY_WIDTH: usize = Ticket::COLS * CELL_WIDTH + (Ticket::COLS - 1);

const BLANK: &str = "--";

/// Renders the ticket body: one line per row, cells right-justified to
/// width 2, joined by single spaces, blanks as `--`.
pub fn render_ticket(ticket: &Ticket) -> String {
    let mut out = String::new();
    for r in 0..Ticket::ROWS {
        if r > 0 {
            out.push('\n');
        }
        for (c, cell) in ticket.row(r).iter().enumerate() {
            if c > 0 {
                out.push(' ');
            }
            match cell {
                Some(v) => out.push_str(&format!("{:>CELL_WIDTH$}", v)),
                None => out.push_str(BLANK),
            }
        }
    }
    out
}

/// Renders a ticket with a numbered header and rule lines around the body.
pub fn render_boxed(ticket: &Ticket, index: usize) -> String {
    let rule = "-".repeat(BODY_WIDTH);
    format!("Ticket #{}\n{}\n{}\n{}", index, rule, render_ticket(ticket), rule)
}

/// Renders a ticket with a numbered header and no framing rules.
pub fn render_plain(ticket: &Ticket, index: usize) -> String {
    format!("Ticket #{}\n{}", index, render_ticket(ticket))
}

/// Renders a whole batch in boxed form, tickets separated by a blank
/// line, with 1-based display indices assigned in sequence order.
pub fn render_batch_boxed(batch: &[Ticket]) -> String {
    render_batch(batch, render_boxed)
}

/// Renders a whole batch in plain form, tickets separated by a blank
/// line, with 1-based display indices assigned in sequence order.
pub fn render_batch_plain(batch: &[Ticket]) -> String {
    render_batch(batch, render_plain)
}

fn render_batch(batch: &[Ticket], render_one: fn(&Ticket, usize) -> String) -> String {
    let mut out = String::new();
    for (i, ticket) in batch.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&render_one(ticket, i + 1));
    }
    out
}
