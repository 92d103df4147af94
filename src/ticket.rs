use std::ops::RangeInclusive;

/// A single lotto ticket: a 3 x 5 grid of cells.
///
/// Each cell either holds a number or is blank. Every row has exactly 4
/// numbers and 1 blank, and the numbers in column `c` come from a fixed
/// disjoint decade (1-9 for column 0, then 10-19 up to 40-49) with no
/// repeats within the column.
///
/// Equality and hashing are structural over the full grid, blanks
/// included, so tickets can be deduplicated through a `HashSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    cells: [Option<u8>; Self::ROWS * Self::COLS],
}

impl Ticket {
    /// Number of rows in a ticket.
    pub const ROWS: usize = 3;
    /// Number of columns in a ticket.
    pub const COLS: usize = 5;

    pub(crate) fn from_cells(cells: [Option<u8>; Self::ROWS * Self::COLS]) -> Self {
        Self { cells }
    }

    /// Returns the value range for column `c`: 1-9 for column 0, then the
    /// decade `10c ..= 10c+9`.
    ///
    /// # Panics
    /// Panics if `c >= 5`.
    pub fn column_range(c: usize) -> RangeInclusive<u8> {
        assert!(c < Self::COLS, "column index out of bounds");
        let low = if c == 0 { 1 } else { 10 * c as u8 };
        low..=10 * c as u8 + 9
    }

    /// Returns the cell at position `(r, c)`, `None` meaning blank.
    ///
    /// # Panics
    /// Panics if `r >= 3` or `c >= 5`.
    pub fn get(&self, r: usize, c: usize) -> Option<u8> {
        assert!(r < Self::ROWS && c < Self::COLS, "index out of bounds");
        self.cells[r * Self::COLS + c]
    }

    /// Returns the cells as a flat slice in row-major order.
    ///
    /// The cell at position (r, c) is at index `r * 5 + c`.
    pub fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }

    /// Returns the cells of row `r`.
    ///
    /// # Panics
    /// Panics if `r >= 3`.
    pub fn row(&self, r: usize) -> &[Option<u8>] {
        assert!(r < Self::ROWS, "row index out of bounds");
        &self.cells[r * Self::COLS..(r + 1) * Self::COLS]
    }

    /// Returns true if the grid satisfies every ticket invariant.
    ///
    /// This is a test-only helper for validation. The invariants are
    /// enforced by construction in the generator.
    #[cfg(test)]
    pub(crate) fn is_well_formed(&self) -> bool {
        // Each row: exactly one blank cell
        for r in 0..Self::ROWS {
            let blanks = self.row(r).iter().filter(|cell| cell.is_none()).count();
            if blanks != 1 {
                return false;
            }
        }
        // Each column: values in range, pairwise distinct
        for c in 0..Self::COLS {
            let range = Self::column_range(c);
            let mut seen = [false; 10];
            for r in 0..Self::ROWS {
                let Some(v) = self.get(r, c) else {
                    continue;
                };
                if !range.contains(&v) {
                    return false;
                }
                let slot = (v - range.start()) as usize;
                if seen[slot] {
                    return false;
                }
                seen[slot] = true;
            }
        }
        true
    }
}
