//! Line clearing
//!
//! Rows are scanned bottom to top. A full row is removed (everything above
//! falls one row) and the same index is scanned again, since the row that slid
//! into it may be full too. Each row above a clear therefore falls by exactly the
//! number of cleared rows below it.

use crate::board::Board;

/// Cleared row indices, as they were before the clear, bottom to top
pub type ClearedRows = Vec<usize>;

/// Remove every full row and report which ones went.
///
/// A lock completes at most four rows, but a board filled through
/// [`Board::set_cell`] may hold any number; all of them are cleared.
pub fn clear_lines(board: &mut Board) -> ClearedRows {
    let mut cleared = ClearedRows::new();
    let mut y = board.height() as usize;

    while y > 0 {
        let row = y - 1;
        if board.is_row_full(row) {
            // Rows above `row` have already moved down by `cleared.len()`.
            cleared.push(row - cleared.len());
            board.remove_row(row);
        } else {
            y -= 1;
        }
    }

    cleared
}
