//! Placement module - collision, drop projection and locking
//!
//! Collision rules for every mino at board coordinates (x, y):
//!
//! - `x < 0` or `x >= width` always collides, even above the board
//! - `y >= height` collides (floor)
//! - `y >= 0` collides when the board cell is occupied
//!
//! Minos with `y < 0` never touch board contents, so a piece may stick out above
//! the visible grid.

use crate::board::Board;
use crate::pieces::Tetromino;

/// Whether `piece` overlaps a wall, the floor or a filled cell
pub fn collides(piece: &Tetromino, board: &Board) -> bool {
    let width = board.width() as i8;
    let height = board.height() as i8;
    piece.cells().any(|(x, y)| {
        if x < 0 || x >= width {
            return true;
        }
        if y >= height {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}

/// Lowest legal `y` for `piece` dropped straight down.
///
/// Steps down until the piece collides, then backs up one row. A piece that
/// already collides (a blocked spawn) projects onto its own row.
pub fn project_drop(piece: &Tetromino, board: &Board) -> i8 {
    if collides(piece, board) {
        return piece.y;
    }

    let mut probe = *piece;
    while !collides(&probe, board) {
        probe.y += 1;
    }
    probe.y - 1
}

/// Copy of `piece` at its projected resting row (ghost / hard-drop target)
pub fn drop_target(piece: &Tetromino, board: &Board) -> Tetromino {
    Tetromino {
        y: project_drop(piece, board),
        ..*piece
    }
}

/// Stamp `piece` into the board.
///
/// Minos above the board (`y < 0`) are dropped. The caller must have checked the
/// position with [`collides`]; locking over a wall is a bug and panics.
/// Returns how many minos ended up above the board.
pub fn lock_piece(piece: &Tetromino, board: &mut Board) -> usize {
    let mut hidden = 0;
    for (x, y) in piece.cells() {
        if y < 0 {
            hidden += 1;
            continue;
        }
        board.set_cell(x, y, piece.kind);
    }
    hidden
}

/// Whether the piece rests on something (cannot move one row down)
pub fn is_grounded(piece: &Tetromino, board: &Board) -> bool {
    collides(&piece.shifted(0, 1), board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rotation};

    #[test]
    fn test_spawn_does_not_collide_on_empty_board() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(!collides(&Tetromino::new(kind), &board));
        }
    }

    #[test]
    fn test_walls_collide() {
        let board = Board::new();
        let mut piece = Tetromino::new(PieceKind::O);
        // O occupies bitmap columns 0 and 1
        piece.x = -1;
        assert!(collides(&piece, &board));
        piece.x = 8;
        assert!(!collides(&piece, &board));
        piece.x = 9;
        assert!(collides(&piece, &board));
    }

    #[test]
    fn test_wall_check_applies_above_board() {
        let board = Board::new();
        let piece = Tetromino::spawn_at(PieceKind::O, -1, -5);
        assert!(collides(&piece, &board));
        let piece = Tetromino::spawn_at(PieceKind::O, 0, -5);
        assert!(!collides(&piece, &board));
    }

    #[test]
    fn test_cells_above_board_ignore_contents() {
        let mut board = Board::new();
        board.set_cell(0, 0, PieceKind::Z);
        // I vertical at x=-2 puts its minos in column 0, rows -1..=2
        let piece = Tetromino {
            kind: PieceKind::I,
            rotation: Rotation::East,
            x: -2,
            y: -4,
        };
        assert_eq!(piece.cells().map(|(_, y)| y).max(), Some(-1));
        assert!(!collides(&piece, &board));
        assert!(collides(&piece.shifted(0, 1), &board));
    }

    #[test]
    fn test_floor_collides() {
        let board = Board::new();
        let piece = Tetromino::spawn_at(PieceKind::O, 4, 18);
        assert!(!collides(&piece, &board));
        assert!(collides(&piece.shifted(0, 1), &board));
    }

    #[test]
    fn test_project_drop_empty_board() {
        let board = Board::new();
        // I north: minos on bitmap row 1, so it rests with y = 18
        let piece = Tetromino::new(PieceKind::I);
        assert_eq!(project_drop(&piece, &board), 18);
        let piece = Tetromino::new(PieceKind::T);
        assert_eq!(project_drop(&piece, &board), 18);
    }

    #[test]
    fn test_project_drop_onto_stack() {
        let mut board = Board::new();
        board.set_cell(4, 10, PieceKind::J);
        let piece = Tetromino::spawn_at(PieceKind::O, 3, 0);
        // O minos at columns 3-4, rows y..=y+1; column 4 blocked at row 10
        assert_eq!(project_drop(&piece, &board), 8);
    }

    #[test]
    fn test_project_drop_of_blocked_piece_stays_put() {
        let mut board = Board::new();
        board.set_cell(4, 1, PieceKind::J);
        let piece = Tetromino::new(PieceKind::T);
        assert!(collides(&piece, &board));
        assert_eq!(project_drop(&piece, &board), piece.y);
    }

    #[test]
    fn test_lock_piece_drops_hidden_cells() {
        let mut board = Board::new();
        let piece = Tetromino::spawn_at(PieceKind::O, 0, -1);
        let hidden = lock_piece(&piece, &mut board);
        assert_eq!(hidden, 2);
        assert_eq!(board.filled_count(), 2);
        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(1, 0));
    }

    #[test]
    fn test_is_grounded() {
        let board = Board::new();
        let piece = Tetromino::new(PieceKind::O);
        assert!(!is_grounded(&piece, &board));
        assert!(is_grounded(&drop_target(&piece, &board), &board));
    }
}
