//! Pieces module - the tetromino catalog
//!
//! Every piece is defined once by its spawn bitmap (2x2, 3x3 or 4x4). The other
//! three rotation states are derived by rotating that bitmap clockwise inside its
//! square, and the resulting mino offsets are precomputed. All of this happens at
//! compile time, so the catalog is an immutable process-wide table.
//!
//! There is no kick table: a rotation either fits in place or is rejected.

use serde::{Deserialize, Serialize};

use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// Offset of a single mino relative to the piece's top-left anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Square occupancy grid for one rotation state
///
/// Storage is always 4x4; only the top-left `size` x `size` square is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap {
    size: u8,
    cells: [[bool; 4]; 4],
}

impl Bitmap {
    /// Build from text rows where `X` marks an occupied cell
    const fn parse(size: u8, rows: [&[u8; 4]; 4]) -> Self {
        let mut cells = [[false; 4]; 4];
        let n = size as usize;
        let mut y = 0;
        while y < n {
            let mut x = 0;
            while x < n {
                cells[y][x] = rows[y][x] == b'X';
                x += 1;
            }
            y += 1;
        }
        Self { size, cells }
    }

    const fn rotate_cw(&self) -> Self {
        let mut cells = [[false; 4]; 4];
        let n = self.size as usize;
        let mut y = 0;
        while y < n {
            let mut x = 0;
            while x < n {
                cells[y][x] = self.cells[n - 1 - x][y];
                x += 1;
            }
            y += 1;
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Occupied cells in row-major order
    const fn minos(&self) -> PieceShape {
        let mut out = [(0i8, 0i8); 4];
        let mut count = 0;
        let n = self.size as usize;
        let mut y = 0;
        while y < n {
            let mut x = 0;
            while x < n {
                if self.cells[y][x] {
                    assert!(count < 4, "tetromino bitmap has more than four cells");
                    out[count] = (x as i8, y as i8);
                    count += 1;
                }
                x += 1;
            }
            y += 1;
        }
        assert!(count == 4, "tetromino bitmap must have exactly four cells");
        out
    }

    /// Side length of the square (2, 3 or 4)
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether bitmap cell (bx, by) is occupied; false outside the square
    pub fn is_filled(&self, bx: usize, by: usize) -> bool {
        let n = self.size as usize;
        bx < n && by < n && self.cells[by][bx]
    }

    /// Rows of the meaningful square, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let n = self.size as usize;
        self.cells[..n].iter().map(move |row| &row[..n])
    }
}

/// Immutable definition of one piece kind: four rotation states plus identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub kind: PieceKind,
    states: [Bitmap; 4],
    shapes: [PieceShape; 4],
}

impl PieceDef {
    const fn new(kind: PieceKind, spawn: Bitmap) -> Self {
        let east = spawn.rotate_cw();
        let south = east.rotate_cw();
        let west = south.rotate_cw();
        Self {
            kind,
            states: [spawn, east, south, west],
            shapes: [spawn.minos(), east.minos(), south.minos(), west.minos()],
        }
    }

    pub fn bitmap(&self, rotation: Rotation) -> &Bitmap {
        &self.states[rotation.index()]
    }

    pub fn shape(&self, rotation: Rotation) -> PieceShape {
        self.shapes[rotation.index()]
    }

    pub fn size(&self) -> u8 {
        self.states[0].size
    }

    /// Colour token stamped into the board when this piece locks
    pub fn color(&self) -> u32 {
        self.kind.color()
    }
}

static CATALOG: [PieceDef; 7] = [
    PieceDef::new(
        PieceKind::I,
        Bitmap::parse(4, [b"....", b"XXXX", b"....", b"...."]),
    ),
    PieceDef::new(
        PieceKind::O,
        Bitmap::parse(2, [b"XX..", b"XX..", b"....", b"...."]),
    ),
    PieceDef::new(
        PieceKind::T,
        Bitmap::parse(3, [b".X..", b"XXX.", b"....", b"...."]),
    ),
    PieceDef::new(
        PieceKind::S,
        Bitmap::parse(3, [b".XX.", b"XX..", b"....", b"...."]),
    ),
    PieceDef::new(
        PieceKind::Z,
        Bitmap::parse(3, [b"XX..", b".XX.", b"....", b"...."]),
    ),
    PieceDef::new(
        PieceKind::J,
        Bitmap::parse(3, [b"X...", b"XXX.", b"....", b"...."]),
    ),
    PieceDef::new(
        PieceKind::L,
        Bitmap::parse(3, [b"..X.", b"XXX.", b"....", b"...."]),
    ),
];

/// The full catalog, indexed by [`PieceKind::index`]
pub fn catalog() -> &'static [PieceDef; 7] {
    &CATALOG
}

pub fn piece_def(kind: PieceKind) -> &'static PieceDef {
    &CATALOG[kind.index()]
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    piece_def(kind).shape(rotation)
}

/// A live piece instance: kind, rotation and the board position of its bitmap's
/// top-left corner. `y` may be negative while the piece pokes above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the canonical spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self::spawn_at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Create a new tetromino in spawn orientation at (x, y)
    pub fn spawn_at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    pub fn def(&self) -> &'static PieceDef {
        piece_def(self.kind)
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Board coordinates of the four minos
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape().into_iter().map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// Same piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece turned one step, position unchanged
    pub fn rotated(&self, clockwise: bool) -> Self {
        Self {
            rotation: self.rotation.rotated(clockwise),
            ..*self
        }
    }
}
