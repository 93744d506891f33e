/// Integer cell coordinate on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A coloured shape anchored at `position`. Every piece in this game is a
/// single cell, but the renderer walks the whole bit matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub position: Position,
    pub shape: Vec<Vec<u8>>,
    pub color: String,
}

impl Piece {
    pub fn single(position: impl Into<Position>, color: impl Into<String>) -> Self {
        Self { position: position.into(), shape: vec![vec![1]], color: color.into() }
    }

    /// Absolute coordinates of the filled cells of the shape.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.shape.iter().enumerate().flat_map(move |(dy, row)| {
            row.iter().enumerate().filter(|(_, v)| **v != 0).map(move |(dx, _)| {
                Position::new(self.position.x + dx as i32, self.position.y + dy as i32)
            })
        })
    }

    /// Collision is exact equality of anchor cells.
    pub fn collides_with(&self, other: &Piece) -> bool {
        self.position == other.position
    }
}
