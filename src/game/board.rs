use super::piece::Position;

/// Background grid, stored flat row-major. Every cell is 0 during play; the
/// renderer paints 0-valued cells as the backdrop.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        let len = width.max(0) as usize * height.max(0) as usize;
        Self { width, height, cells: vec![0; len] }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn reset(&mut self) {
        self.cells.fill(0);
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    #[cfg(test)]
    pub(crate) fn get(&self, pos: Position) -> Option<u8> {
        self.contains(pos)
            .then(|| self.cells[pos.y as usize * self.width as usize + pos.x as usize])
    }

    /// Pull a position back onto the board.
    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(pos.x.clamp(0, self.width - 1), pos.y.clamp(0, self.height - 1))
    }

    /// `(position, value)` for every cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (Position::new((i % w) as i32, (i / w) as i32), *v))
    }

    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|v| *v == 0)
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Position, value: u8) {
        let idx = pos.y as usize * self.width as usize + pos.x as usize;
        self.cells[idx] = value;
    }
}
