/// Grid position with `x` as the column and `y` as the row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CellCoordinate {
    pub x: usize,
    pub y: usize,
}

impl CellCoordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for CellCoordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// On-screen size of one cell in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub const fn square(side: u32) -> Self {
        Self { width: side, height: side }
    }

    /// Top-left pixel of the cell at `coord`
    pub fn origin_of(&self, coord: CellCoordinate) -> (f32, f32) {
        (
            coord.x as f32 * self.width as f32,
            coord.y as f32 * self.height as f32,
        )
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::square(5)
    }
}
