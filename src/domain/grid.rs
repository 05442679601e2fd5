use rand::Rng;
use thiserror::Error;

use super::{Cell, CellCoordinate};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("Expected {expected} cells, but got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// GridState owns the board of one simulation.
///
/// Three buffers of identical size live here for the whole run:
/// - `cells`: the current generation
/// - `next`: scratch space the rule engine writes into before swapping
/// - `previous`: snapshot of the generation before the last update, used
///   only to highlight cells that changed
///
/// Storage is row-major, `cells[y * width + x]`.
#[derive(Clone, Debug)]
pub struct GridState {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    next: Vec<Cell>,
    previous: Vec<Cell>,
}

impl GridState {
    /// Create a new grid with all cells dead.
    ///
    /// # Panics
    /// If either dimension is zero. Callers derive dimensions from a
    /// validated configuration.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        let len = width * height;
        Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
            previous: vec![Cell::Dead; len],
        }
    }

    /// Build a grid from row-major cells. The previous snapshot starts equal
    /// to the given cells.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            previous: cells.clone(),
            next: vec![Cell::Dead; expected],
            cells,
        })
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether a signed candidate coordinate lies on the board
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.index(x, y)])
    }

    /// Cell at an in-bounds position. Used by the rule engine's hot loop.
    pub(crate) fn cell_at(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Cell at position in the snapshot taken before the last update
    pub fn previous(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.previous[self.index(x, y)])
    }

    /// True when the cell differs from the previous snapshot
    pub fn changed(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && {
            let idx = self.index(x, y);
            self.cells[idx] != self.previous[idx]
        }
    }

    /// Fill the board with independent Bernoulli draws.
    ///
    /// Each cell is alive when a uniform draw from [0, 1) falls below
    /// `p_alive`, so 0.0 yields an empty board and 1.0 a full one.
    pub fn seed_random<R: Rng + ?Sized>(&mut self, rng: &mut R, p_alive: f64) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random::<f64>() < p_alive));
    }

    /// Copy the current generation into the previous snapshot
    pub fn snapshot_previous(&mut self) {
        self.previous.copy_from_slice(&self.cells);
    }

    /// Bring a cell to life. Out-of-bounds coordinates are ignored.
    pub fn set_alive(&mut self, coord: CellCoordinate) {
        if coord.x < self.width && coord.y < self.height {
            let idx = self.index(coord.x, coord.y);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Kill every cell in the current generation
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Row-major view of the current generation
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellCoordinate, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (CellCoordinate::new(idx % self.width, idx / self.width), cell))
    }

    /// Hand the scratch buffer to the rule engine. Must be returned through
    /// [`GridState::commit_generation`].
    pub(crate) fn take_scratch(&mut self) -> Vec<Cell> {
        std::mem::take(&mut self.next)
    }

    /// Install a fully computed generation and keep the old buffer as scratch
    pub(crate) fn commit_generation(&mut self, next: Vec<Cell>) {
        debug_assert_eq!(next.len(), self.cells.len());
        self.next = std::mem::replace(&mut self.cells, next);
    }
}
