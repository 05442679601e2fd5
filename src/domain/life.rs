//! Rule engine: neighbor counting and generation stepping on a torus.
//!
//! Every step reads the current buffer only and writes into the grid's
//! scratch buffer, which is swapped in once the whole generation is known.

use rayon::prelude::*;

use super::{Cell, GridState};

/// Live cells among the 8 Moore neighbors of (x, y).
///
/// Both axes wrap independently, so the neighbors of (0, 0) include
/// (width - 1, height - 1).
pub fn neighbor_count(grid: &GridState, x: usize, y: usize) -> u8 {
    let (w, h) = grid.dimensions();
    let columns = [(x + w - 1) % w, x, (x + 1) % w];
    let rows = [(y + h - 1) % h, y, (y + 1) % h];

    let mut count = 0;
    for (dy, &ny) in rows.iter().enumerate() {
        for (dx, &nx) in columns.iter().enumerate() {
            if dx == 1 && dy == 1 {
                continue;
            }
            count += grid.cell_at(nx, ny).as_u8();
        }
    }
    count
}

/// Next value of a single cell given its live neighbor count
pub const fn next_state(cell: Cell, neighbors: u8) -> Cell {
    cell.next_state(neighbors)
}

/// Evolve one row of the next generation into `row`
fn evolve_row(grid: &GridState, y: usize, row: &mut [Cell]) {
    for (x, slot) in row.iter_mut().enumerate() {
        *slot = next_state(grid.cell_at(x, y), neighbor_count(grid, x, y));
    }
}

/// Advance the grid by one generation (serial)
pub fn advance(grid: &mut GridState) {
    let (width, _) = grid.dimensions();
    let mut next = grid.take_scratch();

    {
        let current: &GridState = grid;
        next.chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| evolve_row(current, y, row));
    }

    grid.commit_generation(next);
}

/// Advance the grid by one generation, computing rows in parallel with rayon.
/// Produces exactly the same result as [`advance`].
pub fn advance_parallel(grid: &mut GridState) {
    let (width, _) = grid.dimensions();
    let mut next = grid.take_scratch();

    {
        let current: &GridState = grid;
        next.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| evolve_row(current, y, row));
    }

    grid.commit_generation(next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellCoordinate;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> GridState {
        let mut grid = GridState::new(width, height);
        for &coord in alive {
            grid.set_alive(coord.into());
        }
        grid
    }

    #[test]
    fn test_neighbor_count_interior() {
        let grid = grid_with(10, 10, &[(4, 5), (5, 5), (6, 5)]);

        assert_eq!(neighbor_count(&grid, 5, 5), 2);
        assert_eq!(neighbor_count(&grid, 5, 4), 3);
        assert_eq!(neighbor_count(&grid, 4, 5), 1);
        assert_eq!(neighbor_count(&grid, 0, 0), 0);
    }

    #[test]
    fn test_neighbor_count_wraps_corner() {
        let grid = grid_with(8, 6, &[(7, 5)]);
        assert_eq!(neighbor_count(&grid, 0, 0), 1);
    }

    #[test]
    fn test_neighbor_count_wraps_each_axis() {
        // Left edge sees the right edge, top edge sees the bottom edge
        let grid = grid_with(8, 6, &[(7, 3), (3, 5)]);
        assert_eq!(neighbor_count(&grid, 0, 3), 1);
        assert_eq!(neighbor_count(&grid, 3, 0), 1);
    }

    #[test]
    fn test_neighbor_count_maximum() {
        let mut grid = GridState::new(5, 5);
        grid.seed_random(&mut StdRng::seed_from_u64(1), 1.0);
        assert_eq!(neighbor_count(&grid, 2, 2), 8);
        assert_eq!(neighbor_count(&grid, 0, 4), 8);
    }

    #[test]
    fn test_dead_grid_is_fixed_point() {
        let mut grid = GridState::new(12, 9);
        advance(&mut grid);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.dimensions(), (12, 9));
    }

    #[test]
    fn test_blinker_has_period_two() {
        let mut grid = grid_with(10, 10, &[(4, 5), (5, 5), (6, 5)]);
        let original = grid.cells().to_vec();

        advance(&mut grid);
        assert_eq!(grid.get(5, 4), Some(Cell::Alive));
        assert_eq!(grid.get(5, 5), Some(Cell::Alive));
        assert_eq!(grid.get(5, 6), Some(Cell::Alive));
        assert_eq!(grid.get(4, 5), Some(Cell::Dead));
        assert_ne!(grid.cells(), original.as_slice());

        advance(&mut grid);
        assert_eq!(grid.cells(), original.as_slice());
    }

    #[test]
    fn test_blinker_across_seam() {
        // Vertical blinker straddling the top/bottom edge
        let mut grid = grid_with(6, 6, &[(2, 5), (2, 0), (2, 1)]);
        advance(&mut grid);
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.get(1, 0), Some(Cell::Alive));
        assert_eq!(grid.get(2, 0), Some(Cell::Alive));
        assert_eq!(grid.get(3, 0), Some(Cell::Alive));
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        let original = grid.cells().to_vec();
        advance(&mut grid);
        assert_eq!(grid.cells(), original.as_slice());
    }

    #[test]
    fn test_advance_does_not_touch_previous() {
        let mut grid = grid_with(10, 10, &[(4, 5), (5, 5), (6, 5)]);
        grid.snapshot_previous();
        advance(&mut grid);

        assert_eq!(grid.previous(4, 5), Some(Cell::Alive));
        assert!(grid.changed(4, 5));
        assert!(grid.changed(5, 4));
        assert!(!grid.changed(5, 5));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut serial = GridState::new(97, 61);
        serial.seed_random(&mut StdRng::seed_from_u64(2024), 0.4);
        let mut parallel = serial.clone();

        for _ in 0..10 {
            advance(&mut serial);
            advance_parallel(&mut parallel);
            assert_eq!(serial.cells(), parallel.cells());
        }
    }

    #[test]
    fn test_single_cell_dies() {
        let mut grid = GridState::new(3, 3);
        grid.set_alive(CellCoordinate::new(1, 1));
        advance(&mut grid);
        assert_eq!(grid.population(), 0);
    }
}
