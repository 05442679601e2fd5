mod events;

pub use events::{EventSource, InputEvent, MacroquadEvents};

use tracing::debug;

use crate::domain::{CellCoordinate, CellSize, GridState};

/// Integer-divide a pixel position by the cell size.
///
/// The result is only a candidate: it may lie off the board (negative or past
/// the last row/column) and must be bounds-checked before use.
pub fn map_to_cell(pixel_pos: (f32, f32), cell: CellSize) -> (i64, i64) {
    let px = pixel_pos.0.floor() as i64;
    let py = pixel_pos.1.floor() as i64;
    (
        px.div_euclid(i64::from(cell.width)),
        py.div_euclid(i64::from(cell.height)),
    )
}

/// Bring the cell under a click to life.
///
/// Returns the affected cell, or `None` when the click landed outside the
/// board (letterboxing, margins) and was ignored.
pub fn apply_click(
    grid: &mut GridState,
    pixel_pos: (f32, f32),
    cell: CellSize,
) -> Option<CellCoordinate> {
    let (x, y) = map_to_cell(pixel_pos, cell);
    if !grid.contains(x, y) {
        debug!(px = pixel_pos.0, py = pixel_pos.1, x, y, "click outside grid ignored");
        return None;
    }

    let coord = CellCoordinate::new(x as usize, y as usize);
    grid.set_alive(coord);
    debug!(x = coord.x, y = coord.y, "cell seeded by click");
    Some(coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    const FIVE: CellSize = CellSize::square(5);

    #[test]
    fn test_map_to_cell_divides() {
        assert_eq!(map_to_cell((0.0, 0.0), FIVE), (0, 0));
        assert_eq!(map_to_cell((4.9, 4.9), FIVE), (0, 0));
        assert_eq!(map_to_cell((5.0, 12.0), FIVE), (1, 2));
        assert_eq!(
            map_to_cell((17.0, 17.0), CellSize { width: 4, height: 8 }),
            (4, 2)
        );
    }

    #[test]
    fn test_map_to_cell_negative_floors() {
        assert_eq!(map_to_cell((-0.5, -6.0), FIVE), (-1, -2));
    }

    #[test]
    fn test_apply_click_sets_single_cell() {
        let mut grid = GridState::new(10, 10);
        let hit = apply_click(&mut grid, (17.5, 32.0), FIVE);

        assert_eq!(hit, Some(CellCoordinate::new(3, 6)));
        assert_eq!(grid.get(3, 6), Some(Cell::Alive));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_apply_click_outside_is_ignored() {
        let mut grid = GridState::new(10, 10);

        assert_eq!(apply_click(&mut grid, (50.0, 10.0), FIVE), None);
        assert_eq!(apply_click(&mut grid, (10.0, 52.0), FIVE), None);
        assert_eq!(apply_click(&mut grid, (-1.0, 10.0), FIVE), None);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_apply_click_is_idempotent() {
        let mut once = GridState::new(10, 10);
        apply_click(&mut once, (22.0, 22.0), FIVE);

        let mut twice = GridState::new(10, 10);
        apply_click(&mut twice, (22.0, 22.0), FIVE);
        apply_click(&mut twice, (22.0, 22.0), FIVE);

        assert_eq!(once.cells(), twice.cells());
    }
}
