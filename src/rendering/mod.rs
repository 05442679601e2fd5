use macroquad::prelude::*;

use crate::domain::{CellSize, GridState};

/// Something the board can be drawn onto
pub trait DisplaySurface {
    /// Drawable size in pixels as (width, height)
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with one color
    fn fill(&mut self, color: Color);

    /// Draw a filled axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Make everything drawn since the last present visible
    fn present(&mut self);
}

/// Colors used when drawing the board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    /// Live cells that were born this tick
    pub changed: Color,
    /// Live cells that were already alive
    pub stable: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BLACK,
            changed: Color::new(0.0, 1.0, 1.0, 1.0), // Cyan
            stable: Color::new(0.5, 0.5, 0.5, 1.0),  // Grey
        }
    }
}

/// Draw the current generation.
///
/// Dead cells are left as background. Live cells that differ from the
/// previous snapshot get the highlight color.
pub fn render<S: DisplaySurface + ?Sized>(
    grid: &GridState,
    surface: &mut S,
    cell: CellSize,
    palette: &Palette,
) {
    surface.fill(palette.background);

    let (cell_w, cell_h) = (cell.width as f32, cell.height as f32);
    grid.iter_cells()
        .filter(|(_, state)| state.is_alive())
        .for_each(|(coord, _)| {
            let color = if grid.changed(coord.x, coord.y) {
                palette.changed
            } else {
                palette.stable
            };
            let (x, y) = cell.origin_of(coord);
            surface.fill_rect(x, y, cell_w, cell_h, color);
        });

    surface.present();
}

/// The macroquad window. Frames are flipped by `next_frame().await` at the
/// end of every tick, so `present` has nothing left to do.
pub struct MacroquadSurface;

impl DisplaySurface for MacroquadSurface {
    fn size(&self) -> (u32, u32) {
        (screen_width().max(0.0) as u32, screen_height().max(0.0) as u32)
    }

    fn fill(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }

    fn present(&mut self) {}
}
