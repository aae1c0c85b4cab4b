//! Drawing surface the session renders into.

use crate::grid::GridLine;
use crate::models::{AddressLabel, Coordinate, GridCell, GridCode, Precision};

/// Passive output target owned by the UI layer.
///
/// The session clears click output before drawing a new click, and clears
/// grid lines before drawing a new grid.
pub trait Renderer {
    /// Remove everything drawn for the previous click
    fn clear(&mut self);

    fn draw_code(&mut self, code: &GridCode, at: Coordinate);

    /// One nested cell; called once per precision, coarsest first
    fn draw_cell(&mut self, cell: &GridCell, precision: Precision);

    fn draw_label(&mut self, label: &AddressLabel);

    fn clear_grid(&mut self);

    fn draw_grid(&mut self, lines: &[GridLine]);
}

/// Renderer that discards everything, for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self) {}
    fn draw_code(&mut self, _code: &GridCode, _at: Coordinate) {}
    fn draw_cell(&mut self, _cell: &GridCell, _precision: Precision) {}
    fn draw_label(&mut self, _label: &AddressLabel) {}
    fn clear_grid(&mut self) {}
    fn draw_grid(&mut self, _lines: &[GridLine]) {}
}
