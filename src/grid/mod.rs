//! Grid quantization, codes and reference lines.

pub mod debounce;
pub mod encoder;
pub mod spacing;

pub use debounce::{Debouncer, IDLE_DEBOUNCE};
pub use encoder::{cell_bounds, encode, nested_cells, snap, snap_to_cell_center, FINEST_SCALE};
pub use spacing::{grid_lines, spacing_for_zoom, Axis, GridLine, Viewport, MAX_GRID_LINES};
