//! Reference grid lines for the visible map area.

use std::ops::RangeInclusive;

use geo_types::{coord, Line};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Zoom at which the finest reference grid is drawn
pub const FINE_GRID_MIN_ZOOM: u8 = 17;
/// Zoom at which the coarse reference grid is drawn
pub const COARSE_GRID_MIN_ZOOM: u8 = 13;
/// Upper bound on lines drawn for a single viewport
pub const MAX_GRID_LINES: usize = 2_000;

/// Line spacing in degrees for a zoom level, or `None` when no grid is drawn
pub fn spacing_for_zoom(zoom: u8) -> Option<f64> {
    if zoom >= FINE_GRID_MIN_ZOOM {
        Some(0.0001)
    } else if zoom >= COARSE_GRID_MIN_ZOOM {
        Some(0.01)
    } else {
        None
    }
}

/// Visible map bounds in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Viewport {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    pub fn is_finite(&self) -> bool {
        [self.south, self.west, self.north, self.east]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Orientation of a reference line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Constant longitude
    Meridian,
    /// Constant latitude
    Parallel,
}

/// One reference line, with its endpoints in (lon, lat) order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub axis: Axis,
    /// Fixed coordinate: longitude for meridians, latitude for parallels
    pub value: f64,
    pub line: Line<f64>,
}

/// Integer multiples of `spacing` within `[min, max]`.
///
/// `None` when there are more than `limit` of them; the count is taken in
/// floating point so wide or unbounded ranges never reach the integer cast.
fn multiples(min: f64, max: f64, spacing: f64, limit: usize) -> Option<RangeInclusive<i64>> {
    let first = (min / spacing).ceil();
    let last = (max / spacing).floor();

    if !first.is_finite() || !last.is_finite() {
        return None;
    }
    if last < first {
        return Some(1..=0);
    }
    if last - first >= limit as f64 || first < i64::MIN as f64 || last > i64::MAX as f64 {
        return None;
    }

    Some(first as i64..=last as i64)
}

fn span(range: &RangeInclusive<i64>) -> usize {
    if range.is_empty() {
        0
    } else {
        (range.end() - range.start()) as usize + 1
    }
}

/// Lines at every multiple of `spacing` inside the viewport.
///
/// Returns nothing if the viewport would need more than [`MAX_GRID_LINES`]
/// or has a non-finite bound.
pub fn grid_lines(viewport: Viewport, spacing: f64) -> Vec<GridLine> {
    if spacing <= 0.0 || !spacing.is_finite() {
        return Vec::new();
    }
    if !viewport.is_finite() {
        warn!("Skipping reference grid: viewport {:?} is not finite", viewport);
        return Vec::new();
    }

    let ranges = (
        multiples(viewport.west, viewport.east, spacing, MAX_GRID_LINES),
        multiples(viewport.south, viewport.north, spacing, MAX_GRID_LINES),
    );
    let (Some(meridians), Some(parallels)) = ranges else {
        warn!(
            "Skipping reference grid: more than {} lines at spacing {}",
            MAX_GRID_LINES, spacing
        );
        return Vec::new();
    };
    let count = span(&meridians) + span(&parallels);

    if count > MAX_GRID_LINES {
        warn!(
            "Skipping reference grid: {} lines at spacing {} exceeds limit of {}",
            count, spacing, MAX_GRID_LINES
        );
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(count);

    for i in meridians {
        let lon = i as f64 * spacing;
        lines.push(GridLine {
            axis: Axis::Meridian,
            value: lon,
            line: Line::new(
                coord! { x: lon, y: viewport.south },
                coord! { x: lon, y: viewport.north },
            ),
        });
    }

    for i in parallels {
        let lat = i as f64 * spacing;
        lines.push(GridLine {
            axis: Axis::Parallel,
            value: lat,
            line: Line::new(
                coord! { x: viewport.west, y: lat },
                coord! { x: viewport.east, y: lat },
            ),
        });
    }

    debug!("Generated {} grid lines at spacing {}", lines.len(), spacing);
    lines
}
