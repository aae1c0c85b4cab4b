//! Coordinate quantization and digit codes.
//!
//! Everything here is a pure function of its inputs.

use crate::models::{Coordinate, GridCell, GridCode, Precision};

/// Scale of the finest cell, the one clicks are snapped to
pub const FINEST_SCALE: f64 = 10_000.0;

const POWERS_OF_TEN: [f64; 4] = [10.0, 100.0, 1_000.0, 10_000.0];

/// Move a coordinate to the center of the `1/scale` degree cell containing it
pub fn snap_to_cell_center(c: Coordinate, scale: f64) -> Coordinate {
    let snap = |v: f64| (v * scale).floor() / scale + 1.0 / (2.0 * scale);
    Coordinate::new(snap(c.lat), snap(c.lon))
}

/// Snap to the finest cell center
pub fn snap(c: Coordinate) -> Coordinate {
    snap_to_cell_center(c, FINEST_SCALE)
}

/// `k`-th decimal digit of `|value|` (k = 1..=4), truncated, never rounded
fn decimal_digit(value: f64, k: usize) -> u8 {
    let scaled = (value.abs() * POWERS_OF_TEN[k - 1]).floor();
    if !scaled.is_finite() {
        return 0;
    }
    (scaled % 10.0) as u8
}

fn digit_pair(c: Coordinate, k: usize) -> String {
    format!("{}{}", decimal_digit(c.lat, k), decimal_digit(c.lon, k))
}

/// Build the grid code for a coordinate.
///
/// Only absolute values are read, so `(lat, lon)` and `(-lat, -lon)`
/// produce the same code.
pub fn encode(c: Coordinate) -> GridCode {
    GridCode {
        c2d: digit_pair(c, 2),
        c4d: digit_pair(c, 3),
        c6d: digit_pair(c, 4),
        locality_suffix: digit_pair(c, 1),
    }
}

/// Bounds of the `1/scale` degree cell containing the coordinate
pub fn cell_bounds(c: Coordinate, scale: f64) -> GridCell {
    let south = (c.lat * scale).floor() / scale;
    let west = (c.lon * scale).floor() / scale;
    GridCell {
        south,
        west,
        north: south + 1.0 / scale,
        east: west + 1.0 / scale,
    }
}

/// Cells at every precision, coarsest first.
///
/// Each entry is an independent [`cell_bounds`] call so renderers can style
/// each level on its own.
pub fn nested_cells(c: Coordinate) -> [(Precision, GridCell); 3] {
    Precision::ALL.map(|p| (p, cell_bounds(c, p.scale())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Coordinate> {
        let mut points = vec![
            Coordinate::new(13.7563, 100.5018),
            Coordinate::new(-13.7563, -100.5018),
            Coordinate::new(5.152149, 46.199615),
            Coordinate::new(2.0469, 45.3182),
            Coordinate::new(0.0, 0.0),
            Coordinate::new(-0.00005, 179.99995),
            Coordinate::new(89.99999, -179.99999),
        ];
        for i in 0..50 {
            let t = i as f64;
            points.push(Coordinate::new(t * 1.7371 - 42.0, t * 7.0123 - 175.0));
        }
        points
    }

    #[test]
    fn test_snap_is_idempotent() {
        for c in sample_points() {
            let once = snap(c);
            let twice = snap(once);
            assert_eq!(once, twice, "snap not idempotent for {:?}", c);
        }
    }

    #[test]
    fn test_snap_lands_in_containing_fine_cell() {
        for c in sample_points() {
            let cell = cell_bounds(c, FINEST_SCALE);
            let snapped = snap(c);
            assert!(cell.contains(snapped), "{:?} snapped outside {:?}", c, cell);
            let center = cell.center();
            assert!((center.lat - snapped.lat).abs() < 1e-9);
            assert!((center.lon - snapped.lon).abs() < 1e-9);
        }
    }

    #[test]
    fn test_snap_at_other_scale() {
        let snapped = snap_to_cell_center(Coordinate::new(13.7563, 100.5018), 100.0);
        assert!((snapped.lat - 13.755).abs() < 1e-9);
        assert!((snapped.lon - 100.505).abs() < 1e-9);
    }

    #[test]
    fn test_encode_digit_extraction() {
        // lat digits 7,5,6,3 and lon digits 5,0,1,8
        let code = encode(Coordinate::new(13.7563, 100.5018));
        assert_eq!(code.c2d, "50");
        assert_eq!(code.c4d, "61");
        assert_eq!(code.c6d, "38");
        assert_eq!(code.locality_suffix, "75");
        assert_eq!(code.to_string(), "50-61-38");
    }

    #[test]
    fn test_encode_matches_formula() {
        let formula = |v: f64, k: i32| ((v.abs() * 10f64.powi(k)).floor() as u64 % 10) as u8;
        for c in sample_points() {
            let code = encode(c);
            let expect = |k: i32| format!("{}{}", formula(c.lat, k), formula(c.lon, k));
            assert_eq!(code.locality_suffix, expect(1));
            assert_eq!(code.c2d, expect(2));
            assert_eq!(code.c4d, expect(3));
            assert_eq!(code.c6d, expect(4));
        }
    }

    #[test]
    fn test_encode_truncates_rather_than_rounds() {
        let code = encode(Coordinate::new(0.00999, 0.00999));
        assert_eq!(code.locality_suffix, "00");
        assert_eq!(code.c2d, "00");
        assert_eq!(code.c4d, "99");
        assert_eq!(code.c6d, "99");
    }

    #[test]
    fn test_encode_is_deterministic() {
        for c in sample_points() {
            assert_eq!(encode(c), encode(c));
        }
    }

    #[test]
    fn test_segments_are_two_digits() {
        for c in sample_points() {
            let code = encode(c);
            for segment in code.segments().into_iter().chain([code.locality_suffix.as_str()]) {
                assert_eq!(segment.len(), 2);
                assert!(segment.chars().all(|ch| ch.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn test_origin_encodes_to_zeros() {
        assert_eq!(encode(Coordinate::new(0.0, 0.0)).to_string(), "00-00-00");
    }

    #[test]
    fn test_non_finite_input_encodes_to_zeros() {
        let code = encode(Coordinate::new(f64::NAN, f64::INFINITY));
        assert_eq!(code.to_string(), "00-00-00");
        assert_eq!(code.locality_suffix, "00");
    }

    // Southern/western mirror points collide. This is current behavior, kept
    // for single-hemisphere deployments.
    #[test]
    fn test_sign_is_discarded() {
        let north_east = encode(Coordinate::new(13.7563, 100.5018));
        let south_west = encode(Coordinate::new(-13.7563, -100.5018));
        assert_eq!(north_east, south_west);
    }

    #[test]
    fn test_cell_bounds_edges() {
        let cell = cell_bounds(Coordinate::new(13.7563, 100.5018), 1_000.0);
        assert!((cell.south - 13.756).abs() < 1e-9);
        assert!((cell.west - 100.501).abs() < 1e-9);
        assert!((cell.north - 13.757).abs() < 1e-9);
        assert!((cell.east - 100.502).abs() < 1e-9);
    }

    #[test]
    fn test_cell_bounds_floor_negative_values() {
        let cell = cell_bounds(Coordinate::new(-1.23456, -0.00001), 100.0);
        assert!((cell.south - -1.24).abs() < 1e-9);
        assert!((cell.west - -0.01).abs() < 1e-9);
        assert!((cell.north - -1.23).abs() < 1e-9);
        assert!((cell.east - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_nested_cells_contain_each_other() {
        let c = Coordinate::new(2.0469, 45.3182);
        let cells = nested_cells(c);
        assert_eq!(cells[0].0, Precision::Coarse);
        assert_eq!(cells[2].0, Precision::Fine);
        for (_, cell) in &cells {
            assert!(cell.contains(c));
        }
        let fine_center = cells[2].1.center();
        assert!(cells[0].1.contains(fine_center));
        assert!(cells[1].1.contains(fine_center));
    }
}
