//! Coordinates and the fixed-precision cells they fall into.

use geo::Centroid;
use geo_types::{coord, LineString, Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// WGS-84 point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Self {
            lat: point.y(),
            lon: point.x(),
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.lon, c.lat)
    }
}

/// Grid subdivision per degree.
///
/// Each step divides a degree ten times finer than the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// 1/100 degree, roughly 1.1 km
    Coarse,
    /// 1/1000 degree, roughly 111 m
    Medium,
    /// 1/10000 degree, roughly 11 m
    Fine,
}

impl Precision {
    /// All precisions, coarsest first
    pub const ALL: [Precision; 3] = [Precision::Coarse, Precision::Medium, Precision::Fine];

    /// Number of cells per degree
    pub fn scale(&self) -> f64 {
        match self {
            Precision::Coarse => 100.0,
            Precision::Medium => 1_000.0,
            Precision::Fine => 10_000.0,
        }
    }

    /// Approximate cell edge length at the equator, in meters
    pub fn approx_edge_meters(&self) -> f64 {
        match self {
            Precision::Coarse => 1_113.2,
            Precision::Medium => 111.32,
            Precision::Fine => 11.132,
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Precision::Coarse => "coarse",
            Precision::Medium => "medium",
            Precision::Fine => "fine",
        })
    }
}

/// Axis-aligned cell bounds in degrees.
///
/// A cell covers `[south, north) x [west, east)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GridCell {
    /// Whether the coordinate lies inside the cell (south/west edges inclusive)
    pub fn contains(&self, c: Coordinate) -> bool {
        c.lat >= self.south && c.lat < self.north && c.lon >= self.west && c.lon < self.east
    }

    pub fn center(&self) -> Coordinate {
        self.to_rect().centroid().into()
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
    }

    /// Closed ring, counter-clockwise from the south-west corner
    pub fn to_polygon(&self) -> Polygon<f64> {
        let ring = LineString::from(vec![
            (self.west, self.south),
            (self.east, self.south),
            (self.east, self.north),
            (self.west, self.north),
            (self.west, self.south),
        ]);
        Polygon::new(ring, vec![])
    }
}
