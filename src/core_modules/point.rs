// THEORY:
// The `point` module holds the most fundamental data of the system: a single
// vertex of an outline. A `Point` is a "dumb" value type. It has no identity
// beyond its coordinates and knows nothing about its neighbours along the
// outline; anything that needs neighbours (the running median) lives higher up.
//
// `Outline` is the column view of the same data. Filters that treat the X and Y
// axes independently want two parallel vectors rather than a vector of pairs, so
// an `Outline` splits a point sequence once and can be turned back into points.

use serde::{Deserialize, Serialize};

/// A single vertex of a closed outline, in caller-defined units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The same point with its axes exchanged.
    pub fn swapped(&self) -> Self {
        Self { x: self.y, y: self.x }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// Column view of an ordered point sequence: all X coordinates, then all Y coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Outline {
    pub fn new(points: &[Point]) -> Self {
        let (xs, ys) = points.iter().map(|p| (p.x, p.y)).unzip();
        Self { xs, ys }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn to_points(&self) -> Vec<Point> {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Point { x, y })
            .collect()
    }
}

impl From<&[Point]> for Outline {
    fn from(points: &[Point]) -> Self {
        Outline::new(points)
    }
}
