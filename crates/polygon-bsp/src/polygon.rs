//! Generic polygon representation for BSP trees.

use nalgebra::Vector2;

use crate::edge::closed_pairs;
use crate::line::is_finite;
use crate::{BspError, BspResult, Edge, Line, Side, Vertex, DEFAULT_TOLERANCE};

/// Classification of a whole polygon relative to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No vertex is right of the line, at least one is left.
    Left,
    /// No vertex is left of the line, at least one is right.
    Right,
    /// All vertices are on the line.
    Collinear,
    /// Vertices on both sides (the polygon must be split).
    Spanning,
}

impl Classification {
    /// Summarizes per-vertex sides.
    pub fn from_sides(sides: &[Side]) -> Self {
        let left = sides.contains(&Side::Left);
        let right = sides.contains(&Side::Right);
        match (left, right) {
            (false, false) => Classification::Collinear,
            (false, true) => Classification::Right,
            (true, false) => Classification::Left,
            (true, true) => Classification::Spanning,
        }
    }
}

/// A closed polygon in the plane, defined by an ordered list of vertices.
///
/// The edge from the last vertex back to the first is implicit. Convexity,
/// simplicity and winding order are not enforced, but the splitter expects
/// the vertices to be one consistent walk around the boundary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")
)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    /// Creates a new polygon from a list of vertices.
    ///
    /// Fails with [`BspError::DegenerateInput`] if fewer than 3 vertices are
    /// provided or a coordinate is not finite.
    pub fn new(vertices: Vec<Vertex>) -> BspResult<Self> {
        if vertices.len() < 3 {
            return Err(BspError::degenerate(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        if let Some(bad) = vertices.iter().find(|v| !is_finite(v)) {
            return Err(BspError::degenerate(format!(
                "polygon vertex {bad} has a non-finite coordinate"
            )));
        }
        Ok(Self { vertices })
    }

    /// Creates a polygon from raw `[x, y]` coordinates.
    pub fn from_coords(coords: &[[f64; 2]]) -> BspResult<Self> {
        Self::new(coords.iter().copied().map(Vertex::from).collect())
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices (always false for valid polygons).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates the boundary edges, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        closed_pairs(&self.vertices).map(|(tail, head)| Edge::new(tail, head))
    }

    /// Shoelace area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|e| e.tail.x * e.head.y - e.head.x * e.tail.y)
            .sum::<f64>()
            / 2.0
    }

    /// Unsigned area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Computes the vertex centroid (mean of the vertices).
    pub fn centroid(&self) -> Vertex {
        let sum: Vector2<f64> = self.vertices.iter().map(|p| p.coords).sum();
        Vertex::from(sum / self.vertices.len() as f64)
    }

    /// Classifies every vertex against `line`.
    pub fn sides(&self, line: &Line, tolerance: f64) -> Vec<Side> {
        self.vertices
            .iter()
            .map(|v| line.classify_point_with_tolerance(*v, tolerance))
            .collect()
    }

    /// Classifies this polygon relative to a line.
    /// Uses the exact [`DEFAULT_TOLERANCE`].
    pub fn classify(&self, line: &Line) -> Classification {
        Classification::from_sides(&self.sides(line, DEFAULT_TOLERANCE))
    }
}

impl TryFrom<Vec<[f64; 2]>> for Polygon {
    type Error = BspError;

    fn try_from(coords: Vec<[f64; 2]>) -> BspResult<Self> {
        Self::from_coords(&coords)
    }
}

impl From<Polygon> for Vec<[f64; 2]> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices.iter().map(|v| [v.x, v.y]).collect()
    }
}
