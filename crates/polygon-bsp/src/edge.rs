//! Boundary edges and line-line intersection.

use nalgebra::Vector2;

use crate::{Polygon, Vertex, DEFAULT_TOLERANCE};

/// One boundary segment, from `tail` to `head`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Start vertex.
    pub tail: Vertex,
    /// End vertex.
    pub head: Vertex,
}

impl Edge {
    /// Creates an edge from `tail` to `head`.
    #[inline]
    pub fn new(tail: Vertex, head: Vertex) -> Self {
        Self { tail, head }
    }

    /// Returns the (unnormalized) direction from tail to head.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.head - self.tail
    }

    /// Returns `true` for a zero-length edge.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.tail == self.head
    }

    /// Returns `(min, max)` of the x coordinates.
    #[inline]
    pub fn x_range(&self) -> (f64, f64) {
        (self.tail.x.min(self.head.x), self.tail.x.max(self.head.x))
    }

    /// Returns `(min, max)` of the y coordinates.
    #[inline]
    pub fn y_range(&self) -> (f64, f64) {
        (self.tail.y.min(self.head.y), self.tail.y.max(self.head.y))
    }

    /// Returns `true` if `point` lies inside the edge's bounding box
    /// (boundary included).
    pub fn bounds_contain(&self, point: Vertex) -> bool {
        let (x_min, x_max) = self.x_range();
        let (y_min, y_max) = self.y_range();
        (x_min..=x_max).contains(&point.x) && (y_min..=y_max).contains(&point.y)
    }

    /// Moves `point` onto the nearest position inside the edge's bounding
    /// box. Points already inside are returned unchanged.
    pub fn clamp(&self, point: Vertex) -> Vertex {
        let (x_min, x_max) = self.x_range();
        let (y_min, y_max) = self.y_range();
        Vertex::new(point.x.clamp(x_min, x_max), point.y.clamp(y_min, y_max))
    }
}

/// Returns the boundary edges of a polygon, including the closing edge.
///
/// Edge `i` joins vertex `i` to vertex `(i + 1) % n`, so an `n`-vertex
/// polygon always yields `n` edges.
pub fn edges(polygon: &Polygon) -> Vec<Edge> {
    polygon.edges().collect()
}

/// Pairs every item with its successor, wrapping the last back to the first.
pub(crate) fn closed_pairs<T: Copy>(items: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    let n = items.len();
    (0..n).map(move |i| (items[i], items[(i + 1) % n]))
}

/// Intersects the infinite lines through two edges.
/// Uses the exact [`DEFAULT_TOLERANCE`] for the parallel test.
///
/// The result is not checked against either segment's bounds.
#[inline]
pub fn intersect(a: &Edge, b: &Edge) -> Option<Vertex> {
    intersect_with_tolerance(a, b, DEFAULT_TOLERANCE)
}

/// Intersects the infinite lines through two edges, with a custom tolerance.
///
/// Returns `None` when `|cross(dir_a, dir_b)| <= tolerance`, i.e. the lines
/// are parallel. Vertical lines need no special casing.
pub fn intersect_with_tolerance(a: &Edge, b: &Edge, tolerance: f64) -> Option<Vertex> {
    let da = a.direction();
    let db = b.direction();
    let denom = cross(&da, &db);
    if denom.abs() <= tolerance {
        return None;
    }

    let t = cross(&(b.tail - a.tail), &db) / denom;
    Some(a.tail + da * t)
}

#[inline]
fn cross(u: &Vector2<f64>, v: &Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}
