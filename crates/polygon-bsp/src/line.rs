//! Partition line representation and the half-plane side test.

use nalgebra::{Matrix2, Point2, Vector2};

use crate::{BspError, BspResult, Edge, DEFAULT_TOLERANCE};

/// A point in the plane.
pub type Vertex = Point2<f64>;

/// Which side of a line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Negative signed area relative to the line direction.
    Left,
    /// Positive signed area relative to the line direction.
    Right,
    /// Point lies on the line (within tolerance).
    On,
}

impl Side {
    /// Returns `true` if one side is `Left` and the other `Right`.
    #[inline]
    pub fn opposes(self, other: Side) -> bool {
        matches!(
            (self, other),
            (Side::Left, Side::Right) | (Side::Right, Side::Left)
        )
    }
}

/// An oriented infinite line through two distinct points.
///
/// In BSP terms this is the splitting "plane". The orientation (start to
/// end) decides which half-plane is left and which is right.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[[f64; 2]; 2]", into = "[[f64; 2]; 2]")
)]
pub struct Line {
    start: Vertex,
    end: Vertex,
}

impl Line {
    /// Creates a line through `start` and `end`, oriented from start to end.
    ///
    /// Fails with [`BspError::DegenerateInput`] if the points coincide or a
    /// coordinate is not finite.
    pub fn new(start: Vertex, end: Vertex) -> BspResult<Self> {
        if !is_finite(&start) || !is_finite(&end) {
            return Err(BspError::degenerate(format!(
                "line through {start} and {end} has a non-finite coordinate"
            )));
        }
        if start == end {
            return Err(BspError::degenerate(format!(
                "line defined by coincident points {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Creates a line from raw `[x, y]` coordinates.
    pub fn from_coords(start: [f64; 2], end: [f64; 2]) -> BspResult<Self> {
        Self::new(Vertex::from(start), Vertex::from(end))
    }

    /// Returns the first defining point.
    #[inline]
    pub fn start(&self) -> Vertex {
        self.start
    }

    /// Returns the second defining point.
    #[inline]
    pub fn end(&self) -> Vertex {
        self.end
    }

    /// Returns the (unnormalized) direction from start to end.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }

    /// Returns the defining points as an edge.
    #[inline]
    pub fn as_edge(&self) -> Edge {
        Edge::new(self.start, self.end)
    }

    /// Returns the same line with the opposite orientation.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Twice the signed area of the triangle `(start, end, point)`.
    ///
    /// This is the determinant of the matrix whose columns are the line
    /// direction and the offset of `point` from `start`.
    #[inline]
    pub fn signed_area(&self, point: Vertex) -> f64 {
        Matrix2::from_columns(&[self.direction(), point - self.start]).determinant()
    }

    /// Classifies which side of the line a point lies on.
    /// Uses the exact [`DEFAULT_TOLERANCE`].
    #[inline]
    pub fn classify_point(&self, point: Vertex) -> Side {
        self.classify_point_with_tolerance(point, DEFAULT_TOLERANCE)
    }

    /// Classifies which side of the line a point lies on, with a custom tolerance.
    pub fn classify_point_with_tolerance(&self, point: Vertex, tolerance: f64) -> Side {
        let area = self.signed_area(point);
        if area < -tolerance {
            Side::Left
        } else if area > tolerance {
            Side::Right
        } else {
            Side::On
        }
    }

    /// Returns `true` if both endpoints of `edge` lie on this line.
    pub fn contains_edge(&self, edge: &Edge, tolerance: f64) -> bool {
        self.classify_point_with_tolerance(edge.tail, tolerance) == Side::On
            && self.classify_point_with_tolerance(edge.head, tolerance) == Side::On
    }
}

impl TryFrom<Edge> for Line {
    type Error = BspError;

    fn try_from(edge: Edge) -> BspResult<Self> {
        Self::new(edge.tail, edge.head)
    }
}

impl TryFrom<[[f64; 2]; 2]> for Line {
    type Error = BspError;

    fn try_from([start, end]: [[f64; 2]; 2]) -> BspResult<Self> {
        Self::from_coords(start, end)
    }
}

impl From<Line> for [[f64; 2]; 2] {
    fn from(line: Line) -> Self {
        [
            [line.start.x, line.start.y],
            [line.end.x, line.end.y],
        ]
    }
}

#[inline]
pub(crate) fn is_finite(vertex: &Vertex) -> bool {
    vertex.x.is_finite() && vertex.y.is_finite()
}
