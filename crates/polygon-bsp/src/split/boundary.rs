//! The polygon boundary refined with the points where it crosses the line.

use log::trace;

use crate::edge::{closed_pairs, intersect_with_tolerance};
use crate::{Edge, Line, Polygon, Side, Vertex};

/// Where a boundary vertex came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    /// A vertex of the input polygon.
    Original,
    /// Crossing point created by refinement.
    Synthetic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BoundaryVertex {
    pub point: Vertex,
    pub side: Side,
    pub origin: Origin,
}

/// Refined boundary walk. Positions in `vertices` are the indices used for
/// ordering and contiguity during fragment collection.
#[derive(Debug, Clone)]
pub(crate) struct Boundary {
    vertices: Vec<BoundaryVertex>,
}

impl Boundary {
    /// Walks the polygon edges, inserting a synthetic vertex wherever an edge
    /// runs from one strict side to the other. The crossing is clamped into
    /// the edge's bounding box.
    ///
    /// `sides` holds the classification of each original vertex.
    pub fn refine(polygon: &Polygon, sides: &[Side], line: &Line, tolerance: f64) -> Self {
        let n = polygon.len();
        let cut = line.as_edge();
        let mut boundary = Self {
            vertices: Vec::with_capacity(2 * n),
        };

        for (index, edge) in polygon.edges().enumerate() {
            let next = (index + 1) % n;
            boundary.push(BoundaryVertex {
                point: edge.tail,
                side: sides[index],
                origin: Origin::Original,
            });

            if !sides[index].opposes(sides[next]) {
                continue;
            }

            // The crossing lies within the edge; clamping only undoes rounding.
            match intersect_with_tolerance(&edge, &cut, tolerance).map(|p| edge.clamp(p)) {
                Some(crossing) if crossing == edge.tail || crossing == edge.head => {
                    trace!("crossing on edge {index} rounds onto an endpoint, edge kept whole");
                }
                Some(crossing) => {
                    // On the line by construction; not re-classified.
                    boundary.push(BoundaryVertex {
                        point: crossing,
                        side: Side::On,
                        origin: Origin::Synthetic,
                    });
                }
                None => {
                    trace!("edge {index} is parallel to the line within tolerance, edge kept whole");
                }
            }
        }

        trace!(
            "refined boundary: {} original + {} synthetic vertices",
            n,
            boundary.vertices.len().saturating_sub(n)
        );
        boundary
    }

    /// Appends a vertex. Repeated original points are dropped, the first
    /// occurrence wins. Crossings are always kept: two of them can round to
    /// the same point while closing different sides.
    fn push(&mut self, vertex: BoundaryVertex) {
        let repeated = vertex.origin == Origin::Original
            && self
                .vertices
                .iter()
                .any(|v| v.origin == Origin::Original && v.point == vertex.point);
        if repeated {
            trace!("dropping duplicate boundary point {}", vertex.point);
            return;
        }
        self.vertices.push(vertex);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vertex {
        self.vertices[index].point
    }

    #[inline]
    pub fn is_on_line(&self, index: usize) -> bool {
        self.vertices[index].side == Side::On
    }

    /// Number of on-line vertices, original and synthetic.
    pub fn on_line_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.side == Side::On).count()
    }

    /// Ascending indices of the vertices that belong to `side`.
    ///
    /// Strict vertices of that side, original on-line vertices with a
    /// neighbour on that side, and every synthetic vertex.
    pub fn sequence(&self, side: Side) -> Vec<usize> {
        (0..self.len())
            .filter(|&index| self.belongs_to(index, side))
            .collect()
    }

    fn belongs_to(&self, index: usize, side: Side) -> bool {
        let vertex = &self.vertices[index];
        match (vertex.side, vertex.origin) {
            (Side::On, Origin::Synthetic) => true,
            (Side::On, Origin::Original) => {
                let n = self.len();
                let prev = self.vertices[(index + n - 1) % n].side;
                let next = self.vertices[(index + 1) % n].side;
                prev == side || next == side
            }
            (strict, _) => strict == side,
        }
    }

    /// Edges of the closed `sequence` whose endpoints both lie on the line.
    pub fn on_line_edges(&self, sequence: &[usize]) -> Vec<Edge> {
        closed_pairs(sequence)
            .filter(|&(a, b)| self.is_on_line(a) && self.is_on_line(b))
            .map(|(a, b)| Edge::new(self.point(a), self.point(b)))
            .collect()
    }
}
