//! Polygon splitting against a partition line.
//!
//! Unlike a Sutherland-Hodgman clip, the splitter accepts non-convex input.
//! When the line crosses the boundary more than twice, a side can receive
//! several disjoint fragments.
//!
//! The algorithm runs in three stages:
//!
//! 1. Refine the boundary: insert a synthetic vertex wherever an edge runs
//!    from one side of the line to the other ([`boundary`]).
//! 2. Assign every refined vertex to the left sequence, the right sequence,
//!    or both.
//! 3. Detect whether a sequence describes several regions and cut it into
//!    closed fragments ([`fragments`]).

mod boundary;
mod fragments;

use log::debug;

use crate::{BspResult, Classification, Line, Polygon, Side, DEFAULT_TOLERANCE};

use boundary::Boundary;
use fragments::{collect_fragments, expected_fragments, on_line_edges_overlap};

/// The fragments on either side of a partition line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Split {
    /// Fragments left of the line.
    pub left: Vec<Polygon>,
    /// Fragments right of the line.
    pub right: Vec<Polygon>,
}

impl Split {
    /// Returns `true` if both sides received geometry.
    #[inline]
    pub fn is_bisected(&self) -> bool {
        !self.left.is_empty() && !self.right.is_empty()
    }

    /// Returns the fragments on `side`. `Side::On` has none.
    pub fn side(&self, side: Side) -> &[Polygon] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::On => &[],
        }
    }

    /// Total unsigned area over both sides.
    pub fn area(&self) -> f64 {
        self.left.iter().chain(&self.right).map(Polygon::area).sum()
    }
}

/// Trait for geometry that can be split by a partition line.
pub trait Cuttable {
    /// Splits the geometry by a line using the exact [`DEFAULT_TOLERANCE`].
    fn cut(&self, line: &Line) -> BspResult<Split> {
        self.cut_with_tolerance(line, DEFAULT_TOLERANCE)
    }

    /// Splits the geometry by a line with a custom classification tolerance.
    ///
    /// # Return values by classification
    ///
    /// - **Left**: `([self], [])`
    /// - **Right** or **Collinear**: `([], [self])`
    /// - **Spanning**: one or more fragments on each side
    fn cut_with_tolerance(&self, line: &Line, tolerance: f64) -> BspResult<Split>;
}

impl Cuttable for Polygon {
    fn cut_with_tolerance(&self, line: &Line, tolerance: f64) -> BspResult<Split> {
        split_polygon(self, line, tolerance)
    }
}

/// Splits a polygon into the fragments left and right of `line`.
pub fn split_polygon(polygon: &Polygon, line: &Line, tolerance: f64) -> BspResult<Split> {
    let sides = polygon.sides(line, tolerance);

    match Classification::from_sides(&sides) {
        Classification::Right | Classification::Collinear => {
            debug!("polygon of {} vertices lies right of {line:?}", polygon.len());
            return Ok(Split {
                left: Vec::new(),
                right: vec![polygon.clone()],
            });
        }
        Classification::Left => {
            debug!("polygon of {} vertices lies left of {line:?}", polygon.len());
            return Ok(Split {
                left: vec![polygon.clone()],
                right: Vec::new(),
            });
        }
        Classification::Spanning => {}
    }

    let boundary = Boundary::refine(polygon, &sides, line, tolerance);
    let left = boundary.sequence(Side::Left);
    let right = boundary.sequence(Side::Right);

    let expected = expected_fragments(boundary.on_line_count());
    let (left_expected, right_expected) =
        if on_line_edges_overlap(&boundary.on_line_edges(&left)) {
            (expected, 1)
        } else if on_line_edges_overlap(&boundary.on_line_edges(&right)) {
            (1, expected)
        } else {
            (1, 1)
        };

    let split = Split {
        left: collect_fragments(&boundary, &left, left_expected, Side::Left)?,
        right: collect_fragments(&boundary, &right, right_expected, Side::Right)?,
    };

    debug!(
        "split polygon of {} vertices into {} left / {} right fragments",
        polygon.len(),
        split.left.len(),
        split.right.len()
    );
    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vertex;
    use approx::assert_relative_eq;

    fn polygon(coords: &[[f64; 2]]) -> Polygon {
        Polygon::from_coords(coords).unwrap()
    }

    fn line(start: [f64; 2], end: [f64; 2]) -> Line {
        Line::from_coords(start, end).unwrap()
    }

    fn assert_vertices(actual: &Polygon, expected: &[[f64; 2]]) {
        assert_eq!(
            actual.len(),
            expected.len(),
            "vertex count mismatch: {:?}",
            actual.vertices()
        );
        for (v, e) in actual.vertices().iter().zip(expected) {
            assert_relative_eq!(v.x, e[0], epsilon = 1e-12);
            assert_relative_eq!(v.y, e[1], epsilon = 1e-12);
        }
    }

    fn comb() -> Polygon {
        // Three teeth pointing up from a base; y = 2 crosses every tooth.
        polygon(&[
            [0.0, 0.0],
            [6.0, 0.0],
            [6.0, 4.0],
            [5.0, 4.0],
            [5.0, 1.0],
            [4.0, 1.0],
            [4.0, 4.0],
            [3.0, 4.0],
            [3.0, 1.0],
            [2.0, 1.0],
            [2.0, 4.0],
            [1.0, 4.0],
            [1.0, 1.0],
            [0.0, 1.0],
        ])
    }

    #[test]
    fn polygon_that_does_not_split() {
        let p = polygon(&[[0.0, 0.0], [0.0, 5.0], [5.0, 0.0]]);
        let split = p.cut(&line([0.0, 5.0], [0.0, 0.0])).unwrap();

        assert!(split.left.is_empty());
        assert_eq!(split.right, vec![p]);
    }

    #[test]
    fn polygon_that_splits_in_two() {
        let p = polygon(&[[0.0, 0.0], [5.0, 5.0], [5.0, 3.0], [8.0, 0.0]]);
        let split = p.cut(&line([5.0, 5.0], [5.0, 3.0])).unwrap();

        assert_eq!(split.left.len(), 1);
        assert_eq!(split.right.len(), 1);
        assert_vertices(&split.left[0], &[[0.0, 0.0], [5.0, 5.0], [5.0, 0.0]]);
        assert_vertices(&split.right[0], &[[5.0, 3.0], [8.0, 0.0], [5.0, 0.0]]);
    }

    #[test]
    fn polygon_that_splits_in_three() {
        let p = polygon(&[
            [0.0, 0.0],
            [5.0, 5.0],
            [5.0, 3.0],
            [8.0, 0.0],
            [9.0, 1.0],
            [9.0, -5.0],
            [0.0, -5.0],
            [6.0, -2.0],
        ]);
        let split = p.cut(&line([5.0, 5.0], [5.0, 3.0])).unwrap();

        assert_eq!(split.left.len(), 2);
        assert_eq!(split.right.len(), 1);
        assert_vertices(&split.left[0], &[[0.0, 0.0], [5.0, 5.0], [5.0, -5.0 / 3.0]]);
        assert_vertices(&split.left[1], &[[5.0, -5.0], [0.0, -5.0], [5.0, -2.5]]);
        assert_vertices(
            &split.right[0],
            &[
                [5.0, 3.0],
                [8.0, 0.0],
                [9.0, 1.0],
                [9.0, -5.0],
                [5.0, -5.0],
                [5.0, -2.5],
                [6.0, -2.0],
                [5.0, -5.0 / 3.0],
            ],
        );
        assert_relative_eq!(split.area(), p.area(), epsilon = 1e-9);
    }

    #[test]
    fn line_outside_bounds_keeps_polygon_whole() {
        let square = polygon(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);

        let split = square.cut(&line([10.0, 0.0], [10.0, 1.0])).unwrap();
        assert!(split.left.is_empty());
        assert_eq!(split.right, vec![square.clone()]);

        let split = square.cut(&line([10.0, 1.0], [10.0, 0.0])).unwrap();
        assert_eq!(split.left, vec![square]);
        assert!(split.right.is_empty());
    }

    #[test]
    fn collinear_polygon_goes_right() {
        let sliver = polygon(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
        let split = sliver.cut(&line([0.0, 0.0], [1.0, 0.0])).unwrap();
        assert!(split.left.is_empty());
        assert_eq!(split.right.len(), 1);
    }

    #[test]
    fn area_is_conserved() {
        let cases = [
            (
                polygon(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]),
                line([2.0, -1.0], [2.0, 5.0]),
            ),
            (
                polygon(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]),
                line([-1.0, -1.0], [5.0, 5.0]),
            ),
            (
                polygon(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]),
                line([0.0, 1.0], [4.0, 3.0]),
            ),
            (
                polygon(&[[0.0, 0.0], [5.0, 5.0], [5.0, 3.0], [8.0, 0.0]]),
                line([5.0, 5.0], [5.0, 3.0]),
            ),
            (comb(), line([-1.0, 2.0], [7.0, 2.0])),
        ];

        for (p, l) in cases {
            let split = p.cut(&l).unwrap();
            assert!(split.is_bisected());
            assert_relative_eq!(split.area(), p.area(), epsilon = 1e-9);
        }
    }

    #[test]
    fn fragments_are_closed_rings_on_the_line() {
        // Every fragment stays on its own side and touches the cut along
        // exactly one edge.
        let p = polygon(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);
        let l = line([2.0, -1.0], [2.0, 5.0]);
        let split = p.cut(&l).unwrap();

        for (side, fragments) in [(Side::Left, &split.left), (Side::Right, &split.right)] {
            for fragment in fragments {
                assert!(fragment.len() >= 3);
                for v in fragment.vertices() {
                    let s = l.classify_point(*v);
                    assert!(s == side || s == Side::On, "{v} on wrong side");
                }
                let on_line = fragment.edges().filter(|e| l.contains_edge(e, 0.0)).count();
                assert_eq!(on_line, 1);
            }
        }
    }

    #[test]
    fn comb_splits_into_several_fragments() {
        let p = comb();
        let split = p.cut(&line([-1.0, 2.0], [7.0, 2.0])).unwrap();

        assert_eq!(split.left.len(), 1);
        assert_eq!(split.right.len(), 2);
        assert_eq!(split.left[0].len(), 14);
    }

    #[test]
    fn reversed_line_swaps_sides() {
        let p = polygon(&[[0.0, 0.0], [5.0, 5.0], [5.0, 3.0], [8.0, 0.0]]);
        let l = line([5.0, 5.0], [5.0, 3.0]);

        let forward = p.cut(&l).unwrap();
        let backward = p.cut(&l.reversed()).unwrap();
        assert_eq!(forward.left, backward.right);
        assert_eq!(forward.right, backward.left);
    }

    #[test]
    fn tolerance_snaps_near_vertices_onto_line() {
        // (2, 1e-12) is a hair left of y = 0 pointing -x; with tolerance it
        // is on the line and the triangle no longer spans it.
        let p = polygon(&[[0.0, 0.0], [2.0, 1e-12], [1.0, -3.0]]);
        let l = line([4.0, 0.0], [-4.0, 0.0]);

        assert!(p.cut(&l).unwrap().is_bisected());

        let split = p.cut_with_tolerance(&l, 1e-9).unwrap();
        assert!(!split.is_bisected());
        assert_eq!(split.left.len() + split.right.len(), 1);
    }

    #[test]
    fn side_accessor() {
        let p = polygon(&[[0.0, 0.0], [5.0, 5.0], [5.0, 3.0], [8.0, 0.0]]);
        let split = p.cut(&line([5.0, 5.0], [5.0, 3.0])).unwrap();
        assert_eq!(split.side(Side::Left), split.left.as_slice());
        assert_eq!(split.side(Side::Right), split.right.as_slice());
        assert!(split.side(Side::On).is_empty());
        assert_eq!(Split::default().area(), 0.0);
    }

    #[test]
    fn synthetic_vertices_lie_on_the_cut() {
        let p = polygon(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0]]);
        let l = line([2.0, -1.0], [2.0, 5.0]);
        let split = p.cut(&l).unwrap();

        let original: Vec<Vertex> = p.vertices().to_vec();
        for fragment in split.left.iter().chain(&split.right) {
            for v in fragment.vertices().iter().filter(|v| !original.contains(v)) {
                assert_eq!(l.classify_point(*v), Side::On);
            }
        }
        assert_vertices(&split.left[0], &[[2.0, 0.0], [4.0, 0.0], [4.0, 4.0], [2.0, 2.0]]);
        assert_vertices(&split.right[0], &[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]]);
    }

    #[test]
    fn rounding_at_an_edge_end_still_splits() {
        // The crossing on the first edge computes one ulp past the edge's
        // bounding box; the right side is a sliver at (6.949, 0).
        let p = polygon(&[[-7.313, -1.0], [6.949, 1e-20], [0.0, -3.0]]);
        let l = line([0.0, 0.0], [1.0, 0.0]);
        assert_eq!(p.sides(&l, 0.0), vec![Side::Left, Side::Right, Side::Left]);

        let split = p.cut(&l).unwrap();
        assert_eq!(split.left.len(), 1);
        assert_eq!(split.right.len(), 1);
        assert_eq!(split.right[0].len(), 3);
        assert_eq!(split.left[0].len(), 4);
        assert_relative_eq!(split.area(), p.area(), epsilon = 1e-9);
    }
}
