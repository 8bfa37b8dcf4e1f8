//! Multi-fragment detection and collection (non-convex splits).

use crate::split::boundary::Boundary;
use crate::{BspError, BspResult, Edge, Polygon, Side, Vertex};

/// Returns `true` if some on-line edge's interval strictly contains another's
/// on either axis.
///
/// On a single-fragment side the on-line edges tile the cut without nesting.
/// Nesting means the side's vertex sequence wraps around more than one
/// region.
pub(crate) fn on_line_edges_overlap(edges: &[Edge]) -> bool {
    edges.iter().any(|inner| {
        edges.iter().any(|outer| {
            strictly_contains(outer.y_range(), inner.y_range())
                || strictly_contains(outer.x_range(), inner.x_range())
        })
    })
}

#[inline]
fn strictly_contains((outer_min, outer_max): (f64, f64), (inner_min, inner_max): (f64, f64)) -> bool {
    outer_max > inner_max && outer_min < inner_min
}

/// Fragment count assumed for the overlapping side, given the number of
/// on-line vertices in the refined boundary.
#[inline]
pub(crate) fn expected_fragments(on_line: usize) -> usize {
    (on_line.saturating_sub(1) / 2).max(1)
}

/// Cuts a side's vertex sequence into closed fragments.
///
/// A gap in the boundary indices ends the current fragment. New fragments
/// are opened until `expected` exist; after that each gap wraps back to the
/// first fragment.
pub(crate) fn collect_fragments(
    boundary: &Boundary,
    sequence: &[usize],
    expected: usize,
    side: Side,
) -> BspResult<Vec<Polygon>> {
    let mut fragments: Vec<Vec<Vertex>> = Vec::with_capacity(expected);
    let mut current = 0;
    let mut previous: Option<usize> = None;

    for &index in sequence {
        let point = boundary.point(index);
        match previous {
            None => fragments.push(vec![point]),
            Some(prev) if index == prev + 1 => fragments[current].push(point),
            Some(_) if fragments.len() >= expected => {
                current = 0;
                fragments[current].push(point);
            }
            Some(_) => {
                fragments.push(vec![point]);
                current = fragments.len() - 1;
            }
        }
        previous = Some(index);
    }

    fragments
        .into_iter()
        .map(|vertices| {
            if vertices.len() < 3 {
                return Err(BspError::InvalidFragment {
                    side,
                    vertices: vertices.len(),
                });
            }
            Polygon::new(vertices)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Line;

    fn edge(tail: [f64; 2], head: [f64; 2]) -> Edge {
        Edge::new(Vertex::from(tail), Vertex::from(head))
    }

    fn boundary(coords: &[[f64; 2]], start: [f64; 2], end: [f64; 2]) -> Boundary {
        let polygon = Polygon::from_coords(coords).unwrap();
        let line = Line::from_coords(start, end).unwrap();
        let sides = polygon.sides(&line, 0.0);
        Boundary::refine(&polygon, &sides, &line, 0.0)
    }

    #[test]
    fn nested_intervals_overlap() {
        let outer = edge([5.0, 5.0], [5.0, -5.0]);
        let inner = edge([5.0, -2.5], [5.0, -1.0]);
        assert!(on_line_edges_overlap(&[outer, inner]));
        assert!(on_line_edges_overlap(&[inner, outer]));
    }

    #[test]
    fn disjoint_or_single_intervals_do_not_overlap() {
        assert!(!on_line_edges_overlap(&[]));
        assert!(!on_line_edges_overlap(&[edge([5.0, 5.0], [5.0, 0.0])]));
        assert!(!on_line_edges_overlap(&[
            edge([5.0, 5.0], [5.0, 3.0]),
            edge([5.0, 1.0], [5.0, -1.0]),
        ]));
    }

    #[test]
    fn shared_endpoint_is_not_strict_containment() {
        assert!(!on_line_edges_overlap(&[
            edge([0.0, 2.0], [4.0, 2.0]),
            edge([0.0, 2.0], [2.0, 2.0]),
        ]));
    }

    #[test]
    fn expected_count_from_on_line_vertices() {
        assert_eq!(expected_fragments(0), 1);
        assert_eq!(expected_fragments(3), 1);
        assert_eq!(expected_fragments(5), 2);
        assert_eq!(expected_fragments(7), 3);
    }

    #[test]
    fn contiguous_sequence_is_one_fragment() {
        let b = boundary(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]], [2.0, -1.0], [2.0, 5.0]);
        let fragments = collect_fragments(&b, &[0, 1, 2, 3], 1, Side::Right).unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].len(), 4);
    }

    #[test]
    fn gaps_wrap_to_first_fragment_once_expected_reached() {
        let coords = [
            [0.0, 0.0],
            [5.0, 5.0],
            [5.0, 3.0],
            [8.0, 0.0],
            [9.0, 1.0],
            [9.0, -5.0],
            [0.0, -5.0],
            [6.0, -2.0],
        ];
        let b = boundary(&coords, [5.0, 5.0], [5.0, 3.0]);

        // Left sequence of the refined boundary: 0, 1 | 6, 7, 8 | 10.
        let left = b.sequence(Side::Left);
        assert_eq!(left, vec![0, 1, 6, 7, 8, 10]);

        let fragments = collect_fragments(&b, &left, 2, Side::Left).unwrap();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].len(), 3);
        assert_eq!(fragments[0].vertices()[2], b.point(10));
        assert_eq!(fragments[1].vertices()[0], Vertex::new(5.0, -5.0));
    }

    #[test]
    fn short_fragment_is_reported() {
        let b = boundary(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]], [2.0, -1.0], [2.0, 5.0]);
        let err = collect_fragments(&b, &[0, 1, 3, 4], 2, Side::Left).unwrap_err();
        assert_eq!(
            err,
            BspError::InvalidFragment {
                side: Side::Left,
                vertices: 2
            }
        );
    }
}
