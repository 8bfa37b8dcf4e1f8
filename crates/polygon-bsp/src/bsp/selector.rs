//! Line selection strategies for BSP tree construction.
//!
//! The order in which candidate lines are used decides the shape of the tree
//! and how often fragments get split.

use crate::Line;

/// Strategy for picking the active partition line from a candidate pool.
pub trait LineSelector {
    /// Returns the index of the line to partition with next.
    ///
    /// Returns `None` if the slice is empty.
    fn select(&self, lines: &[Line]) -> Option<usize>;

    /// Removes the selected line from `lines` and returns it together with
    /// the remaining pool, in its original order.
    ///
    /// An index past the end of the pool is treated as no selection.
    fn take(&self, mut lines: Vec<Line>) -> Option<(Line, Vec<Line>)> {
        let index = self.select(&lines).filter(|&i| i < lines.len())?;
        let line = lines.remove(index);
        Some((line, lines))
    }
}

/// Selects the first remaining candidate.
///
/// Lines are consumed in input order, so callers control the tree shape
/// through the order they pass lines in.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLine;

impl LineSelector for FirstLine {
    fn select(&self, lines: &[Line]) -> Option<usize> {
        (!lines.is_empty()).then_some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(start: [f64; 2], end: [f64; 2]) -> Line {
        Line::from_coords(start, end).unwrap()
    }

    struct OutOfRange;

    impl LineSelector for OutOfRange {
        fn select(&self, lines: &[Line]) -> Option<usize> {
            Some(lines.len())
        }
    }

    #[test]
    fn first_line_empty_pool() {
        assert!(FirstLine.select(&[]).is_none());
        assert!(FirstLine.take(Vec::new()).is_none());
    }

    #[test]
    fn first_line_keeps_remaining_order() {
        let a = line([0.0, 0.0], [1.0, 0.0]);
        let b = line([1.0, 0.0], [1.0, 1.0]);
        let c = line([1.0, 1.0], [0.0, 0.0]);

        let (active, rest) = FirstLine.take(vec![a, b, c]).unwrap();
        assert_eq!(active, a);
        assert_eq!(rest, vec![b, c]);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let a = line([0.0, 0.0], [1.0, 0.0]);
        assert!(OutOfRange.take(vec![a]).is_none());
    }
}
