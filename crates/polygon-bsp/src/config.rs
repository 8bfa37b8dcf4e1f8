//! Numeric tolerance and recursion limits.

/// Default tolerance for side classification and the parallel-line test.
///
/// Zero means exact comparison: a point is on a line only when the signed
/// area is exactly `0.0`, and two lines are parallel only when the cross
/// product of their directions is exactly `0.0`.
pub const DEFAULT_TOLERANCE: f64 = 0.0;

/// Default bound on builder recursion.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings shared by the splitter and the tree builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BspConfig {
    /// Points with `|signed area| <= tolerance` classify as on the line.
    pub tolerance: f64,
    /// Maximum recursion depth of [`BspTree::build_with`](crate::BspTree::build_with).
    pub max_depth: usize,
}

impl Default for BspConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl BspConfig {
    /// Returns a copy using the given classification tolerance.
    ///
    /// Negative values are treated as zero.
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.max(0.0),
            ..self
        }
    }

    /// Returns a copy using the given recursion limit.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}
