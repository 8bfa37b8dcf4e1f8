//! BSP (Binary Space Partitioning) trees for 2D polygons.
//!
//! A polygon is split by oriented partition lines into the fragments on
//! either side, and a BSP tree is built by splitting recursively until every
//! leaf is known to be inside or outside the polygon. Polygons need not be
//! convex: a line crossing a non-convex boundary several times can leave more
//! than one fragment on a side.
//!
//! ```ignore
//! use polygon_bsp::{build, split, Line, Polygon};
//!
//! let polygon = Polygon::from_coords(&[[0.0, 0.0], [5.0, 5.0], [5.0, 3.0], [8.0, 0.0]])?;
//! let line = Line::from_coords([5.0, 5.0], [5.0, 3.0])?;
//!
//! let fragments = split(&polygon, &line)?;
//! assert_eq!(fragments.left.len(), 1);
//!
//! let tree = build(&polygon, &[line])?;
//! ```
//!
//! Side conventions follow the sign of the 2×2 determinant of
//! `[end - start, point - start]`: negative is [`Side::Left`], positive is
//! [`Side::Right`]. Comparisons are exact unless a tolerance is configured
//! through [`BspConfig`].
//!
//! # Features
//!
//! - `serde`: serialization of [`Polygon`], [`Line`] and [`bsp::BspNode`]
//! - `parallel`: builds both sides of each tree node with rayon

pub mod bsp;
mod config;
mod edge;
mod error;
mod line;
mod polygon;
mod split;

pub use bsp::{BspNode, BspTree, FirstLine, LineSelector, Region};
pub use config::{BspConfig, DEFAULT_MAX_DEPTH, DEFAULT_TOLERANCE};
pub use edge::{edges, intersect, intersect_with_tolerance, Edge};
pub use error::{BspError, BspResult};
pub use line::{Line, Side, Vertex};
pub use polygon::{Classification, Polygon};
pub use split::{split_polygon, Cuttable, Split};

/// Splits `polygon` by `line` with exact classification.
///
/// A polygon entirely on one side comes back unchanged on that side; a
/// polygon with no vertex strictly left of the line goes right.
pub fn split(polygon: &Polygon, line: &Line) -> BspResult<Split> {
    polygon.cut(line)
}

/// Builds the BSP tree of `polygon` using `lines` as candidates, in order.
pub fn build(polygon: &Polygon, lines: &[Line]) -> BspResult<BspNode> {
    BspTree::build(polygon, lines).map(BspTree::into_root)
}
