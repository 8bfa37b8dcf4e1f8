//! Binary Space Partitioning tree for a 2D polygon.
//!
//! This module builds a BSP tree that recursively partitions the plane with
//! candidate lines, usually the polygon's own edges. Every leaf records
//! whether its region is inside or outside the polygon.
//!
//! # Example
//!
//! ```ignore
//! use polygon_bsp::{BspTree, Line, Polygon};
//! use polygon_bsp::bsp::RegionCounts;
//!
//! let polygon = Polygon::from_coords(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]])?;
//! let cut = Line::from_coords([2.0, -1.0], [2.0, 5.0])?;
//! let tree = BspTree::build(&polygon, &[cut])?;
//!
//! let mut counts = RegionCounts::default();
//! tree.walk(&mut counts);
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: The container holding the root node
//! - [`BspNode`]: Leaves carrying a [`Region`] and internal nodes carrying a line
//! - [`LineSelector`]: Strategy trait for choosing the next partition line
//! - [`BspVisitor`]: Visitor trait for pre-order walks

mod node;
mod selector;
mod tree;
mod visitor;

pub use node::{BspNode, Region};
pub use selector::{FirstLine, LineSelector};
pub use tree::BspTree;
pub use visitor::{BspVisitor, FnVisitor, LineCollector, RegionCounts};
