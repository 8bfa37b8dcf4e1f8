//! Visitor pattern for BSP tree traversal.
//!
//! Visitors receive nodes in pre-order from [`BspNode::walk`], so traversal
//! logic stays out of the code that consumes the tree.
//!
//! [`BspNode::walk`]: super::BspNode::walk

use crate::Line;

use super::node::Region;

/// Visitor for processing nodes during a BSP tree walk.
///
/// Both methods default to doing nothing; implement the ones you need.
pub trait BspVisitor {
    /// Called for each internal node with its partition line.
    fn visit_internal(&mut self, _line: &Line, _depth: usize) {}

    /// Called for each leaf with its region.
    fn visit_leaf(&mut self, _region: Region, _depth: usize) {}
}

/// Collects the partition lines of internal nodes in pre-order.
#[derive(Debug, Default)]
pub struct LineCollector {
    lines: Vec<Line>,
}

impl LineCollector {
    /// Creates a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected lines.
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// Returns a reference to the collected lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

impl BspVisitor for LineCollector {
    fn visit_internal(&mut self, line: &Line, _depth: usize) {
        self.lines.push(*line);
    }
}

/// Number of leaves per region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionCounts {
    /// Leaves marked [`Region::Inside`].
    pub inside: usize,
    /// Leaves marked [`Region::Outside`].
    pub outside: usize,
}

impl BspVisitor for RegionCounts {
    fn visit_leaf(&mut self, region: Region, _depth: usize) {
        match region {
            Region::Inside => self.inside += 1,
            Region::Outside => self.outside += 1,
        }
    }
}

/// A visitor that calls a closure for each leaf.
pub struct FnVisitor<F>
where
    F: FnMut(Region, usize),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(Region, usize),
{
    /// Creates a new visitor from a closure taking the leaf region and depth.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> BspVisitor for FnVisitor<F>
where
    F: FnMut(Region, usize),
{
    fn visit_leaf(&mut self, region: Region, depth: usize) {
        (self.func)(region, depth);
    }
}
