//! BSP tree node implementation.

use crate::Line;

use super::visitor::BspVisitor;

/// The region a leaf stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Region {
    /// The leaf lies inside the partitioned polygon.
    Inside,
    /// The leaf lies outside the partitioned polygon.
    Outside,
}

/// A node in the BSP tree.
///
/// Internal nodes own their partition line and both children exclusively.
/// Trees are built bottom-up and never mutated afterwards.
///
/// With the `serde` feature, leaves serialize as the strings `"inside"` and
/// `"outside"`, and internal nodes as `{"line": [[x, y], [x, y]], "left": ..,
/// "right": ..}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum BspNode {
    /// A terminal region.
    Leaf(Region),
    /// A partition line with the subtrees on its left and right.
    Internal {
        /// The partition line of this node.
        line: Line,
        /// Subtree left of `line`.
        left: Box<BspNode>,
        /// Subtree right of `line`.
        right: Box<BspNode>,
    },
}

impl BspNode {
    /// Creates an inside leaf.
    #[inline]
    pub fn inside() -> Self {
        BspNode::Leaf(Region::Inside)
    }

    /// Creates an outside leaf.
    #[inline]
    pub fn outside() -> Self {
        BspNode::Leaf(Region::Outside)
    }

    /// Creates an internal node from a line and its two subtrees.
    pub fn internal(line: Line, left: BspNode, right: BspNode) -> Self {
        BspNode::Internal {
            line,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns `true` for a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, BspNode::Leaf(_))
    }

    /// Returns the region of a leaf, `None` for internal nodes.
    #[inline]
    pub fn region(&self) -> Option<Region> {
        match self {
            BspNode::Leaf(region) => Some(*region),
            BspNode::Internal { .. } => None,
        }
    }

    /// Returns the partition line of an internal node.
    #[inline]
    pub fn line(&self) -> Option<&Line> {
        match self {
            BspNode::Leaf(_) => None,
            BspNode::Internal { line, .. } => Some(line),
        }
    }

    /// Returns the left subtree of an internal node.
    #[inline]
    pub fn left(&self) -> Option<&BspNode> {
        match self {
            BspNode::Leaf(_) => None,
            BspNode::Internal { left, .. } => Some(left.as_ref()),
        }
    }

    /// Returns the right subtree of an internal node.
    #[inline]
    pub fn right(&self) -> Option<&BspNode> {
        match self {
            BspNode::Leaf(_) => None,
            BspNode::Internal { right, .. } => Some(right.as_ref()),
        }
    }

    /// Returns the number of internal nodes on the longest root-to-leaf
    /// path (0 for a leaf).
    pub fn depth(&self) -> usize {
        match self {
            BspNode::Leaf(_) => 0,
            BspNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Returns the number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            BspNode::Leaf(_) => 1,
            BspNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Returns the number of internal nodes in this subtree.
    pub fn internal_count(&self) -> usize {
        match self {
            BspNode::Leaf(_) => 0,
            BspNode::Internal { left, right, .. } => {
                1 + left.internal_count() + right.internal_count()
            }
        }
    }

    /// Visits every node in pre-order, left subtree before right.
    ///
    /// The depth passed to the visitor counts edges from this node, which is
    /// visited at depth 0.
    pub fn walk<V: BspVisitor + ?Sized>(&self, visitor: &mut V) {
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                BspNode::Leaf(region) => visitor.visit_leaf(*region, depth),
                BspNode::Internal { line, left, right } => {
                    visitor.visit_internal(line, depth);
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
            }
        }
    }
}
