//! BSP tree container and construction.

use log::{debug, trace};

use crate::{BspConfig, BspError, BspResult, Cuttable, Line, Polygon, Split};

use super::node::{BspNode, Region};
use super::selector::{FirstLine, LineSelector};
use super::visitor::{BspVisitor, LineCollector, RegionCounts};

/// A Binary Space Partitioning tree for one polygon.
///
/// The tree recursively partitions the plane with candidate lines until
/// every leaf is known to be inside or outside the polygon.
///
/// # Construction
///
/// ```ignore
/// use polygon_bsp::{BspTree, Line, Polygon};
///
/// let polygon = Polygon::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]])?;
/// let lines: Vec<Line> = polygon.edges().map(Line::try_from).collect::<Result<_, _>>()?;
/// let tree = BspTree::build(&polygon, &lines)?;
/// ```
///
/// # Recursion
///
/// At each node the selected line splits the current polygon. A bisected
/// polygon passes each side the edges of that side's first fragment as the
/// next candidates, minus the edges lying on the line. Otherwise both sides
/// inherit the unused candidates. Several fragments on one side are merged
/// under the active line.
///
/// With the `parallel` feature the two sides of each node are built with
/// `rayon::join`; the result is identical to the serial build.
#[derive(Debug, Clone, PartialEq)]
pub struct BspTree {
    root: BspNode,
}

impl BspTree {
    /// Builds a tree using [`FirstLine`] and the default [`BspConfig`].
    pub fn build(polygon: &Polygon, lines: &[Line]) -> BspResult<Self> {
        Self::build_with(polygon, lines, &FirstLine, BspConfig::default())
    }

    /// Builds a tree with a custom line selector and configuration.
    ///
    /// An empty `lines` slice yields a single inside leaf.
    pub fn build_with<S>(
        polygon: &Polygon,
        lines: &[Line],
        selector: &S,
        config: BspConfig,
    ) -> BspResult<Self>
    where
        S: LineSelector + Sync,
    {
        let builder = Builder { selector, config };
        let root = builder.node(polygon.clone(), lines.to_vec(), 0)?;
        debug!(
            "built tree for {} vertices from {} lines: {} internal nodes, depth {}",
            polygon.len(),
            lines.len(),
            root.internal_count(),
            root.depth()
        );
        Ok(Self { root })
    }

    /// Returns a reference to the root node.
    #[inline]
    pub fn root(&self) -> &BspNode {
        &self.root
    }

    /// Consumes the tree, returning the root node.
    #[inline]
    pub fn into_root(self) -> BspNode {
        self.root
    }

    /// Returns the maximum number of internal nodes on a root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Returns the number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Returns the number of internal nodes, one less than the leaves.
    pub fn internal_count(&self) -> usize {
        self.root.internal_count()
    }

    /// Counts the inside and outside leaves.
    pub fn region_counts(&self) -> RegionCounts {
        let mut counts = RegionCounts::default();
        self.walk(&mut counts);
        counts
    }

    /// Returns the partition lines in pre-order.
    pub fn lines(&self) -> Vec<Line> {
        let mut collector = LineCollector::new();
        self.walk(&mut collector);
        collector.into_lines()
    }

    /// Walks the tree in pre-order. See [`BspNode::walk`].
    pub fn walk<V: BspVisitor + ?Sized>(&self, visitor: &mut V) {
        self.root.walk(visitor);
    }
}

impl From<BspTree> for BspNode {
    fn from(tree: BspTree) -> Self {
        tree.into_root()
    }
}

/// Recursive construction state shared by every call.
struct Builder<'a, S> {
    selector: &'a S,
    config: BspConfig,
}

impl<S: LineSelector + Sync> Builder<'_, S> {
    /// Builds the subtree for `polygon` with the candidate lines in `pool`.
    fn node(&self, polygon: Polygon, pool: Vec<Line>, depth: usize) -> BspResult<BspNode> {
        if depth > self.config.max_depth {
            return Err(BspError::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }

        let Some((line, unused)) = self.selector.take(pool) else {
            trace!("no candidate lines left at depth {depth}, leaf is inside");
            return Ok(BspNode::inside());
        };

        let split = polygon.cut_with_tolerance(&line, self.config.tolerance)?;

        if !split.is_bisected() && unused.is_empty() {
            return Ok(BspNode::internal(line, BspNode::inside(), BspNode::outside()));
        }

        let (left_pool, right_pool) = match (split.left.first(), split.right.first()) {
            (Some(left), Some(right)) => (self.next_pool(left, &line), self.next_pool(right, &line)),
            _ => (unused.clone(), unused),
        };

        let Split { left, right } = split;
        let (left, right) = join(
            || self.side(left, left_pool, &line, Region::Inside, depth),
            || self.side(right, right_pool, &line, Region::Outside, depth),
        );

        Ok(BspNode::internal(line, left?, right?))
    }

    /// Builds one side of the active line.
    ///
    /// `empty` is the leaf used when the side received no fragments.
    fn side(
        &self,
        mut fragments: Vec<Polygon>,
        pool: Vec<Line>,
        line: &Line,
        empty: Region,
        depth: usize,
    ) -> BspResult<BspNode> {
        if fragments.len() > 1 {
            return self.merge(fragments, line, depth);
        }
        match fragments.pop() {
            Some(fragment) => self.node(fragment, pool, depth + 1),
            None => Ok(BspNode::Leaf(empty)),
        }
    }

    /// Joins the subtrees of several fragments on one side of `line`.
    ///
    /// Consecutive subtrees are paired under `line` (an odd one out gets an
    /// outside leaf), then the pairs are folded left to right.
    fn merge(&self, fragments: Vec<Polygon>, line: &Line, depth: usize) -> BspResult<BspNode> {
        debug!("merging {} fragments under {line:?}", fragments.len());

        let mut subtrees = fragments
            .into_iter()
            .map(|fragment| self.node(fragment, Vec::new(), depth + 1))
            .collect::<BspResult<Vec<_>>>()?
            .into_iter();

        let mut pairs = Vec::new();
        while let Some(first) = subtrees.next() {
            let second = subtrees.next().unwrap_or_else(BspNode::outside);
            pairs.push(BspNode::internal(*line, first, second));
        }

        Ok(pairs
            .into_iter()
            .reduce(|merged, next| BspNode::internal(*line, merged, next))
            .unwrap_or_else(BspNode::inside))
    }

    /// Candidate lines for the next level: the fragment's edges that do not
    /// lie on `line`.
    fn next_pool(&self, fragment: &Polygon, line: &Line) -> Vec<Line> {
        fragment
            .edges()
            .filter(|edge| !line.contains_edge(edge, self.config.tolerance))
            .filter_map(|edge| Line::try_from(edge).ok())
            .collect()
    }
}

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}
