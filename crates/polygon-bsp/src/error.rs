//! Error types for splitting and tree construction.
//!
//! Geometric "no intersection" results are not errors; they are absorbed by
//! the splitter. Everything here is structural and is returned to the
//! immediate caller of [`split`](crate::split()) or [`build`](crate::build()).

use thiserror::Error;

use crate::Side;

/// Errors raised while validating input or partitioning a polygon.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BspError {
    /// Input rejected before any classification took place.
    ///
    /// Polygons need at least three finite vertices, lines need two
    /// distinct finite points.
    #[error("degenerate input: {reason}")]
    DegenerateInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// Fragment collection produced a piece that is not a polygon.
    #[error("split produced a {side:?} fragment with only {vertices} vertices")]
    InvalidFragment {
        /// The side of the partition line the fragment belongs to.
        side: Side,
        /// Number of vertices the fragment ended up with.
        vertices: usize,
    },

    /// Tree construction recursed deeper than the configured limit.
    #[error("tree construction exceeded the depth limit of {limit}")]
    DepthLimitExceeded {
        /// The limit from [`BspConfig::max_depth`](crate::BspConfig::max_depth).
        limit: usize,
    },
}

impl BspError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type BspResult<T> = Result<T, BspError>;
