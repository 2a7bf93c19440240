//! Minimum-description-length (MDLP) supervised discretization
//!
//! Fayyad & Irani's recursive entropy partitioning: the sorted feature is
//! split where it minimizes the weighted label entropy of the two halves, as
//! long as the information gain outweighs the description-length cost of the
//! split.
//!
//! Layering, leaf first: [`entropy`] → [`criterion`] / [`search`] →
//! [`partition`] → [`cut_points`](mod@cut_points).

pub mod criterion;
pub mod cut_points;
pub mod entropy;
pub mod error;
pub mod partition;
pub mod search;

pub use criterion::{should_partition, AcceptanceTest};
pub use cut_points::{bin_of, candidate_positions, cut_points, digitize, discretize, Discretization};
pub use entropy::{distinct_count, entropy};
pub use error::{MdlpError, MdlpResult};
pub use partition::{partition, Partition, SplitDecision};
pub use search::{find_cut_index, BestCut};

/// Slice length at which left and right sub-problems fork onto the rayon pool
pub const DEFAULT_PARALLEL_MIN_LEN: usize = 4096;

/// Configuration for the recursive partitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MdlpConfig {
    /// Slices at least this long run both halves with `rayon::join`;
    /// `usize::MAX` keeps everything on the calling thread
    pub parallel_min_len: usize,
}

impl Default for MdlpConfig {
    fn default() -> Self {
        Self {
            parallel_min_len: DEFAULT_PARALLEL_MIN_LEN,
        }
    }
}
