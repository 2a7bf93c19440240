//! entropymdlp: supervised MDLP discretization
//!
//! The [`mdlp`] module holds the algorithm: Fayyad & Irani's
//! minimum-description-length partitioning of a numeric feature against
//! categorical labels. [`pipeline`], [`report`] and [`cli`] wrap it into a
//! dataset-level tool.

pub mod cli;
pub mod mdlp;
pub mod pipeline;
pub mod report;
pub mod utils;
