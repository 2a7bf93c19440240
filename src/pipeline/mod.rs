//! Pipeline module - loading, label extraction, and per-feature discretization

pub mod discretize;
pub mod loader;
pub mod target;

pub use discretize::*;
pub use loader::*;
pub use target::*;
