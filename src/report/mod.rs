//! Report module - summaries and exports of discretization results

pub mod cuts_export;
pub mod summary;

pub use cuts_export::*;
pub use summary::*;
