//! Functional modules of the crate: curve construction, point editing,
//! animation, styling, parsing and export.

pub mod animate;
pub mod build;
pub mod edit;
pub mod export;
pub mod parse;
pub mod style;
