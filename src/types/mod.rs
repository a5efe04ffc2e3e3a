//! Data types for sticky column computation.

mod column;
mod props;

pub use column::*;
pub use props::*;
