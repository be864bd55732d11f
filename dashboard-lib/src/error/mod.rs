//! Error types

mod param;
mod store;

pub use param::*;
pub use store::*;
