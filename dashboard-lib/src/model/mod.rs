//! Table configuration schema

mod column;
mod generator;
mod icon;
mod operate;
mod record;
mod render;
mod search;
mod table;
mod value;

pub use column::*;
pub use generator::*;
pub use icon::*;
pub use operate::*;
pub use record::*;
pub use render::*;
pub use search::*;
pub use table::*;
pub use value::*;
