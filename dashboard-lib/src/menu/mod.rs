//! Navigation menu derived from route metadata
//!
//! Routes carry their menu placement in [`RouteMeta`]. [`MenuDeriver`] turns
//! a flat route list into an ordered tree of [`MenuItem`]s, and
//! [`resolve_active`] computes which keys to select and expand for the
//! current path.
//!
//! # Example
//!
//! ```
//! use dashboard_lib::menu::{app_routes, derive_menu, normalize_routes, resolve_active};
//!
//! let menu = derive_menu(&normalize_routes(&app_routes()));
//! let selection = resolve_active("/component/table", &menu);
//!
//! assert_eq!(selection.selected_keys, ["components-table"]);
//! assert_eq!(selection.open_keys, ["components"]);
//! ```

mod active;
mod derive;
mod item;
mod route;
mod routes;

pub use active::*;
pub use derive::*;
pub use item::*;
pub use route::*;
pub use routes::*;
