//! Admin dashboard table generator core
//!
//! The non-visual half of an admin dashboard that lets users define tables
//! declaratively:
//!
//! - [`menu`] derives the navigation tree from route descriptors and resolves
//!   which entries are highlighted for a path.
//! - [`store`] keeps named table configurations built from a default
//!   template, with column- and field-level edits.
//! - [`mock`] serves paginated, filterable synthetic datasets behind the
//!   [`mock::TableService`] trait.
//! - [`model`] holds the declarative table model shared by all of the above.

pub mod config;
pub mod error;
pub mod menu;
pub mod mock;
pub mod model;
pub mod store;
