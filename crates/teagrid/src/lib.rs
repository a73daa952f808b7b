#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Teagrid
//!
//! A paginated, sortable, filterable data grid for Elm Architecture
//! applications.
//!
//! The grid turns a slice of records into the visible page in three pure
//! stages and keeps the interaction state that drives them:
//! - **column** - Column definitions and the registry they live in
//! - **filter** - Case-insensitive substring search
//! - **sort** - Sort directives, the header click cycle, comparator sorting
//! - **paginate** - Page slicing and navigation controls
//! - **state** - Interaction state (page, search, sort, menu openness)
//! - **message** / **command** - What goes into and comes out of `update`
//! - **grid** - The [`DataGrid`](grid::DataGrid) component itself
//! - **view** - Plain-text rendering
//! - **simulator** - Virtual-clock host for tests and headless use
//! - **config** - Tunables loaded from TOML
//!
//! ## Example
//!
//! ```rust
//! use teagrid::prelude::*;
//!
//! let columns: ColumnRegistry<(String, i64)> = ColumnRegistry::new(vec![
//!     Column::text("name", |r: &(String, i64)| r.0.clone()),
//!     Column::int("age", |r: &(String, i64)| r.1),
//! ])
//! .unwrap();
//!
//! let mut grid = DataGrid::new(columns);
//! grid.update(Msg::filter_text("bo"));
//!
//! let records = vec![("Bob".to_string(), 30), ("Al".to_string(), 25)];
//! assert_eq!(grid.page(&records).len(), 1);
//! ```

pub mod column;
pub mod command;
pub mod config;
pub mod error;
pub mod filter;
pub mod grid;
pub mod message;
pub mod paginate;
pub mod simulator;
pub mod sort;
pub mod state;
pub mod view;

pub use error::{GridError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::column::{Accessor, Column, ColumnRegistry, DynamicCell, Toggle};
    pub use crate::command::{Cmd, batch};
    pub use crate::config::GridConfig;
    pub use crate::error::GridError;
    pub use crate::filter::filter;
    pub use crate::grid::DataGrid;
    pub use crate::message::{Element, FilterColumn, Msg};
    pub use crate::paginate::{Navigation, Page, max_page_index, paginate};
    pub use crate::simulator::{FocusRequest, GridSimulator};
    pub use crate::sort::{SortDirective, sort};
    pub use crate::state::{GridState, Openness};
}
