//! The data grid component.
//!
//! [`DataGrid`] ties the pieces together: a [`ColumnRegistry`], the
//! [`GridState`] and a [`GridConfig`]. Records are not stored; the host
//! passes them to [`DataGrid::page`] and [`DataGrid::view`] on every render,
//! and the visible page is derived as filter, then sort, then paginate.
//!
//! # Example
//!
//! ```rust
//! use teagrid::column::{Column, ColumnRegistry};
//! use teagrid::grid::DataGrid;
//! use teagrid::message::Msg;
//!
//! struct Person {
//!     name: &'static str,
//!     age: i64,
//! }
//!
//! let people = vec![
//!     Person { name: "Bob", age: 30 },
//!     Person { name: "Al", age: 25 },
//!     Person { name: "Cy", age: 40 },
//! ];
//!
//! let columns: ColumnRegistry<Person> = ColumnRegistry::new(vec![
//!     Column::text("name", |p: &Person| p.name.to_string()),
//!     Column::int("age", |p: &Person| p.age),
//! ])
//! .unwrap();
//!
//! let mut grid = DataGrid::new(columns);
//! grid.update(Msg::SetPageSize(2));
//! grid.update(Msg::sort_by("name"));
//!
//! let page = grid.page(&people);
//! let names: Vec<&str> = page.records.iter().map(|p| p.name).collect();
//! assert_eq!(names, vec!["Al", "Bob"]);
//! assert_eq!(grid.max_page(&people), 1);
//! ```

use crate::column::ColumnRegistry;
use crate::command::Cmd;
use crate::config::GridConfig;
use crate::filter::filter;
use crate::message::{Element, FilterColumn, Msg};
use crate::paginate::{Navigation, Page, max_page_index};
use crate::sort::sort;
use crate::state::{GridState, Openness};

/// Paginated, sortable, filterable data grid.
pub struct DataGrid<R, H = ()> {
    columns: ColumnRegistry<R, H>,
    state: GridState,
    config: GridConfig,
}

impl<R, H> Clone for DataGrid<R, H> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            state: self.state.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R, H> std::fmt::Debug for DataGrid<R, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGrid")
            .field("columns", &self.columns)
            .field("state", &self.state)
            .field("config", &self.config)
            .finish()
    }
}

impl<R, H> DataGrid<R, H> {
    /// Creates a grid with the default configuration.
    #[must_use]
    pub fn new(columns: ColumnRegistry<R, H>) -> Self {
        Self::with_config(columns, GridConfig::default())
    }

    /// Creates a grid with the given configuration.
    ///
    /// The configuration is expected to be valid (see
    /// [`GridConfig::validate`]); a zero page size is raised to one.
    #[must_use]
    pub fn with_config(columns: ColumnRegistry<R, H>, config: GridConfig) -> Self {
        Self {
            columns,
            state: GridState::new(config.page_size),
            config,
        }
    }

    /// Returns the interaction state.
    #[must_use]
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Returns the column registry.
    #[must_use]
    pub fn columns(&self) -> &ColumnRegistry<R, H> {
        &self.columns
    }

    /// Returns the column registry for visibility changes.
    pub fn columns_mut(&mut self) -> &mut ColumnRegistry<R, H> {
        &mut self.columns
    }

    /// Entries of the filter-column menu: the "all" label, then every title.
    #[must_use]
    pub fn filter_options(&self) -> Vec<&str> {
        std::iter::once(self.config.all_label.as_str())
            .chain(self.columns.iter().map(|col| col.title()))
            .collect()
    }

    /// Entries of the page-size menu.
    #[must_use]
    pub fn page_size_options(&self) -> &[usize] {
        &self.config.page_size_options
    }

    /// Records that pass the current filter, in input order.
    pub fn filtered<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        filter(
            records,
            &self.columns,
            self.state.search.as_deref(),
            self.state.filter_column.as_deref(),
        )
    }

    /// Filtered records in the current sort order.
    pub fn sorted<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        sort(self.filtered(records), &self.columns, &self.state.sort)
    }

    /// The current page of `records`.
    pub fn page<'a>(&self, records: &'a [R]) -> Page<'a, R> {
        let sorted = self.sorted(records);
        Page::from_sorted(&sorted, self.state.page_size, self.state.current_page)
    }

    /// Index of the last non-empty page after filtering.
    pub fn max_page(&self, records: &[R]) -> usize {
        max_page_index(self.filtered(records).len(), self.state.page_size)
    }

    /// Navigation controls for the current page.
    pub fn navigation(&self, records: &[R]) -> Navigation {
        Navigation::new(
            self.state.current_page,
            self.state.page_size,
            self.filtered(records).len(),
        )
    }

    /// Applies a message and returns the effects the host should run.
    pub fn update(&mut self, msg: Msg<H>) -> Option<Cmd<H>> {
        match msg {
            Msg::SortBy(title) => {
                self.state.sort = self.state.sort.cycle(&title);
                tracing::debug!(sort = %self.state.sort, "sort changed");
                None
            }
            Msg::ChangePage(delta) => {
                let current = i64::try_from(self.state.current_page).unwrap_or(i64::MAX);
                let next = current.saturating_add(delta).max(0);
                self.state.current_page = usize::try_from(next).unwrap_or(usize::MAX);
                tracing::debug!(page = self.state.current_page, delta, "page changed");
                None
            }
            Msg::JumpToPage(page) => {
                self.state.current_page = page;
                tracing::debug!(page, "jumped to page");
                None
            }
            Msg::SetPageSize(size) => {
                if size == 0 {
                    tracing::warn!("ignoring zero page size");
                    return None;
                }
                self.state.page_size = size;
                tracing::debug!(size, "page size changed");
                Some(Cmd::Blur(Element::PageSizeControl))
            }
            Msg::TogglePageSizeMenu => {
                self.state.page_size_menu = self.state.page_size_menu.toggled();
                if self.state.page_size_menu.is_open() {
                    self.state.close_generation = self.state.close_generation.wrapping_add(1);
                    tracing::debug!(generation = self.state.close_generation, "page size menu opened");
                    Some(Cmd::Focus(Element::PageSizeOptions))
                } else {
                    tracing::debug!("page size menu closed");
                    None
                }
            }
            Msg::ClosePageSizeMenu => {
                self.state.page_size_menu = Openness::Closed;
                None
            }
            Msg::ClosePageSizeMenuLater => {
                let generation = self.state.close_generation;
                Some(Cmd::after(
                    self.config.close_delay_duration(),
                    Msg::PageSizeMenuTimeout(generation),
                ))
            }
            Msg::PageSizeMenuTimeout(generation) => {
                if generation == self.state.close_generation {
                    self.state.page_size_menu = Openness::Closed;
                } else {
                    tracing::debug!(
                        generation,
                        current = self.state.close_generation,
                        "ignoring stale page size menu close"
                    );
                }
                None
            }
            Msg::SetFilterText(text) => {
                self.state.search = if text.is_empty() { None } else { Some(text) };
                tracing::debug!(search = ?self.state.search, "filter text changed");
                None
            }
            Msg::SetFilterColumn(FilterColumn::All) => {
                self.state.filter_column = None;
                tracing::debug!("filtering all columns");
                None
            }
            Msg::SetFilterColumn(FilterColumn::Column(title)) => {
                tracing::debug!(column = %title, "filter column changed");
                self.state.filter_column = Some(title);
                Some(Cmd::Blur(Element::FilterOptions))
            }
            Msg::ToggleFilterMenu => {
                self.state.filter_menu = self.state.filter_menu.toggled();
                self.state
                    .filter_menu
                    .is_open()
                    .then_some(Cmd::Focus(Element::FilterOptions))
            }
            Msg::CloseFilterMenu => {
                self.state.filter_menu = Openness::Closed;
                None
            }
            Msg::ToggleColumn { title, shown } => {
                let emitted = self
                    .columns
                    .get(&title)
                    .and_then(|col| col.toggle().message(shown));
                if emitted.is_none() {
                    tracing::debug!(column = %title, "column is not toggleable");
                }
                emitted.map(Cmd::Emit)
            }
            Msg::ToggleColumnPanel => {
                self.state.column_panel = self.state.column_panel.toggled();
                None
            }
            Msg::CloseColumnPanel => {
                self.state.column_panel = Openness::Closed;
                None
            }
            Msg::Host(inner) => Some(Cmd::Emit(inner)),
        }
    }
}
