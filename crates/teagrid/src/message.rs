//! Messages for the grid's update function.
//!
//! Every user action on the grid is a [`Msg`]. Messages the grid does not
//! own, such as clicks inside host-rendered cells, travel through
//! [`Msg::Host`] untouched and come back out as
//! [`Cmd::Emit`](crate::command::Cmd::Emit).

use std::fmt;

/// Elements the grid may ask the host to focus or blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// The button that opens the page-size menu.
    PageSizeControl,
    /// The option list of the page-size menu.
    PageSizeOptions,
    /// The option list of the filter-column menu.
    FilterOptions,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageSizeControl => write!(f, "page-size-control"),
            Self::PageSizeOptions => write!(f, "page-size-options"),
            Self::FilterOptions => write!(f, "filter-options"),
        }
    }
}

/// Choice in the filter-column menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterColumn {
    /// Search every column.
    All,
    /// Search only the column with this title.
    Column(String),
}

impl FilterColumn {
    /// Shorthand for [`FilterColumn::Column`].
    #[must_use]
    pub fn column(title: impl Into<String>) -> Self {
        Self::Column(title.into())
    }
}

/// A user action, or a host message passing through.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg<H> {
    /// Header click: advance the sort cycle for this column.
    SortBy(String),
    /// Move the current page by a signed delta.
    ChangePage(i64),
    /// Go to a page.
    JumpToPage(usize),
    /// Pick a new page size.
    SetPageSize(usize),
    /// Open or close the page-size menu.
    TogglePageSizeMenu,
    /// Close the page-size menu now.
    ClosePageSizeMenu,
    /// Close the page-size menu after the configured delay.
    ClosePageSizeMenuLater,
    /// The delayed close fired; carries the generation it was scheduled in.
    PageSizeMenuTimeout(u64),
    /// The filter text changed.
    SetFilterText(String),
    /// A filter column was picked.
    SetFilterColumn(FilterColumn),
    /// Open or close the filter-column menu.
    ToggleFilterMenu,
    /// Close the filter-column menu.
    CloseFilterMenu,
    /// The user flipped a column checkbox to `shown`.
    ToggleColumn {
        /// Title of the column.
        title: String,
        /// New checked state.
        shown: bool,
    },
    /// Open or close the column settings panel.
    ToggleColumnPanel,
    /// Close the column settings panel.
    CloseColumnPanel,
    /// Opaque host message, re-emitted as is.
    Host(H),
}

impl<H> Msg<H> {
    /// Shorthand for [`Msg::SortBy`].
    #[must_use]
    pub fn sort_by(title: impl Into<String>) -> Self {
        Self::SortBy(title.into())
    }

    /// Shorthand for [`Msg::SetFilterText`].
    #[must_use]
    pub fn filter_text(text: impl Into<String>) -> Self {
        Self::SetFilterText(text.into())
    }

    /// Shorthand for [`Msg::ToggleColumn`].
    #[must_use]
    pub fn toggle_column(title: impl Into<String>, shown: bool) -> Self {
        Self::ToggleColumn {
            title: title.into(),
            shown,
        }
    }
}
