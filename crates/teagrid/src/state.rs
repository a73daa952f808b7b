//! Interaction state of a grid.

use crate::config::DEFAULT_PAGE_SIZE;
use crate::sort::SortDirective;

/// Open/closed state of a dropdown or panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Openness {
    /// Collapsed.
    #[default]
    Closed,
    /// Expanded.
    Open,
}

impl Openness {
    /// Returns the opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Returns whether this is [`Openness::Open`].
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Everything the grid remembers between renders.
///
/// Only the grid's update function mutates it; hosts read it through
/// [`DataGrid::state`](crate::grid::DataGrid::state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    /// Records per page, always positive.
    pub page_size: usize,
    /// Zero-based page index. Not clamped to the data.
    pub current_page: usize,
    /// Active search text; `None` means no filter.
    pub search: Option<String>,
    /// Current sort directive.
    pub sort: SortDirective,
    /// Column the search is restricted to; `None` searches all columns.
    pub filter_column: Option<String>,
    /// Filter-column menu.
    pub filter_menu: Openness,
    /// Column settings panel.
    pub column_panel: Openness,
    /// Page-size menu.
    pub page_size_menu: Openness,
    /// Bumped each time the page-size menu opens; stale delayed closes
    /// carry an older value.
    pub close_generation: u64,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl GridState {
    /// Creates the initial state with the given page size.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 0,
            search: None,
            sort: SortDirective::None,
            filter_column: None,
            filter_menu: Openness::Closed,
            column_panel: Openness::Closed,
            page_size_menu: Openness::Closed,
            close_generation: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_defaults() {
        let state = GridState::default();
        assert_eq!(state.page_size, 10);
        assert_eq!(state.current_page, 0);
        assert!(state.search.is_none());
        assert_eq!(state.sort, SortDirective::None);
        assert!(state.filter_column.is_none());
        assert!(!state.filter_menu.is_open());
        assert!(!state.column_panel.is_open());
        assert!(!state.page_size_menu.is_open());
    }

    #[test]
    fn test_state_page_size_is_positive() {
        assert_eq!(GridState::new(0).page_size, 1);
    }

    #[test]
    fn test_openness_toggle() {
        assert_eq!(Openness::Closed.toggled(), Openness::Open);
        assert_eq!(Openness::Open.toggled(), Openness::Closed);
    }
}
