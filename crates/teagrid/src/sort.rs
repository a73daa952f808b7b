//! Sort stage: sort directives, the click cycle, and comparator sorting.

use std::fmt;

use crate::column::ColumnRegistry;

/// The current sort instruction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortDirective {
    /// Keep input order.
    #[default]
    None,
    /// Ascending by the column with this title.
    Ascending(String),
    /// Descending by the column with this title.
    Descending(String),
}

impl SortDirective {
    /// Returns the directive after the user clicks the header of `title`.
    ///
    /// Repeated clicks on one column cycle none, ascending, descending, none.
    /// Clicking a different column always starts at ascending.
    ///
    /// # Example
    ///
    /// ```rust
    /// use teagrid::sort::SortDirective;
    ///
    /// let d = SortDirective::None.cycle("name");
    /// assert_eq!(d, SortDirective::Ascending("name".into()));
    /// let d = d.cycle("name");
    /// assert_eq!(d, SortDirective::Descending("name".into()));
    /// assert_eq!(d.cycle("age"), SortDirective::Ascending("age".into()));
    /// ```
    #[must_use]
    pub fn cycle(&self, title: &str) -> Self {
        match self {
            Self::Ascending(current) if current == title => Self::Descending(title.to_string()),
            Self::Descending(current) if current == title => Self::None,
            _ => Self::Ascending(title.to_string()),
        }
    }

    /// Returns the column title this directive sorts by.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Ascending(t) | Self::Descending(t) => Some(t.as_str()),
        }
    }

    /// Returns whether the directive is descending.
    #[must_use]
    pub fn is_descending(&self) -> bool {
        matches!(self, Self::Descending(_))
    }
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "unsorted"),
            Self::Ascending(t) => write!(f, "{t} ascending"),
            Self::Descending(t) => write!(f, "{t} descending"),
        }
    }
}

/// Reorders `records` by `directive`.
///
/// An unknown title leaves the input untouched. Descending order is the
/// ascending result reversed as a whole, so runs of equal keys come out in
/// reverse input order.
pub fn sort<'a, R, H>(
    mut records: Vec<&'a R>,
    columns: &ColumnRegistry<R, H>,
    directive: &SortDirective,
) -> Vec<&'a R> {
    let Some(title) = directive.title() else {
        return records;
    };
    let Some(column) = columns.get(title) else {
        tracing::trace!(title, "sort column not found, keeping input order");
        return records;
    };

    records.sort_by(|a, b| column.compare(a, b));
    if directive.is_descending() {
        records.reverse();
    }
    records
}
