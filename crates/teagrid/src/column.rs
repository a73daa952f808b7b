//! Column definitions and the column registry.
//!
//! A [`Column`] describes how to read one value out of a record, how to
//! compare two records by that value, whether the column is currently shown,
//! and whether the user may toggle it. Columns are identified by their title,
//! which must be unique within a [`ColumnRegistry`].
//!
//! # Example
//!
//! ```rust
//! use teagrid::column::{Column, ColumnRegistry};
//!
//! struct Person {
//!     name: String,
//!     age: i64,
//! }
//!
//! let columns: ColumnRegistry<Person> = ColumnRegistry::new(vec![
//!     Column::text("name", |p: &Person| p.name.clone()),
//!     Column::int("age", |p: &Person| p.age),
//! ])
//! .unwrap();
//!
//! let bob = Person { name: "Bob".into(), age: 30 };
//! assert_eq!(columns.get("age").unwrap().search_value(&bob), "30");
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{GridError, Result};

type TextFn<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;
type IntFn<R> = Arc<dyn Fn(&R) -> i64 + Send + Sync>;
type FloatFn<R> = Arc<dyn Fn(&R) -> f64 + Send + Sync>;
type DynamicFn<R> = Arc<dyn Fn(&R) -> DynamicCell + Send + Sync>;

/// Total order over records used by the sort stage.
pub type Comparator<R> = Arc<dyn Fn(&R, &R) -> Ordering + Send + Sync>;

/// A cell whose displayed form differs from the text it is searched by.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DynamicCell {
    /// What the view shows.
    pub display: String,
    /// What the filter stage matches against.
    pub search: String,
}

impl DynamicCell {
    /// Creates a dynamic cell.
    #[must_use]
    pub fn new(display: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            search: search.into(),
        }
    }
}

/// How a column reads its value out of a record.
pub enum Accessor<R> {
    /// String-valued column.
    Text(TextFn<R>),
    /// Integer-valued column.
    Int(IntFn<R>),
    /// Float-valued column.
    Float(FloatFn<R>),
    /// Column with a separate display and searchable value.
    Dynamic(DynamicFn<R>),
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Text(f) => Self::Text(Arc::clone(f)),
            Self::Int(f) => Self::Int(Arc::clone(f)),
            Self::Float(f) => Self::Float(Arc::clone(f)),
            Self::Dynamic(f) => Self::Dynamic(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Text(_) => "Text",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Dynamic(_) => "Dynamic",
        };
        f.debug_tuple(kind).finish_non_exhaustive()
    }
}

impl<R> Accessor<R> {
    /// Returns the text the view renders for this record.
    pub fn display(&self, record: &R) -> String {
        match self {
            Self::Text(f) => f(record),
            Self::Int(f) => f(record).to_string(),
            Self::Float(f) => f(record).to_string(),
            Self::Dynamic(f) => f(record).display,
        }
    }

    /// Returns the text the filter stage matches against.
    pub fn search(&self, record: &R) -> String {
        match self {
            Self::Text(f) => f(record),
            Self::Int(f) => f(record).to_string(),
            Self::Float(f) => f(record).to_string(),
            Self::Dynamic(f) => f(record).search,
        }
    }

    /// Natural ascending order of the accessor's value.
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        match self {
            Self::Text(f) => f(a).cmp(&f(b)),
            Self::Int(f) => f(a).cmp(&f(b)),
            Self::Float(f) => f(a).total_cmp(&f(b)),
            Self::Dynamic(f) => f(a).search.cmp(&f(b).search),
        }
    }
}

/// Whether the user may flip a column's visibility, and what to tell the
/// host when they do.
pub enum Toggle<H> {
    /// Always shown or always hidden; the column panel lists it disabled.
    Fixed,
    /// Builds the host message for a new checked state.
    Toggleable(Arc<dyn Fn(bool) -> H + Send + Sync>),
}

impl<H> Toggle<H> {
    /// Returns whether the column can be toggled.
    #[must_use]
    pub fn is_toggleable(&self) -> bool {
        matches!(self, Self::Toggleable(_))
    }

    /// Builds the host message for `shown`, if the column is toggleable.
    pub fn message(&self, shown: bool) -> Option<H> {
        match self {
            Self::Fixed => None,
            Self::Toggleable(f) => Some(f(shown)),
        }
    }
}

impl<H> Clone for Toggle<H> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed => Self::Fixed,
            Self::Toggleable(f) => Self::Toggleable(Arc::clone(f)),
        }
    }
}

impl<H> fmt::Debug for Toggle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => f.write_str("Fixed"),
            Self::Toggleable(_) => f.write_str("Toggleable"),
        }
    }
}

/// A single column definition.
pub struct Column<R, H = ()> {
    tag: u32,
    model_tag: Option<u32>,
    title: String,
    accessor: Accessor<R>,
    comparator: Option<Comparator<R>>,
    shown: bool,
    toggle: Toggle<H>,
    width: Option<usize>,
}

impl<R, H> Clone for Column<R, H> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag,
            model_tag: self.model_tag,
            title: self.title.clone(),
            accessor: self.accessor.clone(),
            comparator: self.comparator.clone(),
            shown: self.shown,
            toggle: self.toggle.clone(),
            width: self.width,
        }
    }
}

impl<R, H> fmt::Debug for Column<R, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("tag", &self.tag)
            .field("model_tag", &self.model_tag)
            .field("title", &self.title)
            .field("accessor", &self.accessor)
            .field("custom_comparator", &self.comparator.is_some())
            .field("shown", &self.shown)
            .field("toggle", &self.toggle)
            .field("width", &self.width)
            .finish()
    }
}

impl<R, H> Column<R, H> {
    /// Creates a shown, fixed column with the given accessor.
    #[must_use]
    pub fn new(title: impl Into<String>, accessor: Accessor<R>) -> Self {
        Self {
            tag: 0,
            model_tag: None,
            title: title.into(),
            accessor,
            comparator: None,
            shown: true,
            toggle: Toggle::Fixed,
            width: None,
        }
    }

    /// Creates a string-valued column.
    #[must_use]
    pub fn text(title: impl Into<String>, f: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        Self::new(title, Accessor::Text(Arc::new(f)))
    }

    /// Creates an integer-valued column.
    #[must_use]
    pub fn int(title: impl Into<String>, f: impl Fn(&R) -> i64 + Send + Sync + 'static) -> Self {
        Self::new(title, Accessor::Int(Arc::new(f)))
    }

    /// Creates a float-valued column.
    #[must_use]
    pub fn float(title: impl Into<String>, f: impl Fn(&R) -> f64 + Send + Sync + 'static) -> Self {
        Self::new(title, Accessor::Float(Arc::new(f)))
    }

    /// Creates a column with separate display and searchable values.
    #[must_use]
    pub fn dynamic(
        title: impl Into<String>,
        f: impl Fn(&R) -> DynamicCell + Send + Sync + 'static,
    ) -> Self {
        Self::new(title, Accessor::Dynamic(Arc::new(f)))
    }

    /// Sets the numeric type tag.
    #[must_use]
    pub fn tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }

    /// Sets the numeric model tag.
    #[must_use]
    pub fn model_tag(mut self, tag: u32) -> Self {
        self.model_tag = Some(tag);
        self
    }

    /// Replaces the natural ordering with a custom comparator.
    #[must_use]
    pub fn comparator(mut self, f: impl Fn(&R, &R) -> Ordering + Send + Sync + 'static) -> Self {
        self.comparator = Some(Arc::new(f));
        self
    }

    /// Sets the initial visibility.
    #[must_use]
    pub fn shown(mut self, shown: bool) -> Self {
        self.shown = shown;
        self
    }

    /// Starts the column hidden.
    #[must_use]
    pub fn hidden(self) -> Self {
        self.shown(false)
    }

    /// Lets the user toggle the column; `f` builds the host message for the
    /// new checked state.
    #[must_use]
    pub fn toggleable(mut self, f: impl Fn(bool) -> H + Send + Sync + 'static) -> Self {
        self.toggle = Toggle::Toggleable(Arc::new(f));
        self
    }

    /// Sets the display width in terminal cells.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Returns the numeric type tag.
    #[must_use]
    pub fn get_tag(&self) -> u32 {
        self.tag
    }

    /// Returns the numeric model tag.
    #[must_use]
    pub fn get_model_tag(&self) -> Option<u32> {
        self.model_tag
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the accessor.
    #[must_use]
    pub fn accessor(&self) -> &Accessor<R> {
        &self.accessor
    }

    /// Returns whether the column is shown.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Returns the toggle policy.
    #[must_use]
    pub fn toggle(&self) -> &Toggle<H> {
        &self.toggle
    }

    /// Returns the explicit width, if one was set.
    #[must_use]
    pub fn get_width(&self) -> Option<usize> {
        self.width
    }

    /// Returns the text the view renders for `record`.
    pub fn display_value(&self, record: &R) -> String {
        self.accessor.display(record)
    }

    /// Returns the text the filter stage matches against.
    pub fn search_value(&self, record: &R) -> String {
        self.accessor.search(record)
    }

    /// Compares two records in this column's ascending order.
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        match &self.comparator {
            Some(cmp) => cmp(a, b),
            None => self.accessor.compare(a, b),
        }
    }
}

/// The ordered set of columns of one grid.
///
/// Columns cannot be added or removed once the registry exists; only their
/// visibility may change, through [`ColumnRegistry::set_shown`].
pub struct ColumnRegistry<R, H = ()> {
    columns: Vec<Column<R, H>>,
}

impl<R, H> Clone for ColumnRegistry<R, H> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<R, H> fmt::Debug for ColumnRegistry<R, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.columns).finish()
    }
}

impl<R, H> ColumnRegistry<R, H> {
    /// Builds a registry, rejecting duplicate titles.
    pub fn new(columns: Vec<Column<R, H>>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for col in &columns {
            if !seen.insert(col.title.as_str()) {
                return Err(GridError::DuplicateColumn(col.title.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Looks up a column by title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Column<R, H>> {
        self.columns.iter().find(|col| col.title == title)
    }

    /// Iterates over all columns in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Column<R, H>> {
        self.columns.iter()
    }

    /// Iterates over the shown columns in registry order.
    pub fn visible(&self) -> impl Iterator<Item = &Column<R, H>> {
        self.columns.iter().filter(|col| col.shown)
    }

    /// Returns every title in registry order.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.columns.iter().map(Column::title).collect()
    }

    /// Sets a column's visibility. Returns `false` for an unknown title.
    pub fn set_shown(&mut self, title: &str, shown: bool) -> bool {
        match self.columns.iter_mut().find(|col| col.title == title) {
            Some(col) => {
                col.shown = shown;
                true
            }
            None => false,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns whether the registry has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
