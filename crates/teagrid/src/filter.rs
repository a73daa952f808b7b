//! Filter stage: case-insensitive substring search over column values.

use crate::column::{Column, ColumnRegistry};

/// Keeps the records whose searchable value in any candidate column
/// contains `search`, ignoring case.
///
/// With no search text every record is kept. Candidate columns are the whole
/// registry, shown or not, unless `selected` names one column; a title that
/// is not in the registry leaves no candidates and so keeps nothing.
///
/// # Example
///
/// ```rust
/// use teagrid::column::{Column, ColumnRegistry};
/// use teagrid::filter::filter;
///
/// let columns: ColumnRegistry<&str> =
///     ColumnRegistry::new(vec![Column::text("word", |w: &&str| w.to_string())]).unwrap();
/// let words = ["Apple", "banana", "Grape"];
///
/// let kept = filter(&words, &columns, Some("AP"), None);
/// assert_eq!(kept, vec![&"Apple", &"Grape"]);
/// ```
pub fn filter<'a, R, H>(
    records: &'a [R],
    columns: &ColumnRegistry<R, H>,
    search: Option<&str>,
    selected: Option<&str>,
) -> Vec<&'a R> {
    filter_refs(records.iter().collect(), columns, search, selected)
}

/// Same as [`filter`], over records that are already borrowed.
pub fn filter_refs<'a, R, H>(
    records: Vec<&'a R>,
    columns: &ColumnRegistry<R, H>,
    search: Option<&str>,
    selected: Option<&str>,
) -> Vec<&'a R> {
    let Some(search) = search else {
        return records;
    };

    let needle = search.to_lowercase();
    let candidates: Vec<&Column<R, H>> = match selected {
        Some(title) => columns.get(title).into_iter().collect(),
        None => columns.iter().collect(),
    };

    let before = records.len();
    let kept: Vec<&R> = records
        .into_iter()
        .filter(|record| {
            candidates
                .iter()
                .any(|col| col.search_value(record).to_lowercase().contains(&needle))
        })
        .collect();

    tracing::trace!(before, after = kept.len(), search, ?selected, "filtered records");
    kept
}
