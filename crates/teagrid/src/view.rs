//! Plain-text rendering of a grid.
//!
//! The view is a function of the grid and the records only. It lays out, top
//! to bottom: a toolbar, whichever menus are open, the header row, the rows
//! of the current page, and the navigation footer.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::Column;
use crate::grid::DataGrid;
use crate::paginate::Navigation;
use crate::sort::SortDirective;

/// Shown in place of rows when the current page is empty.
pub const EMPTY_MESSAGE: &str = "No matching records";

impl<R, H> DataGrid<R, H> {
    /// Renders the grid over `records`.
    #[must_use]
    pub fn view(&self, records: &[R]) -> String {
        let page = self.page(records);
        let columns: Vec<&Column<R, H>> = self.columns().visible().collect();

        let mut lines = vec![self.toolbar_view()];
        lines.extend(self.menus_view());
        lines.push(self.header_view(&columns));
        lines.push(self.rule(&columns));

        if page.is_empty() {
            lines.push(EMPTY_MESSAGE.to_string());
        } else {
            for record in &page.records {
                lines.push(self.row_view(&columns, record));
            }
        }

        lines.push(footer_view(&page.navigation));
        lines.join("\n")
    }

    fn toolbar_view(&self) -> String {
        let state = self.state();
        format!(
            "Filter: {}  in: {}  Per page: {}",
            state.search.as_deref().unwrap_or("-"),
            state
                .filter_column
                .as_deref()
                .unwrap_or(&self.config().all_label),
            state.page_size,
        )
    }

    fn menus_view(&self) -> Vec<String> {
        let state = self.state();
        let mut lines = Vec::new();

        if state.filter_menu.is_open() {
            let selected = state
                .filter_column
                .as_deref()
                .unwrap_or(&self.config().all_label);
            lines.push("  Filter column:".to_string());
            for option in self.filter_options() {
                lines.push(menu_entry(option, option == selected));
            }
        }

        if state.column_panel.is_open() {
            lines.push("  Columns:".to_string());
            for col in self.columns().iter() {
                let check = if col.is_shown() { "[x]" } else { "[ ]" };
                let fixed = if col.toggle().is_toggleable() { "" } else { " (fixed)" };
                lines.push(format!("  {check} {}{fixed}", col.title()));
            }
        }

        if state.page_size_menu.is_open() {
            lines.push("  Per page:".to_string());
            for &size in self.page_size_options() {
                lines.push(menu_entry(&size.to_string(), size == state.page_size));
            }
        }

        lines
    }

    fn column_width(&self, col: &Column<R, H>) -> usize {
        col.get_width().unwrap_or(self.config().column_width)
    }

    fn header_view(&self, columns: &[&Column<R, H>]) -> String {
        let sort = &self.state().sort;
        let cells: Vec<String> = columns
            .iter()
            .map(|col| {
                let marker = match sort {
                    SortDirective::Ascending(t) if t == col.title() => " ▲",
                    SortDirective::Descending(t) if t == col.title() => " ▼",
                    _ => "",
                };
                fit(&format!("{}{marker}", col.title()), self.column_width(col))
            })
            .collect();
        cells.join(" ").trim_end().to_string()
    }

    fn rule(&self, columns: &[&Column<R, H>]) -> String {
        let width: usize = columns.iter().map(|col| self.column_width(col)).sum::<usize>()
            + columns.len().saturating_sub(1);
        "─".repeat(width)
    }

    fn row_view(&self, columns: &[&Column<R, H>], record: &R) -> String {
        let cells: Vec<String> = columns
            .iter()
            .map(|col| fit(&col.display_value(record), self.column_width(col)))
            .collect();
        cells.join(" ").trim_end().to_string()
    }
}

fn menu_entry(label: &str, selected: bool) -> String {
    if selected {
        format!("  > {label}")
    } else {
        format!("    {label}")
    }
}

/// Renders the footer; disabled controls become blanks of the same width.
fn footer_view(nav: &Navigation) -> String {
    let control = |enabled: bool, glyph: &'static str| if enabled { glyph } else { " " };
    format!(
        "{} {} {} {} {}",
        control(nav.first, "«"),
        control(nav.prev, "‹"),
        nav.label(),
        control(nav.next, "›"),
        control(nav.last, "»"),
    )
}

/// Truncates to `width` display cells (ending in `…`) and pads with spaces.
fn fit(s: &str, width: usize) -> String {
    let truncated = truncate(s, width);
    let pad = width.saturating_sub(truncated.width());
    format!("{truncated}{}", " ".repeat(pad))
}

/// Truncates a string to the given display width, adding an ellipsis if needed.
fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnRegistry;
    use crate::config::GridConfig;
    use crate::message::{FilterColumn, Msg};

    struct Person {
        name: &'static str,
        age: i64,
    }

    fn people() -> Vec<Person> {
        vec![
            Person { name: "Bob", age: 30 },
            Person { name: "Al", age: 25 },
            Person { name: "Cy", age: 40 },
        ]
    }

    fn grid() -> DataGrid<Person, String> {
        let columns = ColumnRegistry::new(vec![
            Column::text("name", |p: &Person| p.name.to_string()).width(6),
            Column::int("age", |p: &Person| p.age)
                .width(5)
                .toggleable(|shown| format!("age:{shown}")),
        ])
        .unwrap();
        DataGrid::with_config(columns, GridConfig::new().page_size(2))
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 5), "Hell…");
        assert_eq!(truncate("Hi", 2), "Hi");
        assert_eq!(truncate("", 5), "");
        assert_eq!(truncate("abc", 0), "");
        // Wide characters take two cells each.
        assert_eq!(truncate("日本語", 4), "日…");
    }

    #[test]
    fn test_fit_pads_to_width() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abc…");
    }

    #[test]
    fn test_view_first_page() {
        let grid = grid();
        let view = grid.view(&people());
        let lines: Vec<&str> = view.lines().collect();

        assert_eq!(lines[0], "Filter: -  in: All  Per page: 2");
        assert_eq!(lines[1], "name   age");
        assert_eq!(lines[2], "─".repeat(12));
        assert_eq!(lines[3], "Bob    30");
        assert_eq!(lines[4], "Al     25");
        assert_eq!(lines[5], "    1–2 of 3 › »");
    }

    #[test]
    fn test_view_sort_marker_and_last_page() {
        let mut grid = grid();
        grid.update(Msg::sort_by("age"));
        grid.update(Msg::sort_by("age"));
        grid.update(Msg::ChangePage(1));

        let view = grid.view(&people());
        assert!(view.contains("age ▼"));
        assert!(view.contains("Al     25"));
        assert!(view.ends_with("« ‹ 3–3 of 3    "));
    }

    #[test]
    fn test_view_hidden_column_and_empty_page() {
        let mut grid = grid();
        grid.columns_mut().set_shown("age", false);
        grid.update(Msg::filter_text("zzz"));

        let view = grid.view(&people());
        assert_eq!(view.lines().nth(1), Some("name"));
        assert!(view.contains(EMPTY_MESSAGE));
        assert!(view.contains("0–0 of 0"));
    }

    #[test]
    fn test_view_open_menus() {
        let mut grid = grid();
        grid.update(Msg::ToggleFilterMenu);
        grid.update(Msg::SetFilterColumn(FilterColumn::column("name")));
        grid.update(Msg::ToggleColumnPanel);
        grid.update(Msg::TogglePageSizeMenu);

        let view = grid.view(&people());
        assert!(view.contains("  > name"));
        assert!(view.contains("    All"));
        assert!(view.contains("  [x] name (fixed)"));
        assert!(view.contains("  [x] age"));
        assert!(!view.contains("  > 10"));
        assert!(view.contains("    10"));
        assert!(view.contains("in: name"));
    }
}
