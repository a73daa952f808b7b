//! Interaction tests driving a grid through the simulator.
//!
//! Each test plays a short user session and checks the resulting state,
//! focus requests, emitted host messages and rendered view.

#![forbid(unsafe_code)]

use std::time::Duration;

use teagrid::prelude::*;

#[derive(Debug, Clone)]
struct Track {
    title: String,
    artist: &'static str,
    seconds: i64,
    rating: f64,
}

#[derive(Debug, Clone, PartialEq)]
enum AppMsg {
    ColumnToggled { title: &'static str, shown: bool },
    Play(String),
}

fn tracks() -> Vec<Track> {
    let artists = ["Aurora", "Boards", "Caribou"];
    (0..23)
        .map(|i| Track {
            title: format!("Track {i:02}"),
            artist: artists[i % 3],
            seconds: 120 + i64::try_from(i).unwrap() * 7,
            rating: f64::from(u32::try_from(i % 5).unwrap()) / 2.0,
        })
        .collect()
}

fn grid() -> DataGrid<Track, AppMsg> {
    let columns = ColumnRegistry::new(vec![
        Column::text("title", |t: &Track| t.title.clone()).tag(1),
        Column::text("artist", |t: &Track| t.artist.to_string())
            .tag(2)
            .toggleable(|shown| AppMsg::ColumnToggled { title: "artist", shown }),
        Column::int("length", |t: &Track| t.seconds)
            .tag(3)
            .toggleable(|shown| AppMsg::ColumnToggled { title: "length", shown }),
        Column::float("rating", |t: &Track| t.rating)
            .tag(4)
            .model_tag(99)
            .hidden()
            .toggleable(|shown| AppMsg::ColumnToggled { title: "rating", shown }),
    ])
    .unwrap();
    DataGrid::with_config(columns, GridConfig::new().page_size(5))
}

fn sim() -> GridSimulator<Track, AppMsg> {
    GridSimulator::new(grid(), tracks())
}

#[test]
fn test_page_navigation_session() {
    let mut sim = sim();
    let last = sim.grid().max_page(sim.records());
    assert_eq!(last, 4);

    sim.send(Msg::ChangePage(1));
    sim.send(Msg::ChangePage(1));
    assert_eq!(sim.grid().state().current_page, 2);
    assert!(sim.last_view().unwrap().contains("« ‹ 11–15 of 23 › »"));

    sim.send(Msg::JumpToPage(last));
    let nav = sim.grid().navigation(sim.records());
    assert!(!nav.next && !nav.last);
    assert_eq!(nav.label(), "21–23 of 23");

    sim.send(Msg::JumpToPage(0));
    let nav = sim.grid().navigation(sim.records());
    assert!(!nav.first && !nav.prev);
}

#[test]
fn test_page_size_menu_session() {
    let mut sim = sim();
    sim.send(Msg::TogglePageSizeMenu);
    assert!(sim.last_view().unwrap().contains("  Per page:\n"));

    sim.send(Msg::SetPageSize(10));
    sim.send(Msg::ClosePageSizeMenuLater);
    assert!(sim.grid().state().page_size_menu.is_open());

    sim.advance(Duration::from_millis(100));
    assert!(!sim.grid().state().page_size_menu.is_open());
    assert_eq!(sim.grid().state().page_size, 10);
    assert_eq!(
        sim.focus_requests(),
        &[
            FocusRequest::Focus(Element::PageSizeOptions),
            FocusRequest::Blur(Element::PageSizeControl),
        ]
    );
}

#[test]
fn test_deferred_close_race_is_resolved() {
    let mut sim = sim();
    sim.send(Msg::TogglePageSizeMenu);
    sim.send(Msg::ClosePageSizeMenuLater);

    // User reopens the menu within the delay.
    sim.advance(Duration::from_millis(40));
    sim.send(Msg::ClosePageSizeMenu);
    sim.send(Msg::TogglePageSizeMenu);

    sim.advance(Duration::from_millis(100));
    assert!(sim.grid().state().page_size_menu.is_open());
    assert_eq!(sim.stats().timers_fired, 1);
}

#[test]
fn test_page_size_change_keeps_page() {
    let mut sim = sim();
    sim.send(Msg::JumpToPage(4));
    sim.send(Msg::SetPageSize(25));
    assert_eq!(sim.grid().state().current_page, 4);
    assert!(sim.last_view().unwrap().contains("No matching records"));
    assert!(sim.last_view().unwrap().contains("0–0 of 23"));
}

#[test]
fn test_filter_menu_session() {
    let mut sim = sim();
    sim.send(Msg::ToggleFilterMenu);
    assert_eq!(
        sim.focus_requests(),
        &[FocusRequest::Focus(Element::FilterOptions)]
    );
    assert_eq!(
        sim.grid().filter_options(),
        vec!["All", "title", "artist", "length", "rating"]
    );

    sim.send(Msg::SetFilterColumn(FilterColumn::column("artist")));
    sim.send(Msg::CloseFilterMenu);
    sim.send(Msg::filter_text("bOaRdS"));

    let page = sim.grid().page(sim.records());
    assert_eq!(page.filtered, 8);
    assert!(page.records.iter().all(|t| t.artist == "Boards"));
    assert_eq!(
        sim.focus_requests().last(),
        Some(&FocusRequest::Blur(Element::FilterOptions))
    );

    sim.send(Msg::SetFilterColumn(FilterColumn::All));
    sim.send(Msg::filter_text(""));
    assert_eq!(sim.grid().page(sim.records()).filtered, 23);
}

#[test]
fn test_hidden_column_is_still_searched() {
    let mut sim = sim();
    // Ratings are 0, 0.5, 1, 1.5, 2; only the hidden rating column has "1.5".
    sim.send(Msg::filter_text("1.5"));
    let page = sim.grid().page(sim.records());
    assert_eq!(page.filtered, 4);
    assert!(!sim.last_view().unwrap().contains("rating"));
}

#[test]
fn test_column_toggle_round_trip_through_host() {
    let mut sim = sim();
    sim.send(Msg::ToggleColumnPanel);
    assert!(sim.last_view().unwrap().contains("  [ ] rating"));

    sim.send(Msg::toggle_column("rating", true));
    sim.send(Msg::toggle_column("title", false));

    let emitted = sim.take_emitted();
    assert_eq!(
        emitted,
        vec![AppMsg::ColumnToggled { title: "rating", shown: true }]
    );

    // The host applies the change it was asked for.
    for msg in emitted {
        if let AppMsg::ColumnToggled { title, shown } = msg {
            sim.grid_mut().columns_mut().set_shown(title, shown);
        }
    }
    sim.send(Msg::CloseColumnPanel);

    let view = sim.last_view().unwrap();
    assert!(view.contains("rating"));
    assert!(!view.contains("[x]"));
}

#[test]
fn test_sort_session_with_host_messages() {
    let mut sim = sim();
    sim.send_all([
        Msg::sort_by("length"),
        Msg::sort_by("length"),
        Msg::Host(AppMsg::Play("Track 22".into())),
    ]);

    let first = sim.grid().page(sim.records()).records[0].title.clone();
    assert_eq!(first, "Track 22");
    assert!(sim.last_view().unwrap().contains("length ▼"));
    assert_eq!(sim.take_emitted(), vec![AppMsg::Play("Track 22".into())]);

    sim.send(Msg::sort_by("artist"));
    assert_eq!(
        sim.grid().state().sort,
        SortDirective::Ascending("artist".into())
    );
}

#[test]
fn test_column_tags_are_carried() {
    let grid = grid();
    let tags: Vec<(u32, Option<u32>)> = grid
        .columns()
        .iter()
        .map(|c| (c.get_tag(), c.get_model_tag()))
        .collect();
    assert_eq!(tags, vec![(1, None), (2, None), (3, None), (4, Some(99))]);
}
