//! Interactive host: maps keys to grid messages and runs the grid's commands.

use std::io::Write;
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use teagrid::command::{Cmd, batch};
use teagrid::grid::DataGrid;
use teagrid::message::{Element, FilterColumn, Msg};

use crate::records::{DemoMsg, Record};

const HELP: &str = "←/→ page  home/end first/last  1-9 sort  / search  f filter column  c columns  p per page  q quit";

/// How keys are interpreted right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation keys.
    #[default]
    Normal,
    /// Typing into the search box.
    Search,
}

/// The demo application state around a grid.
pub struct App {
    grid: DataGrid<Record, DemoMsg>,
    records: Vec<Record>,
    mode: Mode,
    focused: Option<Element>,
    timers: Vec<(Instant, Msg<DemoMsg>)>,
    quit: bool,
}

impl App {
    /// Creates an app over `records`.
    pub fn new(grid: DataGrid<Record, DemoMsg>, records: Vec<Record>) -> Self {
        Self {
            grid,
            records,
            mode: Mode::Normal,
            focused: None,
            timers: Vec::new(),
            quit: false,
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &DataGrid<Record, DemoMsg> {
        &self.grid
    }

    /// Returns the current input mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the element the grid last asked to focus, if still focused.
    pub fn focused(&self) -> Option<Element> {
        self.focused
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Number of delayed messages waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Renders the grid plus a status line.
    pub fn view(&self) -> String {
        let status = match self.mode {
            Mode::Normal => HELP.to_string(),
            Mode::Search => "search: type to filter, enter/esc to finish".to_string(),
        };
        format!("{}\n\n{status}", self.grid.view(&self.records))
    }

    /// Sends a message to the grid and runs whatever it returns.
    pub fn dispatch(&mut self, msg: Msg<DemoMsg>) {
        if let Some(cmd) = self.grid.update(msg) {
            self.run(cmd);
        }
    }

    /// Sends several messages, then runs their commands as one batch.
    pub fn dispatch_all(&mut self, msgs: impl IntoIterator<Item = Msg<DemoMsg>>) {
        let cmds = msgs.into_iter().map(|msg| self.grid.update(msg)).collect();
        if let Some(cmd) = batch(cmds) {
            self.run(cmd);
        }
    }

    fn run(&mut self, cmd: Cmd<DemoMsg>) {
        for effect in cmd.into_effects() {
            match effect {
                Cmd::Focus(el) => {
                    tracing::debug!(element = %el, "focus");
                    self.focused = Some(el);
                }
                Cmd::Blur(el) => {
                    tracing::debug!(element = %el, "blur");
                    if self.focused == Some(el) {
                        self.focused = None;
                    }
                }
                Cmd::After { delay, msg } => {
                    self.timers.push((Instant::now() + delay, *msg));
                }
                Cmd::Emit(DemoMsg::ColumnToggled { title, shown }) => {
                    let changed = self.grid.columns_mut().set_shown(&title, shown);
                    tracing::info!(column = %title, shown, changed, "column visibility");
                }
                Cmd::Batch(_) => {}
            }
        }
    }

    /// Delivers every delayed message due at `now`.
    pub fn tick(&mut self, now: Instant) {
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.timers)
            .into_iter()
            .partition(|(at, _)| *at <= now);
        self.timers = pending;
        for (_, msg) in due {
            self.dispatch(msg);
        }
    }

    /// How long the event loop may block before a timer falls due.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.timers
            .iter()
            .map(|(at, _)| at.saturating_duration_since(now))
            .min()
            .map_or(max, |d| d.min(max))
    }

    /// Translates one key press into grid messages.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        match self.mode {
            Mode::Search => self.on_search_key(key.code),
            Mode::Normal => self.on_normal_key(key.code),
        }
    }

    fn on_search_key(&mut self, code: KeyCode) {
        let mut text = self.grid.state().search.clone().unwrap_or_default();
        match code {
            KeyCode::Enter | KeyCode::Esc => {
                self.mode = Mode::Normal;
                return;
            }
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Char(c) => text.push(c),
            _ => return,
        }
        self.dispatch(Msg::SetFilterText(text));
    }

    fn on_normal_key(&mut self, code: KeyCode) {
        let digit = match code {
            KeyCode::Char(c) => c.to_digit(10).and_then(|d| usize::try_from(d).ok()),
            _ => None,
        };

        // An open menu takes the digit keys.
        if let Some(n) = digit {
            let state = self.grid.state();
            if state.page_size_menu.is_open() {
                self.choose_page_size(n);
            } else if state.filter_menu.is_open() {
                self.choose_filter_column(n);
            } else if state.column_panel.is_open() {
                self.toggle_column(n);
            } else {
                self.sort_by_position(n);
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.dispatch_all([
                Msg::ClosePageSizeMenu,
                Msg::CloseFilterMenu,
                Msg::CloseColumnPanel,
            ]),
            // The grid does not clamp pages; the footer's enabled controls do.
            KeyCode::Left | KeyCode::Char('h') => {
                if self.grid.navigation(&self.records).prev {
                    self.dispatch(Msg::ChangePage(-1));
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.grid.navigation(&self.records).next {
                    self.dispatch(Msg::ChangePage(1));
                }
            }
            KeyCode::Home | KeyCode::Char('g') => self.dispatch(Msg::JumpToPage(0)),
            KeyCode::End | KeyCode::Char('G') => {
                let last = self.grid.max_page(&self.records);
                self.dispatch(Msg::JumpToPage(last));
            }
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('p') => self.dispatch(Msg::TogglePageSizeMenu),
            KeyCode::Char('f') => self.dispatch(Msg::ToggleFilterMenu),
            KeyCode::Char('c') => self.dispatch(Msg::ToggleColumnPanel),
            _ => {}
        }
    }

    fn sort_by_position(&mut self, n: usize) {
        let title = n
            .checked_sub(1)
            .and_then(|idx| self.grid.columns().visible().nth(idx))
            .map(|col| col.title().to_string());
        if let Some(title) = title {
            self.dispatch(Msg::sort_by(title));
        }
    }

    fn choose_page_size(&mut self, n: usize) {
        let size = n
            .checked_sub(1)
            .and_then(|idx| self.grid.page_size_options().get(idx).copied());
        if let Some(size) = size {
            self.dispatch(Msg::SetPageSize(size));
            self.dispatch(Msg::ClosePageSizeMenuLater);
        }
    }

    fn choose_filter_column(&mut self, n: usize) {
        let choice = if n == 0 {
            Some(FilterColumn::All)
        } else {
            self.grid
                .columns()
                .iter()
                .nth(n - 1)
                .map(|col| FilterColumn::column(col.title()))
        };
        if let Some(choice) = choice {
            self.dispatch(Msg::SetFilterColumn(choice));
            self.dispatch(Msg::CloseFilterMenu);
        }
    }

    fn toggle_column(&mut self, n: usize) {
        let request = n
            .checked_sub(1)
            .and_then(|idx| self.grid.columns().iter().nth(idx))
            .map(|col| (col.title().to_string(), !col.is_shown()));
        if let Some((title, shown)) = request {
            self.dispatch(Msg::toggle_column(title, shown));
        }
    }
}

/// Runs the interactive session until the user quits.
pub fn run(mut app: App) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();

    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = event_loop(&mut app, &mut stdout);

    let _ = execute!(stdout, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();

    result
}

fn event_loop(app: &mut App, out: &mut impl Write) -> anyhow::Result<()> {
    render(app, out)?;

    while !app.should_quit() {
        let timeout = app.poll_timeout(Instant::now(), Duration::from_millis(250));
        let mut dirty = false;

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.on_key(key);
                    dirty = true;
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        if app.pending_timers() > 0 {
            app.tick(Instant::now());
            dirty = true;
        }

        if dirty {
            render(app, out)?;
        }
    }

    tracing::info!("session ended");
    Ok(())
}

fn render(app: &App, out: &mut impl Write) -> anyhow::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for line in app.view().lines() {
        queue!(out, Print(line), Print("\r\n"))?;
    }
    out.flush()?;
    Ok(())
}
