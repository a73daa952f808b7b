//! Deterministic host for driving a grid without a terminal.
//!
//! [`GridSimulator`] plays the part of the embedding application: it feeds
//! messages to a [`DataGrid`], executes the returned commands against a
//! virtual clock, and records every focus request and emitted host message.
//! Delayed messages only fire when the clock is advanced, so tests can
//! reproduce timing-dependent interactions exactly.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use teagrid::column::{Column, ColumnRegistry};
//! use teagrid::grid::DataGrid;
//! use teagrid::message::Msg;
//! use teagrid::simulator::GridSimulator;
//!
//! let columns: ColumnRegistry<i64> =
//!     ColumnRegistry::new(vec![Column::int("n", |n: &i64| *n)]).unwrap();
//! let mut sim = GridSimulator::new(DataGrid::new(columns), vec![3, 1, 2]);
//!
//! sim.send(Msg::TogglePageSizeMenu);
//! sim.send(Msg::ClosePageSizeMenuLater);
//! assert!(sim.grid().state().page_size_menu.is_open());
//!
//! sim.advance(Duration::from_millis(100));
//! assert!(!sim.grid().state().page_size_menu.is_open());
//! ```

use std::time::Duration;

use crate::command::Cmd;
use crate::grid::DataGrid;
use crate::message::{Element, Msg};

/// A focus change the grid asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    /// Focus this element.
    Focus(Element),
    /// Blur this element.
    Blur(Element),
}

/// Counters tracked during simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of update calls.
    pub update_calls: usize,
    /// Number of commands returned by update.
    pub commands_returned: usize,
    /// Number of delayed messages scheduled.
    pub timers_scheduled: usize,
    /// Number of delayed messages delivered.
    pub timers_fired: usize,
}

struct Timer<H> {
    due: Duration,
    seq: u64,
    msg: Msg<H>,
}

/// Drives a [`DataGrid`] over a fixed record set with a virtual clock.
pub struct GridSimulator<R, H = ()> {
    grid: DataGrid<R, H>,
    records: Vec<R>,
    now: Duration,
    timers: Vec<Timer<H>>,
    next_seq: u64,
    focus_requests: Vec<FocusRequest>,
    emitted: Vec<H>,
    views: Vec<String>,
    stats: SimulationStats,
}

impl<R, H> GridSimulator<R, H> {
    /// Creates a simulator; the initial view is captured immediately.
    pub fn new(grid: DataGrid<R, H>, records: Vec<R>) -> Self {
        let initial = grid.view(&records);
        Self {
            grid,
            records,
            now: Duration::ZERO,
            timers: Vec::new(),
            next_seq: 0,
            focus_requests: Vec::new(),
            emitted: Vec::new(),
            views: vec![initial],
            stats: SimulationStats::default(),
        }
    }

    /// Delivers one message, then runs the resulting command.
    pub fn send(&mut self, msg: Msg<H>) {
        self.stats.update_calls += 1;
        let cmd = self.grid.update(msg);
        self.views.push(self.grid.view(&self.records));

        if let Some(cmd) = cmd {
            self.stats.commands_returned += 1;
            self.execute(cmd);
        }
    }

    /// Delivers each message in order.
    pub fn send_all(&mut self, msgs: impl IntoIterator<Item = Msg<H>>) {
        for msg in msgs {
            self.send(msg);
        }
    }

    fn execute(&mut self, cmd: Cmd<H>) {
        match cmd {
            Cmd::Focus(el) => self.focus_requests.push(FocusRequest::Focus(el)),
            Cmd::Blur(el) => self.focus_requests.push(FocusRequest::Blur(el)),
            Cmd::Emit(h) => self.emitted.push(h),
            Cmd::After { delay, msg } => {
                self.stats.timers_scheduled += 1;
                self.timers.push(Timer {
                    due: self.now + delay,
                    seq: self.next_seq,
                    msg: *msg,
                });
                self.next_seq += 1;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                }
            }
        }
    }

    /// Moves the clock forward, delivering every delayed message that falls
    /// due on the way, earliest first.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        while let Some(idx) = self.next_due(target) {
            let timer = self.timers.remove(idx);
            self.now = timer.due;
            self.stats.timers_fired += 1;
            tracing::trace!(due = ?timer.due, "delivering delayed message");
            self.send(timer.msg);
        }
        self.now = target;
    }

    /// Advances until no delayed message is pending.
    pub fn run_pending(&mut self) {
        while let Some(latest) = self.timers.iter().map(|t| t.due).max() {
            let by = latest.saturating_sub(self.now);
            self.advance(by);
        }
    }

    fn next_due(&self, target: Duration) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(idx, _)| idx)
    }

    /// Returns the grid.
    pub fn grid(&self) -> &DataGrid<R, H> {
        &self.grid
    }

    /// Returns the grid for host-side changes such as column visibility.
    pub fn grid_mut(&mut self) -> &mut DataGrid<R, H> {
        &mut self.grid
    }

    /// Returns the records the grid is rendered over.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Returns the number of delayed messages not yet delivered.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Returns every focus request so far.
    pub fn focus_requests(&self) -> &[FocusRequest] {
        &self.focus_requests
    }

    /// Takes the host messages emitted so far.
    pub fn take_emitted(&mut self) -> Vec<H> {
        std::mem::take(&mut self.emitted)
    }

    /// Returns all captured views.
    pub fn views(&self) -> &[String] {
        &self.views
    }

    /// Returns the most recent view.
    pub fn last_view(&self) -> Option<&str> {
        self.views.last().map(String::as_str)
    }

    /// Returns the simulation counters.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Consumes the simulator and returns the grid.
    pub fn into_grid(self) -> DataGrid<R, H> {
        self.grid
    }
}
