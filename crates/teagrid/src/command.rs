//! Commands for side effects.
//!
//! The grid never touches the UI directly. Its update function returns a
//! [`Cmd`] describing what the host should do: move focus, schedule a
//! message, or hand a message up to the embedding application. Commands are
//! plain data, so they can be inspected in tests and executed by any host
//! (see [`GridSimulator`](crate::simulator::GridSimulator)).

use std::time::Duration;

use crate::message::{Element, Msg};

/// An effect requested by the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd<H> {
    /// Move keyboard focus to an element.
    Focus(Element),
    /// Remove keyboard focus from an element.
    Blur(Element),
    /// Deliver `msg` back to the grid after `delay`.
    After {
        /// How long to wait.
        delay: Duration,
        /// Message to deliver.
        msg: Box<Msg<H>>,
    },
    /// Hand a message to the embedding application.
    Emit(H),
    /// Several effects, in order.
    Batch(Vec<Cmd<H>>),
}

impl<H> Cmd<H> {
    /// Schedules `msg` after `delay`.
    #[must_use]
    pub fn after(delay: Duration, msg: Msg<H>) -> Self {
        Self::After {
            delay,
            msg: Box::new(msg),
        }
    }

    /// Flattens nested batches into their leaf effects, in order.
    #[must_use]
    pub fn into_effects(self) -> Vec<Self> {
        match self {
            Self::Batch(cmds) => cmds.into_iter().flat_map(Self::into_effects).collect(),
            other => vec![other],
        }
    }
}

/// Combines optional commands into one.
///
/// Returns `None` when nothing is left and the lone command when only one
/// is.
///
/// # Example
///
/// ```rust
/// use teagrid::command::{batch, Cmd};
/// use teagrid::message::Element;
///
/// let cmd: Option<Cmd<()>> = batch(vec![None, Some(Cmd::Focus(Element::FilterOptions))]);
/// assert_eq!(cmd, Some(Cmd::Focus(Element::FilterOptions)));
/// ```
pub fn batch<H>(cmds: Vec<Option<Cmd<H>>>) -> Option<Cmd<H>> {
    let mut valid: Vec<Cmd<H>> = cmds.into_iter().flatten().collect();

    match valid.len() {
        0 => None,
        1 => valid.pop(),
        _ => Some(Cmd::Batch(valid)),
    }
}
