//! The [`Agent`] trait and the state contract that goes with it.

use chrono::{DateTime, Utc};

use crate::context::StepContext;

/// Owned state an agent threads through its tick loop.
///
/// The runner never inspects the state beyond this trait: the timestamp and
/// the log record exist solely for observers (see
/// [`AgentObserver`](crate::AgentObserver)).  Agents whose state is not worth
/// logging keep the default empty record.
pub trait AgentState: Clone + Send + std::fmt::Debug + 'static {
    /// Simulated time of the last update.
    fn timestamp(&self) -> DateTime<Utc>;

    /// Column names for the delimited state log.  An empty slice means the
    /// state produces no log output.
    fn log_headers() -> &'static [&'static str]
    where
        Self: Sized,
    {
        &[]
    }

    /// One log record, aligned with [`log_headers`](Self::log_headers).
    fn log_record(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Whether the runner should keep ticking after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Run another tick.
    Continue,
    /// Leave the loop; `teardown` still runs.
    Stop,
}

impl Control {
    pub fn is_stop(self) -> bool {
        self == Control::Stop
    }
}

/// A simulation participant.
///
/// `step` consumes the previous state and returns the next one, so state
/// transitions are explicit moves rather than in-place mutation.  All bus
/// traffic goes through the [`StepContext`] outbox; the runner publishes it
/// after the callback returns, in enqueue order.
pub trait Agent: Send {
    type State: AgentState;

    /// One-time setup, run before the first tick.  Messages enqueued here are
    /// published before the loop starts.
    fn initialize(&mut self, state: Self::State, _ctx: &mut StepContext<'_>) -> Self::State {
        state
    }

    /// One tick: react to the inbox, produce the next state and any outbound
    /// messages.
    fn step(&mut self, state: Self::State, ctx: &mut StepContext<'_>) -> (Control, Self::State);

    /// One-time cleanup, run after the loop exits.  Messages enqueued here
    /// are published before the bus connection closes.
    fn teardown(&mut self, _state: &Self::State, _ctx: &mut StepContext<'_>) {}
}

/// State for agents that keep everything they need inside the agent itself.
///
/// Carries nothing but the time of the last tick and logs nothing.
#[derive(Clone, Debug)]
pub struct Stateless {
    time: DateTime<Utc>,
}

impl Stateless {
    pub fn new() -> Self {
        Stateless { time: Utc::now() }
    }

    /// Same state with the timestamp moved to now.
    pub fn touch(self) -> Self {
        Stateless { time: Utc::now() }
    }
}

impl Default for Stateless {
    fn default() -> Self {
        Stateless::new()
    }
}

impl AgentState for Stateless {
    fn timestamp(&self) -> DateTime<Utc> {
        self.time
    }
}
