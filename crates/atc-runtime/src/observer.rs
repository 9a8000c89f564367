//! Read-only taps into a runner's lifecycle.

use atc_core::Identity;

use crate::agent::AgentState;

/// Receives the agent's state as the run progresses.
///
/// All methods default to no-ops; implementors override the ones they care
/// about.  Observers must not fail the run: sinks that can error keep the
/// error internally and surface it when the run is over (see
/// `CsvStateLog::take_error` in `atc-output`).
pub trait AgentObserver<S: AgentState> {
    /// The agent connected and ran `initialize`.
    fn on_started(&mut self, _identity: &Identity, _state: &S) {}

    /// A tick finished with the given state.
    fn on_state(&mut self, _step: u64, _state: &S) {}

    /// The loop exited; `step` is the index of the last tick.
    fn on_stopped(&mut self, _step: u64, _state: &S) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl<S: AgentState> AgentObserver<S> for NoopObserver {}
