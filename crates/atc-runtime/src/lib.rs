//! Message-driven agent execution.
//!
//! Every participant of the simulation is an [`Agent`]: a decision function
//! plus a piece of owned state, driven by an [`AgentRunner`] on its own
//! thread.  The runner owns the bus connection and the tick cadence; the
//! agent only ever sees the current inbox and an outbox to fill.  Agents
//! never share memory, so two runners interact exclusively through the bus.
//!
//! | Module | Contents |
//! |----------------|----------------------------------------------------|
//! | [`agent`]      | [`Agent`] and [`AgentState`] traits, [`Control`]   |
//! | [`context`]    | [`StepContext`] handed to every agent callback     |
//! | [`settings`]   | [`TickSettings`] (time step, pacing, seed)         |
//! | [`runner`]     | [`AgentRunner`] tick loop                          |
//! | [`observer`]   | [`AgentObserver`] state taps                       |
//! | [`error`]      | [`RunError`]                                       |

pub mod agent;
pub mod context;
pub mod error;
pub mod observer;
pub mod runner;
pub mod settings;

pub use agent::{Agent, AgentState, Control, Stateless};
pub use context::StepContext;
pub use error::{RunError, RunResult};
pub use observer::{AgentObserver, NoopObserver};
pub use runner::AgentRunner;
pub use settings::TickSettings;

#[cfg(test)]
mod tests;
