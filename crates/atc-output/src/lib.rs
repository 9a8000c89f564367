//! File sinks for agent state.
//!
//! [`CsvStateLog`] plugs into a runner as an
//! [`AgentObserver`](atc_runtime::AgentObserver) and appends one delimited
//! record per tick to `{kind}_{id}.csv`.  Write failures never interrupt the
//! run; they are kept inside the sink and handed out through
//! [`CsvStateLog::take_error`] once the run is over.
//!
//! | Module | Contents |
//! |-----------------|-----------------------------------|
//! | [`state_log`]   | [`CsvStateLog`]                   |
//! | [`error`]       | [`OutputError`], [`OutputResult`] |

pub mod error;
pub mod state_log;

pub use error::{OutputError, OutputResult};
pub use state_log::CsvStateLog;

#[cfg(test)]
mod tests;
