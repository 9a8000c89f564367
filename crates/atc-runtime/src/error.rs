use atc_bus::BusError;
use thiserror::Error;

/// Failure of an [`AgentRunner`](crate::AgentRunner) run.
///
/// The loop itself cannot fail; only the bus underneath it can.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("bus failure: {0}")]
    Bus(#[from] BusError),
}

pub type RunResult<T> = Result<T, RunError>;
