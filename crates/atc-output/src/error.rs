use thiserror::Error;

/// Failure while writing a state log.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv failure: {0}")]
    Csv(#[from] csv::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
