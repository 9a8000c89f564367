//! Per-agent delimited state log.

use std::fs::{self, File};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};

use atc_core::Identity;
use atc_runtime::{AgentObserver, AgentState};

use crate::error::{OutputError, OutputResult};

/// Appends one `;`-delimited record per observed state to `{kind}_{id}.csv`.
///
/// The first column is always the state timestamp as clock time (`HH:MM:SS`);
/// the remaining columns come from [`AgentState::log_headers`].  States whose
/// record is empty are skipped, so attaching the log to an agent that logs
/// nothing yields a header-only file.
///
/// The log never fails the run it observes.  The first write error is kept
/// and everything after it is dropped; callers collect it with
/// [`take_error`](Self::take_error) after the run.
pub struct CsvStateLog<S> {
    path:   PathBuf,
    writer: Writer<File>,
    error:  Option<OutputError>,
    _state: PhantomData<fn(&S)>,
}

impl<S: AgentState> CsvStateLog<S> {
    /// Creates the log file under `dir` (created if missing) and writes the
    /// header row.
    pub fn create(dir: &Path, identity: &Identity) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}_{}.csv", identity.kind.as_str(), identity.id.as_str()));
        let file = File::create(&path)?;
        let mut writer = WriterBuilder::new().delimiter(b';').from_writer(file);

        let mut header = vec!["time"];
        header.extend_from_slice(S::log_headers());
        writer.write_record(&header)?;

        Ok(CsvStateLog { path, writer, error: None, _state: PhantomData })
    }

    /// Where the log is written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// First write error since creation, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.error.take()
    }

    fn append(&mut self, state: &S) {
        let record = state.log_record();
        if record.is_empty() {
            return;
        }
        let mut row = vec![state.timestamp().format("%H:%M:%S").to_string()];
        row.extend(record);
        let result = self.writer.write_record(&row).map_err(OutputError::from);
        self.store(result);
    }

    fn store(&mut self, result: OutputResult<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

impl<S: AgentState> AgentObserver<S> for CsvStateLog<S> {
    fn on_started(&mut self, _identity: &Identity, state: &S) {
        self.append(state);
    }

    fn on_state(&mut self, _step: u64, state: &S) {
        self.append(state);
    }

    fn on_stopped(&mut self, _step: u64, _state: &S) {
        let result = self.writer.flush().map_err(OutputError::from);
        self.store(result);
    }
}
