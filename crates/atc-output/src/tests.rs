//! Integration tests for atc-output.

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use atc_core::{AgentKind, Identity};
use atc_runtime::{AgentObserver, AgentState, Stateless};

use crate::CsvStateLog;

fn tmp() -> TempDir {
    tempfile::tempdir().unwrap()
}

fn at(second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, second).unwrap()
}

/// Minimal loggable state: one value column.
#[derive(Clone, Debug)]
struct Probe {
    time:  DateTime<Utc>,
    value: f32,
}

impl AgentState for Probe {
    fn timestamp(&self) -> DateTime<Utc> {
        self.time
    }

    fn log_headers() -> &'static [&'static str] {
        &["value"]
    }

    fn log_record(&self) -> Vec<String> {
        vec![self.value.to_string()]
    }
}

mod csv_log {
    use super::*;

    #[test]
    fn file_named_after_the_agent() {
        let dir = tmp();
        let log: CsvStateLog<Probe> =
            CsvStateLog::create(dir.path(), &Identity::new(AgentKind::Plane, "p-1")).unwrap();
        assert_eq!(log.path(), dir.path().join("plane_p-1.csv"));
    }

    #[test]
    fn one_record_per_observed_state() {
        let dir = tmp();
        let me = Identity::new(AgentKind::Plane, "p-1");
        let mut log: CsvStateLog<Probe> = CsvStateLog::create(dir.path(), &me).unwrap();

        log.on_started(&me, &Probe { time: at(0), value: 1.0 });
        log.on_state(0, &Probe { time: at(1), value: 2.5 });
        log.on_state(1, &Probe { time: at(2), value: -3.0 });
        log.on_stopped(1, &Probe { time: at(2), value: -3.0 });
        assert!(log.take_error().is_none());

        let written = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(
            lines,
            vec!["time;value", "12:00:00;1", "12:00:01;2.5", "12:00:02;-3"]
        );
    }

    #[test]
    fn empty_records_are_skipped() {
        let dir = tmp();
        let me = Identity::new(AgentKind::Dispatcher, "tower");
        let mut log: CsvStateLog<Stateless> = CsvStateLog::create(dir.path(), &me).unwrap();

        log.on_state(0, &Stateless::new());
        log.on_stopped(0, &Stateless::new());

        let written = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(written, "time\n");
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tmp();
        let nested = dir.path().join("out").join("run-1");
        let log: CsvStateLog<Probe> =
            CsvStateLog::create(&nested, &Identity::new(AgentKind::Plane, "p-9")).unwrap();
        assert!(log.path().starts_with(&nested));
    }
}
