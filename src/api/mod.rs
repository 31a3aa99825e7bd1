//! High-level, ergonomic library API: run a whole command script from a
//! path or an in-memory string and collect per-line events. Prefer these
//! entrypoints over driving `Interpreter` by hand when embedding listrun.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::core::interpreter::{CommandError, Interpreter};
use crate::error::Result;
use crate::types::Output;

/// One per-line outcome of a script run, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A query produced a result line.
    Output(Output),
    /// A mutation succeeded; nothing to print.
    Applied,
    /// The line was rejected; the run continued with the next one.
    Rejected(CommandError),
}

/// Aggregate of a full script run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub events: Vec<Event>,
    pub applied: usize,
    pub outputs: usize,
    pub rejected: usize,
}

impl RunReport {
    fn record(&mut self, outcome: std::result::Result<Option<Output>, CommandError>) {
        let event = match outcome {
            Ok(Some(output)) => {
                self.outputs += 1;
                Event::Output(output)
            }
            Ok(None) => {
                self.applied += 1;
                Event::Applied
            }
            Err(error) => {
                self.rejected += 1;
                Event::Rejected(error)
            }
        };
        self.events.push(event);
    }

    /// The printable output lines, in order, as the CLI would emit them.
    pub fn output_lines(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Output(output) => Some(output.to_string()),
                _ => None,
            })
            .collect()
    }
}

/// Execute a command script read lazily from `path`.
///
/// Recoverable per-line failures become `Event::Rejected`; only I/O
/// failures (unopenable file, read error mid-stream) abort the run.
pub fn run_script_path(path: &Path) -> Result<RunReport> {
    let file = File::open(path)?;
    info!("executing script: {:?}", path);

    let mut interpreter = Interpreter::new();
    let mut report = RunReport::default();
    for line in BufReader::new(file).lines() {
        let line = line?;
        report.record(interpreter.run_line(&line));
    }

    debug!(
        applied = report.applied,
        outputs = report.outputs,
        rejected = report.rejected,
        "script finished"
    );
    Ok(report)
}

/// Execute a command script held in memory, one command per line.
pub fn run_script_str(script: &str) -> RunReport {
    let mut interpreter = Interpreter::new();
    let mut report = RunReport::default();
    for line in script.lines() {
        report.record(interpreter.run_line(line));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn in_memory_script_produces_ordered_events() {
        let report = run_script_str("Push A\nPush B\nPrintList\nLength\n");
        assert_eq!(report.applied, 2);
        assert_eq!(report.outputs, 2);
        assert_eq!(report.rejected, 0);
        assert_eq!(report.output_lines(), vec!["B-A", "2"]);
    }

    #[test]
    fn rejected_lines_are_counted_but_do_not_stop_the_run() {
        let report = run_script_str("Push A\nbogus\nPush 9\nHead\n");
        assert_eq!(report.rejected, 2);
        assert_eq!(report.output_lines(), vec!["A"]);
    }

    #[test]
    fn empty_script_yields_an_empty_report() {
        let report = run_script_str("");
        assert_eq!(report, RunReport::default());
    }

    #[test]
    fn script_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Push A\nPush B\nHead\nTail\nPrintList\nLength\nRemove B\nPrintList\n"
        )
        .unwrap();

        let report = run_script_path(file.path()).unwrap();
        assert_eq!(report.output_lines(), vec!["B", "A", "B-A", "2", "A"]);
        assert_eq!(report.rejected, 0);
    }

    #[test]
    fn missing_script_is_an_io_error() {
        let err = run_script_path(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
