/// Log aggregation: one pass over a training log, folding every
/// step-timing line into running totals.
use crate::scan::{self, StepSample};
use std::fmt;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Running totals across all matched lines of one log file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LogSummary {
    /// Step count from the most recent matching line (last match wins,
    /// never summed).
    pub steps: u64,
    /// Sum of the elapsed-time fields of every matching line.
    pub total_time_secs: f64,
    /// Number of lines that matched the pattern.
    pub matched_lines: u64,
}

impl LogSummary {
    /// Fold one sample into the totals.
    fn record(&mut self, sample: StepSample) {
        self.steps = sample.steps;
        self.total_time_secs += sample.elapsed_secs;
        self.matched_lines += 1;
    }

    /// Steps per second across the whole log.
    ///
    /// `None` when the total time is still zero, i.e. no line matched.
    pub fn throughput(&self) -> Option<f64> {
        if self.total_time_secs == 0.0 {
            None
        } else {
            Some(self.steps as f64 / self.total_time_secs)
        }
    }

    /// The one-line summary for stdout, or `None` when throughput is
    /// undefined.
    pub fn render(&self) -> Option<String> {
        let throughput = self.throughput()?;
        Some(format!(
            "steps = {}, time = {} sec, throughput = {} steps/sec",
            self.steps, self.total_time_secs, throughput
        ))
    }
}

/// Errors produced while aggregating a log file.
#[derive(Debug)]
pub enum AggregateError {
    /// The log file could not be opened.
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A read failed partway through the scan.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The scan accumulated no elapsed time, so throughput is undefined.
    NoSteps { path: PathBuf },
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::Open { path, source } => {
                write!(f, "failed to open {}: {source}", path.display())
            }
            AggregateError::Read { path, source } => {
                write!(f, "read error in {}: {source}", path.display())
            }
            AggregateError::NoSteps { path } => {
                write!(f, "no step lines recorded in {}", path.display())
            }
        }
    }
}

impl std::error::Error for AggregateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AggregateError::Open { source, .. } | AggregateError::Read { source, .. } => {
                Some(source)
            }
            AggregateError::NoSteps { .. } => None,
        }
    }
}

/// Scan a log file and fold every step-timing line into a summary.
///
/// Non-matching lines are skipped. The file handle is scoped to this
/// function and released on every exit path.
pub fn aggregate_file(path: &Path) -> Result<LogSummary, AggregateError> {
    let file = std::fs::File::open(path).map_err(|e| AggregateError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = std::io::BufReader::new(file);

    let mut summary = LogSummary::default();
    for line in reader.lines() {
        let line = line.map_err(|e| AggregateError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        if let Some(sample) = scan::parse_step_line(&line) {
            summary.record(sample);
        }
    }

    tracing::debug!(
        path = %path.display(),
        matched = summary.matched_lines,
        steps = summary.steps,
        total_time_secs = summary.total_time_secs,
        "scan complete"
    );
    Ok(summary)
}

/// Aggregate a log file and render the summary line.
///
/// A log with no matching lines yields `NoSteps` rather than a
/// divide-by-zero throughput.
pub fn summarize(path: &Path) -> Result<String, AggregateError> {
    let summary = aggregate_file(path)?;
    summary.render().ok_or_else(|| AggregateError::NoSteps {
        path: path.to_path_buf(),
    })
}
