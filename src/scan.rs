/// Step-line detection: pull the step count and elapsed time out of a
/// single training-log line.
///
/// Trainers report progress as `steps = <n> (<secs> sec)`, usually embedded
/// in a longer logger line. Everything around the pattern is ignored.
use regex::Regex;
use std::sync::LazyLock;

/// Compiled pattern for step-timing lines.
static STEP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"steps = (\d+) \((\d+\.\d+) sec\)").unwrap());

/// Step count and elapsed time reported by one matching line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSample {
    pub steps: u64,
    pub elapsed_secs: f64,
}

/// Extract the first step-timing match from a line.
///
/// Returns `None` for lines without a match. A matched line whose step
/// count overflows `u64` is skipped with a warning rather than aborting
/// the scan.
pub fn parse_step_line(line: &str) -> Option<StepSample> {
    let caps = STEP_LINE.captures(line)?;

    let steps = match caps[1].parse::<u64>() {
        Ok(n) => n,
        Err(_) => {
            tracing::warn!(line, "step count out of range, line skipped");
            return None;
        }
    };
    // Cannot fail for a digits-dot-digits capture; saturates to infinity
    // on absurd magnitudes instead of erroring.
    let elapsed_secs: f64 = caps[2].parse().ok()?;

    Some(StepSample {
        steps,
        elapsed_secs,
    })
}
