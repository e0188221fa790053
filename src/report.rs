//! Reporting sinks for per-tick outcomes.

use crate::engine::TickResult;

/// Receives `(tick, result)` after every tick.
///
/// `tick` is the global tick count after the tick was processed, so the first
/// report is tick 1.
pub trait ReportSink {
    fn report(&mut self, tick: u64, result: TickResult);
}

/// Prints `tick: 0001 Ok` style lines to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutReporter;

impl StdoutReporter {
    /// The line printed for one tick.
    #[must_use]
    pub fn format_line(tick: u64, result: TickResult) -> String {
        format!("tick: {:04} {}", tick, result)
    }
}

impl ReportSink for StdoutReporter {
    fn report(&mut self, tick: u64, result: TickResult) {
        println!("{}", Self::format_line(tick, result));
    }
}

/// Collects every report, in order.
impl ReportSink for Vec<(u64, TickResult)> {
    fn report(&mut self, tick: u64, result: TickResult) {
        self.push((tick, result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(StdoutReporter::format_line(1, TickResult::Running), "tick: 0001 Ok");
        assert_eq!(StdoutReporter::format_line(20, TickResult::Died), "tick: 0020 Died");
        assert_eq!(StdoutReporter::format_line(12345, TickResult::Running), "tick: 12345 Ok");
    }

    #[test]
    fn test_vec_collects() {
        let mut sink: Vec<(u64, TickResult)> = Vec::new();
        sink.report(1, TickResult::Running);
        sink.report(2, TickResult::Died);
        assert_eq!(sink, vec![(1, TickResult::Running), (2, TickResult::Died)]);
    }
}
