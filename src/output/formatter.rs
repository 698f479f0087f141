// Tue Jan 13 2026 - Alex

use crate::output::ProbeOutput;
use colored::Colorize;

/// Human-readable pass/fail table.
pub struct SummaryFormatter {
    use_color: bool,
    show_passed: bool,
}

impl SummaryFormatter {
    pub fn new() -> Self {
        Self {
            use_color: true,
            show_passed: true,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_passed(mut self, show_passed: bool) -> Self {
        self.show_passed = show_passed;
        self
    }

    pub fn format(&self, output: &ProbeOutput) -> String {
        let summary = &output.summary;
        let mut out = String::new();

        out.push_str(&format!(
            "layout-probe {} on {}/{} ({}, {}-bit)\n",
            output.version,
            output.target.os,
            output.target.arch,
            output.target.byte_order,
            output.target.pointer_width
        ));
        out.push_str(&format!("{}\n", "-".repeat(60)));

        for record in &summary.records {
            if record.passed && !self.show_passed {
                continue;
            }
            out.push_str(&format!("{} {:>3}  {}\n", self.status(record.passed), record.number, record.description));
            if !record.passed {
                if let (Some(expected), Some(actual)) = (&record.expected, &record.actual) {
                    out.push_str(&format!("           expected: {}\n", expected));
                    out.push_str(&format!("                got: {}\n", actual));
                }
            }
        }

        out.push_str(&format!("{}\n", "-".repeat(60)));
        out.push_str(&format!(
            "Total: {}  Passed: {}  Failed: {}\n",
            summary.total,
            self.paint(&summary.passed.to_string(), true),
            self.paint(&summary.failed.to_string(), summary.failed == 0)
        ));
        out
    }

    fn status(&self, passed: bool) -> String {
        self.paint(if passed { "PASS" } else { "FAIL" }, passed)
    }

    fn paint(&self, text: &str, good: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        if good {
            text.green().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{RecordingReporter, Reporter};

    #[test]
    fn test_plain_summary_lists_failures_with_values() {
        let mut reporter = RecordingReporter::new();
        reporter.comparison(&15, &15, true, "Au packed: sizeof members == sizeof type").unwrap();
        reporter.comparison(&14, &16, false, "Au packed: size(a) + size(b) + size(c) == offsetof(d)").unwrap();

        let output = ProbeOutput::new(reporter.into_summary());
        let text = SummaryFormatter::new().with_color(false).with_passed(false).format(&output);

        assert!(!text.contains("PASS"));
        assert!(text.contains("FAIL   2  Au packed: size(a) + size(b) + size(c) == offsetof(d)"));
        assert!(text.contains("expected: 14"));
        assert!(text.contains("got: 16"));
        assert!(text.contains("Total: 2  Passed: 1  Failed: 1"));
    }
}
