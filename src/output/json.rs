// Tue Jan 13 2026 - Alex

use crate::output::ProbeOutput;
use crate::probe::ReportError;
use serde_json::{to_string, to_string_pretty};

pub struct JsonSerializer {
    pretty_print: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn serialize(&self, output: &ProbeOutput) -> Result<String, ReportError> {
        let text = if self.pretty_print {
            to_string_pretty(output)?
        } else {
            to_string(output)?
        };
        Ok(text)
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{Plan, RecordingReporter, Reporter};

    #[test]
    fn test_serialize_summary() {
        let mut reporter = RecordingReporter::new();
        reporter.plan(Plan::NoPlan).unwrap();
        reporter.comparison(&255, &255, true, "unsigned underflow - 8 bits").unwrap();
        reporter.check(false, "broken").unwrap();
        reporter.finish().unwrap();

        let output = ProbeOutput::new(reporter.into_summary());
        let text = JsonSerializer::new().with_pretty_print(false).serialize(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["summary"]["failed"], 1);
        assert_eq!(value["summary"]["plan"], "no_plan");
        assert_eq!(value["summary"]["records"][0]["expected"], "255");
        assert!(value["summary"]["records"][1].get("expected").is_none());
        assert!(value["target"]["byte_order"].is_string());
    }
}
