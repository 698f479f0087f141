// Fri Jan 16 2026 - Alex

pub mod arithmetic;
pub mod endian;
pub mod error;
pub mod layout;
pub mod report;
pub mod tap;

pub use arithmetic::{ArithmeticProber, BoundaryValue, Direction, FixedWidth};
pub use endian::{to_big_endian_bytes, to_little_endian_bytes, EndianProber};
pub use error::ReportError;
pub use layout::LayoutProber;
pub use report::{CheckRecord, Plan, ProbeSummary, RecordingReporter, Reporter};
pub use tap::TapReporter;

use crate::config::ProbeConfig;
use log::{debug, info, warn};
use std::fmt::Display;
use std::ops::AddAssign;

pub trait Prober {
    fn name(&self) -> &str;

    /// Runs every check, reporting each exactly once. Mismatches never stop
    /// the run; only a failing reporter does.
    fn run(&self, reporter: &mut dyn Reporter) -> Result<ProbeTally, ReportError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeTally {
    pub checks: usize,
    pub failures: usize,
}

impl ProbeTally {
    pub fn record(&mut self, passed: bool) {
        self.checks += 1;
        if !passed {
            self.failures += 1;
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failures == 0
    }
}

impl AddAssign for ProbeTally {
    fn add_assign(&mut self, rhs: ProbeTally) {
        self.checks += rhs.checks;
        self.failures += rhs.failures;
    }
}

pub(crate) fn compare<T: PartialEq + Display>(
    reporter: &mut dyn Reporter,
    tally: &mut ProbeTally,
    expected: T,
    actual: T,
    description: &str,
) -> Result<bool, ReportError> {
    let passed = expected == actual;
    if passed {
        debug!("{}: {}", description, actual);
    } else {
        warn!("{}: expected {}, got {}", description, expected, actual);
    }
    reporter.comparison(&expected, &actual, passed, description)?;
    tally.record(passed);
    Ok(passed)
}

pub(crate) fn verify(
    reporter: &mut dyn Reporter,
    tally: &mut ProbeTally,
    passed: bool,
    description: &str,
) -> Result<bool, ReportError> {
    if passed {
        debug!("{}: ok", description);
    } else {
        warn!("{}: failed", description);
    }
    reporter.check(passed, description)?;
    tally.record(passed);
    Ok(passed)
}

/// Runs the enabled probers in order against one reporter.
pub struct ProbeSuite {
    probers: Vec<Box<dyn Prober>>,
    plan: Plan,
}

impl ProbeSuite {
    pub fn new(plan: Plan) -> Self {
        Self {
            probers: Vec::new(),
            plan,
        }
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        let mut suite = Self::new(config.plan);
        if config.enable_layout {
            suite = suite.with_prober(Box::new(LayoutProber::new()));
        }
        if config.enable_arithmetic {
            suite = suite.with_prober(Box::new(ArithmeticProber::new()));
        }
        if config.enable_endianness {
            suite = suite.with_prober(Box::new(EndianProber::new(config.reference_value)));
        }
        suite
    }

    pub fn with_prober(mut self, prober: Box<dyn Prober>) -> Self {
        self.probers.push(prober);
        self
    }

    pub fn prober_names(&self) -> Vec<&str> {
        self.probers.iter().map(|p| p.name()).collect()
    }

    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<ProbeTally, ReportError> {
        reporter.plan(self.plan)?;

        let mut total = ProbeTally::default();
        for prober in &self.probers {
            let tally = prober.run(reporter)?;
            info!(
                "{} prober: {} checks, {} failed",
                prober.name(),
                tally.checks,
                tally.failures
            );
            total += tally;
        }

        reporter.finish()?;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suite_passes_on_host() {
        let suite = ProbeSuite::from_config(&ProbeConfig::default());
        assert_eq!(suite.prober_names(), vec!["layout", "arithmetic", "endianness"]);

        let mut reporter = RecordingReporter::new();
        let tally = suite.run(&mut reporter).unwrap();
        assert!(reporter.is_finished());

        let summary = reporter.into_summary();
        assert_eq!(summary.plan, Some(Plan::NoPlan));
        assert_eq!(summary.total, tally.checks);
        assert_eq!(summary.total, 19 + 16 + 4);
        assert!(summary.all_passed(), "failures: {:?}", summary.failures().collect::<Vec<_>>());
    }

    #[test]
    fn test_disabled_probers_are_skipped() {
        let config = ProbeConfig::new().with_layout(false).with_endianness(false);
        let suite = ProbeSuite::from_config(&config);
        assert_eq!(suite.prober_names(), vec!["arithmetic"]);

        let mut reporter = RecordingReporter::new();
        let tally = suite.run(&mut reporter).unwrap();
        assert_eq!(tally.checks, 16);
    }

    #[test]
    fn test_declared_plan_reaches_tap_output() {
        let suite = ProbeSuite::new(Plan::Count(16)).with_prober(Box::new(ArithmeticProber::new()));
        let mut tap = TapReporter::new(Vec::new());
        suite.run(&mut tap).unwrap();

        let text = String::from_utf8(tap.into_inner()).unwrap();
        assert!(text.starts_with("1..16\nok 1 - unsigned underflow - 64 bits\n"));
        assert!(!text.contains("not ok"));
    }

    #[test]
    fn test_tally_counts_failures() {
        let mut reporter = RecordingReporter::new();
        let mut tally = ProbeTally::default();
        compare(&mut reporter, &mut tally, 1, 2, "mismatch").unwrap();
        verify(&mut reporter, &mut tally, true, "fine").unwrap();
        assert_eq!(tally, ProbeTally { checks: 2, failures: 1 });
        assert!(!tally.all_passed());
    }
}
