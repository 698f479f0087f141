// Wed Jan 15 2026 - Alex

use super::args::Args;
use crate::config::{ConfigError, OutputFormat, ProbeConfig};
use crate::output::{JsonSerializer, ProbeOutput, SummaryFormatter};
use crate::probe::{ProbeSuite, ProbeTally, RecordingReporter, TapReporter};
use crate::utils::LoggingUtils;
use anyhow::Context;
use std::io::{self, Write};

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    /// Runs the probe and returns the process exit code.
    pub fn execute(&self, args: Args) -> anyhow::Result<i32> {
        self.setup_logging(&args);

        let config = self.resolve_config(&args)?;
        log::info!(
            "probing with reference value 0x{:x}, format {:?}",
            config.reference_value,
            config.output_format
        );

        let suite = ProbeSuite::from_config(&config);
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let tally = match config.output_format {
            OutputFormat::Tap => {
                let mut reporter = TapReporter::new(&mut out);
                suite.run(&mut reporter).context("writing TAP report")?
            }
            OutputFormat::Json => {
                let (tally, output) = self.record(&suite)?;
                let text = JsonSerializer::new().serialize(&output)?;
                writeln!(out, "{}", text)?;
                tally
            }
            OutputFormat::Summary => {
                let (tally, output) = self.record(&suite)?;
                let text = SummaryFormatter::new().with_color(!args.no_color).format(&output);
                write!(out, "{}", text)?;
                tally
            }
        };
        out.flush()?;

        if tally.all_passed() {
            log::info!("all {} checks passed", tally.checks);
        } else {
            log::warn!("{} of {} checks failed", tally.failures, tally.checks);
        }

        Ok(exit_code(&tally, args.fail_on_mismatch))
    }

    pub fn resolve_config(&self, args: &Args) -> Result<ProbeConfig, ConfigError> {
        let base = match &args.config {
            Some(path) => ProbeConfig::load(path)?,
            None => ProbeConfig::default(),
        };
        let config = args.apply(base);
        config.validate()?;
        Ok(config)
    }

    fn record(&self, suite: &ProbeSuite) -> anyhow::Result<(ProbeTally, ProbeOutput)> {
        let mut reporter = RecordingReporter::new();
        let tally = suite.run(&mut reporter).context("recording checks")?;
        Ok((tally, ProbeOutput::new(reporter.into_summary())))
    }

    fn setup_logging(&self, args: &Args) {
        if args.no_color {
            colored::control::set_override(false);
        }
        LoggingUtils::init_logger(LoggingUtils::level_from_str(&args.log_level), !args.no_color);
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Mismatches are reported, not fatal, unless the caller asks otherwise.
pub fn exit_code(tally: &ProbeTally, fail_on_mismatch: bool) -> i32 {
    if fail_on_mismatch && !tally.all_passed() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_exit_code_policy() {
        let failing = ProbeTally { checks: 3, failures: 1 };
        let passing = ProbeTally { checks: 3, failures: 0 };
        assert_eq!(exit_code(&failing, false), 0);
        assert_eq!(exit_code(&failing, true), 1);
        assert_eq!(exit_code(&passing, true), 0);
    }

    #[test]
    fn test_resolve_config_rejects_everything_skipped() {
        let args = Args::parse_from([
            "layout-probe",
            "--skip-layout",
            "--skip-arithmetic",
            "--skip-endianness",
        ]);
        assert!(matches!(
            CommandHandler::new().resolve_config(&args),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_resolve_config_missing_file() {
        let args = Args::parse_from(["layout-probe", "--config", "/nonexistent/probe.json"]);
        assert!(matches!(
            CommandHandler::new().resolve_config(&args),
            Err(ConfigError::NotFound(_))
        ));
    }
}
