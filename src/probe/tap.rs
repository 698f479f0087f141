// Fri Jan 16 2026 - Alex

use crate::probe::{Plan, ReportError, Reporter};
use crate::utils::pluralize;
use std::fmt::Display;
use std::io::Write;

/// Writes Test Anything Protocol output the way libtap does.
pub struct TapReporter<W: Write> {
    out: W,
    plan: Option<Plan>,
    run: usize,
    failed: usize,
    finished: bool,
}

impl<W: Write> TapReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            plan: None,
            run: 0,
            failed: 0,
            finished: false,
        }
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn run(&self) -> usize {
        self.run
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn result_line(&mut self, passed: bool, description: &str) -> Result<(), ReportError> {
        if self.finished {
            return Err(ReportError::AlreadyFinished);
        }
        self.run += 1;
        if passed {
            writeln!(self.out, "ok {} - {}", self.run, description)?;
        } else {
            self.failed += 1;
            writeln!(self.out, "not ok {} - {}", self.run, description)?;
            writeln!(self.out, "#   Failed test '{}'", description)?;
        }
        Ok(())
    }
}

impl<W: Write> Reporter for TapReporter<W> {
    fn plan(&mut self, plan: Plan) -> Result<(), ReportError> {
        if let Plan::Count(count) = plan {
            writeln!(self.out, "1..{}", count)?;
        }
        self.plan = Some(plan);
        Ok(())
    }

    fn check(&mut self, passed: bool, description: &str) -> Result<(), ReportError> {
        self.result_line(passed, description)
    }

    fn comparison(
        &mut self,
        expected: &dyn Display,
        actual: &dyn Display,
        passed: bool,
        description: &str,
    ) -> Result<(), ReportError> {
        self.result_line(passed, description)?;
        if !passed {
            writeln!(self.out, "#          got: {}", actual)?;
            writeln!(self.out, "#     expected: {}", expected)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        if self.finished {
            return Err(ReportError::AlreadyFinished);
        }
        self.finished = true;

        match self.plan {
            Some(Plan::Count(planned)) if planned != self.run => {
                writeln!(
                    self.out,
                    "# Looks like you planned {} but ran {}.",
                    pluralize(planned, "test", "tests"),
                    self.run
                )?;
            }
            Some(Plan::Count(_)) => {}
            Some(Plan::NoPlan) | None => writeln!(self.out, "1..{}", self.run)?,
        }

        if self.failed > 0 {
            writeln!(
                self.out,
                "# Looks like you failed {} of {}.",
                pluralize(self.failed, "test", "tests"),
                self.run
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}
