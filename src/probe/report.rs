// Fri Jan 16 2026 - Alex

use crate::probe::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of checks announced before probing starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Count(usize),
    NoPlan,
}

/// Reporting collaborator. Probers call it once per check, in order.
pub trait Reporter {
    fn plan(&mut self, plan: Plan) -> Result<(), ReportError>;

    fn check(&mut self, passed: bool, description: &str) -> Result<(), ReportError>;

    fn comparison(
        &mut self,
        expected: &dyn Display,
        actual: &dyn Display,
        passed: bool,
        description: &str,
    ) -> Result<(), ReportError>;

    fn finish(&mut self) -> Result<(), ReportError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRecord {
    pub number: usize,
    pub description: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeSummary {
    pub plan: Option<Plan>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub records: Vec<CheckRecord>,
}

impl ProbeSummary {
    pub fn from_records(plan: Option<Plan>, records: Vec<CheckRecord>) -> Self {
        let total = records.len();
        let passed = records.iter().filter(|r| r.passed).count();
        Self {
            plan,
            total,
            passed,
            failed: total - passed,
            records,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckRecord> {
        self.records.iter().filter(|r| !r.passed)
    }

    pub fn find(&self, description: &str) -> Option<&CheckRecord> {
        self.records.iter().find(|r| r.description == description)
    }
}

/// Keeps every reported check in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    plan: Option<Plan>,
    records: Vec<CheckRecord>,
    finished: bool,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[CheckRecord] {
        &self.records
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn summary(&self) -> ProbeSummary {
        ProbeSummary::from_records(self.plan, self.records.clone())
    }

    pub fn into_summary(self) -> ProbeSummary {
        ProbeSummary::from_records(self.plan, self.records)
    }

    fn push(&mut self, record: CheckRecord) -> Result<(), ReportError> {
        if self.finished {
            return Err(ReportError::AlreadyFinished);
        }
        self.records.push(record);
        Ok(())
    }
}

impl Reporter for RecordingReporter {
    fn plan(&mut self, plan: Plan) -> Result<(), ReportError> {
        self.plan = Some(plan);
        Ok(())
    }

    fn check(&mut self, passed: bool, description: &str) -> Result<(), ReportError> {
        let number = self.records.len() + 1;
        self.push(CheckRecord {
            number,
            description: description.to_string(),
            passed,
            expected: None,
            actual: None,
        })
    }

    fn comparison(
        &mut self,
        expected: &dyn Display,
        actual: &dyn Display,
        passed: bool,
        description: &str,
    ) -> Result<(), ReportError> {
        let number = self.records.len() + 1;
        self.push(CheckRecord {
            number,
            description: description.to_string(),
            passed,
            expected: Some(expected.to_string()),
            actual: Some(actual.to_string()),
        })
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        if self.finished {
            return Err(ReportError::AlreadyFinished);
        }
        self.finished = true;
        Ok(())
    }
}
