// Tue Jan 13 2026 - Alex

pub mod formatter;
pub mod json;

pub use formatter::SummaryFormatter;
pub use json::JsonSerializer;

use crate::probe::ProbeSummary;
use crate::structure::ByteOrder;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProbeOutput {
    pub version: String,
    pub target: TargetInfo,
    pub summary: ProbeSummary,
}

impl ProbeOutput {
    pub fn new(summary: ProbeSummary) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            target: TargetInfo::host(),
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetInfo {
    pub arch: String,
    pub os: String,
    pub byte_order: ByteOrder,
    pub pointer_width: usize,
}

impl TargetInfo {
    pub fn host() -> Self {
        Self {
            arch: std::env::consts::ARCH.to_string(),
            os: std::env::consts::OS.to_string(),
            byte_order: ByteOrder::native(),
            pointer_width: std::mem::size_of::<usize>() * 8,
        }
    }
}
