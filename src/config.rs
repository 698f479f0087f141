// Tue Jan 13 2026 - Alex

use crate::probe::Plan;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const REFERENCE_VALUE: u64 = 0xFEDC_BA01_2345_6789;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Tap,
    Json,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub enable_layout: bool,
    pub enable_arithmetic: bool,
    pub enable_endianness: bool,
    pub reference_value: u64,
    pub plan: Plan,
    pub output_format: OutputFormat,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enable_layout: true,
            enable_arithmetic: true,
            enable_endianness: true,
            reference_value: REFERENCE_VALUE,
            plan: Plan::NoPlan,
            output_format: OutputFormat::Tap,
        }
    }
}

impl ProbeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, enabled: bool) -> Self {
        self.enable_layout = enabled;
        self
    }

    pub fn with_arithmetic(mut self, enabled: bool) -> Self {
        self.enable_arithmetic = enabled;
        self
    }

    pub fn with_endianness(mut self, enabled: bool) -> Self {
        self.enable_endianness = enabled;
        self
    }

    pub fn with_reference_value(mut self, value: u64) -> Self {
        self.reference_value = value;
        self
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = plan;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.enable_layout && !self.enable_arithmetic && !self.enable_endianness {
            return Err(ConfigError::ValidationError(
                "at least one prober must be enabled".to_string(),
            ));
        }
        if self.plan == Plan::Count(0) {
            return Err(ConfigError::ValidationError(
                "a declared plan must cover at least one check".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !ext.eq_ignore_ascii_case("json") {
            return Err(ConfigError::UnsupportedFormat(ext.to_string()));
        }

        let contents = fs::read_to_string(path)?;
        let config: ProbeConfig = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Serialize error: {0}")]
    SerializeError(String),
    #[error("Unsupported config format: {0:?}")]
    UnsupportedFormat(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
