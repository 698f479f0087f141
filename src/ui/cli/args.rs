// Wed Jan 15 2026 - Alex

use crate::config::{OutputFormat, ProbeConfig};
use crate::probe::Plan;
use crate::utils::parse_hex_u64;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "layout-probe")]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Probes packed layout, union offsets, integer wraparound and byte order", long_about = None)]
pub struct Args {
    /// JSON config file; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[arg(long)]
    pub no_color: bool,

    #[arg(long)]
    pub skip_layout: bool,

    #[arg(long)]
    pub skip_arithmetic: bool,

    #[arg(long)]
    pub skip_endianness: bool,

    /// Word used by the byte-order checks, in hex
    #[arg(long, value_parser = parse_hex_u64)]
    pub reference_value: Option<u64>,

    /// Announce this many checks up front instead of counting them at the end
    #[arg(long)]
    pub plan: Option<usize>,

    /// Exit with status 1 when any check fails
    #[arg(long)]
    pub fail_on_mismatch: bool,
}

impl Args {
    /// Layers command-line overrides on top of `config`.
    pub fn apply(&self, mut config: ProbeConfig) -> ProbeConfig {
        if self.skip_layout {
            config.enable_layout = false;
        }
        if self.skip_arithmetic {
            config.enable_arithmetic = false;
        }
        if self.skip_endianness {
            config.enable_endianness = false;
        }
        if let Some(value) = self.reference_value {
            config.reference_value = value;
        }
        if let Some(count) = self.plan {
            config.plan = Plan::Count(count);
        }
        if let Some(format) = self.format {
            config.output_format = format;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["layout-probe"]);
        assert_eq!(args.log_level, "warn");
        assert!(!args.fail_on_mismatch);
        assert_eq!(args.apply(ProbeConfig::default()), ProbeConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "layout-probe",
            "--format",
            "json",
            "--skip-layout",
            "--reference-value",
            "0x0123456789abcdef",
            "--plan",
            "20",
        ]);
        let config = args.apply(ProbeConfig::default());
        assert!(!config.enable_layout);
        assert!(config.enable_arithmetic);
        assert_eq!(config.reference_value, 0x0123_4567_89ab_cdef);
        assert_eq!(config.plan, Plan::Count(20));
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_bad_reference_value() {
        assert!(Args::try_parse_from(["layout-probe", "--reference-value", "zz"]).is_err());
    }
}
