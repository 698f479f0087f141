// Tue Jan 15 2026 - Alex

pub mod config;
pub mod output;
pub mod probe;
pub mod structure;
pub mod ui;
pub mod utils;

pub use config::{OutputFormat, ProbeConfig};
pub use output::{JsonSerializer, ProbeOutput, SummaryFormatter};
pub use probe::{
    ArithmeticProber, EndianProber, LayoutProber, Plan, ProbeSuite, ProbeSummary, Prober,
    RecordingReporter, Reporter, TapReporter,
};
pub use structure::{
    ByteOrder, ByteSequence, OverlapAggregate, PackedAggregateSigned, PackedAggregateUnsigned,
    PackedLayout,
};
