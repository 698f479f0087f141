// Fri Jan 16 2026 - Alex

use crate::probe::{compare, verify, ProbeTally, Prober, ReportError, Reporter};
use crate::structure::{
    Aggregate, ByteSequence, Offset, OverlapAggregate, PackedAggregate, PackedAggregateSigned,
    PackedAggregateUnsigned, Size, StructureError,
};
use log::debug;

const OVERLAP_PATTERN: u64 = 0x0011_2233_4455_6677;

/// Size and offset checks for the packed and overlapping aggregates.
#[derive(Debug, Default)]
pub struct LayoutProber;

impl LayoutProber {
    pub fn new() -> Self {
        Self
    }

    fn type_size<A: PackedAggregate>(
        &self,
        reporter: &mut dyn Reporter,
        tally: &mut ProbeTally,
    ) -> Result<(), ReportError> {
        let expected: Size = A::member_type_sizes().into_iter().sum();
        let description = format!("{} packed: sizeof members == sizeof type", A::NAME);
        compare(reporter, tally, expected, A::size_of(), &description)?;
        Ok(())
    }

    fn instance_size<A: PackedAggregate + Default>(
        &self,
        reporter: &mut dyn Reporter,
        tally: &mut ProbeTally,
    ) -> Result<(), ReportError> {
        let value = A::default();
        let expected: Size = value.member_sizes().into_iter().sum();
        let description = format!("{} packed: sizeof members == sizeof instance", A::NAME);
        compare(reporter, tally, expected, value.instance_size(), &description)?;
        Ok(())
    }

    fn overlap_sizes(
        &self,
        reporter: &mut dyn Reporter,
        tally: &mut ProbeTally,
    ) -> Result<(), ReportError> {
        let word = Size::of::<u64>();
        let description = format!("{}: sizeof u64 == sizeof type", OverlapAggregate::NAME);
        compare(reporter, tally, word, OverlapAggregate::size_of(), &description)?;

        let instance = OverlapAggregate::default();
        let description = format!("{}: sizeof u64 == sizeof instance", OverlapAggregate::NAME);
        compare(reporter, tally, word, Size::of_val(&instance), &description)?;
        Ok(())
    }

    /// The last field starts right after the first three: no padding before it.
    fn last_field_offset<A: PackedAggregate + Default>(
        &self,
        reporter: &mut dyn Reporter,
        tally: &mut ProbeTally,
    ) -> Result<(), ReportError> {
        let value = A::default();
        let sizes = value.member_sizes();
        let expected: Size = sizes[..3].iter().copied().sum();
        let (last, _) = A::FIELDS[3];
        let description = format!(
            "{} packed: size(a) + size(b) + size(c) == offsetof({})",
            A::NAME,
            last
        );

        match A::offset_of(last) {
            Ok(actual) => compare(reporter, tally, expected.as_usize(), actual.as_usize(), &description)?,
            Err(e) => unresolved(reporter, tally, &description, e)?,
        };
        Ok(())
    }

    fn overlap_offsets(
        &self,
        reporter: &mut dyn Reporter,
        tally: &mut ProbeTally,
    ) -> Result<(), ReportError> {
        for member in ["bytes", "word"] {
            let description = format!(
                "0 == offsetof({}, {}) within union {{ bytes, word }}",
                OverlapAggregate::NAME,
                member
            );
            match OverlapAggregate::offset_of(member) {
                Ok(actual) => compare(reporter, tally, Offset::zero(), actual, &description)?,
                Err(e) => unresolved(reporter, tally, &description, e)?,
            };
        }
        Ok(())
    }

    fn overlap_reinterpretation(
        &self,
        reporter: &mut dyn Reporter,
        tally: &mut ProbeTally,
    ) -> Result<(), ReportError> {
        let mut storage = OverlapAggregate::default();
        storage.set_word(OVERLAP_PATTERN);
        let description = format!("{}: word written, bytes read back unchanged", OverlapAggregate::NAME);
        compare(
            reporter,
            tally,
            ByteSequence::new(OVERLAP_PATTERN.to_ne_bytes()),
            ByteSequence::new(storage.bytes()),
            &description,
        )?;
        Ok(())
    }

    /// Compiler offsets against the portable packed descriptor, field by field.
    fn descriptor_offsets<A: PackedAggregate>(
        &self,
        reporter: &mut dyn Reporter,
        tally: &mut ProbeTally,
    ) -> Result<(), ReportError> {
        let layout = match A::descriptor() {
            Ok(layout) => layout,
            Err(e) => {
                let description = format!("{} packed: layout descriptor", A::NAME);
                unresolved(reporter, tally, &description, e)?;
                return Ok(());
            }
        };
        debug!(
            "{}: packed size {}, natural size {}",
            layout.name(),
            layout.size(),
            layout.natural_size()
        );

        for field in layout.fields() {
            let description = format!(
                "{} packed: offsetof({}) == {}",
                A::NAME,
                field.name(),
                field.offset()
            );
            match A::offset_of(field.name()) {
                Ok(actual) => compare(reporter, tally, field.offset(), actual, &description)?,
                Err(e) => unresolved(reporter, tally, &description, e)?,
            };
        }
        Ok(())
    }
}

fn unresolved(
    reporter: &mut dyn Reporter,
    tally: &mut ProbeTally,
    description: &str,
    error: StructureError,
) -> Result<bool, ReportError> {
    verify(reporter, tally, false, &format!("{} ({})", description, error))
}

impl Prober for LayoutProber {
    fn name(&self) -> &str {
        "layout"
    }

    fn run(&self, reporter: &mut dyn Reporter) -> Result<ProbeTally, ReportError> {
        let mut tally = ProbeTally::default();

        self.type_size::<PackedAggregateSigned>(reporter, &mut tally)?;
        self.type_size::<PackedAggregateUnsigned>(reporter, &mut tally)?;
        self.instance_size::<PackedAggregateSigned>(reporter, &mut tally)?;
        self.instance_size::<PackedAggregateUnsigned>(reporter, &mut tally)?;
        self.overlap_sizes(reporter, &mut tally)?;

        self.last_field_offset::<PackedAggregateSigned>(reporter, &mut tally)?;
        self.last_field_offset::<PackedAggregateUnsigned>(reporter, &mut tally)?;
        self.overlap_offsets(reporter, &mut tally)?;
        self.overlap_reinterpretation(reporter, &mut tally)?;

        self.descriptor_offsets::<PackedAggregateSigned>(reporter, &mut tally)?;
        self.descriptor_offsets::<PackedAggregateUnsigned>(reporter, &mut tally)?;

        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::RecordingReporter;

    fn run_layout() -> RecordingReporter {
        let mut reporter = RecordingReporter::new();
        LayoutProber::new().run(&mut reporter).unwrap();
        reporter
    }

    #[test]
    fn test_layout_checks_all_pass() {
        let reporter = run_layout();
        let summary = reporter.summary();
        assert_eq!(summary.total, 19);
        assert!(summary.all_passed(), "failures: {:?}", summary.failures().collect::<Vec<_>>());
    }

    #[test]
    fn test_packed_sizes_reported_as_fifteen() {
        let summary = run_layout().into_summary();
        let record = summary.find("Au packed: sizeof members == sizeof type").unwrap();
        assert_eq!(record.expected.as_deref(), Some("15"));
        assert_eq!(record.actual.as_deref(), Some("15"));
    }

    #[test]
    fn test_last_field_offset_is_fourteen() {
        let summary = run_layout().into_summary();
        for name in ["Ai", "Au"] {
            let description = format!("{} packed: size(a) + size(b) + size(c) == offsetof(d)", name);
            let record = summary.find(&description).unwrap();
            assert_eq!(record.actual.as_deref(), Some("14"));
            assert!(record.passed);
        }
    }

    #[test]
    fn test_overlap_alternatives_at_zero() {
        let summary = run_layout().into_summary();
        let zero_checks: Vec<_> = summary
            .records
            .iter()
            .filter(|r| r.description.starts_with("0 == offsetof(B"))
            .collect();
        assert_eq!(zero_checks.len(), 2);
        assert!(zero_checks.iter().all(|r| r.passed && r.actual.as_deref() == Some("0")));
    }

    #[test]
    fn test_check_order_follows_probe_sequence() {
        let summary = run_layout().into_summary();
        let first: Vec<&str> = summary.records[..6].iter().map(|r| r.description.as_str()).collect();
        assert_eq!(
            first,
            vec![
                "Ai packed: sizeof members == sizeof type",
                "Au packed: sizeof members == sizeof type",
                "Ai packed: sizeof members == sizeof instance",
                "Au packed: sizeof members == sizeof instance",
                "B: sizeof u64 == sizeof type",
                "B: sizeof u64 == sizeof instance",
            ]
        );
    }
}
