// Fri Jan 16 2026 - Alex

use crate::probe::{compare, ProbeTally, Prober, ReportError, Reporter};
use crate::structure::Signedness;
use std::fmt;

/// Fixed-width integers whose boundaries can be probed.
///
/// Stepping always uses wrapping arithmetic so debug builds never trap.
pub trait FixedWidth: Copy + fmt::Display + PartialEq {
    const BITS: u32;
    const SIGNEDNESS: Signedness;
    const MIN: Self;
    const MAX: Self;

    fn wrapping_increment(self) -> Self;

    fn wrapping_decrement(self) -> Self;

    fn widen(self) -> i128;
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $sign:ident),+ $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const BITS: u32 = <$ty>::BITS;
                const SIGNEDNESS: Signedness = Signedness::$sign;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                fn wrapping_increment(self) -> Self {
                    self.wrapping_add(1)
                }

                fn wrapping_decrement(self) -> Self {
                    self.wrapping_sub(1)
                }

                fn widen(self) -> i128 {
                    i128::from(self)
                }
            }
        )+
    };
}

impl_fixed_width!(
    u8 => Unsigned,
    u16 => Unsigned,
    u32 => Unsigned,
    u64 => Unsigned,
    i8 => Signed,
    i16 => Signed,
    i32 => Signed,
    i64 => Signed,
);

/// Smallest value representable in `bits` bits, derived from the width alone.
pub fn expected_min(bits: u32, signedness: Signedness) -> i128 {
    match signedness {
        Signedness::Unsigned => 0,
        Signedness::Signed => -(1i128 << (bits - 1)),
    }
}

/// Largest value representable in `bits` bits, derived from the width alone.
pub fn expected_max(bits: u32, signedness: Signedness) -> i128 {
    match signedness {
        Signedness::Unsigned => (1i128 << bits) - 1,
        Signedness::Signed => (1i128 << (bits - 1)) - 1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Underflow,
    Overflow,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underflow => write!(f, "underflow"),
            Self::Overflow => write!(f, "overflow"),
        }
    }
}

/// A minimum or maximum of one fixed width, stepped at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryValue<T: FixedWidth> {
    value: T,
}

impl<T: FixedWidth> BoundaryValue<T> {
    pub fn min() -> Self {
        Self { value: T::MIN }
    }

    pub fn max() -> Self {
        Self { value: T::MAX }
    }

    /// The boundary a step in `direction` starts from.
    pub fn start(direction: Direction) -> Self {
        match direction {
            Direction::Underflow => Self::min(),
            Direction::Overflow => Self::max(),
        }
    }

    pub fn width(&self) -> u32 {
        T::BITS
    }

    pub fn signedness(&self) -> Signedness {
        T::SIGNEDNESS
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn decrement(self) -> Self {
        Self {
            value: self.value.wrapping_decrement(),
        }
    }

    pub fn increment(self) -> Self {
        Self {
            value: self.value.wrapping_increment(),
        }
    }

    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Underflow => self.decrement(),
            Direction::Overflow => self.increment(),
        }
    }
}

/// Where a single step past the boundary must land under two's complement.
pub fn expected_after_step(bits: u32, signedness: Signedness, direction: Direction) -> i128 {
    match direction {
        Direction::Underflow => expected_max(bits, signedness),
        Direction::Overflow => expected_min(bits, signedness),
    }
}

/// Wraparound checks at both boundaries of every 8/16/32/64-bit integer.
#[derive(Debug, Default)]
pub struct ArithmeticProber;

impl ArithmeticProber {
    pub fn new() -> Self {
        Self
    }

    fn probe<T: FixedWidth>(
        &self,
        direction: Direction,
        reporter: &mut dyn Reporter,
        tally: &mut ProbeTally,
    ) -> Result<(), ReportError> {
        let boundary = BoundaryValue::<T>::start(direction);
        let expected = expected_after_step(boundary.width(), boundary.signedness(), direction);
        let actual = boundary.step(direction).value().widen();
        let description = format!(
            "{} {} - {} bits",
            boundary.signedness(),
            direction,
            boundary.width()
        );
        compare(reporter, tally, expected, actual, &description)?;
        Ok(())
    }

    fn probe_widths(
        &self,
        signedness: Signedness,
        direction: Direction,
        reporter: &mut dyn Reporter,
        tally: &mut ProbeTally,
    ) -> Result<(), ReportError> {
        match signedness {
            Signedness::Unsigned => {
                self.probe::<u64>(direction, reporter, tally)?;
                self.probe::<u32>(direction, reporter, tally)?;
                self.probe::<u16>(direction, reporter, tally)?;
                self.probe::<u8>(direction, reporter, tally)?;
            }
            Signedness::Signed => {
                self.probe::<i64>(direction, reporter, tally)?;
                self.probe::<i32>(direction, reporter, tally)?;
                self.probe::<i16>(direction, reporter, tally)?;
                self.probe::<i8>(direction, reporter, tally)?;
            }
        }
        Ok(())
    }
}

impl Prober for ArithmeticProber {
    fn name(&self) -> &str {
        "arithmetic"
    }

    fn run(&self, reporter: &mut dyn Reporter) -> Result<ProbeTally, ReportError> {
        let mut tally = ProbeTally::default();
        for signedness in [Signedness::Unsigned, Signedness::Signed] {
            for direction in [Direction::Underflow, Direction::Overflow] {
                self.probe_widths(signedness, direction, reporter, &mut tally)?;
            }
        }
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::RecordingReporter;

    #[test]
    fn test_unsigned_byte_underflow_is_255() {
        let value = BoundaryValue::<u8>::min().decrement();
        assert_eq!(value.value(), 255);
    }

    #[test]
    fn test_signed_word_overflow_is_min() {
        let value = BoundaryValue::<i32>::max().increment();
        assert_eq!(value.value(), -2147483648);
    }

    #[test]
    fn test_expected_bounds_from_width() {
        assert_eq!(expected_max(8, Signedness::Unsigned), 255);
        assert_eq!(expected_max(64, Signedness::Unsigned), u64::MAX as i128);
        assert_eq!(expected_min(64, Signedness::Signed), i64::MIN as i128);
        assert_eq!(expected_max(16, Signedness::Signed), 32767);
        assert_eq!(expected_min(32, Signedness::Unsigned), 0);
    }

    #[test]
    fn test_wraparound_laws() {
        fn laws<T: FixedWidth>() {
            let bits = T::BITS;
            let sign = T::SIGNEDNESS;
            assert_eq!(BoundaryValue::<T>::min().decrement().value().widen(), expected_max(bits, sign));
            assert_eq!(BoundaryValue::<T>::max().increment().value().widen(), expected_min(bits, sign));
        }
        laws::<u8>();
        laws::<u16>();
        laws::<u32>();
        laws::<u64>();
        laws::<i8>();
        laws::<i16>();
        laws::<i32>();
        laws::<i64>();
    }

    #[test]
    fn test_prober_reports_sixteen_checks_in_order() {
        let mut reporter = RecordingReporter::new();
        let tally = ArithmeticProber::new().run(&mut reporter).unwrap();
        assert_eq!(tally, ProbeTally { checks: 16, failures: 0 });

        let names: Vec<&str> = reporter.records().iter().map(|r| r.description.as_str()).collect();
        assert_eq!(names[0], "unsigned underflow - 64 bits");
        assert_eq!(names[3], "unsigned underflow - 8 bits");
        assert_eq!(names[4], "unsigned overflow - 64 bits");
        assert_eq!(names[8], "signed underflow - 64 bits");
        assert_eq!(names[15], "signed overflow - 8 bits");
    }

    #[test]
    fn test_signed_overflow_reports_min() {
        let mut reporter = RecordingReporter::new();
        ArithmeticProber::new().run(&mut reporter).unwrap();
        let summary = reporter.into_summary();
        let record = summary.find("signed overflow - 32 bits").unwrap();
        assert_eq!(record.actual.as_deref(), Some("-2147483648"));
        assert!(record.passed);
    }
}
