// Fri Jan 16 2026 - Alex

use crate::probe::{compare, ProbeTally, Prober, ReportError, Reporter};
use crate::structure::overlap::WORD_BYTES;
use crate::structure::{ByteOrder, ByteSequence, OverlapAggregate};
use log::debug;

/// Bytes of `value` with the least significant byte first, on any host.
pub fn to_little_endian_bytes(value: u64) -> ByteSequence {
    ByteSequence::new(value.to_le_bytes())
}

/// Bytes of `value` with the most significant byte first, on any host.
pub fn to_big_endian_bytes(value: u64) -> ByteSequence {
    ByteSequence::new(value.to_be_bytes())
}

pub fn to_order_bytes(value: u64, order: ByteOrder) -> ByteSequence {
    match order {
        ByteOrder::Little => to_little_endian_bytes(value),
        ByteOrder::Big => to_big_endian_bytes(value),
    }
}

/// Host-order word whose in-memory bytes are `value` in `order`
/// (`htole64` / `htobe64`).
pub fn host_to_order(value: u64, order: ByteOrder) -> u64 {
    match order {
        ByteOrder::Little => value.to_le(),
        ByteOrder::Big => value.to_be(),
    }
}

/// Converted word placed in overlapping storage, read back as bytes.
pub fn storage_bytes(value: u64, order: ByteOrder) -> ByteSequence {
    let mut storage = OverlapAggregate::default();
    storage.set_word(host_to_order(value, order));
    ByteSequence::new(storage.bytes())
}

/// Reference sequence built by shifting, without any byte-order conversion.
pub fn reference_bytes(value: u64, order: ByteOrder) -> ByteSequence {
    let mut bytes = [0u8; WORD_BYTES];
    for significance in 0..WORD_BYTES {
        bytes[order.position(significance)] = (value >> (8 * significance)) as u8;
    }
    ByteSequence::new(bytes)
}

/// Byte-order conversion checks for one 64-bit reference value.
#[derive(Debug)]
pub struct EndianProber {
    value: u64,
}

impl EndianProber {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    fn probe_order(
        &self,
        order: ByteOrder,
        reporter: &mut dyn Reporter,
        tally: &mut ProbeTally,
    ) -> Result<(), ReportError> {
        let converted = to_order_bytes(self.value, order);
        let stored = storage_bytes(self.value, order);
        let reference = reference_bytes(self.value, order);
        debug!("0x{:x} as {}: {}", self.value, order, converted);

        let description = format!(
            "0x{:x} {}: overlapping storage == conversion",
            self.value, order
        );
        compare(reporter, tally, converted, stored, &description)?;

        let description = format!("0x{:x} {}: conversion == reference", self.value, order);
        compare(reporter, tally, reference, converted, &description)?;
        Ok(())
    }
}

impl Prober for EndianProber {
    fn name(&self) -> &str {
        "endianness"
    }

    fn run(&self, reporter: &mut dyn Reporter) -> Result<ProbeTally, ReportError> {
        let mut tally = ProbeTally::default();
        debug!("host byte order is {}", ByteOrder::native());
        for order in [ByteOrder::Little, ByteOrder::Big] {
            self.probe_order(order, reporter, &mut tally)?;
        }
        Ok(tally)
    }
}
