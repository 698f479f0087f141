// Tue Jan 13 2026 - Alex

pub mod logging;

pub use logging::LoggingUtils;

use itertools::Itertools;

pub fn hex_string_spaced(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).join(" ")
}

/// Parses `0x`-prefixed or bare hexadecimal into a word.
pub fn parse_hex_u64(s: &str) -> Result<u64, String> {
    let digits = s
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .replace('_', "");

    if digits.is_empty() {
        return Err(format!("empty hex value: {:?}", s));
    }

    u64::from_str_radix(&digits, 16).map_err(|e| format!("invalid hex value {:?}: {}", s, e))
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_string_spaced() {
        assert_eq!(hex_string_spaced(&[0xfe, 0x01, 0x0a]), "fe 01 0a");
        assert_eq!(hex_string_spaced(&[]), "");
    }

    #[test]
    fn test_parse_hex_u64() {
        assert_eq!(parse_hex_u64("0xFEDCBA0123456789"), Ok(0xFEDC_BA01_2345_6789));
        assert_eq!(parse_hex_u64("ff"), Ok(255));
        assert_eq!(parse_hex_u64("0x_dead_beef"), Ok(0xdead_beef));
        assert!(parse_hex_u64("0x").is_err());
        assert!(parse_hex_u64("xyz").is_err());
        assert!(parse_hex_u64("0x1_0000_0000_0000_0000").is_err());
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "test", "tests"), "1 test");
        assert_eq!(pluralize(3, "test", "tests"), "3 tests");
    }
}
