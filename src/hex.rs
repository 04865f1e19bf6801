// ABOUTME: Hex helpers for raw PDUs: parsing modem-style hex strings and rendering byte dumps
// ABOUTME: Dumps are lowercase octet pairs separated by single spaces, e.g. "07 91 21 f0"

use crate::codec::{PduError, PduResult};
use std::fmt;

/// Displays bytes as a lowercase, space-separated hex dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Parses a hex string into bytes, either case, ignoring whitespace
pub fn parse_hex(data: &str) -> PduResult<Vec<u8>> {
    let digits: Vec<u8> = data
        .bytes()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    if digits.len() % 2 != 0 {
        return Err(PduError::invalid_argument("Invalid hex string: odd length"));
    }
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(PduError::invalid_argument("Invalid hex string"));
    }

    Ok(digits
        .chunks(2)
        .map(|pair| (hex_value(pair[0]) << 4) | hex_value(pair[1]))
        .collect())
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
