// ABOUTME: Semi-octet (nibble-swapped BCD) coding shared by phone numbers and timestamps
// ABOUTME: First digit sits in the low nibble; an odd digit count is padded with a 0xF fill nibble

use crate::codec::{PduError, PduResult};

/// Nibble value used to pad an odd number of digits
pub const FILL_NIBBLE: u8 = 0x0f;

fn digit_value(c: u8) -> PduResult<u8> {
    if c.is_ascii_digit() {
        Ok(c - b'0')
    } else {
        Err(PduError::invalid_argument(format!(
            "'{}' is not a decimal digit",
            char::from(c)
        )))
    }
}

/// Packs a decimal digit string two digits per octet, low nibble first
pub fn encode_semioctets(digits: &str) -> PduResult<Vec<u8>> {
    let mut out = Vec::with_capacity(digits.len().div_ceil(2));

    for pair in digits.as_bytes().chunks(2) {
        let low = digit_value(pair[0])?;
        let high = match pair.get(1) {
            Some(&c) => digit_value(c)?,
            None => FILL_NIBBLE,
        };
        out.push((high << 4) | low);
    }

    Ok(out)
}

/// Reads up to `digit_count` digits back out of swapped octets.
///
/// The first nibble that is not a decimal digit (normally the fill nibble of
/// an odd-length number) ends the output.
pub fn decode_semioctets(bytes: &[u8], digit_count: usize) -> String {
    bytes
        .iter()
        .flat_map(|&byte| [byte & 0x0f, byte >> 4])
        .take(digit_count)
        .take_while(|&nibble| nibble <= 9)
        .map(|nibble| char::from(b'0' + nibble))
        .collect()
}

/// Appends the low then the high nibble of `byte` as ASCII digits, skipping
/// any nibble that is not a decimal digit.
pub fn push_semioctet(out: &mut String, byte: u8) {
    for nibble in [byte & 0x0f, byte >> 4] {
        if nibble <= 9 {
            out.push(char::from(b'0' + nibble));
        }
    }
}

/// Decimal value of a single swapped octet, e.g. `0x21` is 12
pub fn semioctet_value(byte: u8) -> u8 {
    [byte & 0x0f, byte >> 4]
        .into_iter()
        .filter(|&nibble| nibble <= 9)
        .fold(0, |acc, nibble| acc * 10 + nibble)
}
