// ABOUTME: GSM default-alphabet septet packing: 8 seven-bit characters per 7 octets, LSB first
// ABOUTME: Provides pack/unpack at arbitrary bit offsets plus the text <-> septet conversions

use crate::codec::{PduError, PduResult};

/// Number of octets needed for `septets` characters starting `bit_offset` bits in
pub fn packed_len(septets: usize, bit_offset: usize) -> usize {
    (bit_offset + septets * 7).div_ceil(8)
}

/// Packs 7-bit values so that character `i` occupies bits `[i*7, i*7+7)` of
/// the output bit stream, least significant bit first within each octet.
pub fn pack7(septets: &[u8]) -> Vec<u8> {
    pack7_at(septets, 0)
}

/// Like [`pack7`], but leaves `bit_offset` zero fill bits in front of the
/// first character (the layout used after a user data header).
pub fn pack7_at(septets: &[u8], bit_offset: usize) -> Vec<u8> {
    let mut packed = Vec::with_capacity(packed_len(septets.len(), bit_offset));

    // Whole fill octets first, then the partial one rides in the accumulator
    packed.resize(bit_offset / 8, 0);
    let mut acc: u16 = 0;
    let mut bits = (bit_offset % 8) as u32;

    for &septet in septets {
        acc |= u16::from(septet & 0x7f) << bits;
        bits += 7;

        while bits >= 8 {
            packed.push((acc & 0xff) as u8);
            acc >>= 8;
            bits -= 8;
        }
    }

    if bits > 0 {
        packed.push((acc & 0xff) as u8);
    }

    packed
}

/// Unpacks every septet carried by `data`.
///
/// `bit_offset` is the septet phase of `data[0]` within the user data, i.e.
/// the number of octets that precede it modulo 7. A septet that would need
/// bits from before `data[0]` is skipped, which drops the fill septet that
/// straddles a user data header.
pub fn unpack7(data: &[u8], bit_offset: usize) -> Vec<u8> {
    let mut septets = Vec::with_capacity(data.len() * 8 / 7 + 1);

    for (i, &byte) in data.iter().enumerate() {
        let pos = (i + bit_offset) % 7;

        if pos == 0 {
            septets.push(byte & 0x7f);
            continue;
        }

        if i > 0 {
            let carry = data[i - 1] >> (8 - pos);
            septets.push(carry | ((byte << pos) & 0x7f));
        }

        if pos == 6 {
            septets.push((byte >> 1) & 0x7f);
        }
    }

    septets
}

/// Renders septets as text, stopping at the first NUL septet.
///
/// Septet values are taken as 7-bit ASCII code points. The packed format
/// carries no character count, so the zero padding septet at the end of a full
/// 7-octet group comes back as NUL and terminates the text here.
pub fn septets_to_text(septets: &[u8]) -> String {
    septets
        .iter()
        .take_while(|&&septet| septet != 0)
        .map(|&septet| char::from(septet))
        .collect()
}

/// Converts text into septets, rejecting anything outside 7-bit ASCII and NUL
pub fn text_to_septets(text: &str) -> PduResult<Vec<u8>> {
    text.chars()
        .map(|c| match u8::try_from(c) {
            Ok(septet) if septet != 0 && septet < 0x80 => Ok(septet),
            _ => Err(PduError::invalid_argument(format!(
                "Character {c:?} is not in the 7-bit alphabet"
            ))),
        })
        .collect()
}
