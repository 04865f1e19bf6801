// ABOUTME: Service centre timestamp of a received SMS: seven semi-octet fields, the last being the time zone
// ABOUTME: Renders as a fixed-width "20YY-MM-DD hh:mm:ss" string; years are assumed to be 2000-2099

use crate::codec::{PduCursor, PduResult};
use crate::datatypes::semi_octet::semioctet_value;
use std::fmt;

/// Service centre timestamp (time zone octet is read but not kept)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    pub year2: u8,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Timestamp {
    /// Octets occupied on the wire, time zone included
    pub const SIZE: usize = 7;

    pub fn from_semi_octets(bytes: &[u8; Self::SIZE]) -> Self {
        Self {
            year2: semioctet_value(bytes[0]),
            month: semioctet_value(bytes[1]),
            day: semioctet_value(bytes[2]),
            hour: semioctet_value(bytes[3]),
            minute: semioctet_value(bytes[4]),
            second: semioctet_value(bytes[5]),
        }
    }

    pub fn decode(cursor: &mut PduCursor<'_>) -> PduResult<Self> {
        let bytes = cursor.read_bytes(Self::SIZE, "timestamp")?;
        let mut fields = [0u8; Self::SIZE];
        fields.copy_from_slice(bytes);
        Ok(Self::from_semi_octets(&fields))
    }

    /// Four-digit year
    pub fn year(&self) -> u16 {
        2000 + u16::from(self.year2)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::PduError;

    #[test]
    fn test_decode_and_format() {
        let bytes = [0x21, 0x80, 0x51, 0x41, 0x23, 0x05, 0x80];
        let mut cursor = PduCursor::new(&bytes);
        let ts = Timestamp::decode(&mut cursor).unwrap();

        assert_eq!(ts.year2, 12);
        assert_eq!(ts.month, 8);
        assert_eq!(ts.day, 15);
        assert_eq!(ts.year(), 2012);
        assert_eq!(ts.to_string(), "2012-08-15 14:32:50");
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_midnight_new_year() {
        let ts = Timestamp::from_semi_octets(&[0x52, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(ts.to_string(), "2025-01-01 00:00:00");
    }

    #[test]
    fn test_truncated_timestamp() {
        let bytes = [0x21, 0x80, 0x51, 0x41, 0x23, 0x05];
        let mut cursor = PduCursor::new(&bytes);
        assert!(matches!(
            Timestamp::decode(&mut cursor),
            Err(PduError::TruncatedPdu { field: "timestamp", needed: 7, remaining: 6 })
        ));
    }
}
