// ABOUTME: PDU address fields (SMSC, originator, destination) with their asymmetric length conventions
// ABOUTME: Numeric addresses travel as semi-octets, alphanumeric ones as packed septets

use crate::codec::{PduCursor, PduError, PduResult};
use crate::datatypes::semi_octet::{decode_semioctets, encode_semioctets};
use crate::datatypes::septet::{pack7, septets_to_text, text_to_septets, unpack7};
use crate::datatypes::type_of_address::{TypeOfAddress, TypeOfNumber};
use bytes::{BufMut, BytesMut};
use std::fmt;
use std::str::FromStr;

/// How the length octet in front of an address is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressLength {
    /// SMSC address: octets that follow, Type-of-Address octet included
    Octets,
    /// Originator/destination address: useful semi-octets, Type-of-Address excluded
    SemiOctets,
}

/// A phone number or alphanumeric sender plus its Type-of-Address.
///
/// `value` never carries the leading `+`; international numbers get it back
/// through `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PduAddress {
    pub type_of_address: TypeOfAddress,
    pub value: String,
}

impl PduAddress {
    pub fn new(type_of_address: TypeOfAddress, value: impl Into<String>) -> Self {
        Self {
            type_of_address,
            value: value.into(),
        }
    }

    pub fn is_international(&self) -> bool {
        self.type_of_address.is_international()
    }

    pub fn is_alphanumeric(&self) -> bool {
        self.type_of_address.is_alphanumeric()
    }

    /// Decodes the value octets that follow a Type-of-Address octet.
    ///
    /// `max_chars` bounds the output: digits for numeric addresses, septets
    /// for alphanumeric ones.
    pub fn from_value(type_of_address: TypeOfAddress, value: &[u8], max_chars: usize) -> Self {
        let value = if type_of_address.is_alphanumeric() {
            let mut septets = unpack7(value, 0);
            septets.truncate(max_chars);
            septets_to_text(&septets)
        } else {
            decode_semioctets(value, max_chars)
        };

        Self {
            type_of_address,
            value,
        }
    }

    /// Reads an SMSC block; a zero length octet means no SMSC address
    pub fn decode_smsc(cursor: &mut PduCursor<'_>) -> PduResult<Option<Self>> {
        let len = cursor.read_u8("smsc_length")? as usize;
        if len == 0 {
            return Ok(None);
        }

        let block = cursor.read_bytes(len, "smsc_address")?;
        let type_of_address = TypeOfAddress::from_byte(block[0]);
        let value = &block[1..];
        let max_chars = if type_of_address.is_alphanumeric() {
            value.len() * 8 / 7
        } else {
            value.len() * 2
        };

        Ok(Some(Self::from_value(type_of_address, value, max_chars)))
    }

    /// Reads an originator or destination address counted in semi-octets
    pub fn decode_peer(cursor: &mut PduCursor<'_>) -> PduResult<Self> {
        let semi_octets = cursor.read_u8("address_length")? as usize;
        let type_of_address = TypeOfAddress::from_byte(cursor.read_u8("type_of_address")?);
        let value = cursor.read_bytes(semi_octets.div_ceil(2), "address")?;
        let max_chars = if type_of_address.is_alphanumeric() {
            semi_octets * 4 / 7
        } else {
            semi_octets
        };

        Ok(Self::from_value(type_of_address, value, max_chars))
    }

    fn encode_value(&self) -> PduResult<Vec<u8>> {
        if self.is_alphanumeric() {
            Ok(pack7(&text_to_septets(&self.value)?))
        } else {
            encode_semioctets(&self.value)
        }
    }

    /// Writes length octet, Type-of-Address and value
    pub fn encode(&self, buf: &mut BytesMut, length: AddressLength) -> PduResult<()> {
        let value = self.encode_value()?;
        let len = match length {
            AddressLength::Octets => value.len() + 1,
            AddressLength::SemiOctets if self.is_alphanumeric() => {
                (self.value.chars().count() * 7).div_ceil(4)
            }
            AddressLength::SemiOctets => self.value.len(),
        };
        let len = u8::try_from(len)
            .map_err(|_| PduError::invalid_argument("Argument too long"))?;

        buf.put_u8(len);
        buf.put_u8(self.type_of_address.to_byte());
        buf.put_slice(&value);
        Ok(())
    }
}

/// Parses a user-supplied number: a leading `+` selects an international
/// number, any non-digit turns the whole address alphanumeric.
impl FromStr for PduAddress {
    type Err = PduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, digits) = match s.strip_prefix('+') {
            Some(rest) => (TypeOfAddress::INTERNATIONAL, rest),
            None => (TypeOfAddress::UNKNOWN, s),
        };

        let type_of_address = if digits.bytes().all(|c| c.is_ascii_digit()) {
            base
        } else {
            text_to_septets(digits)?;
            base.with_type_of_number(TypeOfNumber::Alphanumeric)
        };

        Ok(Self::new(type_of_address, digits))
    }
}

impl fmt::Display for PduAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_international() {
            write!(f, "+")?;
        }
        write!(f, "{}", self.value)
    }
}
