// ABOUTME: User Data Header parsing: information element walk and concatenation metadata extraction
// ABOUTME: Malformed headers degrade to "no concatenation info" instead of failing the message

use crate::codec::{PduError, PduResult};

/// Concatenated short message, 8-bit reference number
pub const IEI_CONCAT_8BIT: u8 = 0x00;

/// Multipart metadata carried by a concatenation element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConcatInfo {
    pub reference: u8,
    /// 1-based position of this part
    pub part_index: u8,
    pub part_count: u8,
}

impl ConcatInfo {
    /// Reads the three value octets of a concatenation element:
    /// reference, total parts, sequence number.
    pub fn from_element(element: &InformationElement<'_>) -> PduResult<Self> {
        match *element.data {
            [reference, part_count, sequence] => Ok(Self {
                reference,
                // The sequence octet is 1-based on the wire (`02 01` is part 1
                // of 2); a zero from a nonconforming sender is read as part 1
                // rather than shifted by one
                part_index: sequence.max(1),
                part_count,
            }),
            _ => Err(PduError::MalformedUdh(format!(
                "concatenation element carries {} value octets, expected 3",
                element.data.len()
            ))),
        }
    }
}

/// One `{identifier, length, value}` entry of a user data header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InformationElement<'a> {
    pub identifier: u8,
    pub data: &'a [u8],
}

/// Iterator over the elements of a user data header.
///
/// Yields an error once and then stops when an element would run past the
/// header's declared length.
#[derive(Debug, Clone)]
pub struct InformationElements<'a> {
    data: &'a [u8],
    failed: bool,
}

impl<'a> InformationElements<'a> {
    /// `udh` starts with the header length octet
    pub fn new(udh: &'a [u8]) -> Self {
        let data: &'a [u8] = match udh.split_first() {
            Some((&len, rest)) => &rest[..rest.len().min(len as usize)],
            None => &[],
        };
        Self {
            data,
            failed: false,
        }
    }
}

impl<'a> Iterator for InformationElements<'a> {
    type Item = PduResult<InformationElement<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.data.is_empty() {
            return None;
        }

        let (identifier, len) = match *self.data {
            [identifier, len, ..] => (identifier, len as usize),
            _ => {
                self.failed = true;
                return Some(Err(PduError::MalformedUdh(
                    "element header cut off by header length".to_string(),
                )));
            }
        };

        let rest = &self.data[2..];
        if len > rest.len() {
            self.failed = true;
            return Some(Err(PduError::MalformedUdh(format!(
                "element {identifier:#04x} declares {len} octets, {} left in header",
                rest.len()
            ))));
        }

        self.data = &rest[len..];
        Some(Ok(InformationElement {
            identifier,
            data: &rest[..len],
        }))
    }
}

/// Extracts concatenation metadata from a user data header.
///
/// Only the 8-bit reference element is interpreted; every other element is
/// skipped by its declared length. The first concatenation element wins.
pub fn decode_concat(udh: &[u8]) -> Option<ConcatInfo> {
    let mut concat = None;

    for element in InformationElements::new(udh) {
        let element = match element {
            Ok(element) => element,
            Err(err) => {
                tracing::warn!("Ignoring rest of user data header: {}", err);
                break;
            }
        };

        if element.identifier != IEI_CONCAT_8BIT || concat.is_some() {
            continue;
        }

        match ConcatInfo::from_element(&element) {
            Ok(info) => concat = Some(info),
            Err(err) => tracing::warn!("Dropping concatenation element: {}", err),
        }
    }

    concat
}
