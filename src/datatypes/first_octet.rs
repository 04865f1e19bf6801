// ABOUTME: First octet of an SMS TPDU: message type indicator, validity period format and UDH indicator
// ABOUTME: Decides between the SMS-DELIVER and SMS-SUBMIT field layouts during decoding

use num_enum::TryFromPrimitive;
use std::fmt;

/// Message type indicator, bits 1-0
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageTypeIndicator {
    Deliver = 0b00,
    Submit = 0b01,
    StatusReport = 0b10,
    Reserved = 0b11,
}

/// Validity period format of an SMS-SUBMIT, bits 4-3
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValidityPeriodFormat {
    NotPresent = 0b00,
    Enhanced = 0b01,
    Relative = 0b10,
    Absolute = 0b11,
}

/// Raw first octet with typed accessors
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FirstOctet(u8);

impl FirstOctet {
    const UDH_INDICATOR: u8 = 0x40;

    pub const fn from_byte(value: u8) -> Self {
        Self(value)
    }

    /// SMS-SUBMIT with a relative validity period and no user data header (`0x11`)
    pub const fn submit() -> Self {
        Self(MessageTypeIndicator::Submit as u8 | ((ValidityPeriodFormat::Relative as u8) << 3))
    }

    pub const fn to_byte(self) -> u8 {
        self.0
    }

    pub fn message_type(self) -> MessageTypeIndicator {
        MessageTypeIndicator::try_from(self.0 & 0x03).unwrap_or(MessageTypeIndicator::Reserved)
    }

    /// Only an explicit SUBMIT type selects the submit layout; everything
    /// else is read as a received message.
    pub fn is_submit(self) -> bool {
        self.message_type() == MessageTypeIndicator::Submit
    }

    pub fn has_udh(self) -> bool {
        self.0 & Self::UDH_INDICATOR != 0
    }
}

impl fmt::Debug for FirstOctet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirstOctet")
            .field("raw", &format_args!("0x{:02X}", self.0))
            .field("message_type", &self.message_type())
            .field("udh", &self.has_udh())
            .finish()
    }
}

impl From<u8> for FirstOctet {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}
