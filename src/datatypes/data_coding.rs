// ABOUTME: Strongly-typed SMS data coding scheme octet with alphabet and message class accessors
// ABOUTME: Only the GSM 7-bit default alphabet is decodable; other alphabets are reported as unsupported

use num_enum::TryFromPrimitive;
use std::fmt;

/// Character set selected by bits 3-2 of the data coding scheme
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Alphabet {
    Default7Bit,
    EightBit,
    Ucs2,
    Reserved,
}

/// Message class carried in bits 1-0 when bit 4 is set
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MessageClass {
    /// Class 0: displayed immediately, not stored
    Flash = 0,
    MobileEquipment = 1,
    SimSpecific = 2,
    TerminalEquipment = 3,
}

impl MessageClass {
    /// Class number as reported in status output (0-3)
    pub fn number(&self) -> u8 {
        *self as u8
    }
}

/// Raw data coding scheme octet
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DataCodingScheme(u8);

impl DataCodingScheme {
    const ALPHABET_MASK: u8 = 0x0c;
    const CLASS_PRESENT: u8 = 0x10;

    /// Default alphabet, no message class
    pub const DEFAULT: Self = Self(0x00);

    /// Default alphabet, class 0
    pub const FLASH: Self = Self(Self::CLASS_PRESENT);

    pub const fn from_byte(value: u8) -> Self {
        Self(value)
    }

    pub const fn to_byte(self) -> u8 {
        self.0
    }

    pub fn alphabet(self) -> Alphabet {
        match (self.0 & Self::ALPHABET_MASK) >> 2 {
            0 => Alphabet::Default7Bit,
            1 => Alphabet::EightBit,
            2 => Alphabet::Ucs2,
            _ => Alphabet::Reserved,
        }
    }

    /// Returns true if the text is packed 7-bit default alphabet
    pub fn is_default_alphabet(self) -> bool {
        self.alphabet() == Alphabet::Default7Bit
    }

    /// Message class, only meaningful when bit 4 is set
    pub fn message_class(self) -> Option<MessageClass> {
        if self.0 & Self::CLASS_PRESENT == 0 {
            return None;
        }
        MessageClass::try_from(self.0 & 0x03).ok()
    }
}

impl fmt::Debug for DataCodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataCodingScheme(0x{:02X}, {:?})", self.0, self.alphabet())
    }
}

impl From<u8> for DataCodingScheme {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}
