// ABOUTME: Type-of-Address octet preceding every PDU address: extension bit, type of number, numbering plan
// ABOUTME: Bits 6-4 select the address class that decides between BCD digits and packed alphanumerics

use num_enum::TryFromPrimitive;
use std::fmt;

/// Type of number, bits 6-4 of the Type-of-Address octet
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeOfNumber {
    Unknown = 0b000,
    International = 0b001,
    National = 0b010,
    NetworkSpecific = 0b011,
    SubscriberNumber = 0b100,
    Alphanumeric = 0b101,
    Abbreviated = 0b110,
    Reserved = 0b111,
}

/// Numbering plan identification, bits 3-0 of the Type-of-Address octet
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumberingPlanIndicator {
    Unknown = 0b0000,
    Isdn = 0b0001,
    Data = 0b0011,
    Telex = 0b0100,
    ServiceCentreSpecific = 0b0101,
    ServiceCentreSpecific2 = 0b0110,
    National = 0b1000,
    Private = 0b1001,
    Ermes = 0b1010,
    Reserved = 0b1111,
}

/// Raw Type-of-Address octet with typed accessors
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct TypeOfAddress(u8);

impl TypeOfAddress {
    const EXTENSION_BIT: u8 = 0x80;

    /// International number, ISDN plan (`0x91`)
    pub const INTERNATIONAL: Self =
        Self::new(TypeOfNumber::International, NumberingPlanIndicator::Isdn);

    /// Unknown type of number, ISDN plan (`0x81`)
    pub const UNKNOWN: Self = Self::new(TypeOfNumber::Unknown, NumberingPlanIndicator::Isdn);

    pub const fn new(ton: TypeOfNumber, npi: NumberingPlanIndicator) -> Self {
        Self(Self::EXTENSION_BIT | ((ton as u8) << 4) | npi as u8)
    }

    pub const fn from_byte(value: u8) -> Self {
        Self(value)
    }

    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Same numbering plan, different type of number
    pub fn with_type_of_number(self, ton: TypeOfNumber) -> Self {
        Self((self.0 & !0x70) | ((ton as u8) << 4))
    }

    pub fn type_of_number(self) -> TypeOfNumber {
        // Three bits cover every variant, so the fallback is never taken
        TypeOfNumber::try_from((self.0 >> 4) & 0x07).unwrap_or(TypeOfNumber::Reserved)
    }

    /// `None` for the plan values the standard leaves unassigned
    pub fn numbering_plan(self) -> Option<NumberingPlanIndicator> {
        NumberingPlanIndicator::try_from(self.0 & 0x0f).ok()
    }

    pub fn is_alphanumeric(self) -> bool {
        self.type_of_number() == TypeOfNumber::Alphanumeric
    }

    pub fn is_international(self) -> bool {
        self.type_of_number() == TypeOfNumber::International
    }
}

impl fmt::Debug for TypeOfAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TypeOfAddress(0x{:02X}, {:?}, {:?})",
            self.0,
            self.type_of_number(),
            self.numbering_plan()
        )
    }
}

impl From<u8> for TypeOfAddress {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<TypeOfAddress> for u8 {
    fn from(toa: TypeOfAddress) -> Self {
        toa.to_byte()
    }
}
