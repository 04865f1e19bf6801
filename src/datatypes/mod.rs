mod address;
mod data_coding;
mod first_octet;
pub mod semi_octet;
pub mod septet;
mod timestamp;
mod type_of_address;
pub mod udh;

pub use address::{AddressLength, PduAddress};
pub use data_coding::{Alphabet, DataCodingScheme, MessageClass};
pub use first_octet::{FirstOctet, MessageTypeIndicator, ValidityPeriodFormat};
pub use timestamp::Timestamp;
pub use type_of_address::{NumberingPlanIndicator, TypeOfAddress, TypeOfNumber};
pub use udh::{ConcatInfo, InformationElement, InformationElements};
