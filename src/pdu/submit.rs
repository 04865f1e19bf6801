// ABOUTME: SMS-SUBMIT construction: a builder that stages SMSC, target and flash flag, then encodes the PDU
// ABOUTME: Argument limits are checked before any byte is written; oversized or missing values are rejected

use crate::codec::{Encodable, PduError, PduResult};
use crate::datatypes::septet::{pack7, text_to_septets};
use crate::datatypes::{AddressLength, DataCodingScheme, FirstOctet, PduAddress};
use bytes::{BufMut, Bytes, BytesMut};

/// Longest SMSC or target string accepted, `+` included
pub const MAX_ADDRESS_LEN: usize = 16;

/// Single-segment limit of the 7-bit default alphabet
pub const MAX_TEXT_LEN: usize = 160;

/// Relative validity period, maximum (63 weeks)
const VALIDITY_PERIOD_MAX: u8 = 0xFF;

/// Everything needed to send one text message.
///
/// Only obtainable through [`SendRequestBuilder::build`], so a request in hand
/// has already passed the argument limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    smsc: String,
    target: String,
    text: String,
    flash: bool,
}

impl SendRequest {
    /// Create a request with `flash` off, validating every argument
    pub fn new(
        smsc: impl Into<String>,
        target: impl Into<String>,
        text: impl Into<String>,
    ) -> PduResult<Self> {
        Self::builder().smsc(smsc).target(target).build(text)
    }

    /// Start staging a request
    pub fn builder() -> SendRequestBuilder {
        SendRequestBuilder::default()
    }

    pub fn smsc(&self) -> &str {
        &self.smsc
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Class 0: display immediately, do not store
    pub fn is_flash(&self) -> bool {
        self.flash
    }

    /// Missing or oversized arguments are rejected, never encoded
    fn validate(&self) -> PduResult<()> {
        check_address(&self.smsc)?;
        check_address(&self.target)?;

        if self.text.chars().count() > MAX_TEXT_LEN {
            return Err(PduError::invalid_argument("Argument too long"));
        }
        text_to_septets(&self.text).map(|_| ())
    }

    /// Turn the request into its wire representation
    pub fn into_pdu(self) -> PduResult<SubmitPdu> {
        self.validate()?;

        let smsc: PduAddress = self.smsc.parse()?;
        let destination: PduAddress = self.target.parse()?;
        let septets = text_to_septets(&self.text)?;
        let data_coding = if self.flash {
            DataCodingScheme::FLASH
        } else {
            DataCodingScheme::DEFAULT
        };

        Ok(SubmitPdu {
            smsc,
            first_octet: FirstOctet::submit(),
            message_reference: 0,
            destination,
            protocol_id: 0,
            data_coding,
            validity_period: VALIDITY_PERIOD_MAX,
            septets,
        })
    }

    /// Encode the request, consuming it
    pub fn encode(self) -> PduResult<Bytes> {
        let bytes = self.into_pdu()?.to_bytes()?;
        tracing::trace!("Built SMS-SUBMIT PDU of {} bytes", bytes.len());
        Ok(bytes)
    }
}

/// Stages SMSC, target and flash flag across separate argument steps
#[derive(Debug, Default)]
pub struct SendRequestBuilder {
    smsc: Option<String>,
    target: Option<String>,
    flash: bool,
}

impl SendRequestBuilder {
    /// Set the service centre number
    pub fn smsc(mut self, smsc: impl Into<String>) -> Self {
        self.smsc = Some(smsc.into());
        self
    }

    /// Set the destination number
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Request a class 0 message
    pub fn flash(mut self, flash: bool) -> Self {
        self.flash = flash;
        self
    }

    /// Attach the message body and check every argument
    pub fn build(self, text: impl Into<String>) -> PduResult<SendRequest> {
        let request = SendRequest {
            smsc: self.smsc.unwrap_or_default(),
            target: self.target.unwrap_or_default(),
            text: text.into(),
            flash: self.flash,
        };
        request.validate()?;
        Ok(request)
    }
}

fn check_address(value: &str) -> PduResult<()> {
    if value.is_empty() {
        return Err(PduError::invalid_argument("Missing argument"));
    }
    if value.chars().count() > MAX_ADDRESS_LEN {
        return Err(PduError::invalid_argument("Argument too long"));
    }
    Ok(())
}

/// Field-level view of an outgoing SMS-SUBMIT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPdu {
    pub smsc: PduAddress,
    pub first_octet: FirstOctet,
    pub message_reference: u8,
    pub destination: PduAddress,
    pub protocol_id: u8,
    pub data_coding: DataCodingScheme,
    pub validity_period: u8,
    /// Message body as unpacked septets
    pub septets: Vec<u8>,
}

impl Encodable for SubmitPdu {
    fn encode(&self, buf: &mut BytesMut) -> PduResult<()> {
        self.smsc.encode(buf, AddressLength::Octets)?;
        buf.put_u8(self.first_octet.to_byte());
        buf.put_u8(self.message_reference);
        self.destination.encode(buf, AddressLength::SemiOctets)?;
        buf.put_u8(self.protocol_id);
        buf.put_u8(self.data_coding.to_byte());
        buf.put_u8(self.validity_period);

        // Length octet carries the packed octet count
        let packed = pack7(&self.septets);
        let user_data_length = u8::try_from(packed.len())
            .map_err(|_| PduError::invalid_argument("Argument too long"))?;
        buf.put_u8(user_data_length);
        buf.put_slice(&packed);
        Ok(())
    }
}
