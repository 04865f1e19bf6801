pub mod codec;
pub mod datatypes;
pub mod hex;
pub mod pdu;
pub mod status;


// Re-export codec types for direct access
pub use codec::{Encodable, PduCursor, PduError, PduResult};

// Re-export the message-level API for easy access
pub use pdu::{DecodedMessage, SendRequest, SendRequestBuilder, SubmitPdu};

/// Decodes a stored SMS PDU.
///
/// Returns an error (and no partial message) when any field is truncated or
/// uses a coding other than the 7-bit default alphabet.
///
/// # Examples
///
/// ## Decoding a message read from the modem
///
/// ```rust
/// use sms_pdu::hex::parse_hex;
///
/// let pdu = parse_hex("07912120550501F0 0405812143F5 0000 21805141230580 02C834").unwrap();
/// let message = sms_pdu::decode(&pdu).unwrap();
///
/// assert_eq!(message.smsc.unwrap().to_string(), "+12025550100");
/// assert_eq!(message.peer_address.to_string(), "12345");
/// assert_eq!(message.timestamp.unwrap().to_string(), "2012-08-15 14:32:50");
/// assert_eq!(message.text, "Hi");
/// ```
pub fn decode(pdu: &[u8]) -> PduResult<DecodedMessage> {
    DecodedMessage::decode(pdu)
}

/// Builds an SMS-SUBMIT PDU from a validated request.
///
/// # Examples
///
/// ## Building an outgoing message
///
/// ```rust
/// use sms_pdu::SendRequest;
///
/// let request = SendRequest::builder()
///     .smsc("+12025550100")
///     .target("+447700900123")
///     .flash(false)
///     .build("Hi")
///     .unwrap();
///
/// let pdu = sms_pdu::encode(request).unwrap();
/// assert_eq!(pdu[8], 0x11);
/// assert_eq!(sms_pdu::decode(&pdu).unwrap().text, "Hi");
/// ```
pub fn encode(request: SendRequest) -> PduResult<bytes::Bytes> {
    request.encode()
}
