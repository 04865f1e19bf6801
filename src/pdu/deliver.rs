// ABOUTME: Decode pipeline for stored SMS PDUs: walks SMSC, header fields, address, timestamp and user data
// ABOUTME: Fail-closed: any truncated field or unsupported coding yields an error and no partial message

use crate::codec::{PduCursor, PduError, PduResult};
use crate::datatypes::septet::{septets_to_text, unpack7};
use crate::datatypes::udh::decode_concat;
use crate::datatypes::{ConcatInfo, DataCodingScheme, FirstOctet, PduAddress, Timestamp};

/// Every field we report from a stored SMS-DELIVER or SMS-SUBMIT PDU
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub smsc: Option<PduAddress>,
    /// True for a previously submitted message read back from storage
    pub is_outgoing: bool,
    /// Sender of a received message, receiver of an outgoing one
    pub peer_address: PduAddress,
    /// Message class 0-3, present only when the coding scheme flags one
    pub message_class: Option<u8>,
    /// Service centre timestamp; received messages only
    pub timestamp: Option<Timestamp>,
    pub concat: Option<ConcatInfo>,
    pub text: String,
}

impl DecodedMessage {
    /// Decodes one raw PDU as returned by the modem's message storage
    pub fn decode(pdu: &[u8]) -> PduResult<Self> {
        Self::decode_fields(pdu).inspect_err(|err| {
            tracing::debug!("Discarding {}-byte PDU: {}", pdu.len(), err);
        })
    }

    fn decode_fields(pdu: &[u8]) -> PduResult<Self> {
        let mut cursor = PduCursor::new(pdu);

        let smsc = PduAddress::decode_smsc(&mut cursor)?;

        let first_octet = FirstOctet::from_byte(cursor.read_u8("first_octet")?);
        let is_outgoing = first_octet.is_submit();
        if is_outgoing {
            cursor.skip(1, "message_reference")?;
        }

        let peer_address = PduAddress::decode_peer(&mut cursor)?;

        let protocol_id = cursor.read_u8("protocol_id")?;
        if protocol_id != 0 {
            return Err(PduError::UnsupportedEncoding {
                field: "protocol_id",
                value: protocol_id,
            });
        }

        let dcs = DataCodingScheme::from_byte(cursor.read_u8("data_coding_scheme")?);
        if !dcs.is_default_alphabet() {
            return Err(PduError::UnsupportedEncoding {
                field: "data_coding_scheme",
                value: dcs.to_byte(),
            });
        }
        let message_class = dcs.message_class().map(|class| class.number());

        let timestamp = if is_outgoing {
            cursor.skip(1, "validity_period")?;
            None
        } else {
            Some(Timestamp::decode(&mut cursor)?)
        };

        // Septet count; the text itself is bounded by the buffer
        let _user_data_length = cursor.read_u8("user_data_length")?;
        let (concat, text) = decode_user_data(cursor.read_rest(), first_octet.has_udh())?;

        Ok(Self {
            smsc,
            is_outgoing,
            peer_address,
            message_class,
            timestamp,
            concat,
            text,
        })
    }

    /// Status field name for the peer address
    pub fn peer_field(&self) -> &'static str {
        if self.is_outgoing { "receiver" } else { "sender" }
    }
}

/// Splits off the user data header (if flagged) and unpacks the text that
/// follows it at the septet phase the header leaves behind.
fn decode_user_data(
    user_data: &[u8],
    has_udh: bool,
) -> PduResult<(Option<ConcatInfo>, String)> {
    if !has_udh {
        return Ok((None, septets_to_text(&unpack7(user_data, 0))));
    }

    let mut cursor = PduCursor::new(user_data);
    let header_len = cursor.read_u8("user_data_header_length")? as usize;
    cursor.skip(header_len, "user_data_header")?;

    let header_octets = header_len + 1;
    let concat = decode_concat(&user_data[..header_octets]);
    let text = septets_to_text(&unpack7(cursor.read_rest(), header_octets % 7));

    Ok((concat, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::septet::pack7;

    fn deliver_pdu(first_octet: u8, dcs: u8, user_data: &[u8], udl: u8) -> Vec<u8> {
        let mut pdu = vec![
            0x07, 0x91, 0x21, 0x20, 0x55, 0x05, 0x01, 0xF0, // SMSC +12025550100
            first_octet,
            0x0B, 0x91, 0x44, 0x77, 0x00, 0x09, 0x21, 0xF3, // +44770090123
            0x00, // protocol id
            dcs,
            0x52, 0x01, 0x91, 0x71, 0x03, 0x54, 0x00, // 2025-10-19 17:30:45
            udl,
        ];
        pdu.extend_from_slice(user_data);
        pdu
    }

    #[test]
    fn test_decode_deliver() {
        let pdu = deliver_pdu(0x04, 0x00, &pack7(b"hellohello"), 10);
        let message = DecodedMessage::decode(&pdu).unwrap();

        assert_eq!(message.smsc.as_ref().unwrap().to_string(), "+12025550100");
        assert!(!message.is_outgoing);
        assert_eq!(message.peer_field(), "sender");
        assert_eq!(message.peer_address.to_string(), "+44770090123");
        assert_eq!(message.message_class, None);
        assert_eq!(
            message.timestamp.unwrap().to_string(),
            "2025-10-19 17:30:45"
        );
        assert_eq!(message.concat, None);
        assert_eq!(message.text, "hellohello");
    }

    #[test]
    fn test_decode_flash_class() {
        let pdu = deliver_pdu(0x04, 0x10, &pack7(b"Hi"), 2);
        let message = DecodedMessage::decode(&pdu).unwrap();
        assert_eq!(message.message_class, Some(0));
        assert_eq!(message.text, "Hi");
    }

    #[test]
    fn test_decode_submit_read_back() {
        let pdu = vec![
            0x00, // no SMSC
            0x11, // SMS-SUBMIT
            0x00, // message reference
            0x05, 0x81, 0x21, 0x43, 0xF5, // 12345
            0x00, 0x00, // protocol id, dcs
            0xFF, // validity period
            0x02, 0xC8, 0x34, // "Hi"
        ];
        let message = DecodedMessage::decode(&pdu).unwrap();

        assert_eq!(message.smsc, None);
        assert!(message.is_outgoing);
        assert_eq!(message.peer_field(), "receiver");
        assert_eq!(message.peer_address.to_string(), "12345");
        assert_eq!(message.timestamp, None);
        assert_eq!(message.text, "Hi");
    }

    #[test]
    fn test_decode_with_concat_header() {
        let mut user_data = vec![0x05, 0x00, 0x03, 0xAA, 0x02, 0x01];
        user_data.extend_from_slice(&crate::datatypes::septet::pack7_at(b"Hi", 1));
        user_data.truncate(6 + 2);

        let pdu = deliver_pdu(0x44, 0x00, &user_data, 9);
        let message = DecodedMessage::decode(&pdu).unwrap();

        assert_eq!(
            message.concat,
            Some(ConcatInfo {
                reference: 0xAA,
                part_index: 1,
                part_count: 2,
            })
        );
        assert_eq!(message.text, "Hi");
    }

    #[test]
    fn test_unsupported_protocol_id() {
        let mut pdu = deliver_pdu(0x04, 0x00, &pack7(b"Hi"), 2);
        pdu[17] = 0x41;
        assert_eq!(
            DecodedMessage::decode(&pdu),
            Err(PduError::UnsupportedEncoding {
                field: "protocol_id",
                value: 0x41,
            })
        );
    }

    #[test]
    fn test_unsupported_alphabets() {
        for dcs in [0x04, 0x08, 0x0C, 0x18] {
            let pdu = deliver_pdu(0x04, dcs, &[0x00, 0x48], 2);
            assert!(matches!(
                DecodedMessage::decode(&pdu),
                Err(PduError::UnsupportedEncoding {
                    field: "data_coding_scheme",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_header_length_past_end_is_truncation() {
        let pdu = deliver_pdu(0x44, 0x00, &[0x09, 0x00, 0x03], 3);
        assert!(matches!(
            DecodedMessage::decode(&pdu),
            Err(PduError::TruncatedPdu {
                field: "user_data_header",
                ..
            })
        ));
    }

    #[test]
    fn test_udh_flag_without_user_data() {
        let pdu = deliver_pdu(0x44, 0x00, &[], 0);
        assert!(matches!(
            DecodedMessage::decode(&pdu),
            Err(PduError::TruncatedPdu {
                field: "user_data_header_length",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_element_keeps_text() {
        // Element claims 9 value octets inside a 5-octet header
        let mut user_data = vec![0x05, 0x00, 0x09, 0xAA, 0x02, 0x01];
        user_data.extend_from_slice(&crate::datatypes::septet::pack7_at(b"ok", 1));
        user_data.truncate(6 + 2);

        let pdu = deliver_pdu(0x44, 0x00, &user_data, 9);
        let message = DecodedMessage::decode(&pdu).unwrap();
        assert_eq!(message.concat, None);
        assert_eq!(message.text, "ok");
    }

    #[test]
    fn test_empty_text() {
        let pdu = deliver_pdu(0x04, 0x00, &[], 0);
        let message = DecodedMessage::decode(&pdu).unwrap();
        assert_eq!(message.text, "");
    }
}
