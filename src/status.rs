// ABOUTME: Named-field status payloads reported for decoded messages, raw dumps and user errors
// ABOUTME: Serialized with serde in field order; absent optional fields are omitted from the JSON

use crate::codec::{PduError, PduResult};
use crate::hex::HexDump;
use crate::pdu::DecodedMessage;
use serde::Serialize;
use std::fmt;

/// Status fields for one decoded message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageStatus {
    /// Storage index the message was read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smsc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concat_ref: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concat_part: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concat_parts: Option<u8>,
    pub text: String,
}

impl From<&DecodedMessage> for MessageStatus {
    fn from(message: &DecodedMessage) -> Self {
        let peer = Some(message.peer_address.to_string());
        let (sender, receiver) = if message.is_outgoing {
            (None, peer)
        } else {
            (peer, None)
        };

        Self {
            index: None,
            smsc: message.smsc.as_ref().map(ToString::to_string),
            sender,
            receiver,
            timestamp: message.timestamp.map(|ts| ts.to_string()),
            class: message.message_class,
            concat_ref: message.concat.map(|c| c.reference),
            concat_part: message.concat.map(|c| c.part_index),
            concat_parts: message.concat.map(|c| c.part_count),
            text: message.text.clone(),
        }
    }
}

impl MessageStatus {
    pub fn with_index(mut self, index: Option<u32>) -> Self {
        self.index = index;
        self
    }
}

/// Raw message bytes as a hex dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    pub data: String,
}

impl RawStatus {
    pub fn new(pdu: &[u8]) -> Self {
        Self {
            index: None,
            data: HexDump(pdu).to_string(),
        }
    }

    pub fn with_index(mut self, index: Option<u32>) -> Self {
        self.index = index;
        self
    }
}

/// User-visible failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorStatus {
    pub error: String,
}

impl ErrorStatus {
    pub fn new(error: impl fmt::Display) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl From<&PduError> for ErrorStatus {
    fn from(err: &PduError) -> Self {
        Self::new(err)
    }
}

/// Parses an optional `--index` argument
pub fn parse_optional_index(input: Option<&str>) -> PduResult<Option<u32>> {
    input.map(parse_message_index).transpose()
}

/// Parses a storage index given on the command line
pub fn parse_message_index(input: &str) -> PduResult<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| PduError::invalid_argument("Invalid message ID"))
}
