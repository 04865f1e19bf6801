// ABOUTME: Whole-message SMS PDU pipelines built on the field codecs in `datatypes`
// ABOUTME: `deliver` decodes stored messages, `submit` builds outgoing SMS-SUBMIT PDUs

mod deliver;
mod submit;

pub use deliver::DecodedMessage;
pub use submit::{MAX_ADDRESS_LEN, MAX_TEXT_LEN, SendRequest, SendRequestBuilder, SubmitPdu};
