// ABOUTME: Send request frame - destination and delivery options in the set field, UCS-2 text in content
// ABOUTME: Content units are emitted little-endian and then byte-pair swapped to big-endian

use crate::codec::{
    CONTENT_OFFSET, CodecError, Decodable, Encodable, REQUEST_CONTENT_LEN, REQUEST_HEADER_LEN,
    REQUEST_LEN, REQUEST_SET_LEN, RequestHeader, compose_set, encode_fixed, encode_ucs2_le,
    message_units, split_set, swap_byte_pairs,
};
use crate::datatypes::MessageType;
use bytes::BytesMut;

/// Deliver immediately and re-send until the resend timeout expires
pub const SEND_TYPE: &str = "02";

/// Re-send window in minutes, zero-padded to four digits
pub const RESEND_TIMEOUT: &str = "0030";

/// A message submission. The phone number must already be validated; text
/// longer than 80 UCS-2 units is silently truncated on encode.
///
/// The header's content length counts the units actually carried (times
/// two), not the full text length, so it never exceeds the 160-byte field.
/// For text that fits in one frame the two are the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub phone: String,
    pub text: String,
}

impl SendRequest {
    pub fn new(phone: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            text: text.into(),
        }
    }

    /// `phone NUL sendType NUL resendTimeout NUL`
    pub fn set_field(&self) -> String {
        compose_set(&[&self.phone, SEND_TYPE, RESEND_TIMEOUT])
    }

    /// True when the text does not fit in a single frame
    pub fn is_truncated(&self) -> bool {
        self.text.encode_utf16().count() > message_units(&self.text).len()
    }
}

impl Encodable for SendRequest {
    fn encode(&self, buf: &mut BytesMut) {
        let start = buf.len();
        let set = self.set_field();
        let units = message_units(&self.text);

        RequestHeader::new(MessageType::Send, set.len() as u8, (units.len() * 2) as u8).encode(buf);
        encode_fixed(buf, set.as_bytes(), REQUEST_SET_LEN);
        encode_ucs2_le(buf, &units, REQUEST_CONTENT_LEN);

        swap_byte_pairs(&mut buf[start + CONTENT_OFFSET..start + REQUEST_LEN]);
    }
}

impl Decodable for SendRequest {
    fn decode(buf: &[u8]) -> Result<Self, CodecError> {
        if buf.len() != REQUEST_LEN {
            return Err(CodecError::FrameLength {
                expected: REQUEST_LEN,
                actual: buf.len(),
            });
        }

        let header = RequestHeader::decode(buf)?;
        if header.message_type != MessageType::Send {
            return Err(CodecError::UnexpectedMessageType {
                expected: MessageType::Send,
                actual: header.message_type,
            });
        }

        let phone = split_set(&buf[REQUEST_HEADER_LEN..CONTENT_OFFSET])
            .into_iter()
            .next()
            .unwrap_or_default();

        let used = (header.content_len as usize).min(REQUEST_CONTENT_LEN);
        let units: Vec<u16> = buf[CONTENT_OFFSET..CONTENT_OFFSET + used]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();

        Ok(Self {
            phone,
            text: String::from_utf16_lossy(&units),
        })
    }
}
