// SMS gateway codec - fixed-layout frame encoding and decoding
//
// Every frame on this protocol has a fixed size. Requests are 266 bytes
// (6-byte header, 100-byte set field, 160-byte content field) and responses
// are 244 bytes (4-byte header, 80-byte set field, 160-byte content field).
// The frame types live in `datatypes`; this module holds the shared header,
// the field helpers and the `Encodable`/`Decodable` traits they implement.

use crate::datatypes::{GatewayResponse, LoginRequest, MessageCoding, MessageType, SendRequest};
use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;

/// Size of the request header: `[msgType, coding, priority, countryCode, setLen, contentLen]`
pub const REQUEST_HEADER_LEN: usize = 6;

/// Size of the NUL-delimited set field in a request frame
pub const REQUEST_SET_LEN: usize = 100;

/// Size of the content field in a request frame
pub const REQUEST_CONTENT_LEN: usize = 160;

/// Offset of the content field inside a request frame
pub const CONTENT_OFFSET: usize = REQUEST_HEADER_LEN + REQUEST_SET_LEN;

/// Total size of a login or send request frame
pub const REQUEST_LEN: usize = CONTENT_OFFSET + REQUEST_CONTENT_LEN; // 266

/// Size of the response header: `[retCode, retCoding, retSetLen, retContentLen]`
pub const RESPONSE_HEADER_LEN: usize = 4;

/// Size of the set field in a response frame
pub const RESPONSE_SET_LEN: usize = 80;

/// Size of the single-byte content field in a response frame
pub const RESPONSE_CONTENT_LEN: usize = 160;

/// Total size of a response frame
pub const RESPONSE_LEN: usize = RESPONSE_HEADER_LEN + RESPONSE_SET_LEN + RESPONSE_CONTENT_LEN; // 244

/// Maximum number of UCS-2 code units a send frame can carry
pub const MAX_CONTENT_UNITS: usize = REQUEST_CONTENT_LEN / 2; // 80

/// Token separator inside set fields
pub const SET_DELIMITER: char = '\0';

/// Header shared by login and send request frames (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestHeader {
    pub message_type: MessageType,
    pub coding: MessageCoding,
    pub priority: u8,
    pub country_code: u8,
    pub set_len: u8,
    pub content_len: u8,
}

impl RequestHeader {
    pub const SIZE: usize = REQUEST_HEADER_LEN;

    /// Header with the defaults this client always sends (UCS2, priority 0, country 0)
    pub fn new(message_type: MessageType, set_len: u8, content_len: u8) -> Self {
        Self {
            message_type,
            coding: MessageCoding::Ucs2,
            priority: 0,
            country_code: 0,
            set_len,
            content_len,
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_u8(self.message_type as u8);
        buf.put_u8(self.coding as u8);
        buf.put_u8(self.priority);
        buf.put_u8(self.country_code);
        buf.put_u8(self.set_len);
        buf.put_u8(self.content_len);
    }

    pub fn decode(buf: &[u8]) -> Result<Self, CodecError> {
        if buf.len() < Self::SIZE {
            return Err(CodecError::FrameLength {
                expected: Self::SIZE,
                actual: buf.len(),
            });
        }

        let message_type =
            MessageType::try_from(buf[0]).map_err(|_| CodecError::InvalidMessageType(buf[0]))?;
        let coding =
            MessageCoding::try_from(buf[1]).map_err(|_| CodecError::InvalidMessageCoding(buf[1]))?;

        Ok(Self {
            message_type,
            coding,
            priority: buf[2],
            country_code: buf[3],
            set_len: buf[4],
            content_len: buf[5],
        })
    }
}

/// Trait for frames that can be written to the wire
pub trait Encodable {
    /// Append the encoded frame to `buf`
    fn encode(&self, buf: &mut BytesMut);

    /// Encode into a fresh buffer
    fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(REQUEST_LEN);
        self.encode(&mut buf);
        buf.freeze()
    }
}

/// Trait for frames that can be read from a complete wire buffer
pub trait Decodable: Sized {
    fn decode(buf: &[u8]) -> Result<Self, CodecError>;
}

/// Codec errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Unexpected frame length: expected {expected} bytes, got {actual}")]
    FrameLength { expected: usize, actual: usize },

    #[error("Invalid message type: {0}")]
    InvalidMessageType(u8),

    #[error("Invalid message coding: {0}")]
    InvalidMessageCoding(u8),

    #[error("Unexpected message type: expected {expected:?}, got {actual:?}")]
    UnexpectedMessageType {
        expected: MessageType,
        actual: MessageType,
    },
}

/// Join tokens into a set-field string, each token followed by a NUL
pub fn compose_set(tokens: &[&str]) -> String {
    let mut set = String::with_capacity(tokens.iter().map(|t| t.len() + 1).sum());
    for token in tokens {
        set.push_str(token);
        set.push(SET_DELIMITER);
    }
    set
}

/// Split a set field back into its tokens, ignoring the zero padding
pub fn split_set(field: &[u8]) -> Vec<String> {
    let used = field
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);

    field[..used]
        .split(|&b| b == 0)
        .map(|token| String::from_utf8_lossy(token).into_owned())
        .collect()
}

/// Write `value` into a zero-padded field of exactly `len` bytes, truncating if needed
pub fn encode_fixed(buf: &mut BytesMut, value: &[u8], len: usize) {
    let used = value.len().min(len);
    buf.put_slice(&value[..used]);
    buf.put_bytes(0, len - used);
}

/// Write UCS-2 code units in host (little-endian) order into a zero-padded
/// field of `len` bytes. Units beyond the field capacity are dropped.
pub fn encode_ucs2_le(buf: &mut BytesMut, units: &[u16], len: usize) {
    let used = units.len().min(len / 2);
    for unit in &units[..used] {
        buf.put_u16_le(*unit);
    }
    buf.put_bytes(0, len - used * 2);
}

/// Swap every adjacent byte pair in place. A trailing odd byte is left alone.
///
/// The encoder emits little-endian pairs; the gateway expects big-endian
/// code units in the content field. Applying the swap twice restores the
/// original bytes.
pub fn swap_byte_pairs(bytes: &mut [u8]) {
    for pair in bytes.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
}

/// Message text as UCS-2 code units, truncated to the send-frame capacity
pub fn message_units(message: &str) -> Vec<u16> {
    message.encode_utf16().take(MAX_CONTENT_UNITS).collect()
}

/// Decode a single-byte (Latin-1) text field, stopping at the first NUL
pub fn decode_latin1(field: &[u8]) -> String {
    field.iter().take_while(|&&b| b != 0).map(|&b| b as char).collect()
}

/// Encode text as a single-byte (Latin-1) field; characters outside the range become `?`
pub fn encode_latin1(buf: &mut BytesMut, value: &str, len: usize) {
    let bytes: Vec<u8> = value
        .chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect();
    encode_fixed(buf, &bytes, len);
}

/// Build the 266-byte login frame for the given credentials
pub fn encode_login(account: &str, password: &str) -> Bytes {
    LoginRequest::new(account, password).to_bytes()
}

/// Build the 266-byte send frame for a validated phone number and message
pub fn encode_send(phone: &str, message: &str) -> Bytes {
    SendRequest::new(phone, message).to_bytes()
}

/// Parse a 244-byte gateway response
pub fn decode_response(buf: &[u8]) -> Result<GatewayResponse, CodecError> {
    GatewayResponse::decode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_sizes() {
        assert_eq!(REQUEST_LEN, 266);
        assert_eq!(RESPONSE_LEN, 244);
        assert_eq!(CONTENT_OFFSET, 106);
        assert_eq!(MAX_CONTENT_UNITS, 80);
    }

    #[test]
    fn test_swap_byte_pairs_twice_is_identity() {
        let original: Vec<u8> = (0..=255u8).cycle().take(REQUEST_CONTENT_LEN).collect();
        let mut bytes = original.clone();

        swap_byte_pairs(&mut bytes);
        assert_ne!(bytes, original);
        assert_eq!(bytes[0], original[1]);
        assert_eq!(bytes[1], original[0]);

        swap_byte_pairs(&mut bytes);
        assert_eq!(bytes, original);
    }

    #[test]
    fn test_swap_byte_pairs_odd_length() {
        let mut bytes = [1u8, 2, 3];
        swap_byte_pairs(&mut bytes);
        assert_eq!(bytes, [2, 1, 3]);
    }

    #[test]
    fn test_compose_and_split_set() {
        let set = compose_set(&["0912345678", "02", "0030"]);
        assert_eq!(set, "0912345678\u{0}02\u{0}0030\u{0}");
        assert_eq!(set.len(), 19);

        let mut buf = BytesMut::new();
        encode_fixed(&mut buf, set.as_bytes(), REQUEST_SET_LEN);
        assert_eq!(buf.len(), REQUEST_SET_LEN);
        assert_eq!(split_set(&buf), vec!["0912345678", "02", "0030"]);
    }

    #[test]
    fn test_encode_fixed_truncates() {
        let mut buf = BytesMut::new();
        encode_fixed(&mut buf, &[7u8; 120], REQUEST_SET_LEN);
        assert_eq!(buf.len(), REQUEST_SET_LEN);
        assert!(buf.iter().all(|&b| b == 7));
    }

    #[test]
    fn test_message_units_truncates_to_capacity() {
        let long = "x".repeat(100);
        assert_eq!(message_units(&long).len(), MAX_CONTENT_UNITS);
        assert_eq!(message_units("驗證碼").len(), 3);
    }

    #[test]
    fn test_latin1_field() {
        let mut buf = BytesMut::new();
        encode_latin1(&mut buf, "MSG123é", RESPONSE_CONTENT_LEN);
        assert_eq!(buf.len(), RESPONSE_CONTENT_LEN);
        assert_eq!(buf[6], 0xE9);
        assert_eq!(decode_latin1(&buf), "MSG123é");
    }

    #[test]
    fn test_request_header_roundtrip() {
        let header = RequestHeader::new(MessageType::Send, 19, 10);
        let mut buf = BytesMut::new();
        header.encode(&mut buf);
        assert_eq!(&buf[..], &[1, 3, 0, 0, 19, 10]);
        assert_eq!(RequestHeader::decode(&buf).unwrap(), header);
    }

    #[test]
    fn test_request_header_invalid_type() {
        let result = RequestHeader::decode(&[9, 3, 0, 0, 0, 0]);
        assert_eq!(result, Err(CodecError::InvalidMessageType(9)));
    }

    #[test]
    fn test_decode_response_rejects_short_buffer() {
        let result = decode_response(&[0u8; 100]);
        assert_eq!(
            result,
            Err(CodecError::FrameLength {
                expected: RESPONSE_LEN,
                actual: 100
            })
        );
    }
}
