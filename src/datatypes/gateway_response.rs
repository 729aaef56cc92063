// ABOUTME: Gateway response frame - a status code plus single-byte diagnostic text
// ABOUTME: Exactly 244 bytes; any other length is a protocol violation

use crate::codec::{
    CodecError, Decodable, Encodable, RESPONSE_CONTENT_LEN, RESPONSE_HEADER_LEN, RESPONSE_LEN,
    RESPONSE_SET_LEN, decode_latin1, encode_latin1,
};
use crate::datatypes::{LoginStatus, SendStatus};
use bytes::{BufMut, BytesMut};

/// A decoded response frame.
///
/// `code` and `content` are what the session acts on; the remaining header
/// fields and the set field are kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GatewayResponse {
    pub code: u8,
    pub coding: u8,
    pub set_len: u8,
    pub content_len: u8,
    pub set: String,
    pub content: String,
}

impl GatewayResponse {
    pub fn new(code: u8, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            code,
            content_len: content.chars().count().min(RESPONSE_CONTENT_LEN) as u8,
            content,
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Interpret the code as a login result
    pub fn login_status(&self) -> Option<LoginStatus> {
        LoginStatus::try_from(self.code).ok()
    }

    /// Interpret the code as a send result
    pub fn send_status(&self) -> Option<SendStatus> {
        SendStatus::try_from(self.code).ok()
    }
}

impl Decodable for GatewayResponse {
    fn decode(buf: &[u8]) -> Result<Self, CodecError> {
        if buf.len() != RESPONSE_LEN {
            return Err(CodecError::FrameLength {
                expected: RESPONSE_LEN,
                actual: buf.len(),
            });
        }

        let (header, body) = buf.split_at(RESPONSE_HEADER_LEN);
        let (set, content) = body.split_at(RESPONSE_SET_LEN);

        Ok(Self {
            code: header[0],
            coding: header[1],
            set_len: header[2],
            content_len: header[3],
            set: decode_latin1(set),
            content: decode_latin1(content),
        })
    }
}

impl Encodable for GatewayResponse {
    fn encode(&self, buf: &mut BytesMut) {
        buf.put_u8(self.code);
        buf.put_u8(self.coding);
        buf.put_u8(self.set_len);
        buf.put_u8(self.content_len);
        encode_latin1(buf, &self.set, RESPONSE_SET_LEN);
        encode_latin1(buf, &self.content, RESPONSE_CONTENT_LEN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_response;

    #[test]
    fn test_decode_extracts_code_and_content() {
        let bytes = GatewayResponse::new(0, "MSG123").to_bytes();
        assert_eq!(bytes.len(), RESPONSE_LEN);

        let response = decode_response(&bytes).unwrap();
        assert_eq!(response.code, 0);
        assert_eq!(response.content, "MSG123");
        assert!(response.is_success());
        assert_eq!(response.send_status(), Some(SendStatus::Success));
    }

    #[test]
    fn test_decode_ignores_other_fields() {
        let mut raw = vec![0xAAu8; RESPONSE_LEN];
        raw[0] = 6;
        raw[RESPONSE_HEADER_LEN + RESPONSE_SET_LEN..RESPONSE_HEADER_LEN + RESPONSE_SET_LEN + 3]
            .copy_from_slice(b"bad");
        raw[RESPONSE_HEADER_LEN + RESPONSE_SET_LEN + 3] = 0;

        let response = decode_response(&raw).unwrap();
        assert_eq!(response.code, 6);
        assert_eq!(response.content, "bad");
        assert_eq!(response.coding, 0xAA);
        assert_eq!(response.send_status(), Some(SendStatus::PhoneNumberError));
        assert!(!response.is_success());
    }

    #[test]
    fn test_decode_rejects_wrong_lengths() {
        for len in [0, 100, RESPONSE_LEN - 1, RESPONSE_LEN + 1, 266] {
            let result = decode_response(&vec![0u8; len]);
            assert_eq!(
                result,
                Err(CodecError::FrameLength {
                    expected: RESPONSE_LEN,
                    actual: len
                })
            );
        }
    }

    #[test]
    fn test_login_status_mapping() {
        assert_eq!(
            GatewayResponse::new(1, "").login_status(),
            Some(LoginStatus::PasswordError)
        );
        assert_eq!(GatewayResponse::new(200, "").login_status(), None);
    }
}
