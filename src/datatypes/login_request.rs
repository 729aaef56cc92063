// ABOUTME: Login request frame - account and password in the set field, placeholder content
// ABOUTME: Always 266 bytes; the gateway replies with a LoginStatus code

use crate::codec::{
    CONTENT_OFFSET, CodecError, Decodable, Encodable, REQUEST_CONTENT_LEN, REQUEST_HEADER_LEN,
    REQUEST_LEN, REQUEST_SET_LEN, RequestHeader, compose_set, encode_fixed, encode_ucs2_le,
    split_set,
};
use crate::datatypes::MessageType;
use bytes::BytesMut;

/// Content written into the unused content field of a login frame
pub const LOGIN_PLACEHOLDER: &str = "0";

#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub account: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(account: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
        }
    }

    /// `account NUL password NUL`
    pub fn set_field(&self) -> String {
        compose_set(&[&self.account, &self.password])
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("account", &self.account)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Encodable for LoginRequest {
    fn encode(&self, buf: &mut BytesMut) {
        let set = self.set_field();

        // Credentials are validated against the set field size before they
        // reach the codec, so the length always fits in the header byte.
        RequestHeader::new(MessageType::Login, set.len() as u8, 0).encode(buf);
        encode_fixed(buf, set.as_bytes(), REQUEST_SET_LEN);

        // The login content is never read by the gateway and is sent without
        // the byte-pair swap.
        let placeholder: Vec<u16> = LOGIN_PLACEHOLDER.encode_utf16().collect();
        encode_ucs2_le(buf, &placeholder, REQUEST_CONTENT_LEN);
    }
}

impl Decodable for LoginRequest {
    fn decode(buf: &[u8]) -> Result<Self, CodecError> {
        if buf.len() != REQUEST_LEN {
            return Err(CodecError::FrameLength {
                expected: REQUEST_LEN,
                actual: buf.len(),
            });
        }

        let header = RequestHeader::decode(buf)?;
        if header.message_type != MessageType::Login {
            return Err(CodecError::UnexpectedMessageType {
                expected: MessageType::Login,
                actual: header.message_type,
            });
        }

        let mut tokens = split_set(&buf[REQUEST_HEADER_LEN..CONTENT_OFFSET]).into_iter();
        Ok(Self {
            account: tokens.next().unwrap_or_default(),
            password: tokens.next().unwrap_or_default(),
        })
    }
}
