// ABOUTME: Return codes the gateway sends in reply to a send request
// ABOUTME: Code 0 carries the gateway message ID in the content field; 1-16 are rejections

use num_enum::TryFromPrimitive;
use std::fmt;

/// The retCode of a send response
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SendStatus {
    /// Accepted; the response content holds the message ID
    Success = 0,
    CountryCodeError = 1,
    CodingError = 2,
    PriorityError = 3,
    /// The content length byte is malformed
    ContentLengthFormatError = 4,
    /// The content length does not match the content
    ContentLengthMismatch = 5,
    PhoneNumberError = 6,
    TransferTypeError = 7,
    LimitTimeError = 8,
    OrderedTimeError = 9,
    /// Sending to foreign numbers is not allowed
    ForeignNotAllowed = 10,
    /// Delivery failed, try again
    SendFailure = 11,
    MessageOutOfSequence = 12,
    /// WAP push URL is empty
    WapUrlEmpty = 13,
    /// WAP push content longer than 88
    WapContentTooLong = 14,
    BillingError = 15,
    /// The message text contains a 9-10 digit telephone number
    ContainsPhoneNumber = 16,
}

impl SendStatus {
    pub fn description(&self) -> &'static str {
        match self {
            SendStatus::Success => "message accepted",
            SendStatus::CountryCodeError => "country code format error",
            SendStatus::CodingError => "coding format error",
            SendStatus::PriorityError => "priority format error",
            SendStatus::ContentLengthFormatError => "content length format error",
            SendStatus::ContentLengthMismatch => "content length does not match content",
            SendStatus::PhoneNumberError => "telephone number format error",
            SendStatus::TransferTypeError => "transfer type format error",
            SendStatus::LimitTimeError => "limit time format error",
            SendStatus::OrderedTimeError => "ordered time format error",
            SendStatus::ForeignNotAllowed => "sending to foreign numbers not allowed",
            SendStatus::SendFailure => "message sending failure, try again",
            SendStatus::MessageOutOfSequence => "message out of sequence",
            SendStatus::WapUrlEmpty => "WAP push URL length is zero",
            SendStatus::WapContentTooLong => "WAP push content longer than 88",
            SendStatus::BillingError => "billing format error",
            SendStatus::ContainsPhoneNumber => "message contains a telephone number",
        }
    }
}

impl fmt::Display for SendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), *self as u8)
    }
}
