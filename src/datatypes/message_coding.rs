// ABOUTME: Character set identifiers carried in the coding byte of request and response headers
// ABOUTME: The client always sends UCS2; the other values are accepted when parsing

use num_enum::TryFromPrimitive;

#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum MessageCoding {
    /// Traditional Chinese double-byte encoding
    Big5 = 1,
    /// Opaque binary content
    Binary = 2,
    /// UCS-2, two bytes per code unit, big-endian on the wire
    #[default]
    Ucs2 = 3,
    /// UTF-8
    Utf8 = 4,
}

impl MessageCoding {
    /// Human-readable name of the character set
    pub fn name(&self) -> &'static str {
        match self {
            MessageCoding::Big5 => "Big5",
            MessageCoding::Binary => "Binary",
            MessageCoding::Ucs2 => "UCS-2",
            MessageCoding::Utf8 => "UTF-8",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coding_values() {
        assert_eq!(MessageCoding::Ucs2 as u8, 3);
        assert_eq!(MessageCoding::try_from(1).unwrap(), MessageCoding::Big5);
        assert!(MessageCoding::try_from(0).is_err());
        assert!(MessageCoding::try_from(5).is_err());
    }

    #[test]
    fn test_default_is_ucs2() {
        assert_eq!(MessageCoding::default(), MessageCoding::Ucs2);
        assert_eq!(MessageCoding::default().name(), "UCS-2");
    }
}
