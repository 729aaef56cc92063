use num_enum::TryFromPrimitive;

/// The first header byte of every request frame, selecting the operation
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageType {
    /// Account/password check, opens the session
    Login = 0,
    /// Submit a message for delivery
    Send = 1,
    /// Query delivery status
    Query = 2,
    /// End of session
    Done = 3,
}
